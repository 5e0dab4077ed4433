// crates/gazetteer-core/src/convert.rs
use crate::error::FeatureError;
use crate::model::{FeatureRaw, GazetteerRecord};
use serde_json::Value;

/// **Standard Converter:** Feature -> (Record, country code).
///
/// The name prefers `place_name` and falls back to
/// `"{admin_name1}, {admin_name2}, {country_code}"`. GeoJSON stores
/// `[lon, lat]`, the record stores them swapped into named fields.
pub fn feature_to_record(
    feature: &FeatureRaw,
) -> Result<(GazetteerRecord, String), FeatureError> {
    let country_code = feature
        .property("country_code")
        .ok_or(FeatureError::MissingField("country_code"))?;
    let postal_code = feature
        .property("postal_code")
        .ok_or(FeatureError::MissingField("postal_code"))?;

    let name = match feature.property("place_name") {
        Some(place) => place.into_owned(),
        None => {
            let admin1 = feature
                .property("admin_name1")
                .ok_or(FeatureError::MissingField("admin_name1"))?;
            let admin2 = feature
                .property("admin_name2")
                .ok_or(FeatureError::MissingField("admin_name2"))?;
            format!("{admin1}, {admin2}, {country_code}")
        }
    };

    let (longitude, latitude) = lon_lat(feature)?;

    let record = GazetteerRecord {
        keys: vec![GazetteerRecord::key_for(&country_code, &postal_code)],
        latitude,
        longitude,
        name,
    };
    Ok((record, country_code.into_owned()))
}

fn lon_lat(feature: &FeatureRaw) -> Result<(f64, f64), FeatureError> {
    let coords = feature
        .coordinates()
        .ok_or_else(|| FeatureError::MalformedGeometry("no coordinate array".into()))?;

    match coords {
        [lon, lat, ..] => Ok((axis(lon, "longitude")?, axis(lat, "latitude")?)),
        _ => Err(FeatureError::MalformedGeometry(format!(
            "expected at least 2 coordinates, found {}",
            coords.len()
        ))),
    }
}

fn axis(v: &Value, label: &str) -> Result<f64, FeatureError> {
    v.as_f64()
        .ok_or_else(|| FeatureError::MalformedGeometry(format!("{label} is not a number: {v}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feature(json: &str) -> FeatureRaw {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn place_name_is_used_verbatim() {
        let f = feature(
            r#"{"properties": {"country_code": "US", "postal_code": "10001", "place_name": "NYC"},
                "geometry": {"coordinates": [-73.99, 40.75]}}"#,
        );
        let (rec, cc) = feature_to_record(&f).unwrap();
        assert_eq!(cc, "US");
        assert_eq!(rec.keys, vec!["US-10001".to_string()]);
        assert_eq!(rec.name, "NYC");
        assert_eq!(rec.latitude, 40.75);
        assert_eq!(rec.longitude, -73.99);
    }

    #[test]
    fn admin_names_are_joined_when_place_name_missing() {
        let f = feature(
            r#"{"properties": {"country_code": "DE", "postal_code": "10115",
                "admin_name1": "Berlin", "admin_name2": "Mitte"},
                "geometry": {"coordinates": [13.38, 52.53, 34.0]}}"#,
        );
        let (rec, _) = feature_to_record(&f).unwrap();
        assert_eq!(rec.name, "Berlin, Mitte, DE");
        assert_eq!(rec.latitude, 52.53);
        assert_eq!(rec.longitude, 13.38);
    }

    #[test]
    fn null_place_name_falls_back_to_admin_names() {
        let f = feature(
            r#"{"properties": {"country_code": "AT", "postal_code": "1010", "place_name": null,
                "admin_name1": "Wien", "admin_name2": "Wien Stadt"},
                "geometry": {"coordinates": [16.37, 48.21]}}"#,
        );
        let (rec, _) = feature_to_record(&f).unwrap();
        assert_eq!(rec.name, "Wien, Wien Stadt, AT");
    }

    #[test]
    fn null_place_name_without_admin_names_is_missing_field() {
        let f = feature(
            r#"{"properties": {"country_code": "AT", "postal_code": "1010", "place_name": null},
                "geometry": {"coordinates": [16.37, 48.21]}}"#,
        );
        assert_eq!(
            feature_to_record(&f).unwrap_err(),
            FeatureError::MissingField("admin_name1")
        );
    }

    #[test]
    fn missing_fallback_field_is_reported() {
        let f = feature(
            r#"{"properties": {"country_code": "DE", "postal_code": "10115", "admin_name1": "Berlin"},
                "geometry": {"coordinates": [13.38, 52.53]}}"#,
        );
        assert_eq!(
            feature_to_record(&f).unwrap_err(),
            FeatureError::MissingField("admin_name2")
        );
    }

    #[test]
    fn missing_postal_code_is_reported() {
        let f = feature(
            r#"{"properties": {"country_code": "DE", "place_name": "Berlin"},
                "geometry": {"coordinates": [13.38, 52.53]}}"#,
        );
        assert_eq!(
            feature_to_record(&f).unwrap_err(),
            FeatureError::MissingField("postal_code")
        );
    }

    #[test]
    fn short_coordinates_are_malformed() {
        let f = feature(
            r#"{"properties": {"country_code": "DE", "postal_code": "1", "place_name": "X"},
                "geometry": {"coordinates": [13.38]}}"#,
        );
        assert!(matches!(
            feature_to_record(&f),
            Err(FeatureError::MalformedGeometry(_))
        ));
    }

    #[test]
    fn null_geometry_is_malformed() {
        let f = feature(
            r#"{"properties": {"country_code": "DE", "postal_code": "1", "place_name": "X"},
                "geometry": null}"#,
        );
        assert!(matches!(
            feature_to_record(&f),
            Err(FeatureError::MalformedGeometry(_))
        ));
    }
}

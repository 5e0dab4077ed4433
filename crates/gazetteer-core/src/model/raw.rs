// crates/gazetteer-core/src/model/raw.rs
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use std::borrow::Cow;

/// Raw GeoJSON document as exported by Opendatasoft.
///
/// Only `features` is required; `type`, `name`, `crs` and friends are
/// ignored.
#[derive(Debug, Deserialize)]
pub struct FeatureCollectionRaw {
    pub features: Vec<FeatureRaw>,
}

/// One GeoNames postal-code entry.
///
/// NOTE: This type mirrors the external dataset and may be subject to that
/// dataset's license.
#[derive(Debug, Deserialize)]
pub struct FeatureRaw {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub properties: Map<String, Value>,
    #[serde(default)]
    pub geometry: Option<GeometryRaw>,
}

#[derive(Debug, Deserialize)]
pub struct GeometryRaw {
    #[serde(default)]
    pub coordinates: Value,
}

/// GeoJSON allows `"properties": null`; treat it like an empty object so the
/// feature fails on its missing fields rather than failing the whole parse.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Map<String, Value>>::deserialize(deserializer)?.unwrap_or_default())
}

impl FeatureRaw {
    /// Text view of a property.
    ///
    /// Strings are borrowed as-is, numbers are rendered in their JSON form
    /// (some exports store numeric postal codes). `null`, booleans and nested
    /// values count as absent.
    pub fn property(&self, key: &str) -> Option<Cow<'_, str>> {
        match self.properties.get(key)? {
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            Value::Number(n) => Some(Cow::Owned(n.to_string())),
            _ => None,
        }
    }

    /// `[longitude, latitude, ...]` as found under `geometry.coordinates`.
    pub fn coordinates(&self) -> Option<&[Value]> {
        self.geometry
            .as_ref()
            .and_then(|g| g.coordinates.as_array())
            .map(Vec::as_slice)
    }
}

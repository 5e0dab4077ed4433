// crates/gazetteer-core/src/model/record.rs
use serde::{Deserialize, Serialize};

/// One entry of the gazetteer lookup table.
///
/// Field order is the serialized order: `keys`, `latitude`, `longitude`,
/// `name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GazetteerRecord {
    /// Lookup keys, each `"{country_code}-{postal_code}"`.
    pub keys: Vec<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
}

impl GazetteerRecord {
    /// Builds the composite lookup key for a postal code.
    #[inline]
    pub fn key_for(country_code: &str, postal_code: &str) -> String {
        format!("{country_code}-{postal_code}")
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

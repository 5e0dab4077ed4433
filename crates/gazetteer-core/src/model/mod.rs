// crates/gazetteer-core/src/model/mod.rs

//! # Data Model
//!
//! `raw` mirrors the GeoJSON input, `record` is the gazetteer output.

pub mod raw;
pub mod record;

use crate::common::GazetteerStats;
use crate::error::Result;
use crate::loader::common_io;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::path::Path;

pub use raw::{FeatureCollectionRaw, FeatureRaw, GeometryRaw};
pub use record::GazetteerRecord;

/// Indentation of the written JSON array.
pub const OUTPUT_INDENT: &[u8] = b"    ";

/// The deduplicated lookup table, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct Gazetteer {
    pub(crate) records: Vec<GazetteerRecord>,
    pub(crate) stats: GazetteerStats,
}

impl Gazetteer {
    pub fn records(&self) -> &[GazetteerRecord] {
        &self.records
    }

    pub fn stats(&self) -> GazetteerStats {
        self.stats
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Serializes the records as a JSON array indented with four spaces.
    pub fn to_pretty_json(&self) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(self.records.len() * 128);
        let mut ser =
            serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(OUTPUT_INDENT));
        self.records
            .serialize(&mut ser)
            .map_err(std::io::Error::from)?;
        Ok(out)
    }

    /// Writes the pretty JSON array to `path`.
    ///
    /// The bytes go to a temporary file next to `path` which is renamed over
    /// the target only once fully written, so a failed write never leaves a
    /// truncated gazetteer behind.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.to_pretty_json()?;
        common_io::write_atomic(path.as_ref(), &bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Gazetteer {
        Gazetteer {
            records: vec![GazetteerRecord {
                keys: vec!["US-10001".into()],
                latitude: 40.75,
                longitude: -73.99,
                name: "NYC".into(),
            }],
            stats: GazetteerStats::default(),
        }
    }

    #[test]
    fn pretty_json_uses_four_spaces_and_field_order() {
        let text = String::from_utf8(sample().to_pretty_json().unwrap()).unwrap();
        let expected = "[\n    {\n        \"keys\": [\n            \"US-10001\"\n        ],\n        \"latitude\": 40.75,\n        \"longitude\": -73.99,\n        \"name\": \"NYC\"\n    }\n]";
        assert_eq!(text, expected);
    }

    #[test]
    fn empty_gazetteer_is_empty_array() {
        let g = Gazetteer::default();
        assert_eq!(g.to_pretty_json().unwrap(), b"[]");
    }
}

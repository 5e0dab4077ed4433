// crates/gazetteer-core/src/dedup.rs
use crate::model::GazetteerRecord;
use std::collections::{HashMap, HashSet};

/// True if any of the record's keys was already emitted for its country.
pub fn is_duplicate(record: &GazetteerRecord, seen_for_country: &HashSet<String>) -> bool {
    record.keys.iter().any(|k| seen_for_country.contains(k))
}

/// Keys already written, grouped by country code.
///
/// Lives for one conversion run. First seen wins: [`SeenKeys::admit`] only
/// accepts a record whose keys are all new for its country.
#[derive(Debug, Default)]
pub struct SeenKeys {
    by_country: HashMap<String, HashSet<String>>,
}

impl SeenKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set for `country_code`, created on first use.
    pub fn for_country(&mut self, country_code: &str) -> &mut HashSet<String> {
        self.by_country
            .entry(country_code.to_owned())
            .or_default()
    }

    /// Records the keys and returns `true` unless the record is a duplicate.
    pub fn admit(&mut self, country_code: &str, record: &GazetteerRecord) -> bool {
        let seen = self.for_country(country_code);
        if is_duplicate(record, seen) {
            return false;
        }
        seen.extend(record.keys.iter().cloned());
        true
    }

    /// Number of distinct countries encountered, duplicates included.
    pub fn countries(&self) -> usize {
        self.by_country.len()
    }
}

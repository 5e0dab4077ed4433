// crates/gazetteer-core/src/pipeline.rs

//! Per-feature transform + dedup pass over a parsed document.

use crate::common::GazetteerStats;
use crate::convert::feature_to_record;
use crate::dedup::SeenKeys;
use crate::error::{GazetteerError, Result};
use crate::model::{FeatureCollectionRaw, Gazetteer};
use crate::traits::Progress;
use tracing::{debug, warn};

/// What to do with a feature that lacks required properties or coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedPolicy {
    /// Stop the run at the first bad feature.
    #[default]
    Abort,
    /// Log a warning, count it, keep going.
    Skip,
}

/// Converts every feature in file order, keeping the first record per key.
pub fn build_gazetteer(
    collection: &FeatureCollectionRaw,
    policy: MalformedPolicy,
    progress: &mut dyn Progress,
) -> Result<Gazetteer> {
    let total = collection.features.len();
    let mut seen = SeenKeys::new();
    let mut records = Vec::new();
    let mut stats = GazetteerStats {
        features: total,
        ..GazetteerStats::default()
    };

    progress.start("Converting features", Some(total as u64));

    for (index, feature) in collection.features.iter().enumerate() {
        match feature_to_record(feature) {
            Ok((record, country_code)) => {
                if seen.admit(&country_code, &record) {
                    records.push(record);
                } else {
                    stats.duplicates += 1;
                }
            }
            Err(source) => match policy {
                MalformedPolicy::Abort => {
                    progress.finish();
                    return Err(GazetteerError::Feature { index, source });
                }
                MalformedPolicy::Skip => {
                    warn!(index, error = %source, "skipping malformed feature");
                    stats.malformed += 1;
                }
            },
        }
        progress.advance(1);
    }

    progress.finish();

    stats.records = records.len();
    stats.countries = seen.countries();
    debug!(?stats, "conversion finished");

    Ok(Gazetteer { records, stats })
}

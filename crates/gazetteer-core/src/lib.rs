// crates/gazetteer-core/src/lib.rs

//! Builds a postal-code gazetteer: a flat, deduplicated lookup table keyed by
//! `"{country_code}-{postal_code}"`, from the GeoNames GeoJSON export.
//!
//! ```no_run
//! use gazetteer_core::{build_gazetteer, loader, MalformedPolicy, NoProgress};
//!
//! let collection = loader::load_collection("geonames-postal-code@public.geojson")?;
//! let gazetteer = build_gazetteer(&collection, MalformedPolicy::Abort, &mut NoProgress)?;
//! gazetteer.write_to("postal-codes.json")?;
//! # Ok::<(), gazetteer_core::GazetteerError>(())
//! ```

pub mod common;
pub mod convert;
pub mod dedup;
pub mod error;
pub mod loader;
pub mod model;
pub mod pipeline;
pub mod traits;

// Re-exports
pub use crate::common::GazetteerStats;
pub use crate::convert::feature_to_record;
pub use crate::dedup::{is_duplicate, SeenKeys};
pub use crate::error::{FeatureError, GazetteerError, Result};
pub use crate::model::{FeatureCollectionRaw, FeatureRaw, Gazetteer, GazetteerRecord};
pub use crate::pipeline::{build_gazetteer, MalformedPolicy};
pub use crate::traits::{NoProgress, Progress};

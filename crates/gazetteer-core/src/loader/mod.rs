// crates/gazetteer-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (I/O, decompression, download) and hands the
//! parsed document to the pipeline.

use crate::error::{GazetteerError, Result};
use crate::model::FeatureCollectionRaw;
use std::io::Read;
use std::path::Path;
use tracing::debug;

pub mod common_io;

#[cfg(feature = "fetch")]
pub mod fetch;

/// Default name of the downloaded GeoNames export.
pub const DEFAULT_INPUT: &str = "geonames-postal-code@public.geojson";

/// Default gazetteer output file.
pub const DEFAULT_OUTPUT: &str = "postal-codes.json";

/// Reads the whole dataset into memory as text.
pub fn read_dataset(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let mut reader = common_io::open_stream(path)?;
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    debug!(path = %path.display(), bytes = text.len(), "dataset read");
    Ok(text)
}

/// Parses a GeoJSON document held in memory.
///
/// `path` is only used for the error message.
pub fn parse_collection(text: &str, path: impl AsRef<Path>) -> Result<FeatureCollectionRaw> {
    serde_json::from_str(text).map_err(|source| GazetteerError::Parse {
        path: path.as_ref().to_path_buf(),
        source,
    })
}

/// [`read_dataset`] followed by [`parse_collection`].
pub fn load_collection(path: impl AsRef<Path>) -> Result<FeatureCollectionRaw> {
    let path = path.as_ref();
    let text = read_dataset(path)?;
    parse_collection(&text, path)
}

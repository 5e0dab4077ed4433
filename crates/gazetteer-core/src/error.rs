// crates/gazetteer-core/src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Problems with a single input feature.
///
/// Raised by [`crate::convert::feature_to_record`]; the pipeline wraps it in
/// [`GazetteerError::Feature`] together with the feature's position.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FeatureError {
    #[error("missing required property `{0}`")]
    MissingField(&'static str),

    #[error("malformed geometry: {0}")]
    MalformedGeometry(String),
}

#[derive(Debug, Error)]
pub enum GazetteerError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse dataset {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Feature #{index}: {source}")]
    Feature {
        index: usize,
        #[source]
        source: FeatureError,
    },

    #[error("Request to {url} failed with status code {status}")]
    Download { url: String, status: u16 },

    #[error("Download incomplete: expected {expected} bytes, received {received}")]
    Truncated { expected: u64, received: u64 },

    #[cfg(feature = "fetch")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, GazetteerError>;

// crates/gazetteer-core/src/traits.rs

/// Progress sink for long-running steps (download, conversion).
///
/// The core only reports counts; rendering is left to the caller. `total` is
/// `None` when the size is unknown up front (e.g. a download without
/// `Content-Length`).
pub trait Progress {
    fn start(&mut self, _label: &str, _total: Option<u64>) {}

    /// Adds `delta` units (bytes or features) to the running count.
    fn advance(&mut self, delta: u64);

    fn finish(&mut self) {}
}

/// Discards all progress updates.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl Progress for NoProgress {
    #[inline]
    fn advance(&mut self, _delta: u64) {}
}

/// Aggregate counts for one conversion run.
///
/// Returned by [`crate::Gazetteer::stats`]. `records` and `countries` are the
/// headline numbers; the rest explain where the other features went.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GazetteerStats {
    /// Features read from the input document.
    pub features: usize,
    /// Unique records retained.
    pub records: usize,
    /// Distinct country codes seen.
    pub countries: usize,
    /// Features dropped because their key was already taken.
    pub duplicates: usize,
    /// Features skipped under [`crate::MalformedPolicy::Skip`].
    pub malformed: usize,
}

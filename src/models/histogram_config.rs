/// Controls how text is reduced to symbols before counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistogramConfig {
    /// When `false`, characters are lowercased before they are counted.
    pub case_sensitive: bool,
    /// When `true`, whitespace characters are skipped.
    pub ignore_whitespace: bool,
}

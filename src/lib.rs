mod constants;
pub mod models;
pub use constants::DEFAULT_HISTOGRAM_CONFIG;
pub use models::{Error, HistogramConfig};
pub mod types;
pub mod utils;
pub use types::{FrequencyMap, InverseMapping, MappingEntry, SymbolFrequency};
pub use utils::{
    count, flatten_inverse, frequency_of, invert, merge_frequencies, read_mapping_csv,
    read_mapping_csv_gz, reverse_lookup, sort_by_frequency, sort_by_symbol,
};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Counts how often each character occurs in `text`.
///
/// Uses `DEFAULT_HISTOGRAM_CONFIG`, which counts every character as-is.
///
/// # Example
/// ```
/// use symbol_histogram::histogram;
///
/// let frequencies = histogram("beekeeper");
/// assert_eq!(frequencies[&'e'], 5);
/// assert_eq!(frequencies[&'b'], 1);
/// assert_eq!(frequencies.len(), 5);
/// ```
pub fn histogram(text: &str) -> FrequencyMap<char> {
    histogram_with_custom_config(text, DEFAULT_HISTOGRAM_CONFIG)
}

/// Counts how often each character occurs in `text`, after applying the
/// case folding and whitespace filtering described by `histogram_config`.
pub fn histogram_with_custom_config(
    text: &str,
    histogram_config: HistogramConfig,
) -> FrequencyMap<char> {
    let symbols = text
        .chars()
        .filter(|c| !(histogram_config.ignore_whitespace && c.is_whitespace()));

    if histogram_config.case_sensitive {
        count(symbols)
    } else {
        // `to_lowercase` may expand to several chars
        count(symbols.flat_map(char::to_lowercase))
    }
}

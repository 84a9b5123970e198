use crate::types::{FrequencyMap, SymbolFrequency};
use log::debug;
use std::collections::HashMap;
use std::hash::Hash;

/// Counts the frequency of symbols in the given sequence.
///
/// # Arguments
/// * `symbols` - Any finite sequence of hashable symbols. May be empty.
///
/// # Returns
/// * A `FrequencyMap` where the keys are the distinct symbols and the values
///   are their respective occurrence counts. An empty input yields an empty map.
///
/// # Example
/// ```
/// use symbol_histogram::count;
///
/// let frequencies = count(vec!["adam", "bob", "adam"]);
/// assert_eq!(frequencies.get("adam"), Some(&2));
/// assert_eq!(frequencies.get("bob"), Some(&1));
/// assert_eq!(frequencies.get("carl"), None);
/// ```
pub fn count<S, I>(symbols: I) -> FrequencyMap<S>
where
    I: IntoIterator<Item = S>,
    S: Hash + Eq,
{
    let mut frequencies: FrequencyMap<S> = HashMap::new();
    let mut total: usize = 0;

    for symbol in symbols {
        *frequencies.entry(symbol).or_insert(0) += 1;
        total += 1;
    }

    debug!(
        "Counted {} symbols ({} distinct)",
        total,
        frequencies.len()
    );

    frequencies
}

/// Returns the count stored for `symbol`, or 0 if it never occurred.
pub fn frequency_of<S>(frequencies: &FrequencyMap<S>, symbol: &S) -> SymbolFrequency
where
    S: Hash + Eq,
{
    frequencies.get(symbol).copied().unwrap_or(0)
}

use crate::types::FrequencyMap;
use std::hash::Hash;

/// Adds the counts of `from` into `into`.
///
/// Symbols missing from `into` are inserted with their count from `from`, so
/// the result is the histogram of both inputs concatenated.
pub fn merge_frequencies<S>(into: &mut FrequencyMap<S>, from: &FrequencyMap<S>)
where
    S: Hash + Eq + Clone,
{
    for (symbol, frequency) in from {
        *into.entry(symbol.clone()).or_insert(0) += frequency;
    }
}

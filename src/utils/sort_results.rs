use crate::types::{FrequencyMap, SymbolFrequency};

/// Sorts a mapping of symbols to their frequencies.
///
/// ### Sorting Order:
/// - **Primary:** Sorts by frequency in descending order (higher frequency first).
/// - **Secondary:** If two symbols have the same frequency, sorts by symbol
///   in ascending order for deterministic ordering.
///
/// ### Example:
/// ```rust
/// use symbol_histogram::{histogram, sort_by_frequency};
///
/// let sorted = sort_by_frequency(&histogram("beekeeper"));
/// assert_eq!(sorted, vec![('e', 5), ('b', 1), ('k', 1), ('p', 1), ('r', 1)]);
/// ```
pub fn sort_by_frequency<S>(frequencies: &FrequencyMap<S>) -> Vec<(S, SymbolFrequency)>
where
    S: Ord + Clone,
{
    let mut sorted_results = collect_entries(frequencies);

    sorted_results.sort_by(|a, b| {
        b.1.cmp(&a.1) // Sort by frequency (descending)
            .then_with(|| a.0.cmp(&b.0)) // Secondary sort by symbol (ascending)
    });

    sorted_results
}

/// Returns the entries ordered by symbol, ascending.
pub fn sort_by_symbol<S>(frequencies: &FrequencyMap<S>) -> Vec<(S, SymbolFrequency)>
where
    S: Ord + Clone,
{
    let mut sorted_results = collect_entries(frequencies);
    sorted_results.sort_by(|a, b| a.0.cmp(&b.0));

    sorted_results
}

fn collect_entries<S: Clone>(frequencies: &FrequencyMap<S>) -> Vec<(S, SymbolFrequency)> {
    frequencies
        .iter()
        .map(|(symbol, frequency)| (symbol.clone(), *frequency))
        .collect()
}

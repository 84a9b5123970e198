use std::collections::HashMap;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents the total number of occurrences of a symbol within an input sequence.
pub type SymbolFrequency = usize;

/// Represents a map of symbols to their frequency counts.
///
/// Every stored count is at least 1; symbols which never occurred are absent
/// rather than present with a count of 0.
pub type FrequencyMap<S> = HashMap<S, SymbolFrequency>;

/// Represents the inverse of a key-value mapping. Each value maps to the keys
/// which produced it, in the order they were encountered in the source.
pub type InverseMapping<V, K> = HashMap<V, Vec<K>>;

/// A key-value pair as read from a mapping source such as a CSV file.
pub type MappingEntry = (String, String);

use crate::types::InverseMapping;
use log::debug;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

/// Inverts a key-value mapping, grouping keys by the value they map to.
///
/// The source is consumed as an iterator of `(key, value)` pairs, so any
/// mapping type works: pass `&HashMap` to borrow keys and values, or an owned
/// collection to move them. Keys within each bucket keep the iteration order
/// of the source; pass an ordered source (a `Vec` of pairs, a `BTreeMap`) when
/// that order matters.
///
/// # Example
/// ```
/// use symbol_histogram::invert;
///
/// let source = vec![("b", 1), ("e", 4), ("k", 1), ("p", 1), ("r", 1)];
/// let inverse = invert(source);
///
/// assert_eq!(inverse[&1], vec!["b", "k", "p", "r"]);
/// assert_eq!(inverse[&4], vec!["e"]);
/// ```
pub fn invert<K, V, I>(source: I) -> InverseMapping<V, K>
where
    I: IntoIterator<Item = (K, V)>,
    V: Hash + Eq,
{
    let mut inverse: InverseMapping<V, K> = HashMap::new();
    let mut entry_count: usize = 0;

    for (key, value) in source {
        match inverse.entry(value) {
            Entry::Vacant(vacant_entry) => {
                vacant_entry.insert(vec![key]);
            }
            Entry::Occupied(mut occupied_entry) => {
                occupied_entry.get_mut().push(key);
            }
        }
        entry_count += 1;
    }

    debug!(
        "Inverted {} entries into {} buckets",
        entry_count,
        inverse.len()
    );

    inverse
}

/// Flattens an inverse mapping back into `(key, value)` pairs.
///
/// Pairs are emitted bucket by bucket; within a bucket the keys keep their
/// stored order. Inverting the result reproduces the same grouping.
pub fn flatten_inverse<K, V>(inverse: &InverseMapping<V, K>) -> Vec<(K, V)>
where
    K: Clone,
    V: Clone,
{
    inverse
        .iter()
        .flat_map(|(value, keys)| keys.iter().map(move |key| (key.clone(), value.clone())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_invert_empty_source() {
        let inverse = invert(Vec::<(char, usize)>::new());
        assert!(inverse.is_empty());
    }

    #[test]
    fn test_invert_keeps_source_order_within_bucket() {
        let source = vec![("adam", 25), ("bob", 19), ("carl", 25), ("dave", 19), ("earl", 30)];
        let inverse = invert(source);

        assert_eq!(inverse.len(), 3);
        assert_eq!(inverse[&25], vec!["adam", "carl"]);
        assert_eq!(inverse[&19], vec!["bob", "dave"]);
        assert_eq!(inverse[&30], vec!["earl"]);
    }

    #[test]
    fn test_invert_borrowed_btree_map() {
        let source: BTreeMap<char, usize> =
            [('r', 1), ('b', 1), ('e', 5), ('p', 1), ('k', 1)].into_iter().collect();
        let inverse = invert(&source);

        // BTreeMap iterates in key order
        assert_eq!(inverse[&1usize], vec![&'b', &'k', &'p', &'r']);
        assert_eq!(inverse[&5usize], vec![&'e']);
    }

    #[test]
    fn test_invert_does_not_mutate_source() {
        let source: HashMap<&str, u8> = [("x", 1), ("y", 1)].into_iter().collect();
        let snapshot = source.clone();

        let _ = invert(&source);

        assert_eq!(source, snapshot);
    }

    #[test]
    fn test_flatten_inverse_round_trips_grouping() {
        let source = vec![('a', 2), ('b', 1), ('c', 2)];
        let inverse = invert(source);

        let mut pairs = flatten_inverse(&inverse);
        pairs.sort();

        assert_eq!(pairs, vec![('a', 2), ('b', 1), ('c', 2)]);
        assert_eq!(invert(pairs), inverse);
    }
}

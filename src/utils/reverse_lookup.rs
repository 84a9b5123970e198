use crate::models::Error;
use std::fmt::Debug;

/// Finds the first key, in iteration order, whose value equals `value`.
///
/// This is a linear scan which returns as soon as a match is found. Returns
/// `Error::NotFound` if no entry holds the value.
///
/// # Example
/// ```
/// use symbol_histogram::{histogram, reverse_lookup};
///
/// let frequencies = histogram("yellowwooddoor");
/// assert_eq!(reverse_lookup(&frequencies, &5).unwrap(), &'o');
/// assert!(reverse_lookup(&frequencies, &3).is_err());
/// ```
pub fn reverse_lookup<'a, K, V, I>(mapping: I, value: &V) -> Result<K, Error>
where
    I: IntoIterator<Item = (K, &'a V)>,
    V: PartialEq + Debug + 'a,
{
    for (key, candidate) in mapping {
        if candidate == value {
            return Ok(key);
        }
    }

    Err(Error::NotFound(format!(
        "{:?} does not appear in the mapping",
        value
    )))
}

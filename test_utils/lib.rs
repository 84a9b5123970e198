pub mod constants;

use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::path::{Path, PathBuf};
use std::fs;

/// Resolves a file name within the test data directory.
pub fn test_data_file_path(file_name: &str) -> PathBuf {
    Path::new(constants::TEST_DATA_FILES_DIRECTORY).join(file_name)
}

/// Lists every `.txt` file in the test files directory, sorted by name.
pub fn list_test_files() -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = fs::read_dir(constants::TEST_FILES_DIRECTORY)
        .expect("Failed to read test files directory")
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.extension().map_or(false, |ext| ext == "txt"))
        .collect();

    paths.sort();
    paths
}

// Helper function to get the expected symbol counts from the text file
pub fn get_expected_frequencies(file_path: &Path) -> HashMap<char, usize> {
    let content = fs::read_to_string(file_path).expect("Failed to read test file");

    // Extract `symbol=count` pairs from lines starting with EXPECTED:
    content
        .lines()
        .filter_map(|line| line.trim().strip_prefix("EXPECTED:"))
        .map(|expected| {
            let (symbol, frequency) = expected
                .trim()
                .split_once('=')
                .expect("EXPECTED lines must be of the form `symbol=count`");

            let mut symbol_chars = symbol.chars();
            let symbol = symbol_chars.next().expect("Missing symbol");
            assert!(symbol_chars.next().is_none(), "Symbol must be a single char");

            let frequency = frequency.parse().expect("Count must be an integer");

            (symbol, frequency)
        })
        .collect()
}

// Helper function to get the text under test, without annotation lines
pub fn get_filtered_text(file_path: &Path) -> String {
    let raw_text = fs::read_to_string(file_path).expect("Failed to read test file");

    // Filter out lines starting with 'EXPECTED:' or 'COMMENT:'
    raw_text
        .lines()
        .filter(|line| {
            !line.trim_start().starts_with("EXPECTED:")
                && !line.trim_start().starts_with("COMMENT:")
        })
        .collect::<Vec<&str>>()
        .join("\n")
}

/// Converts the buckets of an inverse mapping to sets, so groupings can be
/// compared without depending on the order keys were visited in.
pub fn buckets_as_sets<V, K>(inverse: &HashMap<V, Vec<K>>) -> HashMap<V, HashSet<K>>
where
    V: Hash + Eq + Clone,
    K: Hash + Eq + Clone,
{
    inverse
        .iter()
        .map(|(value, keys)| (value.clone(), keys.iter().cloned().collect()))
        .collect()
}

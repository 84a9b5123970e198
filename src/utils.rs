pub mod count_symbol_frequencies;
pub mod invert_mapping;
pub mod merge_frequencies;
pub mod read_mapping_csv;
pub mod reverse_lookup;
pub mod sort_results;

pub use count_symbol_frequencies::{count, frequency_of};
pub use invert_mapping::{flatten_inverse, invert};
pub use merge_frequencies::merge_frequencies;
pub use read_mapping_csv::{read_mapping_csv, read_mapping_csv_gz};
pub use reverse_lookup::reverse_lookup;
pub use sort_results::{sort_by_frequency, sort_by_symbol};

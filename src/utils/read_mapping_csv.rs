use crate::models::Error;
use crate::types::MappingEntry;
use csv::{ReaderBuilder, Trim};
use flate2::read::GzDecoder;
use log::{debug, warn};
use std::collections::HashMap;
use std::io::Read;

/// Reads a two-column `key,value` CSV (no header row) into ordered pairs.
///
/// Fields are trimmed. When a key repeats, the later value replaces the earlier
/// one but the key keeps the position of its first appearance. Any row which
/// does not have exactly two fields is rejected with `Error::InvalidArgument`.
///
/// # Example
/// ```
/// use symbol_histogram::{invert, read_mapping_csv};
///
/// let csv = "adam,25\nbob,19\ncarl,25\n";
/// let entries = read_mapping_csv(csv.as_bytes()).unwrap();
/// let inverse = invert(entries);
///
/// assert_eq!(inverse["25"], vec!["adam", "carl"]);
/// ```
pub fn read_mapping_csv<R: Read>(reader: R) -> Result<Vec<MappingEntry>, Error> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut entries: Vec<MappingEntry> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for record in csv_reader.records() {
        let record = record?;

        if record.len() != 2 {
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            return Err(Error::InvalidArgument(format!(
                "Expected 2 fields on line {}, found {}",
                line,
                record.len()
            )));
        }

        let key = record[0].to_string();
        let value = record[1].to_string();

        match positions.get(&key) {
            Some(&position) => {
                warn!("Duplicate key {:?}; keeping the later value", key);
                entries[position].1 = value;
            }
            None => {
                positions.insert(key.clone(), entries.len());
                entries.push((key, value));
            }
        }
    }

    debug!("Read {} mapping entries", entries.len());

    Ok(entries)
}

/// Same as `read_mapping_csv`, for gzip-compressed input.
pub fn read_mapping_csv_gz<R: Read>(reader: R) -> Result<Vec<MappingEntry>, Error> {
    read_mapping_csv(GzDecoder::new(reader))
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    #[test]
    fn test_read_preserves_row_order() {
        let entries = read_mapping_csv("dave, 35\nearl, 22\nfred ,27".as_bytes()).unwrap();

        assert_eq!(
            entries,
            vec![
                ("dave".to_string(), "35".to_string()),
                ("earl".to_string(), "22".to_string()),
                ("fred".to_string(), "27".to_string()),
            ]
        );
    }

    #[test]
    fn test_duplicate_key_later_value_wins() {
        let entries = read_mapping_csv("a,1\nb,10\na,2\nb,0\na,3\n".as_bytes()).unwrap();

        assert_eq!(
            entries,
            vec![
                ("a".to_string(), "3".to_string()),
                ("b".to_string(), "0".to_string()),
            ]
        );
    }

    #[test]
    fn test_wrong_field_count_is_invalid_argument() {
        let result = read_mapping_csv("adam,25\nbob\n".as_bytes());

        match result {
            Err(Error::InvalidArgument(msg)) => assert!(msg.contains("line 2")),
            other => panic!("Expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_input() {
        let entries = read_mapping_csv("".as_bytes()).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_read_gzip_compressed() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"x,1\ny,2\n").unwrap();
        let compressed = encoder.finish().unwrap();

        let entries = read_mapping_csv_gz(compressed.as_slice()).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1], ("y".to_string(), "2".to_string()));
    }

    #[test]
    fn test_read_gzip_rejects_plain_input() {
        let result = read_mapping_csv_gz("x,1\n".as_bytes());
        assert!(result.is_err());
    }
}

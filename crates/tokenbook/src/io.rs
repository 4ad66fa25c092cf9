//! # Source Listing IO
//!
//! The table builder itself only consumes ordered string sequences; this
//! module is the file-reader collaborator that turns a one-token-per-line
//! vocabulary file into that sequence.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{errors::Result, special::SpecialTokens, table::VocabTable, types::TokenType};

/// Read a source listing from a [`BufRead`] stream.
///
/// Strips line terminators and surrounding whitespace from each line. Lines
/// that strip to empty are kept as entries; the listing defines ids by
/// position, not by content.
///
/// ## Arguments
/// * `reader` - the line reader.
///
/// ## Returns
/// The stripped lines, in stream order.
pub fn read_vocab_lines<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        lines.push(line?.trim().to_string());
    }
    Ok(lines)
}

/// Load a [`VocabTable`] from a vocabulary file.
///
/// ## Arguments
/// * `path` - path to the file, one token per line.
/// * `specials` - the four reserved token strings.
///
/// ## Returns
/// The built table, or an error if the file is unreadable or a reserved
/// string appears among its lines.
pub fn load_vocab_table_path<T, P>(
    path: P,
    specials: SpecialTokens,
) -> Result<VocabTable<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let file = File::open(path.as_ref())?;
    let lines = read_vocab_lines(BufReader::new(file))?;

    let table = VocabTable::build(lines, specials)?;
    log::debug!(
        "loaded vocab table: {} tokens from {}",
        table.len(),
        path.as_ref().display()
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_read_vocab_lines_strips() {
        let listing = "cat\n  dog \r\nbird\n";
        let lines = read_vocab_lines(listing.as_bytes()).unwrap();
        assert_eq!(lines, ["cat", "dog", "bird"]);
    }

    #[test]
    fn test_empty_lines_are_entries() {
        let lines = read_vocab_lines("cat\n\ndog".as_bytes()).unwrap();
        assert_eq!(lines, ["cat", "", "dog"]);
    }

    #[test]
    fn test_load_vocab_table_path() {
        let dir = tempdir::TempDir::new("vocab_test").unwrap();
        let path = dir.path().join("vocab.txt");

        let mut file = File::create(&path).unwrap();
        writeln!(file, "cat").unwrap();
        writeln!(file, "dog").unwrap();
        drop(file);

        let table: VocabTable<u32> =
            load_vocab_table_path(&path, SpecialTokens::default()).unwrap();

        assert_eq!(table.len(), 6);
        assert_eq!(table.token_to_id("cat"), 4);
        assert_eq!(table.token_to_id("dog"), 5);
    }

    #[test]
    fn test_missing_file_surfaces_io_error() {
        let dir = tempdir::TempDir::new("vocab_test").unwrap();
        let path = dir.path().join("absent.txt");

        let err = load_vocab_table_path::<u32, _>(&path, SpecialTokens::default()).unwrap_err();
        assert!(matches!(err, crate::errors::TokenbookError::Io(_)));
    }
}

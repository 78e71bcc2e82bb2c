use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::errors::{Result, TangrsError};

const BYTE_ORDER_MARK: char = '\u{feff}';

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> std::io::Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path)?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

///
/// Read every line of a (possibly gzip'd) text file, with line terminators
/// (`\n` or `\r\n`) stripped. A leading UTF-8 byte order mark is dropped.
///
/// The file handle is dropped before returning, on success and on failure.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let unavailable = |source: std::io::Error| TangrsError::InputUnavailable {
        path: path.to_path_buf(),
        source,
    };

    let reader = get_dynamic_reader(path).map_err(unavailable)?;

    let mut lines = Vec::new();
    for line in reader.lines() {
        let mut line = line.map_err(unavailable)?;
        if line.ends_with('\r') {
            line.pop();
        }
        if lines.is_empty() && line.starts_with(BYTE_ORDER_MARK) {
            line.remove(0);
        }
        lines.push(line);
    }

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use flate2::Compression;
    use flate2::write::GzEncoder;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_read_lines_strips_terminators() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        std::fs::write(&path, "alpha ACDEFG\r\nbeta HIKLMN\n").unwrap();

        let lines = read_lines(&path).unwrap();
        assert_eq!(lines, vec!["alpha ACDEFG", "beta HIKLMN"]);
    }

    #[rstest]
    fn test_read_lines_gzipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt.gz");

        let file = File::create(&path).unwrap();
        let mut encoder = GzEncoder::new(file, Compression::default());
        writeln!(encoder, ">seq1").unwrap();
        writeln!(encoder, "ACDEFG").unwrap();
        encoder.finish().unwrap();

        let lines = read_lines(&path).unwrap();
        assert_eq!(lines, vec![">seq1", "ACDEFG"]);
    }

    #[rstest]
    fn test_read_lines_drops_byte_order_mark() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bom.fasta");
        std::fs::write(&path, "\u{feff}>sp|P12345|TEST desc\r\nACDEFG\r\n").unwrap();

        let lines = read_lines(&path).unwrap();
        assert_eq!(lines, vec![">sp|P12345|TEST desc", "ACDEFG"]);

        let collection = crate::parser::extract_records(&lines).unwrap();
        assert_eq!(collection.format(), crate::models::InputFormat::Fasta);
        assert_eq!(collection.name(crate::models::InternalId(0)), Some("P12345"));
    }

    #[rstest]
    fn test_read_lines_missing_file() {
        let result = read_lines(Path::new("does/not/exist.fasta"));
        assert!(matches!(result, Err(TangrsError::InputUnavailable { .. })));
    }
}

//! Integration tests for reading sequence files from disk and turning them into run specs.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::write::GzEncoder;
use pretty_assertions::assert_eq;
use rstest::*;

use tangrs_core::{
    ConditionRegistry, InputFormat, InternalId, SequenceCollection, TangrsError, build_run_specs,
    extract_records, read_lines,
};

#[fixture]
fn path_to_data() -> PathBuf {
    PathBuf::from("../tests/data/sequences")
}

fn records(collection: &SequenceCollection) -> Vec<(usize, String, String)> {
    collection
        .iter()
        .map(|r| (r.id.0, r.name.to_string(), r.sequence.to_string()))
        .collect()
}

#[rstest]
fn test_single_fasta_record(path_to_data: PathBuf) {
    let collection = SequenceCollection::try_from(path_to_data.join("single.fasta")).unwrap();

    assert_eq!(collection.format(), InputFormat::Fasta);
    assert_eq!(
        records(&collection),
        vec![(0, "P12345".to_string(), "ACDEFGacdefg".to_string())]
    );
}

#[rstest]
fn test_multi_record_fasta(path_to_data: PathBuf) {
    let collection = SequenceCollection::try_from(path_to_data.join("amyloid.fasta")).unwrap();

    let names: Vec<&str> = collection.iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["P05067", "Islet_amyloid", "Ab_42"]);

    let lengths: Vec<usize> = collection.iter().map(|r| r.len()).collect();
    assert_eq!(lengths, vec![42, 37, 42]);

    assert_eq!(
        collection.sequence(InternalId(0)),
        collection.sequence(InternalId(2))
    );
}

#[rstest]
#[case("pairs.txt", InputFormat::SpaceDelimited)]
#[case("pairs.csv", InputFormat::Csv)]
fn test_delimited_files(path_to_data: PathBuf, #[case] file: &str, #[case] format: InputFormat) {
    let collection = SequenceCollection::try_from(path_to_data.join(file)).unwrap();

    assert_eq!(collection.format(), format);
    assert_eq!(
        records(&collection),
        vec![
            (0, "alpha".to_string(), "ACDEFG".to_string()),
            (1, "beta".to_string(), "HIKLMN".to_string()),
        ]
    );
}

#[rstest]
fn test_raw_list_with_crlf(path_to_data: PathBuf) {
    let collection = SequenceCollection::try_from(path_to_data.join("raw.txt")).unwrap();

    assert_eq!(collection.format(), InputFormat::RawList);
    assert_eq!(
        records(&collection),
        vec![
            (0, "0".to_string(), "ACDEFG".to_string()),
            (1, "1".to_string(), "HIKLMN".to_string()),
        ]
    );
}

#[rstest]
fn test_malformed_file_reports_line(path_to_data: PathBuf) {
    let result = SequenceCollection::try_from(path_to_data.join("malformed.txt"));

    match result {
        Err(TangrsError::ParseError { line, content, .. }) => {
            assert_eq!(line, 1);
            assert_eq!(content, "beta");
        }
        other => panic!("expected a parse error, got {:?}", other),
    }
}

#[rstest]
fn test_empty_file(path_to_data: PathBuf) {
    let result = SequenceCollection::try_from(path_to_data.join("empty.txt"));
    assert!(matches!(result, Err(TangrsError::EmptyInput)));
}

#[rstest]
fn test_missing_file(path_to_data: PathBuf) {
    let result = SequenceCollection::try_from(path_to_data.join("nope.fasta"));
    assert!(matches!(result, Err(TangrsError::InputUnavailable { .. })));
}

#[rstest]
fn test_gzipped_input_matches_plain(path_to_data: PathBuf) {
    let plain = path_to_data.join("amyloid.fasta");
    let contents = std::fs::read(&plain).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let gz_path = dir.path().join("amyloid.fasta.gz");
    let mut encoder = GzEncoder::new(File::create(&gz_path).unwrap(), Compression::best());
    encoder.write_all(&contents).unwrap();
    encoder.finish().unwrap();

    let from_plain = SequenceCollection::try_from(plain.as_path()).unwrap();
    let from_gz = SequenceCollection::try_from(gz_path.as_path()).unwrap();

    assert_eq!(from_plain, from_gz);
}

#[rstest]
fn test_file_to_run_specs(path_to_data: PathBuf) {
    let lines = read_lines(&path_to_data.join("pairs.csv")).unwrap();
    let collection = extract_records(&lines).unwrap();
    let registry = ConditionRegistry::try_from(Path::new("../tests/data/conditions/conditions.toml")).unwrap();

    let specs = build_run_specs(&collection, &registry, "membrane").unwrap();
    let rendered: Vec<&str> = specs.iter().map(|s| s.command_arguments.as_str()).collect();

    assert_eq!(
        rendered,
        vec![
            "alpha nt=\"A\" ct=\"A\" ph=\"6.5\" te=\"310\" io=\"0.15\" seq=\"ACDEFG\"",
            "beta nt=\"A\" ct=\"A\" ph=\"6.5\" te=\"310\" io=\"0.15\" seq=\"HIKLMN\"",
        ]
    );
}

//! Tests for strict and lenient column-count handling.
//!
//! Note: Tests are run serially to avoid global config race conditions.

use intercomp::config;
use intercomp::dataset::InteractionsFile;
use intercomp::reader::{parse_interactions, InteractionError, InteractionReader};
use serial_test::serial;

const TWELVE: &str = "9606\tG1\tACC1\tProtA\tbinding\t10116\tG2\tACC2\tProtB\t111\t2020-01-01\tnote\n";
const THIRTEEN: &str =
    "9606\tG3\tACC3\tProtC\tinhibition\t10116\tG2\tACC2\tProtB\t222\t2020-01-02\tnote\textra\n";
const ELEVEN: &str = "9606\tG4\tACC4\tProtD\tbinding\t10116\tG5\tACC5\tProtE\t333\t2020-01-03\n";

/// Reset config to default state before each test
fn reset_config() {
    config::set_lenient_columns(false);
}

#[test]
#[serial]
fn test_strict_mode_rejects_wide_line() {
    reset_config();

    let content = format!("{TWELVE}{THIRTEEN}");
    let result = parse_interactions(&content);

    assert!(matches!(
        result,
        Err(InteractionError::MalformedRecord { line: 2, fields: 13 })
    ));
}

#[test]
#[serial]
fn test_lenient_mode_drops_extra_columns() {
    reset_config();
    config::set_lenient_columns(true);

    let content = format!("{TWELVE}{THIRTEEN}");
    let interactions = parse_interactions(&content).unwrap();

    assert_eq!(interactions.len(), 2);
    assert_eq!(interactions[1].gene_rif(), "note");
    assert_eq!(interactions[1].interaction_type(), "inhibition");

    let file = InteractionsFile::from_interactions("mem", interactions);
    let cmp = file.comparator("binding", "inhibition");
    assert_eq!(cmp.intersection().len(), 1);

    reset_config();
}

#[test]
#[serial]
fn test_lenient_mode_still_rejects_short_line() {
    reset_config();
    config::set_lenient_columns(true);

    let content = format!("{TWELVE}{ELEVEN}");
    let result = parse_interactions(&content);

    assert!(matches!(
        result,
        Err(InteractionError::MalformedRecord { line: 2, fields: 11 })
    ));

    reset_config();
}

#[test]
#[serial]
fn test_reader_reports_line_numbers_past_comments() {
    reset_config();

    let content = format!("#header\n\n{TWELVE}{ELEVEN}");
    let mut reader = InteractionReader::new(content.as_bytes());

    assert!(reader.read_record().unwrap().is_some());
    match reader.read_record() {
        Err(InteractionError::MalformedRecord { line, fields }) => {
            assert_eq!(line, 4);
            assert_eq!(fields, 11);
        }
        other => panic!("expected MalformedRecord, got {:?}", other),
    }
}

//! Record parsing tests

use super::csv::CsvParser;
use super::json;
use super::{FlatRecord, Scalar};
use crate::error::Error;
use crate::sample::SampledObject;
use bytes::Bytes;
use pretty_assertions::assert_eq;

fn object(key: &str, body: &str) -> SampledObject {
    SampledObject::new("bucket", key, Bytes::from(body.to_string()))
}

fn record(columns: &[(&str, Scalar)]) -> FlatRecord {
    columns
        .iter()
        .map(|(name, value)| ((*name).to_string(), value.clone()))
        .collect()
}

// ============================================================================
// Delimited text
// ============================================================================

#[test]
fn test_csv_header_names_columns() {
    let document = CsvParser::new()
        .parse(&object("a.csv", "id,name\n1,alice\n2,bob\n"))
        .unwrap();

    assert_eq!(document.columns, vec!["id", "name"]);
    assert_eq!(
        document.records,
        vec![
            record(&[
                ("id", Scalar::Text("1".into())),
                ("name", Scalar::Text("alice".into())),
            ]),
            record(&[
                ("id", Scalar::Text("2".into())),
                ("name", Scalar::Text("bob".into())),
            ]),
        ]
    );
}

#[test]
fn test_csv_empty_cell_is_null() {
    let document = CsvParser::new()
        .parse(&object("a.csv", "a,b\n,x\n"))
        .unwrap();

    assert_eq!(
        document.records,
        vec![record(&[
            ("a", Scalar::Null),
            ("b", Scalar::Text("x".into())),
        ])]
    );
}

#[test]
fn test_csv_short_row_pads_with_null() {
    let document = CsvParser::new()
        .parse(&object("a.csv", "a,b,c\n1\n"))
        .unwrap();

    assert_eq!(
        document.records,
        vec![record(&[
            ("a", Scalar::Text("1".into())),
            ("b", Scalar::Null),
            ("c", Scalar::Null),
        ])]
    );
}

#[test]
fn test_csv_quoted_fields() {
    let document = CsvParser::new()
        .parse(&object("a.csv", "a,b\n\"x, y\",\"he said \"\"hi\"\"\"\n"))
        .unwrap();

    assert_eq!(
        document.records,
        vec![record(&[
            ("a", Scalar::Text("x, y".into())),
            ("b", Scalar::Text("he said \"hi\"".into())),
        ])]
    );
}

#[test]
fn test_csv_skips_blank_lines_keeps_values_raw() {
    let document = CsvParser::new()
        .parse(&object("a.csv", "n\n1\n\n2\n"))
        .unwrap();

    // Values are not coerced here; "1" stays text until classification.
    assert_eq!(
        document.records,
        vec![
            record(&[("n", Scalar::Text("1".into()))]),
            record(&[("n", Scalar::Text("2".into()))]),
        ]
    );
}

#[test]
fn test_csv_custom_delimiter() {
    let document = CsvParser::with_delimiter(';')
        .parse(&object("a.csv", "a;b\n1;2\n"))
        .unwrap();

    assert_eq!(
        document.records,
        vec![record(&[
            ("a", Scalar::Text("1".into())),
            ("b", Scalar::Text("2".into())),
        ])]
    );
}

#[test]
fn test_csv_header_only_file_keeps_columns() {
    let document = CsvParser::new()
        .parse(&object("a.csv", "a,b\n"))
        .unwrap();

    assert_eq!(document.columns, vec!["a", "b"]);
    assert!(document.records.is_empty());
}

#[test]
fn test_csv_invalid_utf8_names_object() {
    let object = SampledObject::new("bucket", "bad.csv", Bytes::from_static(&[0xff, 0xfe]));
    let err = CsvParser::new().parse(&object).unwrap_err();
    match err {
        Error::CsvParse { object, .. } => assert_eq!(object, "bucket/bad.csv"),
        other => panic!("unexpected error: {other}"),
    }
}

// ============================================================================
// JSON
// ============================================================================

#[test]
fn test_json_object_is_one_record() {
    let document = json::parse(&object("a.json", r#"{"a": "x", "b": 1}"#)).unwrap();

    assert!(!document.top_level_array);
    assert_eq!(
        document.records,
        vec![record(&[
            ("a", Scalar::Text("x".into())),
            ("b", Scalar::Int(1)),
        ])]
    );
}

#[test]
fn test_json_nested_objects_flatten_to_dotted_paths() {
    let document =
        json::parse(&object("a.json", r#"{"a": {"b": {"c": 1}, "d": 2.5}}"#)).unwrap();

    assert_eq!(
        document.records,
        vec![record(&[
            ("a.b.c", Scalar::Int(1)),
            ("a.d", Scalar::Float(2.5)),
        ])]
    );
}

#[test]
fn test_json_arrays_are_opaque_leaves() {
    let document =
        json::parse(&object("a.json", r#"{"tags": [1, 2], "deep": {"more": [{}]}}"#)).unwrap();

    assert_eq!(
        document.records,
        vec![record(&[
            ("tags", Scalar::Compound),
            ("deep.more", Scalar::Compound),
        ])]
    );
}

#[test]
fn test_json_top_level_array_explodes_into_records() {
    let document =
        json::parse(&object("a.json", r#"[{"a": 1}, {"a": null, "b": true}]"#)).unwrap();

    assert!(document.top_level_array);
    assert_eq!(
        document.records,
        vec![
            record(&[("a", Scalar::Int(1))]),
            record(&[("a", Scalar::Null), ("b", Scalar::Bool(true))]),
        ]
    );
}

#[test]
fn test_json_preserves_key_order() {
    let document = json::parse(&object("a.json", r#"{"z": 1, "a": 2, "m": 3}"#)).unwrap();

    let columns: Vec<&str> = document.records[0].iter().map(|(name, _)| name).collect();
    assert_eq!(columns, vec!["z", "a", "m"]);
}

#[test]
fn test_json_non_object_root_is_empty_record() {
    let document = json::parse(&object("a.json", "42")).unwrap();

    assert!(!document.top_level_array);
    assert_eq!(document.records.len(), 1);
    assert!(document.records[0].is_empty());
}

#[test]
fn test_json_parse_failure_names_object() {
    let err = json::parse(&object("bad.json", "{not json")).unwrap_err();
    match err {
        Error::JsonParse { object, .. } => assert_eq!(object, "bucket/bad.json"),
        other => panic!("unexpected error: {other}"),
    }
}

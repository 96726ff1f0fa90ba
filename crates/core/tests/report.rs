//! End-to-end checks: load elements, format them, hand the report to a writer.

use elements_core::json::elements_from_str;
use elements_core::{
    format_elements, ConsoleWriter, DocumentElement, Error, FileWriter, ReportSink,
};

#[test]
fn test_json_elements_to_report() {
    let input = r#"[
        {"type": "Title", "text": "Report"},
        {"type": "NarrativeText", "text": "Hello world"}
    ]"#;

    let elements = elements_from_str(input).unwrap();
    let report = format_elements(&elements).unwrap();

    assert_eq!(report, "Title | Report\nNarrativeText | Hello world");
}

#[test]
fn test_missing_text_produces_no_report() {
    let input = r#"[
        {"type": "Title", "text": "Report"},
        {"type": "NarrativeText", "text": "Hello"},
        {"type": "ListItem"}
    ]"#;

    let elements = elements_from_str(input).unwrap();
    let result = format_elements(&elements);

    assert!(matches!(
        result,
        Err(Error::MissingField {
            index: 2,
            field: "text"
        })
    ));
}

#[test]
fn test_permutations_produce_distinct_reports() {
    let a = DocumentElement::new("Title", "A");
    let b = DocumentElement::new("NarrativeText", "B");
    let c = DocumentElement::new("ListItem", "C");

    let permutations = [
        vec![&a, &b, &c],
        vec![&a, &c, &b],
        vec![&b, &a, &c],
        vec![&b, &c, &a],
        vec![&c, &a, &b],
        vec![&c, &b, &a],
    ];

    let reports: Vec<String> = permutations
        .iter()
        .map(|p| format_elements(p.iter().copied()).unwrap())
        .collect();

    for (i, left) in reports.iter().enumerate() {
        for (j, right) in reports.iter().enumerate() {
            assert_eq!(i == j, left == right, "permutations {} and {}", i, j);
        }
    }
}

#[test]
fn test_console_and_file_writers_share_one_report() {
    let elements = vec![
        DocumentElement::new("Title", "Report"),
        DocumentElement::new("NarrativeText", "Hello world"),
    ];
    let report = format_elements(&elements).unwrap();

    let mut console = ConsoleWriter::new(Vec::new());
    console.write_report(&report).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    let mut file = FileWriter::new(&path);
    file.write_report(&report).unwrap();

    let printed = String::from_utf8(console.into_inner()).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();

    assert_eq!(printed, format!("{}\n", written));
}

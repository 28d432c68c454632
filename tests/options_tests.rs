use royalbit_sheets::{DuplicateHeaders, ErrorKind, SheetOptions, Worksheet};
use std::fs;
use tempfile::NamedTempFile;

#[test]
fn test_options_file_changes_cleaning() {
    let yaml_content = r#"
summary_pattern: "(?i)^(grand )?total$"
skip_blank_columns: false
"#;
    let temp_file = NamedTempFile::new().unwrap();
    fs::write(temp_file.path(), yaml_content).unwrap();
    let options = SheetOptions::from_path(temp_file.path()).unwrap();

    let sheet = Worksheet::with_options(
        vec![
            vec!["Item", "", "Qty"],
            vec!["Pens", "", "3"],
            vec!["subtotal", "", "3"],
            vec!["Grand Total", "", "3"],
        ],
        &options,
    )
    .unwrap();

    assert_eq!(sheet.headers(), vec!["Item", "", "Qty"]);
    assert_eq!(sheet.row_count(), 2);
    assert_eq!(sheet.row(2).unwrap(), vec!["subtotal", "", "3"]);
    assert_eq!(sheet.options(), &options);
}

#[test]
fn test_reject_duplicates_from_yaml() {
    let options = SheetOptions::from_yaml_str("duplicate_headers: reject").unwrap();
    assert_eq!(options.duplicate_headers, DuplicateHeaders::Reject);

    let err = Worksheet::with_options(vec![vec!["A", "A"], vec!["1", "2"]], &options).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Usage);
}

#[test]
fn test_unknown_duplicate_policy_is_config_error() {
    let err = SheetOptions::from_yaml_str("duplicate_headers: merge").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
}

#[test]
fn test_bad_pattern_fails_construction() {
    let options = SheetOptions {
        summary_pattern: "[".to_string(),
        ..SheetOptions::default()
    };
    let err = Worksheet::with_options(vec![vec!["A"]], &options).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
}

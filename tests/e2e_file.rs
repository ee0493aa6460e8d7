//! End-to-end file import/export.

use csv_codec::{export_file, export_file_with, import_file, CodecError, ExportOptions, Record};
use std::path::PathBuf;
use tempfile::TempDir;

fn record(fields: &[&str]) -> Record {
    fields.iter().map(|f| f.to_string()).collect()
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init();
}

#[test]
fn test_import_sample_file() {
    init_tracing();

    let table = import_file(fixture("sample.csv")).unwrap();

    let expected = vec![
        record(&["Message", "Str1", "Str2"]),
        record(&[
            "single line with comma and double quotes",
            "\"hello, World\"",
            "",
        ]),
        record(&["single line with comma", "hello, world", ""]),
        record(&["two columns: first ending with comma", "\"hello, ", "world\""]),
        record(&["two columns: second starting with comma", "\"hello", ", world\""]),
        record(&["two Columns", "\"hello", "world\""]),
        record(&["single double quote in the middle", "hello \" world", ""]),
        record(&["single double quote", "\"", ""]),
        record(&["", "", ""]),
    ];
    assert_eq!(table, expected);
}

#[test]
fn test_sample_file_survives_export() {
    init_tracing();

    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("copy.csv");
    let table = import_file(fixture("sample.csv")).unwrap();

    export_file(table.clone(), &path, &ExportOptions::default()).unwrap();

    assert_eq!(import_file(&path).unwrap(), table);
}

#[test]
fn test_export_with_projection_and_options_from_toml() {
    init_tracing();

    struct User {
        name: String,
        age: u32,
    }

    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("users.csv");
    std::fs::write(&path, "stale").unwrap();

    let options = ExportOptions::from_toml_str(
        r#"
        overwrite = true
        line_terminator = "crlf"
        "#,
    )
    .unwrap();
    let users = vec![
        User {
            name: "Doe, Jane".to_string(),
            age: 41,
        },
        User {
            name: "Bob".to_string(),
            age: 7,
        },
    ];

    export_file_with(
        users,
        &path,
        |u: &User| csv_codec::escape_record([u.name.clone(), u.age.to_string()]),
        &options,
    )
    .unwrap();

    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "\"Doe, Jane\",41\r\nBob,7"
    );
    assert_eq!(
        import_file(&path).unwrap(),
        vec![record(&["Doe, Jane", "41"]), record(&["Bob", "7"])]
    );
}

#[test]
fn test_export_to_blank_path_fails_before_io() {
    let err = export_file(vec![record(&["a"])], " ", &ExportOptions::default()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<CodecError>(),
        Some(CodecError::InvalidArgument(_))
    ));
}

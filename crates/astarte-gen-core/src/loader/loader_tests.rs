#![allow(non_snake_case)]

use super::*;
use tempfile::TempDir;

fn schema(name: &str) -> String {
    format!(
        r#"{{
    "interface_name": "{name}",
    "version_major": 1,
    "version_minor": 0,
    "type": "datastream",
    "ownership": "device",
    "mappings": [{{ "endpoint": "/value", "type": "double", "reliability": 0 }}]
}}"#
    )
}

fn write(dir: &TempDir, file: &str, content: &str) -> PathBuf {
    let path = dir.path().join(file);
    fs::write(&path, content).unwrap();
    path
}

// parse_interface tests

#[test]
fn parse_interface___valid_document___returns_interface() {
    let interface = parse_interface(&schema("org.Test"), Path::new("t.json")).unwrap();

    assert_eq!(interface.name, "org.Test");
    assert_eq!(interface.mappings.len(), 1);
}

#[test]
fn parse_interface___malformed_json___returns_parse_error() {
    let result = parse_interface("{ \"interface_name\": ", Path::new("broken.json"));

    assert!(matches!(result, Err(GenError::Parse { ref path, .. }) if path == Path::new("broken.json")));
}

#[test]
fn parse_interface___not_an_object___returns_parse_error() {
    let result = parse_interface("[1, 2, 3]", Path::new("array.json"));

    assert!(matches!(result, Err(GenError::Parse { .. })));
}

#[test]
fn parse_interface___missing_field___returns_schema_error() {
    let result = parse_interface(r#"{ "version_major": 1 }"#, Path::new("partial.json"));

    assert!(matches!(result, Err(GenError::Schema { ref location, .. }) if location == "partial.json"));
}

// schema_files tests

#[test]
fn schema_files___filters_by_extension_and_sorts() {
    let dir = TempDir::new().unwrap();
    write(&dir, "b.json", "{}");
    write(&dir, "a.json", "{}");
    write(&dir, "notes.txt", "ignored");
    write(&dir, "c.json.bak", "ignored");
    fs::create_dir(dir.path().join("nested.json")).unwrap();

    let files = schema_files(dir.path(), "json").unwrap();
    let names: Vec<String> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();

    assert_eq!(names, ["a.json", "b.json"]);
}

#[test]
fn schema_files___missing_directory___returns_io_error() {
    let result = schema_files(Path::new("/nonexistent/interfaces"), "json");

    assert!(matches!(result, Err(GenError::Io { .. })));
}

// load_directory tests

#[test]
fn load_directory___orders_by_file_name() {
    let dir = TempDir::new().unwrap();
    write(&dir, "z.json", &schema("org.First"));
    write(&dir, "a.json", &schema("org.Second"));

    let loaded = load_directory(dir.path(), "json").unwrap();
    let names: Vec<&str> = loaded.iter().map(|l| l.interface.name.as_str()).collect();

    assert_eq!(names, ["org.Second", "org.First"]);
}

#[test]
fn load_directory___empty_directory___returns_nothing() {
    let dir = TempDir::new().unwrap();

    let loaded = load_directory(dir.path(), "json").unwrap();

    assert!(loaded.is_empty());
}

#[test]
fn load_directory___invalid_file___fails_whole_run() {
    let dir = TempDir::new().unwrap();
    write(&dir, "a.json", &schema("org.Good"));
    write(&dir, "b.json", "not json");

    let result = load_directory(dir.path(), "json");

    assert!(matches!(result, Err(GenError::Parse { .. })));
}

#[test]
fn load_directory___duplicate_name___returns_duplicate_name_error() {
    let dir = TempDir::new().unwrap();
    write(&dir, "a.json", &schema("org.Same"));
    write(&dir, "b.json", &schema("org.Same"));

    let err = load_directory(dir.path(), "json").unwrap_err();

    match err {
        GenError::DuplicateName {
            name,
            first,
            second,
        } => {
            assert_eq!(name, "org.Same");
            assert!(first.ends_with("a.json"));
            assert!(second.ends_with("b.json"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn load_directory___colliding_symbols___returns_duplicate_symbol_error() {
    let dir = TempDir::new().unwrap();
    write(&dir, "a.json", &schema("org.my.Test"));
    write(&dir, "b.json", &schema("org.my_Test"));

    let err = load_directory(dir.path(), "json").unwrap_err();

    assert!(matches!(
        err,
        GenError::DuplicateSymbol { ref symbol, .. } if symbol == "org_my_Test"
    ));
}

#[test]
fn load_directory___custom_extension___reads_only_matching_files() {
    let dir = TempDir::new().unwrap();
    write(&dir, "a.json", "not read");
    write(&dir, "b.interface", &schema("org.Custom"));

    let loaded = load_directory(dir.path(), "interface").unwrap();

    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].interface.name, "org.Custom");
}

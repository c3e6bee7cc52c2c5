#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test]
fn GenError___schema___displays_location_and_message() {
    let err = GenError::schema("org.Test", "missing required field `type`");

    let display = err.to_string();

    assert_eq!(
        display,
        "schema error in org.Test: missing required field `type`"
    );
}

#[test]
fn GenError___lookup___displays_code_and_endpoint() {
    let err = GenError::Lookup {
        interface: "org.Test".into(),
        endpoint: "/x".into(),
        code: 7,
    };

    let display = err.to_string();

    assert!(display.contains("code 7"));
    assert!(display.contains("/x"));
    assert!(display.contains("org.Test"));
}

#[test]
fn GenError___duplicate_name___displays_both_files() {
    let err = GenError::DuplicateName {
        name: "org.Test".into(),
        first: PathBuf::from("a.json"),
        second: PathBuf::from("b.json"),
    };

    let display = err.to_string();

    assert!(display.contains("a.json"));
    assert!(display.contains("b.json"));
}

#[test]
fn GenError___io___keeps_source() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory");

    let err = GenError::io("/missing", io_err);

    assert!(std::error::Error::source(&err).is_some());
    assert!(err.to_string().contains("/missing"));
}

#[test]
fn GenError___parse___wraps_serde_error() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();

    let err = GenError::Parse {
        path: PathBuf::from("broken.json"),
        source: json_err,
    };

    assert!(err.to_string().starts_with("failed to parse broken.json"));
}

#[test_case(GenError::io("p", std::io::Error::other("x")), 1 ; "io")]
#[test_case(GenError::schema("l", "m"), 3 ; "schema")]
#[test_case(GenError::Lookup { interface: "i".into(), endpoint: "/e".into(), code: 3 }, 4 ; "lookup")]
#[test_case(GenError::DuplicateName { name: "n".into(), first: "a".into(), second: "b".into() }, 5 ; "duplicate name")]
#[test_case(GenError::DuplicateSymbol { symbol: "a_b".into(), first: "a.b".into(), second: "a_b".into() }, 6 ; "duplicate symbol")]
#[test_case(GenError::Config("c".into()), 7 ; "config")]
#[test_case(GenError::Stale { path: "h".into() }, 8 ; "stale")]
fn GenError___variant___maps_to_code(error: GenError, expected: u32) {
    assert_eq!(error.error_code(), expected);
}

use assert_fs::prelude::*;
use dsc_fs::{ConfigStore, Error};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq)]
struct TestConfig {
    name: String,
    count: i32,
}

#[rstest]
#[case("config.toml", "name = \"test\"\ncount = 42\n")]
#[case("config.json", r#"{"name": "test", "count": 42}"#)]
#[case("config.yaml", "name: test\ncount: 42\n")]
#[case("config.yml", "name: test\ncount: 42\n")]
#[case("CONFIG.TOML", "name = \"test\"\ncount = 42\n")]
fn test_load_by_extension(#[case] file_name: &str, #[case] content: &str) {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child(file_name);
    file.write_str(content).unwrap();

    let config: TestConfig = ConfigStore::new().load(file.path()).unwrap();

    assert_eq!(
        config,
        TestConfig {
            name: "test".into(),
            count: 42
        }
    );
}

#[test]
fn test_load_unsupported_extension() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("config.ini");
    file.write_str("name = test").unwrap();

    let result: Result<TestConfig, _> = ConfigStore::new().load(file.path());

    match result {
        Err(Error::UnsupportedFormat { extension }) => assert_eq!(extension, "ini"),
        other => panic!("expected UnsupportedFormat, got {:?}", other),
    }
}

#[test]
fn test_load_invalid_toml_reports_format() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("config.toml");
    file.write_str("name = ").unwrap();

    let result: Result<TestConfig, _> = ConfigStore::new().load(file.path());

    match result {
        Err(Error::ConfigParse { format, .. }) => assert_eq!(format, "TOML"),
        other => panic!("expected ConfigParse, got {:?}", other),
    }
}

#[test]
fn test_load_missing_file() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("absent.toml");
    file.assert(predicates::path::missing());

    let result: Result<TestConfig, _> = ConfigStore::new().load(file.path());

    assert!(matches!(result, Err(Error::SourceUnreadable { .. })));
}

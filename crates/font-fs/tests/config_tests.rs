use font_fs::{ConfigStore, Error, NormalizedPath};
use rstest::rstest;
use serde::Deserialize;
use std::fs;
use tempfile::TempDir;

#[derive(Debug, Deserialize, PartialEq)]
struct TestConfig {
    install_path: String,
    port: u16,
}

#[rstest]
#[case("config.toml", "install_path = \"/srv/app\"\nport = 8001\n")]
#[case("config.json", r#"{"install_path": "/srv/app", "port": 8001}"#)]
#[case(
    "config.jsonc",
    "{\n  // where the app lives\n  \"install_path\": \"/srv/app\",\n  /* listen */ \"port\": 8001\n}"
)]
#[case("config.yaml", "install_path: /srv/app\nport: 8001\n")]
#[case("config.yml", "install_path: /srv/app\nport: 8001\n")]
fn test_load_by_extension(#[case] file_name: &str, #[case] content: &str) {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join(file_name);
    fs::write(&file_path, content).unwrap();

    let config: TestConfig = ConfigStore::new()
        .load(&NormalizedPath::new(&file_path))
        .unwrap();

    assert_eq!(
        config,
        TestConfig {
            install_path: "/srv/app".into(),
            port: 8001
        }
    );
}

#[test]
fn test_load_unsupported_extension() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("config.ini");
    fs::write(&file_path, "install_path=/srv").unwrap();

    let result: Result<TestConfig, _> = ConfigStore::new().load(&NormalizedPath::new(&file_path));
    assert!(matches!(result, Err(Error::UnsupportedFormat { .. })));
}

#[test]
fn test_load_invalid_content_reports_format() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("config.toml");
    fs::write(&file_path, "install_path = ").unwrap();

    let result: Result<TestConfig, _> = ConfigStore::new().load(&NormalizedPath::new(&file_path));
    match result {
        Err(Error::ConfigParse { format, .. }) => assert_eq!(format, "TOML"),
        other => panic!("Expected ConfigParse, got {:?}", other),
    }
}

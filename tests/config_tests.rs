// SPDX-License-Identifier: MPL-2.0

//! Integration tests for configuration module

use codelens::Config;

#[test]
fn test_config_default() {
    let config = Config::default();

    assert!(
        config.close_on_launch,
        "Scanner should close after launch by default"
    );
    assert_eq!(config.scan_max_dimension, 640);
}

#[test]
fn test_config_default_hint_schemes() {
    let config = Config::default();
    assert!(
        config.wants_browsable_hint("exp"),
        "exp deep links should get the browsable hint by default"
    );
}

#[test]
fn test_config_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    let mut config = Config::default();
    config.close_on_launch = false;
    config.browsable_hint_schemes.push("myapp".to_string());

    config.save_to(&path).unwrap();
    let loaded = Config::load_from(&path).unwrap();

    assert_eq!(loaded, config);
}

#[test]
fn test_config_ignores_unknown_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    // A config written by a newer version with extra fields still loads
    std::fs::write(
        &path,
        r#"{"close_on_launch": false, "future_option": 42}"#,
    )
    .unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert!(!loaded.close_on_launch);
    assert_eq!(loaded.scan_max_dimension, 640, "Missing fields get defaults");
}

#[test]
fn test_config_load_missing_file_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.json");
    assert!(Config::load_from(&path).is_err());
}

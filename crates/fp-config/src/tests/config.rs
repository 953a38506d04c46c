use crate::{Config, LogLevel};

use std::fs;

use serial_test::serial;

fn clear_env() {
    // Safety: tests are serialized, no concurrent env access.
    unsafe {
        std::env::remove_var("FP_CONFIG_DIR");
        std::env::remove_var("FP_API_URL");
        std::env::remove_var("FP_DATA_DIR");
        std::env::remove_var("FP_LOG_LEVEL");
    }
}

#[test]
#[serial]
fn test_defaults_when_no_config_file() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    unsafe {
        std::env::set_var("FP_CONFIG_DIR", dir.path());
    }

    let config = Config::load().unwrap();

    assert_eq!(config.api.base_url, "http://127.0.0.1:8000");
    assert_eq!(config.logging.level, LogLevel::Info);
    assert!(config.storage.export_dir().ends_with("."));
    clear_env();
}

#[test]
#[serial]
fn test_load_from_toml() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        r#"
[api]
base_url = "https://portal.example.com"

[storage]
data_dir = "/tmp/fp-test-data"

[logging]
level = "debug"
colored = false
"#,
    )
    .unwrap();
    unsafe {
        std::env::set_var("FP_CONFIG_DIR", dir.path());
    }

    let config = Config::load().unwrap();

    assert_eq!(config.api.base_url, "https://portal.example.com");
    assert_eq!(config.logging.level, LogLevel::Debug);
    assert!(!config.logging.colored);
    assert_eq!(
        config.identity_path().unwrap(),
        std::path::Path::new("/tmp/fp-test-data/identity.json")
    );
    clear_env();
}

#[test]
#[serial]
fn test_env_overrides_win_over_toml() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        r#"
[api]
base_url = "https://from-file.example.com"
"#,
    )
    .unwrap();
    unsafe {
        std::env::set_var("FP_CONFIG_DIR", dir.path());
        std::env::set_var("FP_API_URL", "https://from-env.example.com");
        std::env::set_var("FP_LOG_LEVEL", "trace");
    }

    let config = Config::load().unwrap();

    assert_eq!(config.api.base_url, "https://from-env.example.com");
    assert_eq!(config.logging.level, LogLevel::Trace);
    clear_env();
}

#[test]
#[serial]
fn test_validate_rejects_bad_base_url() {
    clear_env();
    let config = Config {
        api: crate::ApiConfig {
            base_url: "portal.example.com".to_string(),
        },
        ..Default::default()
    };

    assert!(config.validate().is_err());
}

#[test]
#[serial]
fn test_malformed_toml_is_an_error_not_a_panic() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "[api\nbase_url = ").unwrap();
    unsafe {
        std::env::set_var("FP_CONFIG_DIR", dir.path());
    }

    assert!(Config::load().is_err());
    clear_env();
}

//! Tests for the environment registry and its TOML loading.

use std::fs;

use ssrpack_config::{ConfigError, EnvironmentConfig, EnvironmentRegistry};
use tempfile::TempDir;

#[test]
fn empty_registry_knows_nothing() {
    let registry = EnvironmentRegistry::new();
    assert!(registry.is_empty());
    assert!(registry.get("dev").is_err());
}

#[test]
fn registration_order_is_preserved() {
    let mut registry = EnvironmentRegistry::new();
    for name in ["zeta", "alpha", "mid"] {
        registry.register(
            name,
            EnvironmentConfig {
                public_path: "/".to_string(),
            },
        );
    }
    let names: Vec<&str> = registry.names().collect();
    assert_eq!(names, ["zeta", "alpha", "mid"]);
}

#[test]
fn unknown_environment_error_is_descriptive() {
    let registry = EnvironmentRegistry::builtin();
    let err = registry.get("qa").unwrap_err();
    assert!(matches!(err, ConfigError::UnknownEnvironment { .. }));
    assert_eq!(
        err.to_string(),
        "unknown environment \"qa\" (known environments: dev, staging, production)"
    );
}

#[test]
fn loads_registry_from_toml_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("environments.toml");
    fs::write(
        &path,
        r#"
[dev]
public_path = "/"

[staging]
public_path = "https://staging.example.com/build/"

[production]
public_path = "https://cdn.example.com/build"
"#,
    )
    .unwrap();

    let registry = EnvironmentRegistry::from_toml_file(&path).unwrap();
    assert_eq!(registry.len(), 3);
    assert_eq!(
        registry.get("staging").unwrap().public_path,
        "https://staging.example.com/build/"
    );
}

#[test]
fn missing_registry_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let err = EnvironmentRegistry::from_toml_file(dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn registry_missing_public_path_is_rejected() {
    let err = EnvironmentRegistry::from_toml_str("[dev]\nname = \"dev\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidRegistry(_)));
}

#[test]
fn registry_serializes_transparently() {
    let registry = EnvironmentRegistry::builtin();
    let value = serde_json::to_value(&registry).unwrap();
    assert_eq!(value["dev"]["public_path"], "/");
}

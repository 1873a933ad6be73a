//! Unit tests for configuration resolution and graceful degradation
//!
//! Covers:
//! - Missing TOML files fall back to compiled defaults
//! - Resolution priority: CLI → ENV → platform directory
//! - Malformed TOML is reported, not ignored
//! - SYNCOMP_LOG_LEVEL overrides the file
//!
//! Tests that manipulate SYNCOMP_CONFIG or SYNCOMP_LOG_LEVEL are marked
//! #[serial] so they never race on the process environment.

use serial_test::serial;
use std::env;
use std::fs;
use std::path::PathBuf;
use syncomp_common::config::{
    load_toml_config, ConfigResolver, ConfigSource, TomlConfig, CONFIG_ENV_VAR, LOG_LEVEL_ENV_VAR,
};
use syncomp_common::Error;
use tempfile::TempDir;

fn write_config(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
#[serial]
fn test_cli_path_wins_over_env() {
    let dir = TempDir::new().unwrap();
    let cli = write_config(&dir, "cli.toml", "[logging]\nlevel = \"warn\"\n");
    let envp = write_config(&dir, "env.toml", "[logging]\nlevel = \"trace\"\n");
    env::set_var(CONFIG_ENV_VAR, &envp);
    env::remove_var(LOG_LEVEL_ENV_VAR);

    let resolver = ConfigResolver::new(Some(cli.clone()));
    assert_eq!(
        resolver.config_path(),
        Some((cli, ConfigSource::CommandLine))
    );
    assert_eq!(resolver.load().unwrap().logging.level, "warn");

    env::remove_var(CONFIG_ENV_VAR);
}

#[test]
#[serial]
fn test_env_path_used_without_cli() {
    let dir = TempDir::new().unwrap();
    let envp = write_config(
        &dir,
        "env.toml",
        "[session]\ntext_excerpt_chars = 64\n",
    );
    env::set_var(CONFIG_ENV_VAR, &envp);
    env::remove_var(LOG_LEVEL_ENV_VAR);

    let resolver = ConfigResolver::new(None);
    assert_eq!(
        resolver.config_path(),
        Some((envp, ConfigSource::Environment))
    );
    let config = resolver.load().unwrap();
    assert_eq!(config.session.text_excerpt_chars, 64);
    assert_eq!(config.logging.level, "info");

    env::remove_var(CONFIG_ENV_VAR);
}

#[test]
#[serial]
fn test_missing_explicit_file_falls_back_to_defaults() {
    env::remove_var(CONFIG_ENV_VAR);
    env::remove_var(LOG_LEVEL_ENV_VAR);
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");

    let config = ConfigResolver::new(Some(missing)).load().unwrap();
    assert_eq!(config, TomlConfig::default());
}

#[test]
#[serial]
fn test_malformed_file_is_config_error() {
    env::remove_var(LOG_LEVEL_ENV_VAR);
    let dir = TempDir::new().unwrap();
    let bad = write_config(&dir, "bad.toml", "[logging\nlevel = ");

    let result = ConfigResolver::new(Some(bad)).load();
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
#[serial]
fn test_invalid_level_in_file_is_rejected() {
    env::remove_var(LOG_LEVEL_ENV_VAR);
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "loud.toml", "[logging]\nlevel = \"shouty\"\n");

    let result = ConfigResolver::new(Some(path)).load();
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
#[serial]
fn test_log_level_env_override() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "cfg.toml", "[logging]\nlevel = \"error\"\n");
    env::set_var(LOG_LEVEL_ENV_VAR, "DEBUG");

    let config = ConfigResolver::new(Some(path)).load().unwrap();
    assert_eq!(config.logging.level, "debug");

    env::remove_var(LOG_LEVEL_ENV_VAR);
}

#[test]
fn test_load_toml_config_full_schema() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "full.toml",
        r#"
[logging]
level = "trace"
file = "/var/log/syncomp.log"

[session]
text_excerpt_chars = 120
library_path = "/srv/syncomp/library.json"
"#,
    );

    let config = load_toml_config(&path).unwrap();
    assert_eq!(config.logging.level, "trace");
    assert_eq!(
        config.logging.file,
        Some(PathBuf::from("/var/log/syncomp.log"))
    );
    assert_eq!(config.session.text_excerpt_chars, 120);
    assert_eq!(
        config.library_path(),
        PathBuf::from("/srv/syncomp/library.json")
    );
}

#[test]
fn test_load_toml_config_missing_file_is_error() {
    let dir = TempDir::new().unwrap();
    let result = load_toml_config(&dir.path().join("absent.toml"));
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
#[serial]
fn test_uppercase_level_in_file_is_accepted() {
    env::remove_var(CONFIG_ENV_VAR);
    env::remove_var(LOG_LEVEL_ENV_VAR);
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "upper.toml", "[logging]\nlevel = \"INFO\"\n");

    let config = ConfigResolver::new(Some(path.clone())).load().unwrap();
    assert_eq!(config.logging.level, "info");
    assert_eq!(load_toml_config(&path).unwrap().logging.level, "info");
}

use std::fs;
use tempfile::TempDir;
use twofy::config::{Config, RunConfig};
use twofy::output::OutputFormat;

#[test]
fn test_config_defaults() {
    let config = Config::default();

    assert!(!config.debug);
    assert!(!config.pretty);
}

#[test]
fn test_config_serialization() {
    let config = Config {
        debug: true,
        pretty: true,
    };

    let toml_str = toml::to_string(&config).expect("Failed to serialize config");
    let deserialized: Config = toml::from_str(&toml_str).expect("Failed to deserialize");

    assert_eq!(config, deserialized);
}

#[test]
fn test_partial_config_uses_defaults() {
    let config: Config = toml::from_str("debug = true").expect("Failed to deserialize config");

    assert!(config.debug);
    assert!(!config.pretty);
}

#[test]
fn test_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "pretty = true\n").unwrap();

    let config = Config::load_from(&path);
    assert!(config.pretty);
    assert!(!config.debug);
}

#[test]
fn test_load_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml"));
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_invalid_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "pretty = \"very\"\n").unwrap();

    assert_eq!(Config::load_from(&path), Config::default());
}

#[test]
fn test_config_path_location() {
    if let Some(path) = Config::config_path() {
        assert!(path.ends_with(".config/twofy/config.toml"));
    }
}

#[test]
fn test_run_config_defaults() {
    let run = RunConfig::new(OutputFormat::Text);

    assert_eq!(run.input, None);
    assert_eq!(run.output, None);
    assert!(run.query.is_empty());
    assert_eq!(run.format, OutputFormat::Text);
    assert!(!run.pretty);
}

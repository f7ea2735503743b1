//! Tests for the TOML configuration surface.

use logcast::{Config, Error, Publisher, Severity};
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn missing_file_yields_defaults() {
    let tmp = TempDir::new().unwrap();
    let config = Config::load_from(&tmp.path().join("absent.toml")).unwrap();

    assert_eq!(config.publisher.delay(), Duration::from_millis(10));
    assert!(config.console.enabled);
    assert!(config.console.colors);
    assert!(!config.file.enabled);
    assert!(!config.json.enabled);
}

#[test]
fn empty_file_yields_defaults() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config.toml");
    fs::write(&path, "").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.publisher.delay_ms, 10);
}

#[test]
fn sections_are_parsed() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config.toml");
    fs::write(
        &path,
        r#"
[publisher]
delay_ms = 50
severities = ["debug", "warning"]

[console]
enabled = false

[file]
enabled = true
path = "~/logs/app.log"
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.publisher.delay(), Duration::from_millis(50));
    assert!(!config.console.enabled);
    assert!(config.file.enabled);
    assert_eq!(config.file.path.as_deref(), Some("~/logs/app.log"));

    let mask = config.publisher.parse_severities();
    assert!(mask.contains(Severity::Debug));
    assert!(mask.contains(Severity::Warning));
    assert!(!mask.contains(Severity::Info));
}

#[test]
fn empty_severity_list_means_all() {
    let config = Config::default();
    for severity in Severity::all() {
        assert!(config.publisher.parse_severities().contains(severity));
    }
}

#[test]
fn unknown_severity_names_are_skipped() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config.toml");
    fs::write(
        &path,
        r#"
[publisher]
severities = ["debug", "critical"]
"#,
    )
    .unwrap();

    let mask = Config::load_from(&path).unwrap().publisher.parse_severities();
    assert!(mask.contains(Severity::Debug));
    assert!(!mask.contains(Severity::Info));
    assert!(!mask.contains(Severity::Error));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config.toml");
    fs::write(&path, "[publisher\ndelay_ms = ").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, Error::ConfigParse(_)));
}

#[test]
fn from_config_wires_enabled_sinks() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config.toml");
    fs::write(
        &path,
        r#"
[publisher]
delay_ms = 42
severities = ["error", "fatal"]

[console]
enabled = true
colors = false
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    let publisher = Publisher::from_config(&config);

    assert_eq!(publisher.subscriber_count(), 1);
    assert_eq!(publisher.publish_delay(), Duration::from_millis(42));
    assert!(publisher.severities().contains(Severity::Error));
    assert!(!publisher.severities().contains(Severity::Debug));
}

#[test]
fn from_config_with_everything_disabled_has_no_subscribers() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config.toml");
    fs::write(&path, "[console]\nenabled = false\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    let publisher = Publisher::from_config(&config);
    assert_eq!(publisher.subscriber_count(), 0);
}

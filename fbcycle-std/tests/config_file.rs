//! Loading run settings from JSON files on disk.

use fbcycle_std::{Config, ConfigError, Error};
use std::{fs, path::PathBuf, time::Duration};

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("fbcycle-{}-{name}", std::process::id()));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn loads_and_merges_with_defaults() {
    let path = temp_file(
        "partial.json",
        r#"{ "device": "/dev/fb1", "interval_ms": 100, "frames": 30 }"#,
    );

    let config = Config::from_json_file(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(config.device, PathBuf::from("/dev/fb1"));
    assert_eq!(config.interval(), Duration::from_millis(100));
    assert_eq!(config.frames, Some(30));
    assert_eq!(config.width, 800);
    assert_eq!(config.height, 600);
}

#[test]
fn malformed_json_names_the_file() {
    let path = temp_file("broken.json", "{ width: ");

    let err = Config::from_json_file(&path).unwrap_err();
    fs::remove_file(&path).unwrap();

    assert!(matches!(
        &err,
        Error::Config {
            source: ConfigError::Json(_),
            ..
        }
    ));
    assert!(err.to_string().contains("broken.json"));
}

#[test]
fn missing_file_is_an_io_error() {
    let path = std::env::temp_dir().join("fbcycle-does-not-exist.json");
    assert!(matches!(
        Config::from_json_file(&path),
        Err(Error::Config {
            source: ConfigError::Io(_),
            ..
        })
    ));
}

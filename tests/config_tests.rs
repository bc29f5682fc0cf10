//! Configuration loading from files

use std::io::Write;

use console_ext::{ConsoleColor, LogLevel, LoggerConfig};

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("console-ext-")
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_file_overrides_defaults() {
    let file = write_config(
        r#"
min_level = "warning"
output_format = "[{Level}] ({EventId}) {Message}"
include_event_id = true

[colors]
error = "dark_red"
"#,
    );

    let config = LoggerConfig::load_with_file(file.path().to_str()).unwrap();

    assert_eq!(config.min_level, LogLevel::Warning);
    assert_eq!(config.output_format, "[{Level}] ({EventId}) {Message}");
    assert!(config.include_event_id);
    assert_eq!(config.colors.error, ConsoleColor::DarkRed);
    // untouched keys keep their defaults
    assert_eq!(config.colors.warning, ConsoleColor::Yellow);
    assert!(config.include_timestamp);
}

#[test]
fn test_level_aliases_accepted_in_files() {
    let file = write_config("min_level = \"trace\"\nuse_colors = false\n");

    let config = LoggerConfig::load_with_file(file.path().to_str()).unwrap();

    assert_eq!(config.min_level, LogLevel::Trace);
    assert!(!config.use_colors);
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    assert!(LoggerConfig::load_with_file(missing.to_str()).is_err());
}

#[test]
fn test_unknown_level_in_file_is_an_error() {
    let file = write_config("min_level = \"loud\"\n");

    assert!(LoggerConfig::load_with_file(file.path().to_str()).is_err());
}

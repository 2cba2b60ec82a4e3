use std::path::Path;

use geneadate::config::Settings;
use geneadate::datatype::Calendar;
use geneadate::GeneadateError;

#[test]
fn defaults_without_a_file() {
    let settings = Settings::load(None).expect("settings");
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.calendar, Calendar::Gregorian);
    assert!(!settings.strict);
    assert_eq!(settings.log_filter, "info");
}

#[test]
fn file_overrides_defaults() {
    let path = std::env::temp_dir().join("test_geneadate_settings.toml");
    std::fs::write(&path, "calendar = \"julian\"\nstrict = true\n").unwrap();
    let settings = Settings::load(Some(path.as_path())).expect("settings");
    assert_eq!(settings.calendar, Calendar::Julian);
    assert!(settings.strict);
    // keys missing from the file keep their default
    assert_eq!(settings.log_filter, "info");
    // Clean up
    let _ = std::fs::remove_file(&path);
}

#[test]
fn missing_file_is_a_config_error() {
    let result = Settings::load(Some(Path::new("no_such_geneadate_settings.toml")));
    assert!(matches!(result, Err(GeneadateError::Config(_))));
}

#[test]
fn tracing_installs_once() {
    let settings = Settings {
        log_filter: "geneadate=debug".to_string(),
        ..Settings::default()
    };
    assert!(settings.init_tracing().is_ok());
    assert!(matches!(settings.init_tracing(), Err(GeneadateError::Config(_))));
}

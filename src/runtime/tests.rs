use super::logging::{init, log_path};
use crate::config::LogSettings;
use std::path::PathBuf;

#[test]
fn log_path_prefers_configured_file() {
    assert_eq!(
        log_path(Some("/tmp/custom.log"), Some(PathBuf::from("/tmp/default.log"))),
        Some(PathBuf::from("/tmp/custom.log"))
    );
    assert_eq!(
        log_path(None, Some(PathBuf::from("/tmp/default.log"))),
        Some(PathBuf::from("/tmp/default.log"))
    );
}

#[test]
fn log_path_is_unknown_without_file_or_default() {
    assert_eq!(log_path(None, None), None);
}

#[test]
fn unwritable_log_location_disables_logging_instead_of_failing() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "").unwrap();

    let settings = LogSettings {
        level: "info".to_string(),
        file: Some(blocker.join("sub").join("stetho.log").display().to_string()),
    };
    assert!(init(&settings, false).is_none());
}

use super::load::{default_config_path, default_log_path, resolve_config_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_stetho_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("STETHO_CONFIG_PATH", "/tmp/stetho-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/stetho-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("stetho")
            .join("config.toml")
    );
}

#[test]
fn default_paths_fall_back_to_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::remove("XDG_STATE_HOME");
    let _g3 = EnvGuard::set("HOME", "/tmp/home-dir");

    assert_eq!(
        default_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/home-dir/.config/stetho/config.toml")
    );
    assert_eq!(
        default_log_path().unwrap(),
        std::path::PathBuf::from("/tmp/home-dir/.local/state/stetho/stetho.log")
    );
}

#[test]
fn defaults_enable_repeat_and_have_no_timeout() {
    let s = Settings::default();
    assert!(s.playback.repeat);
    assert_eq!(s.server.timeout_secs, None);
    assert_eq!(s.server.script_name, "");
    assert!(s.validate().is_ok());
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("STETHO__PLAYBACK__REPEAT");

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[server]
url = "https://sounds.example.org"
script_name = "/cceraudio"
timeout_secs = 10

[playback]
repeat = false

[controls]
seek_step = 2.5

[ui]
header_text = "hello"
marquee_step_ms = 100

[log]
level = "debug"
file = "/tmp/stetho.log"
"#,
    )
    .unwrap();

    let s = Settings::load_from(Some(cfg_path)).unwrap();
    assert_eq!(s.server.url, "https://sounds.example.org");
    assert_eq!(s.server.script_name, "/cceraudio");
    assert_eq!(s.server.timeout_secs, Some(10));
    assert!(!s.playback.repeat);
    assert_eq!(s.controls.seek_step, 2.5);
    assert_eq!(s.ui.header_text, "hello");
    assert_eq!(s.ui.marquee_step_ms, 100);
    assert_eq!(s.log.level, "debug");
    assert_eq!(s.log.file.as_deref(), Some("/tmp/stetho.log"));
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[playback]
repeat = true
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("STETHO_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("STETHO__PLAYBACK__REPEAT", "false");

    let s = Settings::load().unwrap();
    assert!(!s.playback.repeat);
}

#[test]
fn validate_rejects_bad_values() {
    let mut s = Settings::default();
    s.controls.seek_step = 0.0;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.server.url = "  ".to_string();
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.ui.marquee_step_ms = 0;
    assert!(s.validate().is_err());
}

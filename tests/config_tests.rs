//! Configuration tests
//!
//! Settings are loaded from process environment, so these tests serialize
//! access to the shared env with a mutex

use factscope::Settings;
use std::env;
use std::io::Write;
use std::sync::Mutex;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Reset every variable the settings loader reads
fn clear_env() {
    for key in [
        "SERVER_HOST",
        "SERVER_PORT",
        "GEMINI_API_KEY",
        "GEMINI_KEY_FILE",
        "GEMINI_BASE_URL",
        "GEMINI_DEFAULT_MODEL",
        "REQUEST_TIMEOUT",
        "MAX_REQUEST_SIZE",
        "LOG_FORMAT",
    ] {
        env::remove_var(key);
    }
    env::set_var("RUST_LOG", "info");
    // make sure no stray key file on disk is picked up
    env::set_var("GEMINI_KEY_FILE", "/nonexistent/gemini.md");
}

#[test]
fn test_defaults() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();

    let settings = Settings::new().expect("Failed to load settings");
    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.server.port, 8090);
    assert_eq!(
        settings.gemini.base_url,
        "https://generativelanguage.googleapis.com"
    );
    assert_eq!(settings.gemini.default_model, "gemini-1.5-flash");
    assert_eq!(settings.gemini.timeout, 60);
    assert_eq!(settings.server.max_request_size, 10_485_760);
    assert!(!settings.has_api_key());
}

#[test]
fn test_api_key_from_env() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();
    env::set_var("GEMINI_API_KEY", "env-key-1234567890");

    let settings = Settings::new().expect("Failed to load settings");
    assert_eq!(settings.gemini.api_key.as_deref(), Some("env-key-1234567890"));
}

#[test]
fn test_api_key_file_takes_precedence_over_env() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();

    let mut key_file = tempfile::NamedTempFile::new().unwrap();
    writeln!(key_file, "file-key-1234567890").unwrap();
    key_file.flush().unwrap();

    env::set_var("GEMINI_KEY_FILE", key_file.path());
    env::set_var("GEMINI_API_KEY", "env-key-1234567890");

    let settings = Settings::new().expect("Failed to load settings");
    // file contents win, trimmed of the trailing newline
    assert_eq!(settings.gemini.api_key.as_deref(), Some("file-key-1234567890"));
}

#[test]
fn test_empty_key_file_falls_back_to_env() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();

    let key_file = tempfile::NamedTempFile::new().unwrap();
    env::set_var("GEMINI_KEY_FILE", key_file.path());
    env::set_var("GEMINI_API_KEY", "env-key-1234567890");

    let settings = Settings::new().expect("Failed to load settings");
    assert_eq!(settings.gemini.api_key.as_deref(), Some("env-key-1234567890"));
}

#[test]
fn test_server_overrides() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();
    env::set_var("SERVER_HOST", "127.0.0.1");
    env::set_var("SERVER_PORT", "9000");
    env::set_var("GEMINI_DEFAULT_MODEL", "gemini-1.5-pro");

    let settings = Settings::new().expect("Failed to load settings");
    assert_eq!(settings.server.host, "127.0.0.1");
    assert_eq!(settings.server.port, 9000);
    assert_eq!(settings.gemini.default_model, "gemini-1.5-pro");
}

#[test]
fn test_invalid_port_rejected() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();
    env::set_var("SERVER_PORT", "not-a-port");

    assert!(Settings::new().is_err());
}

#[test]
fn test_short_api_key_rejected() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();
    env::set_var("GEMINI_API_KEY", "short");

    assert!(Settings::new().is_err());
}

#[test]
fn test_invalid_log_format_rejected() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();
    env::set_var("LOG_FORMAT", "xml");

    assert!(Settings::new().is_err());
}

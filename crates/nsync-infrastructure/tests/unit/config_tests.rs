//! Configuration loading and validation tests

use nsync_domain::Error;
use nsync_infrastructure::config::{
    AppConfig, ConfigBuilder, ConfigLoader, LoggingConfig, RemoteConfig, SyncConfig,
};
use nsync_infrastructure::constants::{
    DEFAULT_LOG_LEVEL, DEFAULT_REFRESH_INTERVAL_SECS, DEFAULT_REMOTE_BASE_URL,
    DEFAULT_REMOTE_TIMEOUT_SECS,
};
use std::time::Duration;
use tempfile::TempDir;

/// Loader that ignores whatever `NSYNC__` variables the host has set
fn isolated_loader() -> ConfigLoader {
    ConfigLoader::new().with_env_prefix("NSYNC_TEST_UNSET")
}

#[test]
fn test_app_config_defaults() {
    let config = AppConfig::default();

    assert_eq!(config.remote.base_url, DEFAULT_REMOTE_BASE_URL);
    assert_eq!(config.remote.timeout(), Duration::from_secs(DEFAULT_REMOTE_TIMEOUT_SECS));
    assert!(config.remote.api_key.is_none());
    assert!(config.sync.auto_refresh);
    assert_eq!(
        config.sync.refresh_interval(),
        Duration::from_secs(DEFAULT_REFRESH_INTERVAL_SECS)
    );
    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
}

#[test]
fn test_missing_config_file_falls_back_to_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = isolated_loader()
        .with_config_path(temp_dir.path().join("absent.toml"))
        .load()
        .unwrap();

    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_toml_file_overrides_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("nsync.toml");
    std::fs::write(
        &config_path,
        r#"
[remote]
base_url = "https://api.example.com/v1"
api_key = "secret"

[sync]
refresh_interval_secs = 30
"#,
    )
    .unwrap();

    let loader = isolated_loader().with_config_path(&config_path);
    assert_eq!(loader.config_path(), Some(config_path.as_path()));
    let config = loader.load().unwrap();

    assert_eq!(config.remote.base_url, "https://api.example.com/v1");
    assert_eq!(config.remote.api_key.as_deref(), Some("secret"));
    assert_eq!(config.remote.timeout_secs, DEFAULT_REMOTE_TIMEOUT_SECS);
    assert_eq!(config.sync.refresh_interval_secs, 30);
    assert!(config.sync.auto_refresh);
    assert_eq!(config.logging, LoggingConfig::default());
}

#[test]
fn test_config_save_load() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("saved.toml");

    let original = ConfigBuilder::new()
        .with_base_url("https://notify.example.com")
        .with_sync(SyncConfig {
            auto_refresh: false,
            refresh_interval_secs: 120,
        })
        .build();

    let loader = isolated_loader();
    loader.save_to_file(&original, &config_path).unwrap();
    let loaded = isolated_loader()
        .with_config_path(&config_path)
        .load()
        .unwrap();

    assert_eq!(loaded, original);
}

#[test]
fn test_invalid_file_is_configuration_error() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("broken.toml");
    std::fs::write(&config_path, "[sync]\nrefresh_interval_secs = \"soon\"\n").unwrap();

    let result = isolated_loader().with_config_path(&config_path).load();

    assert!(matches!(result, Err(Error::Configuration { .. })));
}

#[test]
fn test_validation_rejects_bad_base_url() {
    let empty = ConfigBuilder::new().with_base_url("  ").build_validated();
    assert!(matches!(empty, Err(Error::Config { .. })));

    let wrong_scheme = ConfigBuilder::new()
        .with_base_url("ftp://example.com")
        .build_validated();
    assert!(matches!(wrong_scheme, Err(Error::Config { .. })));
}

#[test]
fn test_validation_rejects_zero_timeout() {
    let remote = RemoteConfig {
        timeout_secs: 0,
        ..RemoteConfig::default()
    };

    let result = ConfigBuilder::new().with_remote(remote).build_validated();

    assert!(matches!(result, Err(Error::Config { .. })));
}

#[test]
fn test_validation_refresh_interval_only_matters_with_auto_refresh() {
    let too_fast = SyncConfig {
        auto_refresh: true,
        refresh_interval_secs: 1,
    };
    assert!(ConfigBuilder::new().with_sync(too_fast).build_validated().is_err());

    let disabled = SyncConfig {
        auto_refresh: false,
        refresh_interval_secs: 1,
    };
    assert!(ConfigBuilder::new().with_sync(disabled).build_validated().is_ok());
}

#[test]
fn test_validation_rejects_unknown_log_level() {
    let logging = LoggingConfig {
        level: "loud".to_string(),
        ..LoggingConfig::default()
    };

    let result = ConfigBuilder::new().with_logging(logging).build_validated();

    assert!(matches!(result, Err(Error::Configuration { .. })));
}

#[test]
fn test_remote_http_client_config() {
    let remote = RemoteConfig {
        timeout_secs: 7,
        api_key: Some("token".to_string()),
        max_idle_per_host: 3,
        ..RemoteConfig::default()
    };

    let http = remote.http_client_config();

    assert_eq!(http.timeout, Duration::from_secs(7));
    assert_eq!(http.api_key.as_deref(), Some("token"));
    assert_eq!(http.max_idle_per_host, 3);
    assert!(http.user_agent.starts_with("nsync/"));
}

//! Tests for configuration system

use folio::Config;
use folio_contact::RelayKind;
use temp_dir::TempDir;

/// Drop variables that would override the files under test.
fn clear_folio_env() {
    let keys = std::env::vars()
        .map(|(key, _)| key)
        .filter(|key| {
            key.starts_with("FOLIO__") || key == "RELAY_ACCESS_KEY" || key == "CONFIG_PATH"
        })
        .collect::<Vec<_>>();

    for key in keys {
        unsafe { std::env::remove_var(key) };
    }
}

#[test]
fn test_config_loads_from_default_toml() {
    clear_folio_env();

    let config = Config::load(None).expect("Failed to load config");

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.relay.kind, RelayKind::Form);
    assert_eq!(config.relay.access_key, None);
    assert_eq!(config.logging.level, "info");
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_file_selects_relay() -> anyhow::Result<()> {
    clear_folio_env();

    let dir = TempDir::new()?;
    let path = dir.child("relay.toml");
    std::fs::write(
        &path,
        r#"
[server]
host = "0.0.0.0"
port = 8080

[relay]
kind = "json-api"
recipient = "me@example.com"
access_key = "file-key"

[logging]
format = "json"
"#,
    )?;

    let config = Config::load(Some(path.to_string_lossy().into_owned()))?;

    assert_eq!(config.server.port, 8080);
    assert_eq!(config.relay.kind, RelayKind::JsonApi);
    assert_eq!(config.relay.access_key(), Some("file-key"));
    assert_eq!(config.relay.endpoint(), "https://api.web3forms.com/submit");
    assert_eq!(config.logging.format, "json");
    assert_eq!(config.logging.level, "info");
    assert!(config.validate().is_ok());

    Ok(())
}

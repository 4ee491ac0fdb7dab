//! Tests for configuration parsing and validation.

use super::{AppConfig, ConfigError};
use crate::access::StatusChangeRule;
use rstest::rstest;

#[rstest]
fn minimal_file_fills_defaults() -> eyre::Result<()> {
    let config = AppConfig::from_toml_str("[auth]\njwt_secret = \"s3cret\"\n")?;

    eyre::ensure!(config.server.bind_address == "127.0.0.1:8000");
    eyre::ensure!(config.database.url.is_none());
    eyre::ensure!(config.auth.token_ttl_minutes == 60);
    eyre::ensure!(config.access.status_change == StatusChangeRule::AnyViewer);
    eyre::ensure!(!config.bootstrap.demo_data);
    eyre::ensure!(config.logging.level == "info");
    Ok(())
}

#[rstest]
fn status_change_rule_is_configurable() -> eyre::Result<()> {
    let config = AppConfig::from_toml_str(
        "[auth]\njwt_secret = \"s3cret\"\n[access]\nstatus_change = \"managers_only\"\n",
    )?;

    eyre::ensure!(config.access.status_change == StatusChangeRule::ManagersOnly);
    Ok(())
}

#[rstest]
#[case::missing_secret("[auth]\ntoken_ttl_minutes = 5\n")]
#[case::zero_ttl("[auth]\njwt_secret = \"x\"\ntoken_ttl_minutes = 0\n")]
#[case::half_admin("[auth]\njwt_secret = \"x\"\n[bootstrap]\nadmin_username = \"root\"\n")]
fn invalid_values_are_rejected(#[case] text: &str) {
    assert!(matches!(
        AppConfig::from_toml_str(text),
        Err(ConfigError::Invalid(_))
    ));
}

#[rstest]
fn unknown_status_rule_fails_to_load() {
    let result = AppConfig::from_toml_str(
        "[auth]\njwt_secret = \"x\"\n[access]\nstatus_change = \"everyone\"\n",
    );
    assert!(matches!(result, Err(ConfigError::Load(_))));
}

#[rstest]
fn debug_output_redacts_secrets() -> eyre::Result<()> {
    let config = AppConfig::from_toml_str(
        "[auth]\njwt_secret = \"hunter2\"\n[bootstrap]\nadmin_username = \"root\"\nadmin_password = \"pw-hunter3\"\n",
    )?;
    let rendered = format!("{config:?}");

    eyre::ensure!(!rendered.contains("hunter2"));
    eyre::ensure!(!rendered.contains("pw-hunter3"));
    Ok(())
}

//! Resolving which global settings the CLI runs with.

use std::path::{Path, PathBuf};

use commission::TargetSettings;
use tracing::info;

use crate::error::CliError;

/// Environment variable naming a settings JSON file.
pub const SETTINGS_ENV: &str = "LOGISALES_SETTINGS";

/// Where the active global settings came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsSource {
    Flag(PathBuf),
    Env(PathBuf),
    Builtin,
}

impl SettingsSource {
    /// `--settings` wins over the environment, which wins over the built-in
    /// configuration.
    pub fn pick(flag: Option<&Path>, env: Option<String>) -> Self {
        match (flag, env) {
            (Some(path), _) => SettingsSource::Flag(path.to_path_buf()),
            (None, Some(path)) if !path.is_empty() => SettingsSource::Env(PathBuf::from(path)),
            _ => SettingsSource::Builtin,
        }
    }

    pub fn load(&self) -> Result<TargetSettings, CliError> {
        let settings = match self {
            SettingsSource::Flag(path) | SettingsSource::Env(path) => {
                commission::load_settings(path)?
            }
            SettingsSource::Builtin => TargetSettings::default(),
        };
        info!(source = ?self, kind = %settings.commission.commission_type, "settings loaded");
        Ok(settings)
    }
}

/// Resolve and load the global settings for this run.
pub fn resolve_settings(flag: Option<&Path>) -> Result<TargetSettings, CliError> {
    SettingsSource::pick(flag, std::env::var(SETTINGS_ENV).ok()).load()
}

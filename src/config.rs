//! Configuration loading for embedding applications
//!
//! The store itself reads no config source of its own; embedders that keep
//! their settings in a TOML file can use this loader to produce the inputs
//! to `HtpasswdFile::open`.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

use crate::error::HtpasswdError;
use crate::store::HtpasswdFile;

/// Where the htpasswd file lives and how often to check it for changes.
#[derive(Debug, Deserialize, Clone)]
pub struct HtpasswdConfig {
    /// Path of the htpasswd formatted file.
    pub path: String,

    /// Seconds between reload checks. Zero (the default) disables
    /// auto-reload.
    #[serde(default)]
    pub check_interval_secs: u64,
}

impl HtpasswdConfig {
    /// Load configuration from `htpasswd.toml` with environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("htpasswd")
    }

    /// Load configuration from the named file (any extension the config
    /// crate understands), with `RAX_HTPASSWD_*` environment overrides.
    pub fn load_from(name: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name(name))
            .add_source(Environment::with_prefix("RAX_HTPASSWD"))
            .build()?;

        let config: HtpasswdConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Suggested reload-check period as a Duration.
    pub fn check_interval(&self) -> Duration {
        Duration::from_secs(self.check_interval_secs)
    }

    /// Open the configured htpasswd file and apply the check interval.
    pub fn open(&self) -> Result<HtpasswdFile, HtpasswdError> {
        let mut store = HtpasswdFile::open(&self.path)?;
        store.set_check_interval(self.check_interval());
        Ok(store)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.path.is_empty() {
            return Err(ConfigError::Message("path cannot be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(toml: &str) -> Result<HtpasswdConfig, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;
        let config: HtpasswdConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    #[test]
    fn test_full_config() {
        let config = from_toml("path = \"/etc/rax/htpasswd\"\ncheck_interval_secs = 30\n").unwrap();
        assert_eq!(config.path, "/etc/rax/htpasswd");
        assert_eq!(config.check_interval(), Duration::from_secs(30));
    }

    #[test]
    fn test_interval_defaults_to_disabled() {
        let config = from_toml("path = \"/etc/rax/htpasswd\"\n").unwrap();
        assert_eq!(config.check_interval_secs, 0);
    }

    #[test]
    fn test_empty_path_rejected() {
        assert!(from_toml("path = \"\"\n").is_err());
    }
}

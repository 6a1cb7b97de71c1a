//! TOML-based application configuration.
//!
//! Stores:
//! - The admin roster (list of operator emails)
//! - Daily streak defaults (goal, lateness cutoff hour)
//!
//! Configuration is stored at `~/.config/streakgate/config.toml`.
//! `STREAKGATE_ADMIN_EMAILS` overrides the configured admin list.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::entitlement::{AdminRoster, EntitlementGate};
use crate::error::{ConfigError, CoreError, Result};

/// Environment variable holding a comma-separated admin list.
pub const ADMIN_EMAILS_ENV: &str = "STREAKGATE_ADMIN_EMAILS";

/// Admin roster configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdminConfig {
    #[serde(default)]
    pub emails: Vec<String>,
}

/// Streak defaults used by callers that do not supply their own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreakConfig {
    #[serde(default = "default_daily_goal")]
    pub daily_goal: u32,
    /// Local hour (0-23) from which the day-window counts as late.
    #[serde(default = "default_late_after_hour")]
    pub late_after_hour: u32,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/streakgate/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub admin: AdminConfig,
    #[serde(default)]
    pub streak: StreakConfig,
}

fn default_daily_goal() -> u32 {
    5
}
fn default_late_after_hour() -> u32 {
    20
}

impl Default for StreakConfig {
    fn default() -> Self {
        Self {
            daily_goal: default_daily_goal(),
            late_after_hour: default_late_after_hour(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value.parse::<bool>().map_err(|e| invalid(e.to_string()))?,
                    ),
                    serde_json::Value::Number(_) => value
                        .parse::<u64>()
                        .map(|n| serde_json::Value::Number(n.into()))
                        .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?,
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        serde_json::from_str(value).map_err(|e| invalid(e.to_string()))?
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    /// Default location of the config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be created.
    pub fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the default location, writing defaults if the file is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load from `path`, writing defaults there if the file is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, fails
    /// validation, or the defaults cannot be written.
    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
                cfg.validate()?;
                tracing::debug!(path = %path.display(), "configuration loaded");
                Ok(cfg)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no configuration found, writing defaults");
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(err) => Err(CoreError::Io(err)),
        }
    }

    /// Persist to the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Persist to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        tracing::debug!(path = %path.display(), "configuration saved");
        Ok(())
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a zero daily goal or an
    /// hour outside 0-23.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.streak.daily_goal == 0 {
            return Err(ConfigError::InvalidValue {
                key: "streak.daily_goal".to_string(),
                message: "must be positive".to_string(),
            });
        }
        if self.streak.late_after_hour > 23 {
            return Err(ConfigError::InvalidValue {
                key: "streak.late_after_hour".to_string(),
                message: format!("{} is not an hour of the day", self.streak.late_after_hour),
            });
        }
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value in memory by dot-separated key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the result fails validation. `self` is untouched on error.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Set a config value and persist to the default location.
    ///
    /// # Errors
    ///
    /// See [`Config::set_value`] and [`Config::save`].
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.set_value(key, value)?;
        self.save()
    }

    /// Admin roster, honouring `STREAKGATE_ADMIN_EMAILS` when set.
    pub fn admin_roster(&self) -> AdminRoster {
        self.admin_roster_with_override(std::env::var(ADMIN_EMAILS_ENV).ok().as_deref())
    }

    /// Admin roster with an explicit override list in place of the
    /// environment lookup.
    pub fn admin_roster_with_override(&self, env_list: Option<&str>) -> AdminRoster {
        match env_list {
            Some(list) => {
                if !self.admin.emails.is_empty() {
                    tracing::warn!(
                        configured = self.admin.emails.len(),
                        "{ADMIN_EMAILS_ENV} overrides configured admin emails"
                    );
                }
                AdminRoster::from_env_list(list)
            }
            None => AdminRoster::new(self.admin.emails.iter().cloned()),
        }
    }

    /// Entitlement gate bound to this configuration's roster.
    pub fn entitlement_gate(&self) -> EntitlementGate {
        EntitlementGate::new(self.admin_roster())
    }
}

mod config;

pub use config::{AdminConfig, Config, StreakConfig, ADMIN_EMAILS_ENV};

use std::path::PathBuf;

use crate::error::Result;

/// Returns `~/.config/streakgate[-dev]/` based on STREAKGATE_ENV.
///
/// Set STREAKGATE_ENV=dev to use development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("STREAKGATE_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("streakgate-dev")
    } else {
        base_dir.join("streakgate")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

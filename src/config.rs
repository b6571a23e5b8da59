//! Process configuration parsed from environment variables.
//!
//! Optional:
//! - `DATABASE_URL`: Postgres connection string (required by commands that
//!   touch storage)
//! - `DB_MAX_CONNECTIONS`: pool size, default 5
//! - `FLOORPLAN_SNAP`: `true` (default) or `false`
//! - `FLOORPLAN_GRID_SIZE`: snap grid in pixels, default 20
//! - `FLOORPLAN_CHECKPOINT_UNIT`: history coalescing unit, default 20
//!
//! Unparseable values fall back to their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use canvas::consts::{CHECKPOINT_UNIT, GRID_SIZE};
use canvas::store::HistoryPolicy;
use canvas::transform::SnapSettings;

pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
}

impl crate::error::ErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Missing(_) => "E_CONFIG_MISSING",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub snap: SnapSettings,
    pub history: HistoryPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: None,
            db_max_connections: DEFAULT_DB_MAX_CONNECTIONS,
            snap: SnapSettings::default(),
            history: HistoryPolicy::default(),
        }
    }
}

impl Config {
    /// Build typed config from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed config from an arbitrary key lookup.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let grid_size = env_parse(&lookup, "FLOORPLAN_GRID_SIZE", GRID_SIZE);
        Self {
            database_url: lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()),
            db_max_connections: env_parse(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS),
            snap: SnapSettings {
                enabled: env_parse(&lookup, "FLOORPLAN_SNAP", true),
                grid_size: if grid_size > 0.0 { grid_size } else { GRID_SIZE },
            },
            history: HistoryPolicy {
                checkpoint_unit: env_parse(&lookup, "FLOORPLAN_CHECKPOINT_UNIT", CHECKPOINT_UNIT),
            },
        }
    }

    /// The database URL, for commands that cannot run without one.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] when `DATABASE_URL` is unset or blank.
    pub fn database_url(&self) -> Result<&str, ConfigError> {
        self.database_url.as_deref().ok_or(ConfigError::Missing("DATABASE_URL"))
    }
}

fn env_parse<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + Copy,
{
    lookup(key)
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

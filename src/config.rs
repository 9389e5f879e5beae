//! Startup configuration.
//!
//! One explicit `Config` built at process start and handed to the router;
//! no module-level globals. Resolution priority per setting: command-line
//! flag, then `RANKBOARD_*` environment variable (via clap), then the TOML
//! config file, then the compiled default.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default leaderboard/history roster.
const DEFAULT_TEAM: &[i64] = &[
    20269, 19515, 18676, 13424, 16329, 8176, 16786, 11496, 15166,
];

const DEFAULT_DATABASE_URL: &str = "sqlite://rankboard.db";
const DEFAULT_BIND: &str = "127.0.0.1:5000";
const DEFAULT_CONFIG_FILE: &str = "rankboard.toml";

/// Command-line interface.
#[derive(Debug, Parser)]
#[command(name = "rankboard", about = "Support-ticket ranking dashboard backend")]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, env = "RANKBOARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Serve fixture data instead of querying the database
    #[arg(long, env = "RANKBOARD_OFFLINE")]
    pub offline: bool,

    /// SQLite database URL (opened read-only)
    #[arg(long, env = "RANKBOARD_DATABASE_URL")]
    pub database_url: Option<String>,

    /// Listen address
    #[arg(long, env = "RANKBOARD_BIND")]
    pub bind: Option<String>,
}

/// Resolved runtime configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Serve fixture data instead of querying the database.
    pub offline: bool,
    /// SQLite database URL; opened in read-only mode.
    pub database_url: String,
    /// Employee ids eligible for the leaderboard and history views.
    pub team: Vec<i64>,
    /// Optional top-N cap applied to history responses.
    pub history_limit: Option<usize>,
    /// Listen address.
    pub bind: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            offline: false,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            team: DEFAULT_TEAM.to_vec(),
            history_limit: None,
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

impl Config {
    /// Resolve configuration from the CLI, environment, and config file.
    ///
    /// An explicitly named config file must exist; the default
    /// `rankboard.toml` is only read when present.
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };

        if cli.offline {
            config.offline = true;
        }
        if let Some(url) = &cli.database_url {
            config.database_url = url.clone();
        }
        if let Some(bind) = &cli.bind {
            config.bind = bind.clone();
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_online_with_full_roster() {
        let config = Config::default();
        assert!(!config.offline);
        assert_eq!(config.team.len(), 9);
        assert_eq!(config.history_limit, None);
        assert_eq!(config.bind, "127.0.0.1:5000");
    }

    #[test]
    fn toml_overrides_apply_and_omissions_keep_defaults() {
        let config: Config = toml::from_str(
            r#"
            offline = true
            team = [1, 2, 3]
            history_limit = 3
            "#,
        )
        .unwrap();

        assert!(config.offline);
        assert_eq!(config.team, vec![1, 2, 3]);
        assert_eq!(config.history_limit, Some(3));
        assert_eq!(config.database_url, "sqlite://rankboard.db");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = toml::from_str::<Config>("tem = [1]");
        assert!(result.is_err());
    }
}

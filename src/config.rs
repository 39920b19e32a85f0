//! Runtime configuration loaded from the process environment.
use error::GameError;
use std::env;
use std::path::PathBuf;
use std::process;
use std::time::SystemTime;

pub const SEED_VAR: &str = "BATTLE_SEED";
pub const LOG_DIR_VAR: &str = "BATTLE_LOG_DIR";
pub const DEFAULT_LOG_DIR: &str = "logs";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Seed for the battle RNG. Same seed, same fight.
    pub seed: u64,
    pub log_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: entropy_seed(),
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
        }
    }
}

impl Config {
    /// Construct configuration from process environment variables.
    ///
    /// A `.env` file in the working directory is loaded first if present.
    ///
    /// Environment variables:
    /// - `BATTLE_SEED` - RNG seed (default: derived from clock and pid)
    /// - `BATTLE_LOG_DIR` - directory for the log file (default: `logs`)
    ///
    /// Log filtering itself is read from `RUST_LOG` by the logging setup.
    /// Unparsable values fall back to their default and are returned
    /// alongside the config so the caller can report them.
    pub fn from_env() -> (Self, Vec<GameError>) {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Config::from_env`] with an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<GameError>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let mut rejected = Vec::new();

        if let Some(raw) = lookup(SEED_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(seed) => config.seed = seed,
                Err(_) => rejected.push(GameError::InvalidConfig {
                    key: SEED_VAR.to_string(),
                    value: raw,
                }),
            }
        }

        if let Some(dir) = lookup(LOG_DIR_VAR).filter(|dir| !dir.trim().is_empty()) {
            config.log_dir = PathBuf::from(dir);
        }

        (config, rejected)
    }
}

/// Seed mixed from wall clock and process id.
pub fn entropy_seed() -> u64 {
    let time = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    let pid = process::id();
    (time ^ (pid as u128)) as u64
}

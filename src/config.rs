// Runtime configuration from environment variables
//
// PANTRY_DB_PATH       where the SQLite file lives
// PANTRY_IDENTITY_KEY  publishable key for the external identity provider

use crate::error::{PantryError, Result};
use std::env;
use std::path::PathBuf;
use tracing::{info, warn};

pub const DB_PATH_VAR: &str = "PANTRY_DB_PATH";
pub const IDENTITY_KEY_VAR: &str = "PANTRY_IDENTITY_KEY";

const DATA_DIR: &str = ".pantry-planner";
const DB_FILE: &str = "pantry.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    pub identity_key: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any variable source. Tests pass a closure over a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_path = match lookup(DB_PATH_VAR) {
            Some(path) if path.trim().is_empty() => {
                warn!("{DB_PATH_VAR} is set but empty");
                return Err(PantryError::Config(format!("{DB_PATH_VAR} must not be empty")));
            }
            Some(path) => PathBuf::from(path),
            None => {
                let default = default_db_path()?;
                info!("{DB_PATH_VAR} not set, using default: {}", default.display());
                default
            }
        };

        let identity_key = lookup(IDENTITY_KEY_VAR)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());
        if identity_key.is_none() {
            info!("{IDENTITY_KEY_VAR} not set, using local sign-in");
        }

        Ok(Self {
            db_path,
            identity_key,
        })
    }
}

fn default_db_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| {
        PantryError::Config("Could not determine home directory".to_string())
    })?;
    Ok(home.join(DATA_DIR).join(DB_FILE))
}

//! Runtime configuration
//!
//! Resolved once at startup. Command line flags take precedence over
//! environment variables, which take precedence over defaults.

use anyhow::{anyhow, Context, Result};
use std::env;
use std::path::PathBuf;

use crate::error::StorageError;

// Environment variable names
pub const ENV_DB_PATH: &str = "PHONEBOOK_DB";
pub const ENV_PAGE_SIZE: &str = "PHONEBOOK_PAGE_SIZE";

pub const DEFAULT_PAGE_SIZE: u32 = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    pub page_size: u32,
}

impl Config {
    /// Load from the process environment, with `db_override` from `--db`.
    pub fn load(db_override: Option<PathBuf>) -> Result<Self> {
        Self::resolve(
            db_override,
            env::var(ENV_DB_PATH).ok(),
            env::var(ENV_PAGE_SIZE).ok(),
        )
    }

    fn resolve(
        db_override: Option<PathBuf>,
        env_db: Option<String>,
        env_page_size: Option<String>,
    ) -> Result<Self> {
        let db_path = match (db_override, env_db.filter(|s| !s.trim().is_empty())) {
            (Some(path), _) => path,
            (None, Some(path)) => PathBuf::from(path),
            (None, None) => default_db_path()?,
        };

        let page_size = match env_page_size.filter(|s| !s.trim().is_empty()) {
            Some(raw) => {
                let size: u32 = raw.trim().parse().with_context(|| {
                    format!("{} must be a positive integer, got {:?}", ENV_PAGE_SIZE, raw)
                })?;
                if size == 0 {
                    return Err(anyhow!("{} must be greater than zero", ENV_PAGE_SIZE));
                }
                size
            }
            None => DEFAULT_PAGE_SIZE,
        };

        Ok(Self { db_path, page_size })
    }
}

fn default_db_path() -> Result<PathBuf, StorageError> {
    let data_dir = dirs::data_dir().ok_or(StorageError::NoDataDir)?;
    Ok(data_dir.join("phonebook").join("phonebook.db"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_beats_env() {
        let config = Config::resolve(
            Some(PathBuf::from("/tmp/flag.db")),
            Some("/tmp/env.db".to_string()),
            None,
        )
        .unwrap();
        assert_eq!(config.db_path, PathBuf::from("/tmp/flag.db"));
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_env_db_path() {
        let config =
            Config::resolve(None, Some("/tmp/env.db".to_string()), Some("5".to_string())).unwrap();
        assert_eq!(config.db_path, PathBuf::from("/tmp/env.db"));
        assert_eq!(config.page_size, 5);
    }

    #[test]
    fn test_blank_env_is_ignored() {
        let config = Config::resolve(
            Some(PathBuf::from("a.db")),
            Some("  ".to_string()),
            Some("".to_string()),
        )
        .unwrap();
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_bad_page_size() {
        let flag = Some(PathBuf::from("a.db"));
        assert!(Config::resolve(flag.clone(), None, Some("ten".to_string())).is_err());
        assert!(Config::resolve(flag, None, Some("0".to_string())).is_err());
    }
}

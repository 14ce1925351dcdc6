use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

// Bundled datasets resolve against the crate, not the working directory.
const DEFAULT_SKILLS_DATASET: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/job_skills.json");
const DEFAULT_ALIAS_DATASET: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/job_alias.json");

/// Application configuration loaded from environment variables.
/// Every setting has a default; malformed numeric values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Role → core/optional skills dataset (`job_skills.json`).
    pub skills_dataset_path: PathBuf,
    /// Alias → canonical skill dataset (`job_alias.json`).
    pub alias_dataset_path: PathBuf,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_env("PORT", DEFAULT_PORT)
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            skills_dataset_path: path_env("SKILLS_DATASET_PATH", DEFAULT_SKILLS_DATASET),
            alias_dataset_path: path_env("ALIAS_DATASET_PATH", DEFAULT_ALIAS_DATASET),
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)
                .context("MAX_UPLOAD_BYTES must be a positive integer")?,
        })
    }
}

fn path_env(key: &str, default: &str) -> PathBuf {
    std::env::var(key)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(default))
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Invalid value '{raw}' for '{key}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_falls_back_to_default_when_unset() {
        let port: u16 = parse_env("SKILLGAP_TEST_UNSET_PORT", 8000).unwrap();
        assert_eq!(port, 8000);
    }

    #[test]
    fn test_parse_env_reads_and_trims_value() {
        std::env::set_var("SKILLGAP_TEST_LIMIT", " 2048 ");
        let limit: usize = parse_env("SKILLGAP_TEST_LIMIT", 1).unwrap();
        assert_eq!(limit, 2048);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("SKILLGAP_TEST_BAD_PORT", "eighty");
        let result: Result<u16> = parse_env("SKILLGAP_TEST_BAD_PORT", 8000);
        assert!(result.is_err());
    }

    #[test]
    fn test_path_env_default() {
        let path = path_env("SKILLGAP_TEST_UNSET_PATH", DEFAULT_SKILLS_DATASET);
        assert_eq!(path, PathBuf::from(DEFAULT_SKILLS_DATASET));
    }

    #[test]
    fn test_default_datasets_exist_regardless_of_cwd() {
        for default in [DEFAULT_SKILLS_DATASET, DEFAULT_ALIAS_DATASET] {
            let path = PathBuf::from(default);
            assert!(path.is_absolute(), "{default} is relative");
            assert!(path.is_file(), "{default} is missing");
        }
    }
}

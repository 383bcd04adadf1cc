use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants;
use crate::error::{EtlError, Result};

/// All run-time knobs for one ETL pass. Defaults reproduce the canonical
/// largest-banks run; a TOML file may override any subset of them.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub source_url: String,
    pub exchange_rate_path: PathBuf,
    pub output_csv_path: PathBuf,
    pub database_path: PathBuf,
    pub table_name: String,
    pub log_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_url: constants::DEFAULT_SOURCE_URL.to_string(),
            exchange_rate_path: PathBuf::from(constants::DEFAULT_EXCHANGE_RATE_PATH),
            output_csv_path: PathBuf::from(constants::DEFAULT_OUTPUT_CSV_PATH),
            database_path: PathBuf::from(constants::DEFAULT_DATABASE_PATH),
            table_name: constants::DEFAULT_TABLE_NAME.to_string(),
            log_path: PathBuf::from(constants::DEFAULT_LOG_PATH),
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let content = fs::read_to_string(path).map_err(|e| {
                    EtlError::Config(format!(
                        "failed to read config file '{}': {}",
                        path.display(),
                        e
                    ))
                })?;
                toml::from_str(&content).map_err(|e| {
                    EtlError::Config(format!(
                        "invalid config file '{}': {}",
                        path.display(),
                        e
                    ))
                })
            }
            None => Ok(Self::default()),
        }
    }
}

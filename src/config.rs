// Startup configuration read from the environment (and `.env`, if present).

use std::fs::File;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use log::info;
use thiserror::Error;

use crate::quiz::{self, Catalog, Entry, QuizError};

pub const DEFAULT_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_ASSETS_DIR: &str = "static";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid QUIZ_ADDR `{value}`: {source}")]
    InvalidAddr {
        value: String,
        source: std::net::AddrParseError,
    },

    #[error("failed to open catalog file {path}: {source}")]
    CatalogRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse catalog file {path}: {source}")]
    CatalogParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid catalog: {0}")]
    InvalidCatalog(#[from] QuizError),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub assets_dir: PathBuf,
    pub catalog: Catalog,
}

impl Config {
    /// Reads `QUIZ_ADDR`, `QUIZ_ASSETS_DIR` and `QUIZ_CATALOG`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr_value = lookup("QUIZ_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_value
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidAddr {
                value: addr_value.clone(),
                source,
            })?;

        let assets_dir = lookup("QUIZ_ASSETS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR));

        let catalog = match lookup("QUIZ_CATALOG") {
            Some(path) => load_catalog(Path::new(&path))?,
            None => quiz::animals::catalog()?,
        };

        Ok(Self {
            addr,
            assets_dir,
            catalog,
        })
    }
}

/// Loads a JSON array of `{"name": .., "image": ..}` objects.
pub fn load_catalog(path: &Path) -> Result<Catalog, ConfigError> {
    let file = File::open(path).map_err(|source| ConfigError::CatalogRead {
        path: path.to_path_buf(),
        source,
    })?;
    let entries: Vec<Entry> =
        serde_json::from_reader(file).map_err(|source| ConfigError::CatalogParse {
            path: path.to_path_buf(),
            source,
        })?;

    let catalog = Catalog::new(entries)?;
    info!(
        "Loaded {} catalog entries from {}",
        catalog.entries().len(),
        path.display()
    );
    Ok(catalog)
}

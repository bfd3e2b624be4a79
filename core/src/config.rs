//! `sqlsteps.toml` loading
//!
//! ```toml
//! [database]
//! url = "./test.db"
//! type = "sqlite"
//!
//! [queries]
//! file = "queries.properties"
//! ```
//!
//! Relative paths are resolved against the directory holding the config file.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::catalog::QueryCatalog;
use crate::dialect::EnvDialect;

/// Default config file name
pub const CONFIG_FILE: &str = "sqlsteps.toml";

/// In-memory SQLite database
pub const MEMORY_URL: &str = ":memory:";

fn default_url() -> String {
    MEMORY_URL.to_owned()
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// SQLite path or `:memory:`
    #[serde(default = "default_url")]
    pub url: String,
    /// Dialect used to resolve named queries
    #[serde(default, rename = "type")]
    pub database_type: Option<String>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            database_type: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct QueriesConfig {
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SqlStepsConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub queries: QueriesConfig,
    #[serde(skip)]
    base_dir: PathBuf,
}

impl SqlStepsConfig {
    /// Load [`CONFIG_FILE`] from the working directory
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load from a specific path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound(path.into())
            } else {
                ConfigError::Io(path.into(), e)
            }
        })?;

        let mut config =
            Self::from_toml_str(&content).map_err(|e| ConfigError::Parse(path.into(), e))?;
        config.base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(config)
    }

    /// Parse config text; relative paths stay relative to the working directory
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    /// Query file location, if one is configured
    pub fn query_file(&self) -> Option<PathBuf> {
        self.queries.file.as_deref().map(|p| self.resolve_path(p))
    }

    /// Database file location, or `None` for an in-memory database
    pub fn database_path(&self) -> Option<PathBuf> {
        if self.database.url == MEMORY_URL {
            None
        } else {
            Some(self.resolve_path(Path::new(&self.database.url)))
        }
    }

    /// Dialect provider: the environment first, then `database.type`
    pub fn dialect(&self) -> EnvDialect {
        EnvDialect::new().with_default(self.database.database_type.clone())
    }

    /// Load the configured query file
    pub fn catalog(&self) -> crate::error::Result<QueryCatalog> {
        QueryCatalog::load(self.query_file().as_deref())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to parse {}: {}", .0.display(), .1)]
    Parse(PathBuf, #[source] toml::de::Error),
}

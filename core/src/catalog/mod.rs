//! Named query catalog
//!
//! Maps query names to SQL text. A name can be specialized for a dialect by
//! suffixing it with `.dialect`; resolution tries the specialized key first and
//! falls back to the plain name.
//!
//! ```properties
//! findUser = SELECT * FROM users WHERE name = ?
//! findUser.mysql = SELECT * FROM `users` WHERE name = ?
//! ```

mod properties;
mod table;

use std::path::Path;

use hashbrown::HashMap;

use crate::dialect::DialectProvider;
use crate::error::{Result, StepError};

pub use properties::parse_properties;
pub use table::flatten_toml;

/// Errors reading or parsing a query source
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {message}")]
    Properties { line: usize, message: String },

    #[error("{0}")]
    Toml(#[from] ::toml::de::Error),

    #[error("value of \"{key}\" must be a string or table, found {found}")]
    NonStringValue { key: String, found: &'static str },
}

/// Immutable mapping of query name (optionally `name.dialect`) to SQL text
#[derive(Debug, Clone, Default)]
pub struct QueryCatalog {
    queries: HashMap<String, String>,
}

impl QueryCatalog {
    /// An empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            queries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Load the catalog from an optional query file.
    ///
    /// No path, or a path that does not exist, yields an empty catalog. A file
    /// that exists but cannot be read or parsed is a [`StepError::ResourceLoadFailed`].
    /// Files ending in `.toml` are read as TOML, anything else as Java-style properties.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::new());
        };

        crate::sqlsteps_debug!(path = %path.display(), "Loading queries from file");

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                crate::sqlsteps_debug!(path = %path.display(), "Query file not found, catalog is empty");
                return Ok(Self::new());
            }
            Err(e) => return Err(Self::load_failed(path, e.into())),
        };

        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let parsed = if is_toml {
            Self::from_toml_str(&content)
        } else {
            Self::from_properties_str(&content)
        };

        parsed.map_err(|e| Self::load_failed(path, e))
    }

    fn load_failed(path: &Path, source: LoadError) -> StepError {
        crate::sqlsteps_error!(path = %path.display(), error = %source, "Failed to load query file");
        StepError::ResourceLoadFailed {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn from_properties_str(content: &str) -> std::result::Result<Self, LoadError> {
        Ok(Self::from_entries(parse_properties(content)?))
    }

    pub fn from_toml_str(content: &str) -> std::result::Result<Self, LoadError> {
        let table: ::toml::Table = ::toml::from_str(content)?;
        Ok(Self::from_entries(flatten_toml(table)?))
    }

    /// Exact key lookup, without dialect fallback
    pub fn get(&self, key: &str) -> Option<&str> {
        self.queries.get(key).map(String::as_str)
    }

    /// Resolve `name` for `dialect`: `name.dialect` if present, else `name`.
    ///
    /// Names and dialects are compared exactly as given.
    pub fn resolve(&self, name: &str, dialect: &str) -> Result<&str> {
        let specialized = format!("{name}.{dialect}");
        if let Some(sql) = self.get(&specialized) {
            crate::sqlsteps_debug!("Resolved query for {} as {}", name, specialized);
            return Ok(sql);
        }
        self.resolve_plain(name)
    }

    /// Resolve `name` using the dialect the provider reports right now.
    pub fn resolve_with(&self, name: &str, dialect: &dyn DialectProvider) -> Result<&str> {
        match dialect.dialect() {
            Some(dialect) => self.resolve(name, &dialect),
            None => self.resolve_plain(name),
        }
    }

    fn resolve_plain(&self, name: &str) -> Result<&str> {
        self.get(name)
            .ok_or_else(|| StepError::QueryNotFound(name.to_owned()))
    }

    pub fn len(&self) -> usize {
        self.queries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }

    /// All keys, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.queries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

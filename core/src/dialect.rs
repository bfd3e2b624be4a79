//! Dialect providers
//!
//! The catalog asks its provider for the current dialect on every resolve, so
//! a provider backed by the environment picks up changes between steps.

use std::borrow::Cow;

pub use sqlsteps_types::Dialect;

/// Environment variable consulted by [`EnvDialect::new`]
pub const DATABASE_TYPE_ENV: &str = "SQLSTEPS_DATABASE_TYPE";

/// Supplies the dialect string used for named query resolution
pub trait DialectProvider {
    /// The current dialect, or `None` to resolve plain names only
    fn dialect(&self) -> Option<String>;
}

impl DialectProvider for str {
    fn dialect(&self) -> Option<String> {
        Some(self.to_owned())
    }
}

impl DialectProvider for String {
    fn dialect(&self) -> Option<String> {
        Some(self.clone())
    }
}

impl DialectProvider for Dialect {
    fn dialect(&self) -> Option<String> {
        Some(self.as_str().to_owned())
    }
}

impl<T: DialectProvider> DialectProvider for Option<T> {
    fn dialect(&self) -> Option<String> {
        self.as_ref().and_then(DialectProvider::dialect)
    }
}

impl<T: DialectProvider + ?Sized> DialectProvider for &T {
    fn dialect(&self) -> Option<String> {
        (**self).dialect()
    }
}

impl<T: DialectProvider + ?Sized> DialectProvider for Box<T> {
    fn dialect(&self) -> Option<String> {
        (**self).dialect()
    }
}

/// Reads the dialect from an environment variable on every call
#[derive(Debug, Clone)]
pub struct EnvDialect {
    var: Cow<'static, str>,
    default: Option<String>,
}

impl EnvDialect {
    /// Read [`DATABASE_TYPE_ENV`]
    pub fn new() -> Self {
        Self::from_var(DATABASE_TYPE_ENV)
    }

    pub fn from_var(var: impl Into<Cow<'static, str>>) -> Self {
        Self {
            var: var.into(),
            default: None,
        }
    }

    /// Dialect to report while the variable is unset
    pub fn with_default(mut self, default: Option<String>) -> Self {
        self.default = default;
        self
    }

    pub fn var(&self) -> &str {
        &self.var
    }
}

impl Default for EnvDialect {
    fn default() -> Self {
        Self::new()
    }
}

impl DialectProvider for EnvDialect {
    fn dialect(&self) -> Option<String> {
        std::env::var(self.var.as_ref())
            .ok()
            .or_else(|| self.default.clone())
    }
}

/// Adapts a closure into a [`DialectProvider`]
pub struct DialectFn<F>(pub F);

impl<F> DialectProvider for DialectFn<F>
where
    F: Fn() -> Option<String>,
{
    fn dialect(&self) -> Option<String> {
        (self.0)()
    }
}

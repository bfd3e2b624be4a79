//! Known database dialect identifiers
//!
//! Named queries are specialized per dialect by suffixing the query name with
//! the dialect string (`findUser.mysql`). This enum covers the engines the
//! step library knows by name; catalogs may use any other string as well.

/// Database engine a named query can be specialized for
///
/// # Examples
///
/// ```
/// use sqlsteps_types::Dialect;
///
/// assert_eq!(Dialect::parse("postgres"), Some(Dialect::PostgreSQL));
/// assert_eq!(Dialect::MySQL.as_str(), "mysql");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Dialect {
    /// SQLite, also used for libsql and turso
    #[default]
    SQLite,

    /// PostgreSQL
    PostgreSQL,

    /// MySQL and MariaDB
    MySQL,

    /// Oracle Database
    Oracle,

    /// HyperSQL
    HSQLDB,

    /// H2
    H2,

    /// Microsoft SQL Server
    SQLServer,
}

impl Dialect {
    /// Every known dialect, in declaration order
    pub const ALL: &'static [Dialect] = &[
        Dialect::SQLite,
        Dialect::PostgreSQL,
        Dialect::MySQL,
        Dialect::Oracle,
        Dialect::HSQLDB,
        Dialect::H2,
        Dialect::SQLServer,
    ];

    /// Parse a dialect from a string (case-insensitive)
    ///
    /// Supports various common aliases:
    /// - SQLite: `"sqlite"`, `"turso"`, `"libsql"`
    /// - PostgreSQL: `"postgresql"`, `"postgres"`, `"pg"`
    /// - MySQL: `"mysql"`, `"mariadb"`
    /// - SQL Server: `"sqlserver"`, `"mssql"`
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let is = |candidates: &[&str]| candidates.iter().any(|c| s.eq_ignore_ascii_case(c));

        if is(&["sqlite", "turso", "libsql"]) {
            Some(Dialect::SQLite)
        } else if is(&["postgresql", "postgres", "pg"]) {
            Some(Dialect::PostgreSQL)
        } else if is(&["mysql", "mariadb"]) {
            Some(Dialect::MySQL)
        } else if is(&["oracle"]) {
            Some(Dialect::Oracle)
        } else if is(&["hsqldb", "hsql"]) {
            Some(Dialect::HSQLDB)
        } else if is(&["h2"]) {
            Some(Dialect::H2)
        } else if is(&["sqlserver", "mssql"]) {
            Some(Dialect::SQLServer)
        } else {
            None
        }
    }

    /// The suffix used for this dialect in named query keys
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Dialect::SQLite => "sqlite",
            Dialect::PostgreSQL => "postgresql",
            Dialect::MySQL => "mysql",
            Dialect::Oracle => "oracle",
            Dialect::HSQLDB => "hsqldb",
            Dialect::H2 => "h2",
            Dialect::SQLServer => "sqlserver",
        }
    }
}

impl core::fmt::Display for Dialect {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Dialect {
    type Err = DialectParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dialect::parse(s).ok_or(DialectParseError)
    }
}

/// Error returned when parsing an unknown dialect string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialectParseError;

impl core::fmt::Display for DialectParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("unknown dialect")
    }
}

impl std::error::Error for DialectParseError {}

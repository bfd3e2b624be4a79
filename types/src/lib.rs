//! Shared type definitions for sqlsteps
//!
//! This crate provides the value types used across the sqlsteps crates:
//!
//! - [`Dialect`] - Known database engine identifiers
//! - [`Param`] / [`ParamKind`] - Typed, nullable positional parameters
//! - [`Value`] - A cell read back from a query result
//!
//! # Features
//!
//! - `serde` - Enable serde serialization/deserialization

pub mod dialect;
pub mod param;
pub mod value;

pub use dialect::{Dialect, DialectParseError};
pub use param::{Param, ParamKind};
pub use value::Value;

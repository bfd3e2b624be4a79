//! Tracing utilities for statement and catalog observability.
//!
//! Enable the `tracing` feature to emit spans and events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]` boilerplate
//! at every call site.

/// Emit a debug-level tracing event with the SQL text and parameter count.
///
/// ```ignore
/// sqlsteps_trace_query!("staged.query", &sql, params.len());
/// ```
#[macro_export]
macro_rules! sqlsteps_trace_query {
    ($event:literal, $sql:expr, $param_count:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(sql = %$sql, params = $param_count, $event);
    };
}

/// Emit a debug-level tracing event for a bound parameter.
#[macro_export]
macro_rules! sqlsteps_trace_bind {
    ($position:expr, $param:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(position = $position, kind = %$param.kind(), value = %$param, "sqlsteps.bind");
    };
}

/// Emit a debug-level tracing event with free-form fields.
#[macro_export]
macro_rules! sqlsteps_debug {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($arg)+);
    };
}

/// Emit a warn-level tracing event with free-form fields.
#[macro_export]
macro_rules! sqlsteps_warn {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        ::tracing::warn!($($arg)+);
    };
}

/// Emit an error-level tracing event with free-form fields.
#[macro_export]
macro_rules! sqlsteps_error {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        ::tracing::error!($($arg)+);
    };
}

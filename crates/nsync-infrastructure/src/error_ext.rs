//! Error extension utilities
//!
//! Context extension methods that turn foreign errors (I/O, figment, TOML,
//! transport) into the domain error type.

use nsync_domain::error::{Error, Result};
use std::fmt;

/// Extension trait for adding context to errors
///
/// # Example
///
/// ```ignore
/// use nsync_infrastructure::error_ext::ErrorContext;
///
/// // Add context to file operations
/// let content = std::fs::read_to_string(&path)
///     .io_context(format!("Failed to read config file: {}", path.display()))?;
///
/// // Add context with lazy evaluation
/// let appender = builder
///     .build(&dir)
///     .with_context(|| format!("Failed to open log directory {}", dir.display()))?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to a Result, converting the error to our domain Error type
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Add context with lazy evaluation for expensive context creation
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;

    /// Add context for I/O operations
    fn io_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        Self: Sized;

    /// Add context for configuration operations
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        Self: Sized;

    /// Add context for network operations
    fn network_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        Self: Sized;
}

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Wrap a foreign error into the domain variant built by `variant`
fn wrap<E>(
    err: E,
    context: impl fmt::Display,
    variant: fn(String, Option<BoxedSource>) -> Error,
) -> Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    variant(format!("{context}: {err}"), Some(Box::new(err)))
}

fn infrastructure(message: String, source: Option<BoxedSource>) -> Error {
    Error::Infrastructure { message, source }
}

fn io(message: String, source: Option<BoxedSource>) -> Error {
    Error::Io { message, source }
}

fn configuration(message: String, source: Option<BoxedSource>) -> Error {
    Error::Configuration { message, source }
}

fn network(message: String, source: Option<BoxedSource>) -> Error {
    Error::Network { message, source }
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|err| wrap(err, context, infrastructure))
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|err| wrap(err, f(), infrastructure))
    }

    fn io_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        Self: Sized,
    {
        self.map_err(|err| wrap(err, context, io))
    }

    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        Self: Sized,
    {
        self.map_err(|err| wrap(err, context, configuration))
    }

    fn network_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        Self: Sized,
    {
        self.map_err(|err| wrap(err, context, network))
    }
}

//! Error types for the Vitrine workspace.

/// Errors that can occur while loading the catalog or syncing READMEs.
///
/// All error variants are marked with `#[non_exhaustive]` to allow
/// adding new error types without breaking changes.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// I/O error (reading the catalog, writing the cache)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Catalog file could not be parsed
    #[error("Catalog parse error: {message}")]
    CatalogParse {
        /// What went wrong while parsing
        message: String,
    },

    /// HTTP transport error while fetching a candidate URL
    #[error("HTTP error: {message}")]
    Http {
        /// Human-readable error message
        message: String,
        /// Source error if available
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration error (bad environment values, missing paths)
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },
}

/// Convenience `Result` type alias for Vitrine operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns whether this error is retryable.
    ///
    /// Retryable errors are transient failures such as network errors;
    /// parse and configuration errors are permanent.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Io(_) => true,
            Error::Http { .. } => true,
            Error::Serialization(_) => false,
            Error::CatalogParse { .. } => false,
            Error::Config { .. } => false,
        }
    }

    /// Creates a new catalog parse error.
    pub fn catalog_parse<S: Into<String>>(message: S) -> Self {
        Error::CatalogParse {
            message: message.into(),
        }
    }

    /// Creates a new HTTP error with a message.
    pub fn http<S: Into<String>>(message: S) -> Self {
        Error::Http {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new HTTP error with a message and source error.
    pub fn http_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Http {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }
}

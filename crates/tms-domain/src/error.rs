//! Error handling types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// A single schema violation: the dot-delimited path of the offending field
/// and a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Dot-delimited path of the field (e.g., `database.mongodb.uri`)
    pub path: String,
    /// Description of the violation
    pub message: String,
}

impl ValidationIssue {
    /// Create a new validation issue
    pub fn new<P: Into<String>, M: Into<String>>(path: P, message: M) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Main error type for the Time Machines SDK
#[derive(Error, Debug)]
pub enum Error {
    /// One or more settings fields violate type, bounds, or format rules.
    /// Carries every violation found in a single pass, in path order.
    #[error("configuration validation failed with {} issue(s)", issues.len())]
    Validation {
        /// All violations found, sorted by path
        issues: Vec<ValidationIssue>,
    },

    /// Configuration-related error outside the declarative schema
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Factory was given a provider name outside its closed mapping
    #[error("Unknown {category} provider: {name}")]
    UnknownProvider {
        /// Provider category (e.g., `ai`, `web3`)
        category: String,
        /// The unsupported provider name
        name: String,
    },

    /// Factory was asked for a provider whose optional settings subtree is absent
    #[error("{provider} not configured")]
    NotConfigured {
        /// The provider lacking configuration
        provider: String,
    },

    /// Adapter operation invoked while `is_connected()` is false
    #[error("{adapter} client not initialized")]
    NotInitialized {
        /// The adapter whose client is not ready
        adapter: String,
    },

    /// Adapter operation whose body has no logic yet
    #[error("Not implemented: {operation}")]
    NotImplemented {
        /// The declared but unimplemented operation
        operation: String,
    },

    /// Network-related error
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Validation and configuration error creation methods
impl Error {
    /// Create a validation error from an aggregated issue list
    pub fn validation(issues: Vec<ValidationIssue>) -> Self {
        Self::Validation { issues }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Factory and adapter error creation methods
impl Error {
    /// Create an unknown provider error
    pub fn unknown_provider<C: Into<String>, N: Into<String>>(category: C, name: N) -> Self {
        Self::UnknownProvider {
            category: category.into(),
            name: name.into(),
        }
    }

    /// Create a not configured error
    pub fn not_configured<S: Into<String>>(provider: S) -> Self {
        Self::NotConfigured {
            provider: provider.into(),
        }
    }

    /// Create a not initialized error
    pub fn not_initialized<S: Into<String>>(adapter: S) -> Self {
        Self::NotInitialized {
            adapter: adapter.into(),
        }
    }

    /// Create a not implemented error
    pub fn not_implemented<S: Into<String>>(operation: S) -> Self {
        Self::NotImplemented {
            operation: operation.into(),
        }
    }
}

// Network and internal error creation methods
impl Error {
    /// Create a network error
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
            source: None,
        }
    }

    /// Create a network error with source
    pub fn network_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Network {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

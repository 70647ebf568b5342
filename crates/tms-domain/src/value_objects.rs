//! Shared value objects for remote provider contracts

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Options for a remote text-generation call
///
/// Network-calling operations take an explicit deadline (`timeout`) rather
/// than relying on the runtime's ambient timeout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Model identifier (provider default when absent)
    pub model: Option<String>,
    /// Sampling temperature
    pub temperature: Option<f32>,
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
    /// Per-call deadline
    pub timeout: Option<Duration>,
}

impl GenerateOptions {
    /// Create empty options (provider defaults for everything)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the sampling temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the maximum tokens to generate
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Set the per-call deadline
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

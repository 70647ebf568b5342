//! Application settings
//!
//! The strictly-typed result of running [`crate::schema`] over a raw
//! settings object. On success every defaulted field is populated and every
//! numeric field is a true number.

use serde::{Deserialize, Serialize};
use tms_domain::constants::{
    DEFAULT_PORT, DEFAULT_RATE_LIMIT_MAX, DEFAULT_RATE_LIMIT_WINDOW_MS,
    DEFAULT_TELEMETRY_SERVICE_NAME,
};

use super::ai::OpenAiSettings;
use super::data::PostgresSettings;

/// Runtime environment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Test runs
    Test,
}

impl Environment {
    /// Canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Test => "test",
        }
    }
}

/// MongoDB settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MongoDbSettings {
    /// Connection URI (a well-formed URL or a `mongodb://`-prefixed string)
    pub uri: String,
}

/// Database settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// Postgres settings
    pub postgres: PostgresSettings,
    /// MongoDB settings
    pub mongodb: MongoDbSettings,
}

/// Rate limiting settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateLimitSettings {
    /// Window size in milliseconds
    pub window_ms: u64,
    /// Maximum requests per window
    pub max: u64,
}

impl Default for RateLimitSettings {
    fn default() -> Self {
        Self {
            window_ms: DEFAULT_RATE_LIMIT_WINDOW_MS,
            max: DEFAULT_RATE_LIMIT_MAX,
        }
    }
}

/// API settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Rate limiting settings
    pub rate_limit: RateLimitSettings,
}

/// Allowed CORS origin: a single origin string or a list of origins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CorsOrigin {
    /// A single origin (or `*`)
    One(String),
    /// Multiple origins
    Many(Vec<String>),
}

impl Default for CorsOrigin {
    fn default() -> Self {
        Self::One(String::new())
    }
}

/// CORS settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsSettings {
    /// Allowed origin(s)
    pub origin: CorsOrigin,
    /// Whether credentials are allowed
    pub credentials: bool,
}

impl Default for CorsSettings {
    fn default() -> Self {
        Self {
            origin: CorsOrigin::default(),
            credentials: true,
        }
    }
}

/// Telemetry settings (optional section)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetrySettings {
    /// Whether telemetry export is enabled
    pub enabled: bool,
    /// Service name reported to the collector
    pub service_name: String,
    /// Optional OTLP endpoint URL
    pub otlp_endpoint: Option<String>,
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            enabled: false,
            service_name: DEFAULT_TELEMETRY_SERVICE_NAME.to_string(),
            otlp_endpoint: None,
        }
    }
}

/// Main application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// HTTP server port
    pub port: u16,
    /// Runtime environment
    pub node_env: Environment,
    /// OpenAI settings
    pub openai: OpenAiSettings,
    /// Database settings
    pub database: DatabaseSettings,
    /// API settings
    pub api: ApiSettings,
    /// CORS settings
    pub cors: CorsSettings,
    /// Optional telemetry settings
    pub telemetry: Option<TelemetrySettings>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            node_env: Environment::default(),
            openai: OpenAiSettings::default(),
            database: DatabaseSettings::default(),
            api: ApiSettings::default(),
            cors: CorsSettings::default(),
            telemetry: None,
        }
    }
}

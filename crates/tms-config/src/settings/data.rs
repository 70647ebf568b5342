//! Data service settings

use serde::{Deserialize, Serialize};
use tms_domain::constants::{
    DEFAULT_POSTGRES_DATABASE, DEFAULT_POSTGRES_HOST, DEFAULT_POSTGRES_PORT,
    DEFAULT_POSTGRES_USER,
};

/// Data service settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    /// Postgres settings
    pub postgres: PostgresSettings,
    /// Redis settings
    pub redis: RedisSettings,
    /// S3 settings
    pub s3: S3Settings,
    /// IPFS settings
    pub ipfs: IpfsSettings,
}

/// Postgres settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostgresSettings {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Database name
    pub database: String,
    /// User name
    pub user: String,
    /// Password
    pub password: String,
}

impl Default for PostgresSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_POSTGRES_HOST.to_string(),
            port: DEFAULT_POSTGRES_PORT,
            database: DEFAULT_POSTGRES_DATABASE.to_string(),
            user: DEFAULT_POSTGRES_USER.to_string(),
            password: String::new(),
        }
    }
}

/// Redis settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedisSettings {
    /// Connection URL
    pub url: String,
    /// Optional password
    pub password: Option<String>,
}

impl Default for RedisSettings {
    fn default() -> Self {
        Self {
            url: "redis://localhost:6379".to_string(),
            password: None,
        }
    }
}

/// S3 settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct S3Settings {
    /// AWS region
    pub region: String,
    /// Bucket name
    pub bucket: String,
    /// Optional access key id (prefer IAM roles in production)
    pub access_key_id: Option<String>,
    /// Optional secret access key
    pub secret_access_key: Option<String>,
}

impl Default for S3Settings {
    fn default() -> Self {
        Self {
            region: "us-east-1".to_string(),
            bucket: String::new(),
            access_key_id: None,
            secret_access_key: None,
        }
    }
}

/// IPFS settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IpfsSettings {
    /// API endpoint URL
    pub url: String,
    /// Optional project identifier
    pub project_id: Option<String>,
    /// Optional project secret
    pub project_secret: Option<String>,
}

impl Default for IpfsSettings {
    fn default() -> Self {
        Self {
            url: "https://ipfs.infura.io:5001".to_string(),
            project_id: None,
            project_secret: None,
        }
    }
}

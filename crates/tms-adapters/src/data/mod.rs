//! Data service adapters

use std::sync::Arc;

use tms_config::settings::DataSettings;
use tms_domain::error::Result;
use tms_domain::ports::adapter::Adapter;

use crate::registry::{self, ProviderEntry};

mod ipfs;
mod postgres;
mod redis;
mod s3;

pub use ipfs::IpfsAdapter;
pub use postgres::PostgresAdapter;
pub use redis::RedisAdapter;
pub use s3::S3Adapter;

fn build_postgres(settings: &DataSettings) -> Result<Arc<dyn Adapter>> {
    Ok(Arc::new(PostgresAdapter::new(&settings.postgres)))
}

fn build_redis(settings: &DataSettings) -> Result<Arc<dyn Adapter>> {
    Ok(Arc::new(RedisAdapter::new(&settings.redis)))
}

fn build_s3(settings: &DataSettings) -> Result<Arc<dyn Adapter>> {
    Ok(Arc::new(S3Adapter::new(&settings.s3)))
}

fn build_ipfs(settings: &DataSettings) -> Result<Arc<dyn Adapter>> {
    Ok(Arc::new(IpfsAdapter::new(&settings.ipfs)))
}

/// Closed registry of data services
pub static PROVIDERS: &[ProviderEntry<DataSettings>] = &[
    ProviderEntry {
        name: "postgres",
        description: "Postgres relational database",
        build: build_postgres,
    },
    ProviderEntry {
        name: "redis",
        description: "Redis key-value store",
        build: build_redis,
    },
    ProviderEntry {
        name: "s3",
        description: "S3 object storage",
        build: build_s3,
    },
    ProviderEntry {
        name: "ipfs",
        description: "IPFS content-addressed storage",
        build: build_ipfs,
    },
];

/// Resolve a data service by name
pub fn resolve(settings: &DataSettings, name: &str) -> Result<Arc<dyn Adapter>> {
    registry::resolve(PROVIDERS, "data", settings, name)
}

/// List supported data services
pub fn list() -> Vec<(&'static str, &'static str)> {
    registry::list(PROVIDERS)
}

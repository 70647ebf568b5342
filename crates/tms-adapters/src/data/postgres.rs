//! Postgres adapter

use async_trait::async_trait;
use r2d2::Pool;
use r2d2_postgres::PostgresConnectionManager;
use r2d2_postgres::postgres::{Config, NoTls};
use serde_json::Value;
use tms_config::settings::PostgresSettings;
use tms_domain::error::{Error, Result};
use tms_domain::ports::adapter::Adapter;

use crate::client::{Capability, ClientState, ensure_connected};

type PgPool = Pool<PostgresConnectionManager<NoTls>>;

/// Postgres adapter backed by an r2d2 connection pool
///
/// The pool is assembled without establishing any connection; `min_idle`
/// is zero so nothing dials out until a query actually needs a
/// connection.
pub struct PostgresAdapter {
    pool: ClientState<PgPool>,
}

impl PostgresAdapter {
    /// Build the adapter, probing the connection settings
    pub fn new(settings: &PostgresSettings) -> Self {
        Self {
            pool: ClientState::from_probe("postgres", probe_pool(settings)),
        }
    }

    /// Run a SQL statement, returning rows as JSON objects
    pub async fn query(&self, _sql: &str) -> Result<Vec<Value>> {
        ensure_connected(self)?;
        Err(Error::not_implemented("postgres.query"))
    }
}

fn probe_pool(settings: &PostgresSettings) -> Capability<PgPool> {
    if settings.host.is_empty() {
        return Capability::Unavailable("postgres host is empty".to_string());
    }

    let mut config = Config::new();
    config
        .host(&settings.host)
        .port(settings.port)
        .dbname(&settings.database)
        .user(&settings.user)
        .password(&settings.password);

    let manager = PostgresConnectionManager::new(config, NoTls);
    let pool = Pool::builder()
        .min_idle(Some(0))
        .build_unchecked(manager);
    Capability::Available(pool)
}

#[async_trait]
impl Adapter for PostgresAdapter {
    fn kind(&self) -> &'static str {
        "postgres"
    }

    fn is_connected(&self) -> bool {
        self.pool.is_ready()
    }

    async fn disconnect(&self) -> Result<()> {
        Ok(())
    }
}

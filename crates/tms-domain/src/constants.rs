//! Domain-wide constants

/// Default HTTP server port
pub const DEFAULT_PORT: u16 = 3001;

/// Default Postgres host
pub const DEFAULT_POSTGRES_HOST: &str = "localhost";

/// Default Postgres port
pub const DEFAULT_POSTGRES_PORT: u16 = 5432;

/// Default Postgres database name
pub const DEFAULT_POSTGRES_DATABASE: &str = "timemachines";

/// Default Postgres user
pub const DEFAULT_POSTGRES_USER: &str = "postgres";

/// Default rate limit window (15 minutes, in milliseconds)
pub const DEFAULT_RATE_LIMIT_WINDOW_MS: u64 = 15 * 60 * 1000;

/// Default rate limit maximum requests per window
pub const DEFAULT_RATE_LIMIT_MAX: u64 = 100;

/// Default telemetry service name
pub const DEFAULT_TELEMETRY_SERVICE_NAME: &str = "time-machines-backend";

/// Default per-call HTTP timeout, in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

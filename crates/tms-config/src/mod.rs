//! Configuration layer for the Time Machines SDK
//!
//! Three cooperating pieces:
//!
//! - [`settings`] — the typed, fully-defaulted settings tree
//! - [`schema`] — validation of a loosely-typed settings object into
//!   [`settings::AppSettings`], aggregating every violation in one pass
//! - [`loader`] — figment-based loading of [`settings::SdkSettings`] from
//!   defaults, an optional TOML file, and `TMS__`-prefixed environment
//!   variables
//!
//! [`require::require_paths`] enforces call-site-mandatory settings paths
//! independently of the schema.

pub mod constants;
pub mod loader;
pub mod require;
pub mod schema;
pub mod settings;

pub use loader::SettingsLoader;
pub use require::require_paths;
pub use schema::{safe_validate, validate, Validation};
pub use settings::{AppSettings, SdkSettings};

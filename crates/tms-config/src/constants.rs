//! Configuration constants

/// Environment variable prefix for settings overrides
pub const CONFIG_ENV_PREFIX: &str = "TMS";

/// Separator for nested keys in environment variables
/// (e.g., `TMS__AI__OPENAI__API_KEY` → `ai.openai.api_key`)
pub const ENV_NESTED_SEPARATOR: &str = "__";

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "tms.toml";

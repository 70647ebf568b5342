//! Settings schema validation
//!
//! Converts a loosely-typed settings object into a strict, fully-defaulted
//! [`AppSettings`], or reports every violation found. Unlike the loader's
//! section validators, nothing here fails fast: one pass collects every
//! `(path, message)` pair so a misconfigured deployment surfaces all of its
//! problems at once.
//!
//! Coercion rules: numeric strings become numbers for port fields (values
//! commonly arrive as text from environment variables); everything else is
//! type-checked strictly.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use tms_domain::constants::DEFAULT_PORT;
use tms_domain::error::{Error, Result, ValidationIssue};
use url::Url;

use crate::settings::{
    ApiSettings, AppSettings, CorsOrigin, CorsSettings, DatabaseSettings, Environment,
    MongoDbSettings, OpenAiSettings, PostgresSettings, RateLimitSettings, TelemetrySettings,
};

/// Connection strings that are not well-formed URLs must still carry the
/// mongodb scheme.
static MONGODB_URI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^mongodb://.+").expect("hard-coded pattern compiles"));

/// Outcome of [`safe_validate`]
#[derive(Debug)]
pub struct Validation {
    /// Whether the settings object passed every rule
    pub success: bool,
    /// The validated settings, present only on success
    pub data: Option<AppSettings>,
    /// Every violation found, in path order
    pub issues: Vec<ValidationIssue>,
}

/// Validate a raw settings object into [`AppSettings`]
///
/// On failure, every violation is logged in path order and the returned
/// [`Error::Validation`] carries the full structured list.
pub fn validate(raw: &Value) -> Result<AppSettings> {
    let outcome = safe_validate(raw);
    match outcome.data {
        Some(data) if outcome.success => Ok(data),
        _ => {
            tracing::error!(
                issue_count = outcome.issues.len(),
                "settings validation failed"
            );
            for issue in &outcome.issues {
                tracing::error!(path = %issue.path, message = %issue.message, "settings violation");
            }
            Err(Error::validation(outcome.issues))
        }
    }
}

/// Validate a raw settings object without failing
///
/// Same rules as [`validate`], but the full violation list is returned
/// instead of an error.
pub fn safe_validate(raw: &Value) -> Validation {
    let mut issues = Vec::new();

    if !raw.is_null() && !raw.is_object() {
        issues.push(ValidationIssue::new("$", "expected an object"));
        return Validation {
            success: false,
            data: None,
            issues,
        };
    }

    let data = AppSettings {
        port: check_port(&mut issues, raw, "port", DEFAULT_PORT),
        node_env: check_environment(&mut issues, raw, "node_env"),
        openai: check_openai(&mut issues, raw),
        database: check_database(&mut issues, raw),
        api: check_api(&mut issues, raw),
        cors: check_cors(&mut issues, raw),
        telemetry: check_telemetry(&mut issues, raw),
    };

    issues.sort_by(|a, b| a.path.cmp(&b.path));

    if issues.is_empty() {
        Validation {
            success: true,
            data: Some(data),
            issues,
        }
    } else {
        Validation {
            success: false,
            data: None,
            issues,
        }
    }
}

// ---------------------------------------------------------------------------
// Section checks
// ---------------------------------------------------------------------------

fn check_openai(issues: &mut Vec<ValidationIssue>, raw: &Value) -> OpenAiSettings {
    OpenAiSettings {
        api_key: check_required_string(
            issues,
            raw,
            "openai.api_key",
            "OpenAI API key is required",
        ),
        organization: check_optional_string(issues, raw, "openai.organization"),
    }
}

fn check_database(issues: &mut Vec<ValidationIssue>, raw: &Value) -> DatabaseSettings {
    let postgres_defaults = PostgresSettings::default();
    let postgres = PostgresSettings {
        host: check_string_with_default(
            issues,
            raw,
            "database.postgres.host",
            &postgres_defaults.host,
        ),
        port: check_port(issues, raw, "database.postgres.port", postgres_defaults.port),
        database: check_string_with_default(
            issues,
            raw,
            "database.postgres.database",
            &postgres_defaults.database,
        ),
        user: check_string_with_default(
            issues,
            raw,
            "database.postgres.user",
            &postgres_defaults.user,
        ),
        password: check_string_with_default(issues, raw, "database.postgres.password", ""),
    };

    let mongodb = MongoDbSettings {
        uri: check_mongodb_uri(issues, raw, "database.mongodb.uri"),
    };

    DatabaseSettings { postgres, mongodb }
}

fn check_api(issues: &mut Vec<ValidationIssue>, raw: &Value) -> ApiSettings {
    // Rate-limit defaults apply independently whether the parent section is
    // entirely absent or present but incomplete.
    let defaults = RateLimitSettings::default();
    ApiSettings {
        rate_limit: RateLimitSettings {
            window_ms: check_positive_integer(
                issues,
                raw,
                "api.rate_limit.window_ms",
                defaults.window_ms,
            ),
            max: check_positive_integer(issues, raw, "api.rate_limit.max", defaults.max),
        },
    }
}

fn check_cors(issues: &mut Vec<ValidationIssue>, raw: &Value) -> CorsSettings {
    let origin = match lookup(raw, "cors.origin") {
        None => {
            issues.push(ValidationIssue::new("cors.origin", "CORS origin is required"));
            CorsOrigin::default()
        }
        Some(Value::String(s)) => CorsOrigin::One(s.clone()),
        Some(Value::Array(items)) => {
            let mut origins = Vec::with_capacity(items.len());
            let mut valid = true;
            for item in items {
                match item {
                    Value::String(s) => origins.push(s.clone()),
                    _ => valid = false,
                }
            }
            if valid {
                CorsOrigin::Many(origins)
            } else {
                issues.push(ValidationIssue::new(
                    "cors.origin",
                    "expected a string or an array of strings",
                ));
                CorsOrigin::default()
            }
        }
        Some(_) => {
            issues.push(ValidationIssue::new(
                "cors.origin",
                "expected a string or an array of strings",
            ));
            CorsOrigin::default()
        }
    };

    CorsSettings {
        origin,
        credentials: check_bool(issues, raw, "cors.credentials", true),
    }
}

fn check_telemetry(issues: &mut Vec<ValidationIssue>, raw: &Value) -> Option<TelemetrySettings> {
    match lookup(raw, "telemetry") {
        None => None,
        Some(Value::Object(_)) => {
            let defaults = TelemetrySettings::default();
            let otlp_endpoint = check_optional_string(issues, raw, "telemetry.otlp_endpoint");
            if let Some(endpoint) = &otlp_endpoint {
                if Url::parse(endpoint).is_err() {
                    issues.push(ValidationIssue::new(
                        "telemetry.otlp_endpoint",
                        "expected a well-formed URL",
                    ));
                }
            }
            Some(TelemetrySettings {
                enabled: check_coerced_bool(issues, raw, "telemetry.enabled", defaults.enabled),
                service_name: check_string_with_default(
                    issues,
                    raw,
                    "telemetry.service_name",
                    &defaults.service_name,
                ),
                otlp_endpoint,
            })
        }
        Some(_) => {
            issues.push(ValidationIssue::new("telemetry", "expected an object"));
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Field checks
// ---------------------------------------------------------------------------

/// Resolve a dot-delimited path inside the raw tree. `null` counts as
/// absent so a re-serialized settings object validates the same way as the
/// original input.
fn lookup<'v>(raw: &'v Value, path: &str) -> Option<&'v Value> {
    path.split('.')
        .try_fold(raw, |current, key| current.get(key))
        .filter(|v| !v.is_null())
}

/// Port fields accept integers or numeric strings and must land in
/// `[1, 65535]`.
fn check_port(issues: &mut Vec<ValidationIssue>, raw: &Value, path: &str, default: u16) -> u16 {
    match lookup(raw, path) {
        None => default,
        Some(value) => match coerce_integer(value) {
            Some(n) if (1..=65535).contains(&n) => n as u16,
            _ => {
                issues.push(ValidationIssue::new(
                    path,
                    "expected an integer between 1 and 65535",
                ));
                default
            }
        },
    }
}

fn check_positive_integer(
    issues: &mut Vec<ValidationIssue>,
    raw: &Value,
    path: &str,
    default: u64,
) -> u64 {
    match lookup(raw, path) {
        None => default,
        Some(Value::Number(n)) => match n.as_u64() {
            Some(v) if v > 0 => v,
            _ => {
                issues.push(ValidationIssue::new(path, "expected a positive integer"));
                default
            }
        },
        Some(_) => {
            issues.push(ValidationIssue::new(path, "expected a positive integer"));
            default
        }
    }
}

fn check_required_string(
    issues: &mut Vec<ValidationIssue>,
    raw: &Value,
    path: &str,
    message: &str,
) -> String {
    match lookup(raw, path) {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::String(_)) | None => {
            issues.push(ValidationIssue::new(path, message));
            String::new()
        }
        Some(_) => {
            issues.push(ValidationIssue::new(path, "expected a string"));
            String::new()
        }
    }
}

fn check_string_with_default(
    issues: &mut Vec<ValidationIssue>,
    raw: &Value,
    path: &str,
    default: &str,
) -> String {
    match lookup(raw, path) {
        None => default.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(_) => {
            issues.push(ValidationIssue::new(path, "expected a string"));
            default.to_string()
        }
    }
}

fn check_optional_string(
    issues: &mut Vec<ValidationIssue>,
    raw: &Value,
    path: &str,
) -> Option<String> {
    match lookup(raw, path) {
        None => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            issues.push(ValidationIssue::new(path, "expected a string"));
            None
        }
    }
}

fn check_bool(issues: &mut Vec<ValidationIssue>, raw: &Value, path: &str, default: bool) -> bool {
    match lookup(raw, path) {
        None => default,
        Some(Value::Bool(b)) => *b,
        Some(_) => {
            issues.push(ValidationIssue::new(path, "expected a boolean"));
            default
        }
    }
}

/// Booleans that may arrive as text from environment variables.
fn check_coerced_bool(
    issues: &mut Vec<ValidationIssue>,
    raw: &Value,
    path: &str,
    default: bool,
) -> bool {
    match lookup(raw, path) {
        None => default,
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => match s.as_str() {
            "true" | "1" => true,
            "false" | "0" => false,
            _ => {
                issues.push(ValidationIssue::new(path, "expected a boolean"));
                default
            }
        },
        Some(_) => {
            issues.push(ValidationIssue::new(path, "expected a boolean"));
            default
        }
    }
}

fn check_environment(
    issues: &mut Vec<ValidationIssue>,
    raw: &Value,
    path: &str,
) -> Environment {
    match lookup(raw, path) {
        None => Environment::default(),
        Some(Value::String(s)) => match s.as_str() {
            "development" => Environment::Development,
            "production" => Environment::Production,
            "test" => Environment::Test,
            _ => {
                issues.push(ValidationIssue::new(
                    path,
                    "expected one of 'development', 'production', 'test'",
                ));
                Environment::default()
            }
        },
        Some(_) => {
            issues.push(ValidationIssue::new(
                path,
                "expected one of 'development', 'production', 'test'",
            ));
            Environment::default()
        }
    }
}

fn check_mongodb_uri(issues: &mut Vec<ValidationIssue>, raw: &Value, path: &str) -> String {
    match lookup(raw, path) {
        None => {
            issues.push(ValidationIssue::new(path, "MongoDB URI is required"));
            String::new()
        }
        Some(Value::String(s)) => {
            if Url::parse(s).is_ok() || MONGODB_URI_RE.is_match(s) {
                s.clone()
            } else {
                issues.push(ValidationIssue::new(
                    path,
                    "expected a URL or mongodb:// connection string",
                ));
                String::new()
            }
        }
        Some(_) => {
            issues.push(ValidationIssue::new(path, "expected a string"));
            String::new()
        }
    }
}

fn coerce_integer(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lookup_missing_intermediate_is_absent() {
        let raw = json!({ "openai": { "api_key": "sk-x" } });
        assert!(lookup(&raw, "database.mongodb.uri").is_none());
    }

    #[test]
    fn test_lookup_treats_null_as_absent() {
        let raw = json!({ "openai": { "organization": null } });
        assert!(lookup(&raw, "openai.organization").is_none());
    }

    #[test]
    fn test_port_coercion_from_string() {
        let mut issues = Vec::new();
        let raw = json!({ "port": "8080" });
        assert_eq!(check_port(&mut issues, &raw, "port", 3001), 8080);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_port_out_of_range_falls_back_to_default() {
        let mut issues = Vec::new();
        let raw = json!({ "port": 70000 });
        assert_eq!(check_port(&mut issues, &raw, "port", 3001), 3001);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path, "port");
    }

    #[test]
    fn test_mongodb_uri_accepts_scheme_prefix() {
        let mut issues = Vec::new();
        let raw = json!({ "uri": "mongodb://localhost/test" });
        assert_eq!(
            check_mongodb_uri(&mut issues, &raw, "uri"),
            "mongodb://localhost/test"
        );
        assert!(issues.is_empty());
    }

    #[test]
    fn test_mongodb_uri_rejects_plain_string() {
        let mut issues = Vec::new();
        let raw = json!({ "uri": "not a uri" });
        check_mongodb_uri(&mut issues, &raw, "uri");
        assert_eq!(issues.len(), 1);
    }
}

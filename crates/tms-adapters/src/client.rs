//! Capability probes and client connection state
//!
//! Every adapter wraps a vendor client handle that may legitimately be
//! absent: the endpoint URL does not parse, the HTTP client cannot be
//! built, or a credential is missing. Probing happens once, locally, at
//! construction time; a failed probe degrades the adapter to a
//! disconnected state instead of failing construction.

use std::time::Duration;

use tms_domain::constants::DEFAULT_HTTP_TIMEOUT_SECS;
use tms_domain::error::{Error, Result};
use tms_domain::ports::adapter::Adapter;
use url::Url;

/// Outcome of probing for a vendor capability
#[derive(Debug, Clone)]
pub enum Capability<T> {
    /// The client handle could be built
    Available(T),
    /// The capability is absent; the reason is kept for logging
    Unavailable(String),
}

/// Connection state of an adapter's internal client handle
#[derive(Debug, Clone, Default)]
pub enum ClientState<T> {
    /// No probe has run
    #[default]
    Uninitialized,
    /// Probe succeeded; the handle is usable
    Ready(T),
    /// Probe failed; the adapter stays constructed but disconnected
    Failed(String),
}

impl<T> ClientState<T> {
    /// Build the state from a probe outcome
    ///
    /// A failed probe logs a warning and degrades to `Failed`; it never
    /// propagates as an error out of adapter construction.
    pub fn from_probe(kind: &'static str, probe: Capability<T>) -> Self {
        match probe {
            Capability::Available(handle) => Self::Ready(handle),
            Capability::Unavailable(reason) => {
                tracing::warn!(
                    adapter = kind,
                    %reason,
                    "vendor client unavailable, adapter stays disconnected"
                );
                Self::Failed(reason)
            }
        }
    }

    /// True iff the handle is present
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Borrow the handle when ready
    pub fn get(&self) -> Option<&T> {
        match self {
            Self::Ready(handle) => Some(handle),
            Self::Uninitialized | Self::Failed(_) => None,
        }
    }

    /// Probe failure reason, if any
    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Failed(reason) => Some(reason),
            Self::Uninitialized | Self::Ready(_) => None,
        }
    }
}

/// Guard shared by every provider-specific operation
///
/// Rejects the call with `NotInitialized` when the adapter never reached a
/// connected state. Operations call this before anything else.
pub fn ensure_connected(adapter: &dyn Adapter) -> Result<()> {
    if adapter.is_connected() {
        Ok(())
    } else {
        Err(Error::not_initialized(adapter.kind()))
    }
}

/// Default timeout applied to probed HTTP clients
pub fn default_http_timeout() -> Duration {
    Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS)
}

/// Probe for an HTTP client with the given request timeout
pub fn probe_http_client(timeout: Duration) -> Capability<reqwest::Client> {
    match reqwest::Client::builder().timeout(timeout).build() {
        Ok(client) => Capability::Available(client),
        Err(e) => Capability::Unavailable(format!("failed to build HTTP client: {e}")),
    }
}

/// Probe an endpoint URL
///
/// An empty string is treated as "not configured" rather than a parse
/// error, so the log line stays readable.
pub fn probe_url(raw: &str) -> Capability<Url> {
    if raw.is_empty() {
        return Capability::Unavailable("endpoint URL is empty".to_string());
    }
    match Url::parse(raw) {
        Ok(url) => Capability::Available(url),
        Err(e) => Capability::Unavailable(format!("invalid endpoint URL {raw:?}: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_probe_degrades_instead_of_erroring() {
        let state: ClientState<Url> =
            ClientState::from_probe("test", probe_url("not a url at all"));
        assert!(!state.is_ready());
        assert!(state.get().is_none());
        assert!(state.failure().is_some());
    }

    #[test]
    fn test_empty_url_reports_not_configured() {
        match probe_url("") {
            Capability::Unavailable(reason) => assert_eq!(reason, "endpoint URL is empty"),
            Capability::Available(_) => panic!("empty URL must not probe as available"),
        }
    }

    #[test]
    fn test_valid_url_probes_available() {
        let state: ClientState<Url> =
            ClientState::from_probe("test", probe_url("https://example.com/api"));
        assert!(state.is_ready());
        assert_eq!(state.get().map(Url::as_str), Some("https://example.com/api"));
    }

    #[test]
    fn test_http_client_probe_succeeds_with_default_timeout() {
        let state = ClientState::from_probe("test", probe_http_client(default_http_timeout()));
        assert!(state.is_ready());
    }

    #[test]
    fn test_default_state_is_uninitialized() {
        let state = ClientState::<Url>::default();
        assert!(!state.is_ready());
        assert!(state.failure().is_none());
    }
}

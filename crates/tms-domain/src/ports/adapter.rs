//! Capability adapter port
//!
//! Uniform shape over heterogeneous vendor clients so the factory and
//! calling code never special-case providers. Provider-specific operations
//! live as inherent methods on the concrete adapter types; this port only
//! carries the contract every adapter shares.

use async_trait::async_trait;

use crate::error::Result;

/// Uniform wrapper over a vendor-specific client
///
/// Implementations hold an internal client handle that may be absent when
/// the capability probe failed or required credentials are missing;
/// `is_connected()` reports that state without performing any network I/O.
#[async_trait]
pub trait Adapter: Send + Sync {
    /// Fixed string tag identifying the provider (logging/telemetry only,
    /// never used for dispatch)
    fn kind(&self) -> &'static str;

    /// True iff the underlying client was constructed and the minimum
    /// required credential or URL is present. Pure local check.
    fn is_connected(&self) -> bool;

    /// Release any held connection. Must be a no-op when no connection
    /// exists and safe to call multiple times. This is the only adapter
    /// operation permitted to suspend.
    async fn disconnect(&self) -> Result<()>;
}

impl std::fmt::Debug for dyn Adapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Adapter").field("kind", &self.kind()).finish()
    }
}

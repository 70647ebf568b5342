//! Closed provider registries
//!
//! Each category keeps a static table of `ProviderEntry` values; the set of
//! supported providers is fixed at compile time. Resolution walks the table
//! and rejects anything outside it, so adding a provider means adding an
//! entry, never registering at runtime.

use std::sync::Arc;

use tms_domain::error::{Error, Result};
use tms_domain::ports::adapter::Adapter;

/// One provider in a category registry
///
/// `S` is the category settings type the builder consumes; builders may
/// reject a request (e.g. an optional subtree is absent) but never perform
/// network I/O.
pub struct ProviderEntry<S: 'static> {
    /// Provider name as used by the factory
    pub name: &'static str,
    /// Short human-readable description for listings
    pub description: &'static str,
    /// Adapter constructor over the category settings
    pub build: fn(&S) -> Result<Arc<dyn Adapter>>,
}

/// Resolve a provider name against a category table
pub fn resolve<S>(
    entries: &[ProviderEntry<S>],
    category: &str,
    settings: &S,
    name: &str,
) -> Result<Arc<dyn Adapter>> {
    match entries.iter().find(|entry| entry.name == name) {
        Some(entry) => (entry.build)(settings),
        None => {
            tracing::debug!(
                category,
                name,
                available = ?entries.iter().map(|e| e.name).collect::<Vec<_>>(),
                "provider not in registry"
            );
            Err(Error::unknown_provider(category, name))
        }
    }
}

/// List `(name, description)` pairs of a category table
pub fn list<S>(entries: &[ProviderEntry<S>]) -> Vec<(&'static str, &'static str)> {
    entries
        .iter()
        .map(|entry| (entry.name, entry.description))
        .collect()
}

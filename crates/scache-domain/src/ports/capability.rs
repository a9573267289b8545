//! Capability resolution within a cache namespace

use crate::value_objects::{CacheRequirement, ServiceName};

/// Resolves logical requirements to concrete service names
///
/// Implementations are scoped to one cache namespace. Requirements they do
/// not recognize resolve to `None` so callers can probe for support.
pub trait CapabilityRegistry: Send + Sync {
    /// Service name fulfilling `requirement`, if this namespace offers it
    fn resolve(&self, requirement: CacheRequirement) -> Option<ServiceName>;
}

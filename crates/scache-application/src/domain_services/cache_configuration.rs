//! Cache configuration derivation
//!
//! Session-owned entries must never expire from the store and only group
//! entries may be evicted; member entries leave the cache when the engine
//! cascades the eviction of their group.

use scache_domain::value_objects::services::cache_configuration_service_name;
use scache_domain::{
    CacheConfiguration, CacheNamespace, EvictionPolicy, ExpirationPolicy, StorageType,
};
use tracing::warn;

/// Eviction policy for an optional entry bound
pub fn derive_eviction(max_active_entries: Option<u64>) -> EvictionPolicy {
    match max_active_entries {
        Some(max) => EvictionPolicy::remove_on_full(max),
        None => EvictionPolicy::disabled(),
    }
}

/// Derives the configuration of a session cache from its template
#[derive(Debug, Clone)]
pub struct CacheConfigurationDeriver {
    namespace: CacheNamespace,
    template_cache_name: String,
    max_active_entries: Option<u64>,
}

impl CacheConfigurationDeriver {
    /// Deriver for `namespace` based on `template_cache_name` in the same container
    pub fn new(
        namespace: CacheNamespace,
        template_cache_name: impl Into<String>,
        max_active_entries: Option<u64>,
    ) -> Self {
        Self {
            namespace,
            template_cache_name: template_cache_name.into(),
            max_active_entries,
        }
    }

    /// Namespace of the derived cache
    pub fn namespace(&self) -> &CacheNamespace {
        &self.namespace
    }

    /// Template cache name
    pub fn template_cache_name(&self) -> &str {
        &self.template_cache_name
    }

    /// Configured entry bound
    pub fn max_active_entries(&self) -> Option<u64> {
        self.max_active_entries
    }

    /// Derive the final configuration from `template`
    ///
    /// Expiration is always disabled; a warning names the template when it
    /// had expiration enabled. Eviction comes from the entry bound alone.
    pub fn derive(&self, template: &CacheConfiguration) -> CacheConfiguration {
        if template.expiration.is_enabled() {
            warn!(
                template = %cache_configuration_service_name(
                    self.namespace.container_name(),
                    &self.template_cache_name,
                ),
                lifespan_ms = template.expiration.lifespan_millis(),
                max_idle_ms = template.expiration.max_idle_millis(),
                "Expiration is not supported for session caches and has been disabled"
            );
        }

        CacheConfiguration {
            expiration: ExpirationPolicy::disabled(),
            eviction: derive_eviction(self.max_active_entries),
            storage: StorageType::Heap,
            persistence: template.persistence.clone(),
        }
    }
}

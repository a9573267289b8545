//! Capability registry scoped to one cache namespace

use scache_domain::{CacheNamespace, CacheRequirement, CapabilityRegistry, ServiceName};

/// Resolves the capabilities the core itself fulfils for a namespace
///
/// Only [`CacheRequirement::Group`] is recognized; everything else is
/// unresolved.
#[derive(Debug, Clone)]
pub struct NamespaceCapabilityRegistry {
    namespace: CacheNamespace,
}

impl NamespaceCapabilityRegistry {
    /// Registry for `namespace`
    pub fn new(namespace: CacheNamespace) -> Self {
        Self { namespace }
    }

    /// Namespace the registry is scoped to
    pub fn namespace(&self) -> &CacheNamespace {
        &self.namespace
    }
}

impl CapabilityRegistry for NamespaceCapabilityRegistry {
    fn resolve(&self, requirement: CacheRequirement) -> Option<ServiceName> {
        match requirement {
            CacheRequirement::Group => Some(requirement.service_name(&self.namespace)),
            _ => None,
        }
    }
}

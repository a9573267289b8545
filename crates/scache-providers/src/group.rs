//! Cache-backed membership group

use std::sync::Arc;

use scache_application::ports::registry::{PROVISIONING_PROVIDERS, ProvisioningProviderEntry};
use scache_application::steps::CacheDescriptor;
use scache_domain::value_objects::services::cache_service_name;
use scache_domain::{
    CacheNamespace, CacheProvisioningProvider, CacheRequirement, CapabilityRegistry, Dependency,
    ProvisioningStep, Requirements, Result, ServiceDependency, ServiceName, ServiceValue,
};
use serde::Serialize;
use tracing::debug;

/// Group service published for a cache
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheGroup {
    /// Service name of the group
    pub name: ServiceName,
    /// Namespace of the backing cache
    pub namespace: CacheNamespace,
}

/// Installs the group service on top of the cache
pub struct CacheGroupStep {
    service_name: ServiceName,
    namespace: CacheNamespace,
    cache: ServiceDependency<CacheDescriptor>,
}

impl CacheGroupStep {
    /// Group named `service_name` backed by the cache of `namespace`
    pub fn new(service_name: ServiceName, namespace: CacheNamespace) -> Self {
        let cache = ServiceDependency::new(cache_service_name(&namespace));
        Self {
            service_name,
            namespace,
            cache,
        }
    }
}

impl ProvisioningStep for CacheGroupStep {
    fn service_name(&self) -> &ServiceName {
        &self.service_name
    }

    fn register(&self, requirements: &mut Requirements) {
        self.cache.register(requirements);
    }

    fn execute(&self) -> Result<Option<ServiceValue>> {
        let cache = self.cache.get()?;
        debug!(group = %self.service_name, cache = %cache.namespace, "Starting cache group");
        Ok(Some(Arc::new(CacheGroup {
            name: self.service_name.clone(),
            namespace: self.namespace.clone(),
        })))
    }
}

/// Contributes a [`CacheGroupStep`] wherever the group capability resolves
#[derive(Debug, Default)]
pub struct CacheGroupProvider;

impl CacheProvisioningProvider for CacheGroupProvider {
    fn name(&self) -> &str {
        "group"
    }

    fn contribute(
        &self,
        registry: &dyn CapabilityRegistry,
        container_name: &str,
        cache_name: &str,
    ) -> Result<Vec<Arc<dyn ProvisioningStep>>> {
        let Some(group) = registry.resolve(CacheRequirement::Group) else {
            debug!(container = container_name, cache = cache_name, "Group capability unresolved");
            return Ok(Vec::new());
        };
        let namespace = CacheNamespace::new(container_name, cache_name);
        Ok(vec![Arc::new(CacheGroupStep::new(group, namespace))])
    }
}

fn group_provider_factory() -> std::result::Result<Arc<dyn CacheProvisioningProvider>, String> {
    Ok(Arc::new(CacheGroupProvider))
}

#[linkme::distributed_slice(PROVISIONING_PROVIDERS)]
static GROUP_PROVIDER: ProvisioningProviderEntry = ProvisioningProviderEntry {
    name: "group",
    description: "Cache-backed membership group",
    factory: group_provider_factory,
};

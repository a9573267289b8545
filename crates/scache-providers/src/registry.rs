//! Service provider registry backed by the cache group

use std::sync::Arc;

use scache_application::ports::registry::{PROVISIONING_PROVIDERS, ProvisioningProviderEntry};
use scache_domain::{
    CacheNamespace, CacheProvisioningProvider, CacheRequirement, CapabilityRegistry, Dependency,
    ProvisioningStep, Requirements, Result, ServiceDependency, ServiceName, ServiceValue,
};
use serde::Serialize;
use tracing::debug;

use crate::group::CacheGroup;

/// Registry service published for a cache
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceProviderRegistry {
    /// Service name of the registry
    pub name: ServiceName,
    /// Group the registry tracks membership through
    pub group: ServiceName,
}

/// Installs a service provider registry over a group
pub struct ServiceProviderRegistryStep {
    service_name: ServiceName,
    group: ServiceDependency<CacheGroup>,
}

impl ServiceProviderRegistryStep {
    /// Registry named `service_name` tracking `group`
    pub fn new(service_name: ServiceName, group: ServiceName) -> Self {
        Self {
            service_name,
            group: ServiceDependency::new(group),
        }
    }
}

impl ProvisioningStep for ServiceProviderRegistryStep {
    fn service_name(&self) -> &ServiceName {
        &self.service_name
    }

    fn register(&self, requirements: &mut Requirements) {
        self.group.register(requirements);
    }

    fn execute(&self) -> Result<Option<ServiceValue>> {
        let group = self.group.get()?;
        Ok(Some(Arc::new(ServiceProviderRegistry {
            name: self.service_name.clone(),
            group: group.name.clone(),
        })))
    }
}

/// Contributes a [`ServiceProviderRegistryStep`] for every cache with a group
#[derive(Debug, Default)]
pub struct ServiceProviderRegistryProvider;

impl CacheProvisioningProvider for ServiceProviderRegistryProvider {
    fn name(&self) -> &str {
        "service-provider-registry"
    }

    fn contribute(
        &self,
        registry: &dyn CapabilityRegistry,
        container_name: &str,
        cache_name: &str,
    ) -> Result<Vec<Arc<dyn ProvisioningStep>>> {
        let Some(group) = registry.resolve(CacheRequirement::Group) else {
            debug!(container = container_name, cache = cache_name, "No group to track");
            return Ok(Vec::new());
        };
        let namespace = CacheNamespace::new(container_name, cache_name);
        let name = CacheRequirement::ServiceProviderRegistry.service_name(&namespace);
        Ok(vec![Arc::new(ServiceProviderRegistryStep::new(name, group))])
    }
}

fn registry_provider_factory() -> std::result::Result<Arc<dyn CacheProvisioningProvider>, String> {
    Ok(Arc::new(ServiceProviderRegistryProvider))
}

#[linkme::distributed_slice(PROVISIONING_PROVIDERS)]
static SERVICE_PROVIDER_REGISTRY_PROVIDER: ProvisioningProviderEntry = ProvisioningProviderEntry {
    name: "service-provider-registry",
    description: "Service provider registry tracking the cache group",
    factory: registry_provider_factory,
};

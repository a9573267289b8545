//! Cache service step

use std::sync::Arc;

use scache_domain::value_objects::MarshallingContext;
use scache_domain::value_objects::services::cache_service_name;
use scache_domain::{
    CacheConfiguration, CacheNamespace, Dependency, ProvisioningStep, Requirements, Result,
    ServiceDependency, ServiceName, ServiceValue,
};
use serde::Serialize;

/// What the cache step hands to the cache engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheDescriptor {
    /// Namespace of the cache
    pub namespace: CacheNamespace,
    /// Derived configuration
    pub configuration: CacheConfiguration,
    /// Marshalling context of the owner
    pub marshalling: MarshallingContext,
}

/// Starts the cache of a namespace
pub struct CacheStep {
    service_name: ServiceName,
    namespace: CacheNamespace,
    configuration: ServiceDependency<CacheConfiguration>,
    marshalling: ServiceDependency<MarshallingContext>,
}

impl CacheStep {
    /// Cache for `namespace`, configured by `configuration` and marshalled
    /// by the service `marshalling`
    pub fn new(
        namespace: CacheNamespace,
        configuration: ServiceDependency<CacheConfiguration>,
        marshalling: ServiceName,
    ) -> Self {
        Self {
            service_name: cache_service_name(&namespace),
            namespace,
            configuration,
            marshalling: ServiceDependency::new(marshalling),
        }
    }

    /// Dependency on the cache this step publishes
    pub fn output(&self) -> ServiceDependency<CacheDescriptor> {
        ServiceDependency::new(self.service_name.clone())
    }
}

impl ProvisioningStep for CacheStep {
    fn service_name(&self) -> &ServiceName {
        &self.service_name
    }

    fn register(&self, requirements: &mut Requirements) {
        self.configuration.register(requirements);
        self.marshalling.register(requirements);
    }

    fn execute(&self) -> Result<Option<ServiceValue>> {
        let descriptor = CacheDescriptor {
            namespace: self.namespace.clone(),
            configuration: self.configuration.get()?.clone(),
            marshalling: self.marshalling.get()?.clone(),
        };
        Ok(Some(Arc::new(descriptor)))
    }
}

//! Derived cache configuration step

use std::sync::Arc;

use scache_domain::value_objects::services::cache_configuration_service_name;
use scache_domain::{
    CacheConfiguration, Dependency, ProvisioningStep, Requirements, Result, ServiceDependency,
    ServiceName, ServiceValue, StoreConfiguration,
};

use crate::domain_services::CacheConfigurationDeriver;

/// Publishes the configuration derived from a template cache
pub struct TemplateConfigurationStep {
    service_name: ServiceName,
    deriver: CacheConfigurationDeriver,
    template: ServiceDependency<CacheConfiguration>,
    store: Option<ServiceDependency<StoreConfiguration>>,
}

impl TemplateConfigurationStep {
    /// Step deriving the configuration described by `deriver`
    pub fn new(deriver: CacheConfigurationDeriver) -> Self {
        let namespace = deriver.namespace();
        let service_name =
            cache_configuration_service_name(namespace.container_name(), namespace.cache_name());
        let template = ServiceDependency::new(cache_configuration_service_name(
            namespace.container_name(),
            deriver.template_cache_name(),
        ));
        Self {
            service_name,
            deriver,
            template,
            store: None,
        }
    }

    /// Persist entries using the configuration published by `store`
    pub fn with_store(mut self, store: ServiceDependency<StoreConfiguration>) -> Self {
        self.store = Some(store);
        self
    }

    /// Dependency on the configuration this step publishes
    pub fn output(&self) -> ServiceDependency<CacheConfiguration> {
        ServiceDependency::new(self.service_name.clone())
    }
}

impl ProvisioningStep for TemplateConfigurationStep {
    fn service_name(&self) -> &ServiceName {
        &self.service_name
    }

    fn register(&self, requirements: &mut Requirements) {
        self.template.register(requirements);
        if let Some(store) = &self.store {
            store.register(requirements);
        }
    }

    fn execute(&self) -> Result<Option<ServiceValue>> {
        let derived = self.deriver.derive(self.template.get()?);
        let configuration = match &self.store {
            Some(store) => CacheConfiguration {
                persistence: Some(store.get()?.clone()),
                ..derived
            },
            None => derived,
        };
        Ok(Some(Arc::new(configuration)))
    }
}

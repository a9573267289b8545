//! Persistent store configuration step

use std::sync::Arc;

use scache_domain::value_objects::services::{
    container_modules_service_name, data_source_service_name, store_configuration_service_name,
    string_table_service_name,
};
use scache_domain::value_objects::{DataSourceDescriptor, ExtensionModule, TableSchema};
use scache_domain::{
    CacheNamespace, Dependency, DependencyComposite, ProvisioningStep, Requirements, Result,
    ServiceDependency, ServiceName, ServiceValue, StoreConfiguration,
};

use crate::domain_services::StoreConfigurationDeriver;

/// Derives the store configuration once its inputs are available
pub struct StoreConfigurationStep {
    service_name: ServiceName,
    deriver: StoreConfigurationDeriver,
    table: ServiceDependency<TableSchema>,
    modules: ServiceDependency<Vec<ExtensionModule>>,
    data_source: ServiceDependency<DataSourceDescriptor>,
    dependencies: DependencyComposite,
}

impl StoreConfigurationStep {
    /// Step for `namespace` using `deriver`
    pub fn new(namespace: &CacheNamespace, deriver: StoreConfigurationDeriver) -> Self {
        let table = ServiceDependency::new(string_table_service_name(namespace));
        let modules = ServiceDependency::new(container_modules_service_name(
            namespace.container_name(),
        ));
        let data_source =
            ServiceDependency::new(data_source_service_name(deriver.data_source_name()));
        let dependencies = DependencyComposite::new()
            .with(&table)
            .with(&modules)
            .with(&data_source);
        Self {
            service_name: store_configuration_service_name(namespace),
            deriver,
            table,
            modules,
            data_source,
            dependencies,
        }
    }

    /// Dependency on the configuration this step publishes
    pub fn output(&self) -> ServiceDependency<StoreConfiguration> {
        ServiceDependency::new(self.service_name.clone())
    }
}

impl ProvisioningStep for StoreConfigurationStep {
    fn service_name(&self) -> &ServiceName {
        &self.service_name
    }

    fn register(&self, requirements: &mut Requirements) {
        self.dependencies.register(requirements);
    }

    fn execute(&self) -> Result<Option<ServiceValue>> {
        let configuration =
            self.deriver
                .derive(self.table.get()?, self.modules.get()?, self.data_source.get()?);
        Ok(Some(Arc::new(configuration)))
    }
}

//! Provisioning plan composition
//!
//! A plan is the core steps followed by every discovered provider's
//! contribution. Providers are consulted lazily while the plan is traversed,
//! so enumeration cost and provider failures both surface at traversal time.
//! The first failure ends the plan; [`ProvisioningPlan::into_steps`] turns
//! it into an error with no partial plan.

use std::sync::Arc;

use scache_domain::constants::MARSHALLING_SEGMENT;
use scache_domain::value_objects::services::cache_configuration_service_name;
use scache_domain::{
    CacheNamespace, ProvisioningConfiguration, ProvisioningStep, Result, ServiceName,
};
use tracing::{debug, info};

use crate::domain_services::{
    CacheConfigurationDeriver, NamespaceCapabilityRegistry, StoreConfigurationDeriver,
};
use crate::ports::registry::{ProviderRegistry, ProviderSlot};
use crate::steps::{CacheStep, StoreConfigurationStep, TemplateConfigurationStep};

/// Builds provisioning plans for caches created by one cache factory
#[derive(Clone)]
pub struct ProvisioningPlanComposer<'a> {
    name: String,
    config: ProvisioningConfiguration,
    providers: Option<&'a ProviderRegistry>,
}

impl ProvisioningPlanComposer<'static> {
    /// Composer for the factory `name`, using the process-wide providers
    pub fn new(name: impl Into<String>, config: ProvisioningConfiguration) -> Self {
        Self {
            name: name.into(),
            config,
            providers: None,
        }
    }
}

impl<'a> ProvisioningPlanComposer<'a> {
    /// Use `providers` instead of the process-wide registry
    pub fn with_providers<'b>(
        self,
        providers: &'b ProviderRegistry,
    ) -> ProvisioningPlanComposer<'b> {
        ProvisioningPlanComposer {
            name: self.name,
            config: self.config,
            providers: Some(providers),
        }
    }

    /// Factory name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Provisioning configuration
    pub fn config(&self) -> &ProvisioningConfiguration {
        &self.config
    }

    /// Namespace of the cache provisioned for `owner`
    pub fn namespace(&self, owner: &ServiceName) -> Result<CacheNamespace> {
        CacheNamespace::for_owner(self.config.container_name.as_str(), owner, &self.name)
    }

    /// Compose the plan for the deployment unit `owner`
    ///
    /// Fails before producing any step when the store dialect is unknown or
    /// the owner and factory names cannot form a cache name.
    pub fn compose(&self, owner: &ServiceName) -> Result<ProvisioningPlan<'a>> {
        let namespace = self.namespace(owner)?;
        let mut core: Vec<Arc<dyn ProvisioningStep>> = Vec::with_capacity(3);

        let mut configuration = TemplateConfigurationStep::new(CacheConfigurationDeriver::new(
            namespace.clone(),
            self.config.template_cache_name.as_str(),
            self.config.max_active_entries,
        ));

        if let Some(store) = &self.config.store {
            let deriver = StoreConfigurationDeriver::new(
                store.data_source.as_str(),
                store.dialect.as_deref(),
            )?;
            let store_step = StoreConfigurationStep::new(&namespace, deriver);
            configuration = configuration.with_store(store_step.output());
            core.push(Arc::new(store_step));
        }

        let cache = CacheStep::new(
            namespace.clone(),
            configuration.output(),
            owner.append([MARSHALLING_SEGMENT]),
        );
        core.push(Arc::new(configuration));
        core.push(Arc::new(cache));

        info!(
            owner = %owner,
            container = namespace.container_name(),
            cache = namespace.cache_name(),
            template = %cache_configuration_service_name(
                namespace.container_name(),
                &self.config.template_cache_name,
            ),
            "Composed provisioning plan"
        );

        Ok(ProvisioningPlan::new(namespace, core, self.providers))
    }
}

/// Lazily evaluated, ordered sequence of provisioning steps
pub struct ProvisioningPlan<'a> {
    registry: NamespaceCapabilityRegistry,
    core: std::vec::IntoIter<Arc<dyn ProvisioningStep>>,
    providers: Option<&'a ProviderRegistry>,
    remaining: Option<std::slice::Iter<'a, ProviderSlot>>,
    contributed: std::vec::IntoIter<Arc<dyn ProvisioningStep>>,
    failed: bool,
}

impl<'a> ProvisioningPlan<'a> {
    fn new(
        namespace: CacheNamespace,
        core: Vec<Arc<dyn ProvisioningStep>>,
        providers: Option<&'a ProviderRegistry>,
    ) -> Self {
        Self {
            registry: NamespaceCapabilityRegistry::new(namespace),
            core: core.into_iter(),
            providers,
            remaining: None,
            contributed: Vec::new().into_iter(),
            failed: false,
        }
    }

    /// Namespace of the provisioned cache
    pub fn namespace(&self) -> &CacheNamespace {
        self.registry.namespace()
    }

    /// Capability registry handed to providers
    pub fn registry(&self) -> &NamespaceCapabilityRegistry {
        &self.registry
    }

    /// Traverse the whole plan; any failure discards every step
    pub fn into_steps(self) -> Result<Vec<Arc<dyn ProvisioningStep>>> {
        self.collect()
    }
}

impl<'a> Iterator for ProvisioningPlan<'a> {
    type Item = Result<Arc<dyn ProvisioningStep>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        if let Some(step) = self.core.next() {
            return Some(Ok(step));
        }

        let providers = self.providers;
        loop {
            if let Some(step) = self.contributed.next() {
                return Some(Ok(step));
            }

            let remaining = self.remaining.get_or_insert_with(|| {
                providers
                    .unwrap_or_else(|| ProviderRegistry::registered())
                    .slots()
                    .iter()
            });
            let slot = remaining.next()?;

            let namespace = self.registry.namespace();
            match slot.contribute(
                &self.registry,
                namespace.container_name(),
                namespace.cache_name(),
            ) {
                Ok(steps) => self.contributed = steps.into_iter(),
                Err(err) => {
                    debug!(provider = slot.name(), error = %err, "Provider aborted the plan");
                    self.failed = true;
                    return Some(Err(err));
                }
            }
        }
    }
}

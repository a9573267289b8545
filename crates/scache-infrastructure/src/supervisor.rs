//! In-process supervisor
//!
//! Runs a provisioning plan against services published by the hosting
//! environment. Steps run strictly in plan order; a step whose dependency
//! has not been started fails the run.

use std::collections::HashMap;
use std::sync::Arc;

use scache_application::ProvisioningPlan;
use scache_domain::value_objects::MarshallingContext;
use scache_domain::value_objects::services::{
    cache_configuration_service_name, container_modules_service_name, data_source_service_name,
    string_table_service_name,
};
use scache_domain::{
    CacheNamespace, DeploymentUnit, Error, ProvisioningStep, Requirements, Result, ServiceName,
    ServiceValue, StepDescriptor,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::EnvironmentConfig;

/// Outcome of a supervised plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProvisioningReport {
    /// Namespace of the provisioned cache
    pub namespace: CacheNamespace,
    /// Steps of the plan, in execution order
    pub steps: Vec<StepDescriptor>,
}

impl ProvisioningReport {
    /// Services started by the plan, in order
    pub fn started(&self) -> Vec<&ServiceName> {
        self.steps.iter().map(|step| &step.service).collect()
    }
}

/// Executes provisioning steps in process
#[derive(Default)]
pub struct Supervisor {
    services: HashMap<ServiceName, ServiceValue>,
}

impl Supervisor {
    /// Supervisor with no services
    pub fn new() -> Self {
        Self::default()
    }

    /// Supervisor offering the services declared by `environment`
    ///
    /// `namespace` selects the string table published for the store and
    /// `owner` the deployment unit whose marshalling context is published.
    pub fn with_environment(
        environment: &EnvironmentConfig,
        namespace: &CacheNamespace,
        owner: &DeploymentUnit,
    ) -> Self {
        let mut supervisor = Self::new();
        for (container, declared) in &environment.containers {
            for (template, config) in &declared.templates {
                supervisor.provide(
                    cache_configuration_service_name(container, template),
                    config.to_cache_configuration(),
                );
            }
            supervisor.provide(
                container_modules_service_name(container),
                declared.modules.clone(),
            );
        }
        for name in environment.data_sources.keys() {
            if let Some(descriptor) = environment.data_source(name) {
                supervisor.provide(data_source_service_name(name), descriptor);
            }
        }
        supervisor.provide(
            string_table_service_name(namespace),
            environment.table.clone(),
        );
        supervisor.provide(
            owner.marshalling_service_name(),
            MarshallingContext {
                owner: owner.service_name().canonical_name(),
            },
        );
        supervisor
    }

    /// Publish an externally started service
    pub fn provide<T: Send + Sync + 'static>(&mut self, name: ServiceName, value: T) -> &mut Self {
        self.services.insert(name, Arc::new(value));
        self
    }

    /// Whether `name` has been started or provided
    pub fn contains(&self, name: &ServiceName) -> bool {
        self.services.contains_key(name)
    }

    /// Value of the service `name`, if started with a value of type `T`
    pub fn service<T: Send + Sync + 'static>(&self, name: &ServiceName) -> Option<Arc<T>> {
        self.services
            .get(name)
            .cloned()
            .and_then(|value| value.downcast::<T>().ok())
    }

    /// Resolve the dependencies of `step`, run it and publish its service
    pub fn start(&mut self, step: &dyn ProvisioningStep) -> Result<()> {
        let mut requirements = Requirements::new();
        step.register(&mut requirements);

        for slot in requirements.slots() {
            let value = self.services.get(slot.service_name()).ok_or_else(|| {
                Error::dependency_resolution(step.service_name(), slot.service_name())
            })?;
            slot.supply(Arc::clone(value))?;
        }

        let value = step.execute()?;
        debug!(
            service = %step.service_name(),
            dependencies = requirements.len(),
            "Started service"
        );
        self.services.insert(
            step.service_name().clone(),
            value.unwrap_or_else(|| Arc::new(())),
        );
        Ok(())
    }

    /// Run every step of `plan`
    ///
    /// The plan is traversed in full before the first step starts, so a
    /// provider failure leaves the supervisor untouched.
    pub fn execute(&mut self, plan: ProvisioningPlan<'_>) -> Result<ProvisioningReport> {
        let namespace = plan.namespace().clone();
        let steps = plan.into_steps()?;

        let mut descriptors = Vec::with_capacity(steps.len());
        for step in &steps {
            descriptors.push(step.describe());
            self.start(step.as_ref())?;
        }

        info!(
            namespace = %namespace,
            services = descriptors.len(),
            "Provisioning plan completed"
        );
        Ok(ProvisioningReport {
            namespace,
            steps: descriptors,
        })
    }
}

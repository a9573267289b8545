//! Tests for provisioning plan composition

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use scache_application::{CacheDescriptor, ProviderRegistry, ProvisioningPlanComposer};
use scache_domain::value_objects::services::{
    cache_configuration_service_name, cache_service_name, container_modules_service_name,
    data_source_service_name, store_configuration_service_name, string_table_service_name,
};
use scache_domain::value_objects::{
    DataSourceDescriptor, ExtensionModule, MarshallingContext, TableSchema,
};
use scache_domain::{
    CacheConfiguration, CacheNamespace, CacheProvisioningProvider, CacheRequirement,
    CapabilityRegistry, DeploymentUnit, Error, ExpirationPolicy, ProvisioningConfiguration,
    ProvisioningStep, Requirements, Result, ServiceName, ServiceValue,
};

/// Provider contributing one marker step per call, counting its invocations
struct CountingProvider {
    name: &'static str,
    calls: Arc<AtomicUsize>,
}

impl CacheProvisioningProvider for CountingProvider {
    fn name(&self) -> &str {
        self.name
    }

    fn contribute(
        &self,
        _registry: &dyn CapabilityRegistry,
        container_name: &str,
        cache_name: &str,
    ) -> Result<Vec<Arc<dyn ProvisioningStep>>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let name = ServiceName::new(self.name).append([container_name, cache_name]);
        Ok(vec![Arc::new(MarkerStep(name))])
    }
}

struct FailingProvider;

impl CacheProvisioningProvider for FailingProvider {
    fn name(&self) -> &str {
        "failing"
    }

    fn contribute(
        &self,
        _registry: &dyn CapabilityRegistry,
        _container_name: &str,
        _cache_name: &str,
    ) -> Result<Vec<Arc<dyn ProvisioningStep>>> {
        Err(Error::provider("failing", "module not installed"))
    }
}

/// Provider asking for a capability the core does not offer
struct RegistryConsumer;

impl CacheProvisioningProvider for RegistryConsumer {
    fn name(&self) -> &str {
        "registry-consumer"
    }

    fn contribute(
        &self,
        registry: &dyn CapabilityRegistry,
        _container_name: &str,
        _cache_name: &str,
    ) -> Result<Vec<Arc<dyn ProvisioningStep>>> {
        Ok(registry
            .resolve(CacheRequirement::Registry)
            .map(|name| Arc::new(MarkerStep(name)) as Arc<dyn ProvisioningStep>)
            .into_iter()
            .collect())
    }
}

struct MarkerStep(ServiceName);

impl ProvisioningStep for MarkerStep {
    fn service_name(&self) -> &ServiceName {
        &self.0
    }

    fn register(&self, _requirements: &mut Requirements) {}

    fn execute(&self) -> Result<Option<ServiceValue>> {
        Ok(None)
    }
}

fn counting(name: &'static str) -> (Arc<dyn CacheProvisioningProvider>, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let provider = CountingProvider {
        name,
        calls: Arc::clone(&calls),
    };
    (Arc::new(provider), calls)
}

fn owner() -> ServiceName {
    DeploymentUnit::sub_unit("app.ear", "module.war").service_name()
}

fn service_names(steps: &[Arc<dyn ProvisioningStep>]) -> Vec<ServiceName> {
    steps.iter().map(|step| step.service_name().clone()).collect()
}

/// Execute `steps` in order, supplying dependencies from `services`
fn run(
    steps: &[Arc<dyn ProvisioningStep>],
    mut services: HashMap<ServiceName, ServiceValue>,
) -> Result<HashMap<ServiceName, ServiceValue>> {
    for step in steps {
        let mut requirements = Requirements::new();
        step.register(&mut requirements);
        for slot in requirements.slots() {
            let value = services.get(slot.service_name()).cloned().ok_or_else(|| {
                Error::dependency_resolution(step.service_name(), slot.service_name())
            })?;
            slot.supply(value)?;
        }
        if let Some(value) = step.execute()? {
            services.insert(step.service_name().clone(), value);
        }
    }
    Ok(services)
}

#[test]
fn test_core_plan_without_store() {
    let providers = ProviderRegistry::empty();
    let composer =
        ProvisioningPlanComposer::new("passivation", ProvisioningConfiguration::default())
            .with_providers(&providers);

    let plan = composer.compose(&owner()).unwrap();
    let namespace = plan.namespace().clone();
    let steps = plan.into_steps().unwrap();

    assert_eq!(
        namespace,
        CacheNamespace::new("session", "app.ear/module.war/passivation")
    );
    assert_eq!(
        service_names(&steps),
        vec![
            cache_configuration_service_name("session", "app.ear/module.war/passivation"),
            cache_service_name(&namespace),
        ]
    );
}

#[test]
fn test_store_step_comes_first() {
    let providers = ProviderRegistry::empty();
    let config = ProvisioningConfiguration::default().with_store("ExampleDS", Some("POSTGRES"));
    let composer = ProvisioningPlanComposer::new("passivation", config).with_providers(&providers);

    let plan = composer.compose(&owner()).unwrap();
    let namespace = plan.namespace().clone();
    let steps = plan.into_steps().unwrap();

    assert_eq!(steps.len(), 3);
    assert_eq!(
        steps[0].service_name(),
        &store_configuration_service_name(&namespace)
    );
    assert_eq!(
        steps[0].describe().dependencies,
        vec![
            string_table_service_name(&namespace),
            container_modules_service_name("session"),
            data_source_service_name("ExampleDS"),
        ]
    );
    assert!(
        steps[1]
            .describe()
            .dependencies
            .contains(&store_configuration_service_name(&namespace))
    );
}

#[test]
fn test_unknown_dialect_fails_at_compose() {
    let providers = ProviderRegistry::empty();
    let config = ProvisioningConfiguration::default().with_store("ExampleDS", Some("ORACLE_9"));
    let composer = ProvisioningPlanComposer::new("passivation", config).with_providers(&providers);

    let err = composer.compose(&owner()).err().unwrap();
    assert!(matches!(err, Error::InvalidDialect { .. }));
}

#[test]
fn test_factory_name_with_separator_fails_at_compose() {
    let providers = ProviderRegistry::empty();
    let composer = ProvisioningPlanComposer::new(
        "module.war/passivation",
        ProvisioningConfiguration::default(),
    )
    .with_providers(&providers);
    let owner = DeploymentUnit::top_level("app.ear").service_name();

    assert!(composer.namespace(&owner).is_err());
    let err = composer.compose(&owner).err().unwrap();
    assert!(matches!(err, Error::InvalidServiceName { .. }));
}

#[test]
fn test_provider_steps_follow_core_steps_in_order() {
    let (alpha, _) = counting("alpha");
    let (beta, _) = counting("beta");
    let providers = ProviderRegistry::from_providers([alpha, beta]);
    let composer =
        ProvisioningPlanComposer::new("passivation", ProvisioningConfiguration::default())
            .with_providers(&providers);

    let steps = composer.compose(&owner()).unwrap().into_steps().unwrap();
    let names = service_names(&steps);

    assert_eq!(names.len(), 4);
    assert_eq!(names[2].segments()[0], "alpha");
    assert_eq!(names[3].segments()[0], "beta");
    assert_eq!(
        names[2].segments()[1..],
        ["session", "app.ear/module.war/passivation"]
    );
}

#[test]
fn test_providers_are_consulted_lazily() {
    let (provider, calls) = counting("lazy");
    let providers = ProviderRegistry::from_providers([provider]);
    let composer =
        ProvisioningPlanComposer::new("passivation", ProvisioningConfiguration::default())
            .with_providers(&providers);

    let mut plan = composer.compose(&owner()).unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    plan.next().unwrap().unwrap();
    plan.next().unwrap().unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    plan.next().unwrap().unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(plan.next().is_none());
}

#[test]
fn test_each_traversal_consults_providers_again() {
    let (provider, calls) = counting("again");
    let providers = ProviderRegistry::from_providers([provider]);
    let composer =
        ProvisioningPlanComposer::new("passivation", ProvisioningConfiguration::default())
            .with_providers(&providers);

    composer.compose(&owner()).unwrap().into_steps().unwrap();
    composer.compose(&owner()).unwrap().into_steps().unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_failing_provider_aborts_the_plan() {
    let (before, _) = counting("before");
    let (after, after_calls) = counting("after");
    let providers = ProviderRegistry::from_providers([
        before,
        Arc::new(FailingProvider) as Arc<dyn CacheProvisioningProvider>,
        after,
    ]);
    let composer =
        ProvisioningPlanComposer::new("passivation", ProvisioningConfiguration::default())
            .with_providers(&providers);

    let err = composer
        .compose(&owner())
        .unwrap()
        .into_steps()
        .unwrap_err();

    assert!(matches!(
        err,
        Error::ProviderContribution { ref provider, .. } if provider == "failing"
    ));
    assert_eq!(after_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_iteration_stops_after_failure() {
    let providers = ProviderRegistry::from_providers([
        Arc::new(FailingProvider) as Arc<dyn CacheProvisioningProvider>
    ]);
    let composer =
        ProvisioningPlanComposer::new("passivation", ProvisioningConfiguration::default())
            .with_providers(&providers);

    let mut plan = composer.compose(&owner()).unwrap();
    assert!(plan.next().unwrap().is_ok());
    assert!(plan.next().unwrap().is_ok());
    assert!(plan.next().unwrap().is_err());
    assert!(plan.next().is_none());
}

#[test]
fn test_unresolved_capability_contributes_nothing() {
    let providers = ProviderRegistry::from_providers([
        Arc::new(RegistryConsumer) as Arc<dyn CacheProvisioningProvider>
    ]);
    let composer =
        ProvisioningPlanComposer::new("passivation", ProvisioningConfiguration::default())
            .with_providers(&providers);

    let steps = composer.compose(&owner()).unwrap().into_steps().unwrap();
    assert_eq!(steps.len(), 2);
}

#[test]
fn test_core_steps_produce_derived_cache() {
    let providers = ProviderRegistry::empty();
    let config = ProvisioningConfiguration::default()
        .with_max_active_entries(500)
        .with_store("ExampleDS", None);
    let composer = ProvisioningPlanComposer::new("passivation", config).with_providers(&providers);
    let owner = owner();
    let namespace = composer.namespace(&owner).unwrap();
    let steps = composer.compose(&owner).unwrap().into_steps().unwrap();

    let template = CacheConfiguration::with_expiration(ExpirationPolicy::from_millis(60_000, -1));
    let mut services: HashMap<ServiceName, ServiceValue> = HashMap::new();
    services.insert(
        cache_configuration_service_name("session", "passivation"),
        Arc::new(template),
    );
    services.insert(
        string_table_service_name(&namespace),
        Arc::new(TableSchema::default()),
    );
    services.insert(
        container_modules_service_name("session"),
        Arc::new(vec![ExtensionModule::new("org.example.web", ["WebKeyMapper"])]),
    );
    services.insert(
        data_source_service_name("ExampleDS"),
        Arc::new(DataSourceDescriptor {
            name: "ExampleDS".to_string(),
            connection_url: None,
        }),
    );
    services.insert(
        owner.append(["marshalling"]),
        Arc::new(MarshallingContext {
            owner: owner.canonical_name(),
        }),
    );

    let services = run(&steps, services).unwrap();
    let cache = services
        .get(&cache_service_name(&namespace))
        .cloned()
        .unwrap()
        .downcast::<CacheDescriptor>()
        .unwrap();

    assert!(!cache.configuration.expiration.is_enabled());
    assert_eq!(cache.configuration.eviction.max_entries(), Some(500));
    let store = cache.configuration.persistence.as_ref().unwrap();
    assert!(store.segmented);
    assert_eq!(store.key_mapper.as_ref().unwrap().name, "WebKeyMapper");
}

#[test]
fn test_missing_dependency_is_reported() {
    let providers = ProviderRegistry::empty();
    let composer =
        ProvisioningPlanComposer::new("passivation", ProvisioningConfiguration::default())
            .with_providers(&providers);
    let steps = composer.compose(&owner()).unwrap().into_steps().unwrap();

    let err = run(&steps, HashMap::new()).unwrap_err();
    assert!(matches!(err, Error::DependencyResolution { .. }));
}

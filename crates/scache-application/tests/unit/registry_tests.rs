//! Tests for the provisioning provider registry
//!
//! Uses `extern crate scache_providers` to force linkme registration of the
//! built-in providers.

// Force linkme registration of all providers from scache-providers
extern crate scache_providers;

use scache_application::ports::registry::*;
use scache_application::ProvisioningPlanComposer;
use scache_domain::{DeploymentUnit, ProvisioningConfiguration};

#[test]
fn test_list_providers_includes_builtins() {
    let providers = list_provisioning_providers();
    let names: Vec<&str> = providers.iter().map(|(name, _)| *name).collect();

    assert!(
        names.contains(&"group"),
        "Group provider should be registered. Available: {names:?}"
    );
    assert!(
        names.contains(&"service-provider-registry"),
        "Registry provider should be registered. Available: {names:?}"
    );
}

#[test]
fn test_listing_is_sorted_by_name() {
    let names: Vec<&str> = list_provisioning_providers()
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
}

#[test]
fn test_registered_registry_is_shared() {
    let first = ProviderRegistry::registered();
    let second = ProviderRegistry::registered();

    assert!(std::ptr::eq(first, second));
    assert_eq!(first.len(), PROVISIONING_PROVIDERS.len());
    assert!(first.slots().iter().all(|slot| matches!(slot, ProviderSlot::Ready(_))));
}

#[test]
fn test_default_composer_uses_registered_providers() {
    let composer =
        ProvisioningPlanComposer::new("passivation", ProvisioningConfiguration::default());
    let owner = DeploymentUnit::top_level("app.war").service_name();

    let steps = composer.compose(&owner).unwrap().into_steps().unwrap();

    let services: Vec<String> = steps
        .iter()
        .map(|step| step.service_name().canonical_name())
        .collect();
    assert!(
        services
            .iter()
            .any(|name| name.starts_with("clustering.cache.group.session.")),
        "Plan should contain the group step: {services:?}"
    );
    assert!(
        services
            .iter()
            .any(|name| name.starts_with("clustering.cache.service-provider-registry.session.")),
        "Plan should contain the registry step: {services:?}"
    );
}

//! Tests for the namespace capability registry

use scache_application::NamespaceCapabilityRegistry;
use scache_domain::{CacheNamespace, CacheRequirement, CapabilityRegistry};

#[test]
fn test_group_resolves_within_namespace() {
    let namespace = CacheNamespace::new("session", "app.ear/module.war/passivation");
    let registry = NamespaceCapabilityRegistry::new(namespace.clone());

    let group = registry.resolve(CacheRequirement::Group).unwrap();

    assert_eq!(
        group.segments(),
        [
            "clustering",
            "cache",
            "group",
            "session",
            "app.ear/module.war/passivation"
        ]
    );
    assert_eq!(group, CacheRequirement::Group.service_name(&namespace));
}

#[test]
fn test_other_requirements_are_unresolved() {
    let registry = NamespaceCapabilityRegistry::new(CacheNamespace::new("session", "cache"));

    for requirement in CacheRequirement::ALL {
        if requirement != CacheRequirement::Group {
            assert_eq!(registry.resolve(requirement), None, "{requirement}");
        }
    }
}

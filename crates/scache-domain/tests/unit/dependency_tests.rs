//! Service dependency tests

use std::sync::Arc;

use scache_domain::{
    Dependency, DependencyComposite, Error, Requirements, ServiceDependency, ServiceName,
    ServiceSlot,
};

fn name(value: &str) -> ServiceName {
    ServiceName::new("test").append([value])
}

#[test]
fn test_read_before_supply_fails() {
    let dependency = ServiceDependency::<String>::new(name("a"));
    assert!(matches!(
        dependency.get(),
        Err(Error::DependencyNotResolved { .. })
    ));
}

#[test]
fn test_clones_share_the_value() {
    let dependency = ServiceDependency::<String>::new(name("a"));
    let handle = dependency.clone();

    handle.supply(Arc::new("value".to_string())).unwrap();

    assert!(dependency.is_resolved());
    assert_eq!(dependency.get().unwrap(), "value");
    assert_eq!(*dependency.value().unwrap(), "value");
}

#[test]
fn test_second_supply_fails() {
    let dependency = ServiceDependency::<u32>::new(name("a"));
    dependency.supply(Arc::new(1_u32)).unwrap();

    let err = dependency.supply(Arc::new(2_u32)).unwrap_err();
    assert!(matches!(err, Error::DependencyAlreadyResolved { .. }));
    assert_eq!(*dependency.get().unwrap(), 1);
}

#[test]
fn test_wrong_type_fails() {
    let dependency = ServiceDependency::<u32>::new(name("a"));

    let err = dependency.supply(Arc::new("one")).unwrap_err();
    assert!(matches!(err, Error::DependencyTypeMismatch { expected, .. } if expected == "u32"));
    assert!(!dependency.is_resolved());
}

#[test]
fn test_composite_registers_members_in_order() {
    let table = ServiceDependency::<String>::new(name("table"));
    let modules = ServiceDependency::<Vec<String>>::new(name("modules"));
    let data_source = ServiceDependency::<String>::new(name("data-source"));
    let composite = DependencyComposite::new()
        .with(&table)
        .with(&modules)
        .with(&data_source);

    let mut requirements = Requirements::new();
    composite.register(&mut requirements);

    assert_eq!(
        requirements.service_names(),
        vec![name("table"), name("modules"), name("data-source")]
    );
    assert!(!composite.is_resolved());

    for slot in requirements.slots() {
        if slot.service_name() == &name("modules") {
            slot.supply(Arc::new(Vec::<String>::new())).unwrap();
        } else {
            slot.supply(Arc::new(String::new())).unwrap();
        }
    }
    assert!(composite.is_resolved());
    assert!(table.is_resolved());
}

#[test]
fn test_overlapping_registration_is_deduplicated() {
    let shared = ServiceDependency::<String>::new(name("shared"));
    let other = ServiceDependency::<String>::new(name("other"));
    let composite = DependencyComposite::new().with(&shared).with(&other);

    let mut requirements = Requirements::new();
    requirements.require(&shared).require(&composite);

    assert_eq!(requirements.len(), 2);
    assert_eq!(composite.service_names(), vec![&name("shared"), &name("other")]);
}

//! Tests for cache configuration derivation

use std::io;
use std::sync::{Arc, Mutex};

use proptest::prelude::*;
use scache_application::{CacheConfigurationDeriver, derive_eviction};
use scache_domain::value_objects::{
    ConnectionFactoryKind, DataSourceDescriptor, StoreConfiguration, TableSchema,
};
use scache_domain::{
    CacheConfiguration, CacheNamespace, EntryKind, EvictablePredicate, EvictionStrategy,
    ExpirationPolicy, StorageType,
};

/// Log sink shared between a test subscriber and its assertions
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        let buffer = self.0.lock().unwrap();
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Derive from `template` and return the log output it produced
fn derive_capturing_logs(template: &CacheConfiguration) -> String {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        deriver(Some(10)).derive(template);
    });
    logs.contents()
}

fn deriver(max_active_entries: Option<u64>) -> CacheConfigurationDeriver {
    CacheConfigurationDeriver::new(
        CacheNamespace::new("session", "app.ear/module.war/passivation"),
        "passivation",
        max_active_entries,
    )
}

#[test]
fn test_unbounded_cache_disables_eviction() {
    let derived = deriver(None).derive(&CacheConfiguration::default());

    assert_eq!(derived.eviction.strategy(), EvictionStrategy::Disabled);
    assert_eq!(derived.eviction.max_entries(), None);
    assert_eq!(derived.eviction.max_count(), 0);
    assert_eq!(derived.eviction.evictable(), None);
    assert_eq!(derived.storage, StorageType::Heap);
}

#[test]
fn test_zero_bound_still_enables_eviction() {
    let eviction = derive_eviction(Some(0));
    assert_eq!(eviction.strategy(), EvictionStrategy::RemoveOnFull);
    assert_eq!(eviction.max_count(), 0);
    assert_eq!(eviction.evictable(), Some(EvictablePredicate::GroupsOnly));
}

#[test]
fn test_template_expiration_is_overridden() {
    let template = CacheConfiguration::with_expiration(ExpirationPolicy::from_millis(-1, 30_000));
    assert!(template.expiration.is_enabled());

    let derived = deriver(Some(100)).derive(&template);
    assert_eq!(derived.expiration, ExpirationPolicy::disabled());
}

#[test]
fn test_template_persistence_is_kept() {
    let persistence = StoreConfiguration {
        dialect: None,
        data_source: DataSourceDescriptor {
            name: "ExampleDS".to_string(),
            connection_url: None,
        },
        key_mapper: None,
        table: TableSchema::default(),
        segmented: true,
        transactional: false,
        connection_factory: ConnectionFactoryKind::ManagedDataSource,
    };
    let template = CacheConfiguration {
        persistence: Some(persistence.clone()),
        ..CacheConfiguration::default()
    };

    let derived = deriver(None).derive(&template);
    assert_eq!(derived.persistence, Some(persistence));
}

#[test]
fn test_deriver_accessors() {
    let deriver = deriver(Some(7));
    assert_eq!(deriver.template_cache_name(), "passivation");
    assert_eq!(deriver.max_active_entries(), Some(7));
    assert_eq!(deriver.namespace().container_name(), "session");
}

proptest! {
    #[test]
    fn prop_derived_expiration_is_always_disabled(
        lifespan in -1i64..1_000_000,
        max_idle in -1i64..1_000_000,
        bound in proptest::option::of(0u64..10_000),
    ) {
        let template = CacheConfiguration::with_expiration(
            ExpirationPolicy::from_millis(lifespan, max_idle),
        );
        let derived = deriver(bound).derive(&template);
        prop_assert!(!derived.expiration.is_enabled());
    }

    #[test]
    fn prop_members_are_never_evictable(bound in proptest::option::of(0u64..10_000)) {
        let derived = deriver(bound).derive(&CacheConfiguration::default());
        prop_assert!(!derived.eviction.is_evictable(EntryKind::Member));
        prop_assert_eq!(derived.eviction.is_evictable(EntryKind::Group), bound.is_some());
        prop_assert_eq!(derived.eviction.max_entries(), bound);
    }
}

#[test]
fn test_enabled_template_expiration_logs_warning() {
    let template = CacheConfiguration::with_expiration(ExpirationPolicy::from_millis(60_000, -1));
    let output = derive_capturing_logs(&template);

    assert!(output.contains("WARN"), "no warning in: {output}");
    assert!(output.contains("cache-configuration.session.passivation"));
    assert!(output.contains("lifespan_ms=60000"));
}

#[test]
fn test_disabled_template_expiration_logs_nothing() {
    let output = derive_capturing_logs(&CacheConfiguration::default());
    assert!(output.is_empty(), "unexpected output: {output}");
}

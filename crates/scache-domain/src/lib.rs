//! # Domain Layer
//!
//! Core types for provisioning clustered session caches.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`value_objects`] | Service names, namespaces, eviction/expiration policy, store settings |
//! | [`ports`] | Dependencies, provisioning steps, capability resolution, extension providers |
//! | [`error`] | Domain error type and `Result` alias |
//! | [`constants`] | Service naming roots and defaults |
//!
//! Nothing in this crate performs I/O. Values are built once at
//! provisioning-request time and never mutated afterwards.

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{
    CacheProvisioningProvider, CapabilityRegistry, Dependency, DependencyComposite,
    ProvisioningStep, Requirements, ServiceDependency, ServiceSlot, ServiceValue, StepDescriptor,
};
pub use value_objects::{
    CacheConfiguration, CacheNamespace, CacheRequirement, DatabaseDialect, DeploymentUnit,
    EntryKind, EvictablePredicate, EvictionPolicy, EvictionStrategy, ExpirationPolicy,
    ProvisioningConfiguration, ServiceName, StorageType, StoreConfiguration, StoreSettings,
};

//! Domain Value Objects
//!
//! Immutable values built from declarative provisioning input.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`ServiceName`] | Hierarchical service identifier |
//! | [`DeploymentUnit`] | Owner of a session cache |
//! | [`CacheNamespace`] | (container, cache) pair |
//! | [`EvictionPolicy`] / [`ExpirationPolicy`] | Policy of a derived cache |
//! | [`CacheConfiguration`] | Template or derived cache configuration |
//! | [`StoreConfiguration`] | Persistent store configuration |
//! | [`CacheRequirement`] | Capability resolvable within a namespace |

/// Declarative provisioning input
pub mod config;
/// Cache configuration
pub mod configuration;
/// Deployment units
pub mod deployment;
/// Values published by external services
pub mod external;
/// Cache namespaces and cache naming
pub mod namespace;
/// Eviction and expiration policy
pub mod policy;
/// Capability requirements
pub mod requirement;
/// Hierarchical service names
pub mod service_name;
/// Core service names
pub mod services;
/// Persistent store values
pub mod store;

pub use config::{ProvisioningConfiguration, StoreSettings};
pub use configuration::CacheConfiguration;
pub use deployment::DeploymentUnit;
pub use external::MarshallingContext;
pub use namespace::{CacheNamespace, cache_name};
pub use policy::{
    EntryKind, EvictablePredicate, EvictionPolicy, EvictionStrategy, ExpirationPolicy, StorageType,
};
pub use requirement::CacheRequirement;
pub use service_name::ServiceName;
pub use store::{
    ColumnDefinition, ConnectionFactoryKind, DataSourceDescriptor, DatabaseDialect,
    ExtensionModule, KeyMapperDescriptor, StoreConfiguration, TableSchema,
};

//! # Session Cache Provisioning - Built-in Providers
//!
//! Extension providers that add services on top of every provisioned
//! cache. Each registers itself in
//! [`PROVISIONING_PROVIDERS`](scache_application::PROVISIONING_PROVIDERS);
//! linking this crate is enough to enable them.
//!
//! | Provider | Feature | Installs |
//! |----------|---------|----------|
//! | `group` | `provider-group` | Cache-backed membership group |
//! | `service-provider-registry` | `provider-registry` | Service provider registry over the group |
//!
//! ```toml
//! [dependencies]
//! scache-providers = { version = "0.1", default-features = false, features = ["provider-group"] }
//! ```

// Re-export domain types commonly used with providers
pub use scache_domain::{CacheProvisioningProvider, Error, Result};

/// Cache-backed membership group
#[cfg(feature = "provider-group")]
pub mod group;

/// Service provider registry
#[cfg(feature = "provider-registry")]
pub mod registry;

#[cfg(feature = "provider-group")]
pub use group::{CacheGroup, CacheGroupProvider, CacheGroupStep};
#[cfg(feature = "provider-registry")]
pub use registry::{
    ServiceProviderRegistry, ServiceProviderRegistryProvider, ServiceProviderRegistryStep,
};

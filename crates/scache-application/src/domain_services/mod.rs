//! Domain services
//!
//! Pure derivation logic used by the core provisioning steps.

/// Cache configuration derivation
pub mod cache_configuration;
/// Namespace-scoped capability registry
pub mod capability;
/// Persistent store configuration derivation
pub mod store_configuration;

pub use cache_configuration::{CacheConfigurationDeriver, derive_eviction};
pub use capability::NamespaceCapabilityRegistry;
pub use store_configuration::{StoreConfigurationDeriver, find_key_mapper, resolve_dialect};

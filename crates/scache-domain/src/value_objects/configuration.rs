//! Cache configuration values

use serde::{Deserialize, Serialize};

use crate::value_objects::{EvictionPolicy, ExpirationPolicy, StorageType, StoreConfiguration};

/// Configuration of one cache, either a template or a derived one
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfiguration {
    /// Expiration settings
    pub expiration: ExpirationPolicy,
    /// Eviction settings
    pub eviction: EvictionPolicy,
    /// In-memory storage type
    pub storage: StorageType,
    /// Persistent store, if any
    pub persistence: Option<StoreConfiguration>,
}

impl CacheConfiguration {
    /// Template configuration with the given expiration
    pub fn with_expiration(expiration: ExpirationPolicy) -> Self {
        Self {
            expiration,
            ..Self::default()
        }
    }
}

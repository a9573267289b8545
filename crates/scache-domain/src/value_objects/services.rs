//! Service names of the core provisioning services

use crate::constants::{
    CACHE_CONFIGURATION_SERVICE, CACHE_SERVICE, CONTAINER_MODULES_SERVICE, DATA_SOURCE_SERVICE,
    STORE_CONFIGURATION_SERVICE, STRING_TABLE_SERVICE,
};
use crate::value_objects::{CacheNamespace, ServiceName};

/// Configuration of `cache` in `container`; also used for templates
pub fn cache_configuration_service_name(container: &str, cache: &str) -> ServiceName {
    ServiceName::new(CACHE_CONFIGURATION_SERVICE).append([container, cache])
}

/// The running cache of a namespace
pub fn cache_service_name(namespace: &CacheNamespace) -> ServiceName {
    namespace.scope(&ServiceName::new(CACHE_SERVICE))
}

/// Persistent store configuration of a namespace
pub fn store_configuration_service_name(namespace: &CacheNamespace) -> ServiceName {
    namespace.scope(&ServiceName::new(STORE_CONFIGURATION_SERVICE))
}

/// Table schema of a namespace's string-keyed store
pub fn string_table_service_name(namespace: &CacheNamespace) -> ServiceName {
    namespace.scope(&ServiceName::new(STRING_TABLE_SERVICE))
}

/// Extension modules loaded by a cache container
pub fn container_modules_service_name(container: &str) -> ServiceName {
    ServiceName::new(CONTAINER_MODULES_SERVICE).append([container])
}

/// A host-managed data source
pub fn data_source_service_name(data_source: &str) -> ServiceName {
    ServiceName::new(DATA_SOURCE_SERVICE).append([data_source])
}

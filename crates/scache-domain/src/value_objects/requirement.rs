//! Capabilities a cache namespace may offer

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value_objects::{CacheNamespace, ServiceName};

/// Logical requirements resolvable within a cache namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CacheRequirement {
    /// Membership group backed by the cache
    Group,
    /// Key/value registry backed by the cache
    Registry,
    /// Factory of registries
    RegistryFactory,
    /// Registry of service providers
    ServiceProviderRegistry,
    /// Factory of singleton service configurators
    SingletonServiceConfiguratorFactory,
}

impl CacheRequirement {
    /// Every requirement
    pub const ALL: [CacheRequirement; 5] = [
        Self::Group,
        Self::Registry,
        Self::RegistryFactory,
        Self::ServiceProviderRegistry,
        Self::SingletonServiceConfiguratorFactory,
    ];

    /// Short name of the requirement
    pub fn name(self) -> &'static str {
        match self {
            Self::Group => "group",
            Self::Registry => "registry",
            Self::RegistryFactory => "registry-factory",
            Self::ServiceProviderRegistry => "service-provider-registry",
            Self::SingletonServiceConfiguratorFactory => "singleton-service-configurator-factory",
        }
    }

    /// Unscoped base service name: `clustering.cache.<name>`
    pub fn base_name(self) -> ServiceName {
        ServiceName::new("clustering").append(["cache", self.name()])
    }

    /// Service name of this requirement within `namespace`
    pub fn service_name(self, namespace: &CacheNamespace) -> ServiceName {
        namespace.scope(&self.base_name())
    }
}

impl fmt::Display for CacheRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//! Cache namespaces
//!
//! A namespace names one logical cache within a container. The cache name is
//! derived from the owning deployment unit's service name and the factory
//! name: the parent unit's simple name (sub-units only), the unit's own
//! simple name, then the factory name, joined by `/`. None of these may
//! contain `/`, so distinct owners and factories never share a cache name.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::CACHE_NAME_SEPARATOR;
use crate::error::{Error, Result};
use crate::value_objects::{DeploymentUnit, ServiceName};

/// Derive the cache name for `owner` and `factory_name`
///
/// Fails with [`Error::InvalidServiceName`] when the factory name or an
/// owner segment used in the cache name contains `/`.
pub fn cache_name(owner: &ServiceName, factory_name: &str) -> Result<String> {
    let mut parts: Vec<&str> = Vec::with_capacity(3);
    let parent = owner.parent();
    if DeploymentUnit::subunit_root().is_parent_of(owner) {
        if let Some(parent) = &parent {
            parts.push(parent.simple_name());
        }
    }
    parts.push(owner.simple_name());
    parts.push(factory_name);

    if let Some(part) = parts.iter().find(|part| part.contains(CACHE_NAME_SEPARATOR)) {
        return Err(Error::invalid_service_name(
            *part,
            format!("'{CACHE_NAME_SEPARATOR}' is not allowed in cache name parts"),
        ));
    }
    Ok(parts.join(CACHE_NAME_SEPARATOR))
}

/// The (container, cache) pair identifying one logical cache
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CacheNamespace {
    container_name: String,
    cache_name: String,
}

impl CacheNamespace {
    /// Create a namespace from explicit names
    pub fn new(container_name: impl Into<String>, cache_name: impl Into<String>) -> Self {
        Self {
            container_name: container_name.into(),
            cache_name: cache_name.into(),
        }
    }

    /// Derive the namespace of the cache `factory_name` owned by `owner`
    pub fn for_owner(
        container_name: impl Into<String>,
        owner: &ServiceName,
        factory_name: &str,
    ) -> Result<Self> {
        Ok(Self::new(container_name, cache_name(owner, factory_name)?))
    }

    /// Cache container name
    pub fn container_name(&self) -> &str {
        &self.container_name
    }

    /// Cache name within the container
    pub fn cache_name(&self) -> &str {
        &self.cache_name
    }

    /// `base` scoped to this namespace: `base.<container>.<cache>`
    pub fn scope(&self, base: &ServiceName) -> ServiceName {
        base.append([self.container_name.as_str(), self.cache_name.as_str()])
    }
}

impl fmt::Display for CacheNamespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.container_name, self.cache_name)
    }
}

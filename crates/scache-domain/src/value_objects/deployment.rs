//! Deployment units owning session caches

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{
    CACHE_NAME_SEPARATOR, DEPLOYMENT_SUBUNIT_ROOT, DEPLOYMENT_UNIT_ROOT, MARSHALLING_SEGMENT,
};
use crate::error::{Error, Result};
use crate::value_objects::{ServiceName, cache_name};

/// A deployment unit: either top-level or nested inside a parent unit
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeploymentUnit {
    /// Enclosing top-level unit, present for sub-units only
    pub parent: Option<String>,
    /// Simple name of the unit
    pub name: String,
}

impl DeploymentUnit {
    /// A top-level deployment unit
    pub fn top_level(name: impl Into<String>) -> Self {
        Self {
            parent: None,
            name: name.into(),
        }
    }

    /// A sub-unit nested in `parent`
    pub fn sub_unit(parent: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            parent: Some(parent.into()),
            name: name.into(),
        }
    }

    /// Parse `parent/name` or `name`
    pub fn parse_path(path: &str) -> Result<Self> {
        let parts: Vec<&str> = path.split(CACHE_NAME_SEPARATOR).collect();
        match parts.as_slice() {
            [name] if !name.is_empty() => Ok(Self::top_level(*name)),
            [parent, name] if !parent.is_empty() && !name.is_empty() => {
                Ok(Self::sub_unit(*parent, *name))
            }
            _ => Err(Error::invalid_service_name(
                path,
                "expected 'name' or 'parent/name'",
            )),
        }
    }

    /// Root of top-level deployment unit service names
    pub fn unit_root() -> ServiceName {
        ServiceName::new(DEPLOYMENT_UNIT_ROOT[0]).append([DEPLOYMENT_UNIT_ROOT[1]])
    }

    /// Root of sub-unit service names
    pub fn subunit_root() -> ServiceName {
        ServiceName::new(DEPLOYMENT_SUBUNIT_ROOT[0]).append([DEPLOYMENT_SUBUNIT_ROOT[1]])
    }

    /// Service name of this unit
    pub fn service_name(&self) -> ServiceName {
        match &self.parent {
            Some(parent) => Self::subunit_root().append([parent.as_str(), self.name.as_str()]),
            None => Self::unit_root().append([self.name.as_str()]),
        }
    }

    /// Recover a unit from its service name
    pub fn from_service_name(name: &ServiceName) -> Result<Self> {
        let unit_root = Self::unit_root();
        let subunit_root = Self::subunit_root();
        let segments = name.segments();

        if subunit_root.is_parent_of(name) && segments.len() == subunit_root.segments().len() + 2
        {
            let [parent, unit] = &segments[segments.len() - 2..] else {
                return Err(Error::internal("sub-unit name lost its tail"));
            };
            return Ok(Self::sub_unit(parent.clone(), unit.clone()));
        }
        if unit_root.is_parent_of(name) && segments.len() == unit_root.segments().len() + 1 {
            return Ok(Self::top_level(name.simple_name()));
        }
        Err(Error::invalid_service_name(
            name.canonical_name(),
            "not a deployment unit service name",
        ))
    }

    /// Name of the cache created by `factory_name` for this unit
    pub fn cache_name(&self, factory_name: &str) -> Result<String> {
        cache_name(&self.service_name(), factory_name)
    }

    /// Service name of the unit's marshalling context
    pub fn marshalling_service_name(&self) -> ServiceName {
        self.service_name().append([MARSHALLING_SEGMENT])
    }
}

impl fmt::Display for DeploymentUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.parent {
            Some(parent) => write!(f, "{parent}{CACHE_NAME_SEPARATOR}{}", self.name),
            None => f.write_str(&self.name),
        }
    }
}

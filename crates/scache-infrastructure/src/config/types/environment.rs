//! Services offered by the hosting environment
//!
//! The supervisor publishes these before running a plan: template cache
//! configurations and extension modules per container, data sources, and
//! the string-keyed table layout.

use std::collections::BTreeMap;

use scache_domain::constants::{DEFAULT_CONTAINER_NAME, DEFAULT_TEMPLATE_CACHE_NAME};
use scache_domain::value_objects::{DataSourceDescriptor, ExtensionModule, TableSchema};
use scache_domain::{CacheConfiguration, ExpirationPolicy};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DATA_SOURCE_NAME, EXPIRATION_DISABLED_MS};

/// Template cache as declared in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Entry lifespan in milliseconds; negative disables it
    pub lifespan_ms: i64,
    /// Entry max-idle in milliseconds; negative disables it
    pub max_idle_ms: i64,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            lifespan_ms: EXPIRATION_DISABLED_MS,
            max_idle_ms: EXPIRATION_DISABLED_MS,
        }
    }
}

impl TemplateConfig {
    /// Cache configuration published for the template
    pub fn to_cache_configuration(self) -> CacheConfiguration {
        CacheConfiguration::with_expiration(ExpirationPolicy::from_millis(
            self.lifespan_ms,
            self.max_idle_ms,
        ))
    }
}

/// One cache container
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerEnvironment {
    /// Template caches by name
    pub templates: BTreeMap<String, TemplateConfig>,
    /// Extension modules installed in the container, in registration order
    pub modules: Vec<ExtensionModule>,
}

impl Default for ContainerEnvironment {
    fn default() -> Self {
        Self {
            templates: BTreeMap::from([(
                DEFAULT_TEMPLATE_CACHE_NAME.to_string(),
                TemplateConfig::default(),
            )]),
            modules: Vec::new(),
        }
    }
}

/// One data source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSourceConfig {
    /// Connection URL, informational only
    pub connection_url: Option<String>,
}

/// Everything the environment provides to provisioning steps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    /// Cache containers by name
    pub containers: BTreeMap<String, ContainerEnvironment>,
    /// Data sources by name
    pub data_sources: BTreeMap<String, DataSourceConfig>,
    /// Layout of string-keyed store tables
    pub table: TableSchema,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            containers: BTreeMap::from([(
                DEFAULT_CONTAINER_NAME.to_string(),
                ContainerEnvironment::default(),
            )]),
            data_sources: BTreeMap::from([(
                DEFAULT_DATA_SOURCE_NAME.to_string(),
                DataSourceConfig::default(),
            )]),
            table: TableSchema::default(),
        }
    }
}

impl EnvironmentConfig {
    /// Descriptor of the data source `name`, if declared
    pub fn data_source(&self, name: &str) -> Option<DataSourceDescriptor> {
        self.data_sources.get(name).map(|config| DataSourceDescriptor {
            name: name.to_string(),
            connection_url: config.connection_url.clone(),
        })
    }
}

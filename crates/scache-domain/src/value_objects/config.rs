//! Declarative provisioning input

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CONTAINER_NAME, DEFAULT_TEMPLATE_CACHE_NAME};

/// Persistence intent for a provisioned cache
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Logical data source name
    pub data_source: String,
    /// Dialect name; absent means detect at runtime
    #[serde(default)]
    pub dialect: Option<String>,
}

/// What to provision for one owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvisioningConfiguration {
    /// Cache container holding the template
    pub container_name: String,
    /// Template cache within the container
    pub template_cache_name: String,
    /// Entry bound; absent disables eviction
    pub max_active_entries: Option<u64>,
    /// Optional persistent store
    pub store: Option<StoreSettings>,
}

impl Default for ProvisioningConfiguration {
    fn default() -> Self {
        Self {
            container_name: DEFAULT_CONTAINER_NAME.to_string(),
            template_cache_name: DEFAULT_TEMPLATE_CACHE_NAME.to_string(),
            max_active_entries: None,
            store: None,
        }
    }
}

impl ProvisioningConfiguration {
    /// Configuration for `template_cache_name` in `container_name`
    pub fn new(container_name: impl Into<String>, template_cache_name: impl Into<String>) -> Self {
        Self {
            container_name: container_name.into(),
            template_cache_name: template_cache_name.into(),
            ..Self::default()
        }
    }

    /// Bound the number of active entries
    pub fn with_max_active_entries(mut self, max_active_entries: u64) -> Self {
        self.max_active_entries = Some(max_active_entries);
        self
    }

    /// Persist entries through `data_source`
    pub fn with_store(mut self, data_source: impl Into<String>, dialect: Option<&str>) -> Self {
        self.store = Some(StoreSettings {
            data_source: data_source.into(),
            dialect: dialect.map(str::to_string),
        });
        self
    }
}

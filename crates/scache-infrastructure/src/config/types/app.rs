//! Main application configuration

use scache_domain::ProvisioningConfiguration;
use serde::{Deserialize, Serialize};

use super::{EnvironmentConfig, LoggingConfig};

/// Root configuration
///
/// ```toml
/// [logging]
/// level = "debug"
///
/// [provisioning]
/// container_name = "session"
/// template_cache_name = "passivation"
/// max_active_entries = 10000
///
/// [provisioning.store]
/// data_source = "ExampleDS"
/// dialect = "POSTGRES"
///
/// [environment.data_sources.ExampleDS]
/// connection_url = "jdbc:postgresql://db/sessions"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Provisioning request applied to every cache the factory creates
    pub provisioning: ProvisioningConfiguration,
    /// Services the supervisor offers to provisioning steps
    pub environment: EnvironmentConfig,
}

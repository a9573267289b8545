//! Core provisioning steps
//!
//! | Step | Installs | Requires |
//! |------|----------|----------|
//! | [`StoreConfigurationStep`] | store configuration | table schema, container modules, data source |
//! | [`TemplateConfigurationStep`] | derived cache configuration | template configuration, store configuration (optional) |
//! | [`CacheStep`] | cache | derived configuration, owner marshalling context |

/// Cache service step
pub mod cache;
/// Derived cache configuration step
pub mod configuration;
/// Persistent store configuration step
pub mod store;

pub use cache::{CacheDescriptor, CacheStep};
pub use configuration::TemplateConfigurationStep;
pub use store::StoreConfigurationStep;

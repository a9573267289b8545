//! # Session Cache Provisioning
//!
//! Configures the distributed caches that back stateful session components.
//! Given the deployment unit that owns a cache and a small provisioning
//! request, it derives the cache configuration (expiration disabled, only
//! group entries evictable), optionally a JDBC store configuration, and
//! composes the ordered plan of steps that installs the cache plus whatever
//! extension providers contribute.
//!
//! ## Example
//!
//! ```ignore
//! use scache::application::ProvisioningPlanComposer;
//! use scache::domain::{DeploymentUnit, ProvisioningConfiguration};
//!
//! let owner = DeploymentUnit::sub_unit("app.ear", "module.war").service_name();
//! let composer = ProvisioningPlanComposer::new(
//!     "passivation",
//!     ProvisioningConfiguration::default().with_max_active_entries(10_000),
//! );
//! for step in composer.compose(&owner)?.into_steps()? {
//!     println!("{}", step.service_name());
//! }
//! ```
//!
//! ## Architecture
//!
//! - `domain` - value objects, ports and the error type
//! - `application` - derivers, core steps, provider registry, plan composer
//! - `infrastructure` - configuration, logging, in-process supervisor
//! - `providers` - built-in extension providers

/// Domain layer - value objects, ports and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use scache_domain::*;
}

/// Application layer - derivation and plan composition
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use scache_application::*;
}

/// Infrastructure layer - config, logging and supervision
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use scache_infrastructure::*;
}

/// Built-in extension providers
pub mod providers {
    pub use scache_providers::*;
}

pub use scache_domain::{Error, Result};

//! Domain Port Interfaces
//!
//! | Port | Description |
//! |------|-------------|
//! | [`ServiceDependency`] / [`DependencyComposite`] | Declared inputs of a step |
//! | [`ProvisioningStep`] | Unit of work executed by a supervisor |
//! | [`CapabilityRegistry`] | Requirement → service name within a namespace |
//! | [`CacheProvisioningProvider`] | Externally registered step contributor |

/// Capability resolution
pub mod capability;
/// Service dependencies
pub mod dependency;
/// Extension providers
pub mod provider;
/// Provisioning steps
pub mod step;

pub use capability::CapabilityRegistry;
pub use dependency::{Dependency, DependencyComposite, Requirements, ServiceDependency, ServiceSlot};
pub use provider::CacheProvisioningProvider;
pub use step::{ProvisioningStep, ServiceValue, StepDescriptor};

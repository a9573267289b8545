//! Use cases

/// Provisioning plan composition
pub mod provisioning;

pub use provisioning::{ProvisioningPlan, ProvisioningPlanComposer};

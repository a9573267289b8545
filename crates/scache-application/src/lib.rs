//! Application Layer - Session Cache Provisioning
//!
//! Turns a declarative provisioning request into an ordered plan of
//! provisioning steps.
//!
//! ## Layout
//!
//! - `domain_services::*`: configuration derivers and the namespace capability registry
//! - `steps::*`: the core provisioning steps (store configuration, cache configuration, cache)
//! - `ports::registry`: linkme registry of extension providers
//! - `use_cases::*`: plan composition
//!
//! ## Dependencies
//!
//! This crate depends only on `scache-domain` plus logging and the
//! `linkme` registration machinery. It performs no I/O.

pub mod domain_services;
pub mod ports;
pub mod steps;
pub mod use_cases;

pub use domain_services::*;
pub use ports::registry::{
    PROVISIONING_PROVIDERS, ProviderRegistry, ProvisioningProviderEntry,
    list_provisioning_providers,
};
pub use steps::*;
pub use use_cases::*;

//! Provider Registry System
//!
//! Defines the auto-registration infrastructure for extension providers.
//! Uses the `linkme` crate for compile-time registration of providers
//! that are instantiated once per process and consulted by every
//! provisioning request.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │                     Provider Registration Flow                       │
//! ├──────────────────────────────────────────────────────────────────────┤
//! │                                                                      │
//! │  1. Provider defines:  #[linkme::distributed_slice(PROVISIONING_PROVIDERS)]
//! │                        static ENTRY: ProvisioningProviderEntry = ...  │
//! │                              ↓                                       │
//! │  2. Registry declares: #[linkme::distributed_slice]                  │
//! │                        pub static PROVISIONING_PROVIDERS: [Entry]    │
//! │                              ↓                                       │
//! │  3. First use:         ProviderRegistry::registered() (OnceLock)     │
//! │                              ↓                                       │
//! │  4. Each request:      plan traversal calls contribute()             │
//! │                                                                      │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Registering a Provider (in scache-providers)
//!
//! ```ignore
//! use scache_application::ports::registry::{PROVISIONING_PROVIDERS, ProvisioningProviderEntry};
//!
//! #[linkme::distributed_slice(PROVISIONING_PROVIDERS)]
//! static GROUP_PROVIDER: ProvisioningProviderEntry = ProvisioningProviderEntry {
//!     name: "group",
//!     description: "Cache-backed membership group",
//!     factory: group_provider_factory,
//! };
//! ```

pub mod provisioning;

pub use provisioning::{
    PROVISIONING_PROVIDERS, ProviderRegistry, ProviderSlot, ProvisioningProviderEntry,
    list_provisioning_providers,
};

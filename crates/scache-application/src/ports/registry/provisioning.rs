//! Provisioning Provider Registry
//!
//! Auto-registration of extension providers. Providers register themselves
//! via `linkme` distributed slices; the process-wide [`ProviderRegistry`]
//! instantiates every entry once and is shared read-only afterwards.

use std::sync::{Arc, OnceLock};

use scache_domain::{
    CacheProvisioningProvider, CapabilityRegistry, Error, ProvisioningStep, Result,
};
use tracing::{debug, error};

/// Registry entry for extension providers
///
/// Each provider registers itself with this entry using
/// `#[linkme::distributed_slice(PROVISIONING_PROVIDERS)]`.
pub struct ProvisioningProviderEntry {
    /// Unique provider name
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create the provider instance
    pub factory: fn() -> std::result::Result<Arc<dyn CacheProvisioningProvider>, String>,
}

// Auto-collection via linkme distributed slices - providers submit entries at compile time
#[linkme::distributed_slice]
pub static PROVISIONING_PROVIDERS: [ProvisioningProviderEntry] = [..];

/// A discovered provider, or the failure to instantiate it
#[derive(Clone)]
pub enum ProviderSlot {
    /// Instantiated provider
    Ready(Arc<dyn CacheProvisioningProvider>),
    /// Factory failure, reported whenever the slot is consulted
    Failed {
        /// Provider name
        name: String,
        /// Factory error message
        message: String,
    },
}

impl ProviderSlot {
    /// Provider name
    pub fn name(&self) -> &str {
        match self {
            Self::Ready(provider) => provider.name(),
            Self::Failed { name, .. } => name.as_str(),
        }
    }

    /// Ask the provider for its steps
    ///
    /// Provider errors are returned unchanged.
    pub fn contribute(
        &self,
        registry: &dyn CapabilityRegistry,
        container_name: &str,
        cache_name: &str,
    ) -> Result<Vec<Arc<dyn ProvisioningStep>>> {
        match self {
            Self::Ready(provider) => {
                let steps = provider.contribute(registry, container_name, cache_name)?;
                debug!(
                    provider = provider.name(),
                    steps = steps.len(),
                    "Provider contributed steps"
                );
                Ok(steps)
            }
            Self::Failed { name, message } => Err(Error::provider(name.as_str(), message.as_str())),
        }
    }
}

/// Ordered set of extension providers
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    slots: Vec<ProviderSlot>,
}

static REGISTERED: OnceLock<ProviderRegistry> = OnceLock::new();

impl ProviderRegistry {
    /// Registry with no providers
    pub fn empty() -> Self {
        Self::default()
    }

    /// Providers registered in [`PROVISIONING_PROVIDERS`]
    ///
    /// Instantiated on first use and cached for the life of the process.
    pub fn registered() -> &'static ProviderRegistry {
        REGISTERED.get_or_init(|| Self::from_entries(PROVISIONING_PROVIDERS.iter()))
    }

    /// Instantiate `entries`, ordered by name
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a ProvisioningProviderEntry>,
    {
        let mut entries: Vec<&ProvisioningProviderEntry> = entries.into_iter().collect();
        entries.sort_by_key(|entry| entry.name);

        let slots = entries
            .into_iter()
            .map(|entry| match (entry.factory)() {
                Ok(provider) => ProviderSlot::Ready(provider),
                Err(message) => {
                    error!(provider = entry.name, error = %message, "Provider factory failed");
                    ProviderSlot::Failed {
                        name: entry.name.to_string(),
                        message,
                    }
                }
            })
            .collect();
        Self { slots }
    }

    /// Registry of already-built providers, in the given order
    pub fn from_providers<I>(providers: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn CacheProvisioningProvider>>,
    {
        Self {
            slots: providers.into_iter().map(ProviderSlot::Ready).collect(),
        }
    }

    /// Slots in enumeration order
    pub fn slots(&self) -> &[ProviderSlot] {
        &self.slots
    }

    /// Provider names in enumeration order
    pub fn names(&self) -> Vec<&str> {
        self.slots.iter().map(ProviderSlot::name).collect()
    }

    /// Number of providers
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no provider is registered
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// List all registered providers
///
/// Returns (name, description) pairs ordered by name. Useful for CLI help.
pub fn list_provisioning_providers() -> Vec<(&'static str, &'static str)> {
    let mut providers: Vec<(&'static str, &'static str)> = PROVISIONING_PROVIDERS
        .iter()
        .map(|entry| (entry.name, entry.description))
        .collect();
    providers.sort_by_key(|(name, _)| *name);
    providers
}

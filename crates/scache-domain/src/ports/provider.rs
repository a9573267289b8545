//! Extension provider port

use std::sync::Arc;

use crate::error::Result;
use crate::ports::{CapabilityRegistry, ProvisioningStep};

/// Contributes extra provisioning steps for every provisioned cache
///
/// Providers are discovered from a process-wide registry and invoked once
/// per provisioning request. An error aborts the whole request.
pub trait CacheProvisioningProvider: Send + Sync {
    /// Provider name
    fn name(&self) -> &str;

    /// Steps to add for the cache `cache_name` in `container_name`
    fn contribute(
        &self,
        registry: &dyn CapabilityRegistry,
        container_name: &str,
        cache_name: &str,
    ) -> Result<Vec<Arc<dyn ProvisioningStep>>>;
}

//! Service dependencies
//!
//! Steps declare what they need by registering dependencies; a supervisor
//! supplies the values of the named services before the step executes.
//!
//! ```text
//! step.register(&mut requirements)   // declare
//! supervisor: slot.supply(value)     // resolve
//! step.execute()                     // consume via dependency.get()
//! ```

use std::any::type_name;
use std::collections::HashSet;
use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::error::{Error, Result};
use crate::ports::ServiceValue;
use crate::value_objects::ServiceName;

/// Something a step can register with its [`Requirements`]
pub trait Dependency: Send + Sync {
    /// Register every service this dependency needs
    fn register(&self, requirements: &mut Requirements);
}

/// Type-erased view of a single dependency, used by supervisors
pub trait ServiceSlot: Send + Sync {
    /// The service whose value this slot receives
    fn service_name(&self) -> &ServiceName;

    /// Whether a value has been supplied
    fn is_resolved(&self) -> bool;

    /// Supply the service value
    fn supply(&self, value: ServiceValue) -> Result<()>;
}

/// Handle to the value of a named service
///
/// Clones share one value slot, so a supervisor holding a clone resolves
/// the handle seen by the step.
pub struct ServiceDependency<T> {
    name: ServiceName,
    value: Arc<OnceLock<Arc<T>>>,
}

impl<T: Send + Sync + 'static> ServiceDependency<T> {
    /// Create an unresolved dependency on `name`
    pub fn new(name: ServiceName) -> Self {
        Self {
            name,
            value: Arc::new(OnceLock::new()),
        }
    }

    /// The service this dependency refers to
    pub fn name(&self) -> &ServiceName {
        &self.name
    }

    /// Borrow the resolved value
    pub fn get(&self) -> Result<&T> {
        self.value
            .get()
            .map(Arc::as_ref)
            .ok_or_else(|| Error::dependency_not_resolved(&self.name))
    }

    /// Share the resolved value
    pub fn value(&self) -> Result<Arc<T>> {
        self.value
            .get()
            .cloned()
            .ok_or_else(|| Error::dependency_not_resolved(&self.name))
    }
}

impl<T> Clone for ServiceDependency<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            value: Arc::clone(&self.value),
        }
    }
}

impl<T> fmt::Debug for ServiceDependency<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceDependency")
            .field("name", &self.name)
            .field("resolved", &self.value.get().is_some())
            .finish()
    }
}

impl<T: Send + Sync + 'static> ServiceSlot for ServiceDependency<T> {
    fn service_name(&self) -> &ServiceName {
        &self.name
    }

    fn is_resolved(&self) -> bool {
        self.value.get().is_some()
    }

    fn supply(&self, value: ServiceValue) -> Result<()> {
        let value = value.downcast::<T>().map_err(|_| {
            Error::DependencyTypeMismatch {
                service: self.name.to_string(),
                expected: type_name::<T>(),
            }
        })?;
        self.value
            .set(value)
            .map_err(|_| Error::dependency_already_resolved(&self.name))
    }
}

impl<T: Send + Sync + 'static> Dependency for ServiceDependency<T> {
    fn register(&self, requirements: &mut Requirements) {
        requirements.add(Arc::new(self.clone()));
    }
}

/// Several dependencies registered as one unit
///
/// Resolved only when every member is.
#[derive(Default)]
pub struct DependencyComposite {
    members: Vec<Arc<dyn ServiceSlot>>,
}

impl DependencyComposite {
    /// Empty composite
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a member
    pub fn with<T: Send + Sync + 'static>(mut self, dependency: &ServiceDependency<T>) -> Self {
        self.members.push(Arc::new(dependency.clone()));
        self
    }

    /// Whether every member has been supplied
    pub fn is_resolved(&self) -> bool {
        self.members.iter().all(|member| member.is_resolved())
    }

    /// Member service names, in insertion order
    pub fn service_names(&self) -> Vec<&ServiceName> {
        self.members.iter().map(|member| member.service_name()).collect()
    }
}

impl Dependency for DependencyComposite {
    fn register(&self, requirements: &mut Requirements) {
        for member in &self.members {
            requirements.add(Arc::clone(member));
        }
    }
}

/// Dependencies registered by one step
///
/// A service is registered at most once; later registrations of the same
/// name are ignored.
#[derive(Default)]
pub struct Requirements {
    slots: Vec<Arc<dyn ServiceSlot>>,
    names: HashSet<ServiceName>,
}

impl Requirements {
    /// Empty requirements
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a slot; returns `false` if its service was already registered
    pub fn add(&mut self, slot: Arc<dyn ServiceSlot>) -> bool {
        if !self.names.insert(slot.service_name().clone()) {
            return false;
        }
        self.slots.push(slot);
        true
    }

    /// Register a dependency
    pub fn require(&mut self, dependency: &dyn Dependency) -> &mut Self {
        dependency.register(self);
        self
    }

    /// Registered slots, in registration order
    pub fn slots(&self) -> &[Arc<dyn ServiceSlot>] {
        &self.slots
    }

    /// Registered service names, in registration order
    pub fn service_names(&self) -> Vec<ServiceName> {
        self.slots
            .iter()
            .map(|slot| slot.service_name().clone())
            .collect()
    }

    /// Number of registered services
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether nothing is registered
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

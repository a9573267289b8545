//! Provisioning steps
//!
//! A step is one unit of deferred work handed to a supervisor. It declares
//! its dependencies through [`ProvisioningStep::register`] and, once the
//! supervisor has supplied them, produces the value of the service it
//! installs.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::ports::Requirements;
use crate::value_objects::ServiceName;

/// Type-erased value of a started service
pub type ServiceValue = Arc<dyn Any + Send + Sync>;

/// One unit of provisioning work
pub trait ProvisioningStep: Send + Sync {
    /// Name of the service this step installs
    fn service_name(&self) -> &ServiceName;

    /// Register the services that must be started before this step runs
    fn register(&self, requirements: &mut Requirements);

    /// Run the step; registered dependencies are resolved at this point
    ///
    /// Returns the value to publish under [`service_name`](Self::service_name),
    /// if the service has one.
    fn execute(&self) -> Result<Option<ServiceValue>>;

    /// Serializable summary of the step
    fn describe(&self) -> StepDescriptor {
        let mut requirements = Requirements::new();
        self.register(&mut requirements);
        StepDescriptor {
            service: self.service_name().clone(),
            dependencies: requirements.service_names(),
        }
    }
}

impl fmt::Debug for dyn ProvisioningStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ProvisioningStep")
            .field(self.service_name())
            .finish()
    }
}

/// Name and dependencies of a step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepDescriptor {
    /// Installed service
    pub service: ServiceName,
    /// Required services, in registration order
    pub dependencies: Vec<ServiceName>,
}

//! Values published by services outside the core

use serde::{Deserialize, Serialize};

/// Marshalling context of a deployment unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarshallingContext {
    /// Canonical service name of the owning unit
    pub owner: String,
}

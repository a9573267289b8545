//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns for session cache provisioning.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment configuration (defaults, TOML, environment) |
//! | [`constants`] | Centralized configuration constants |
//! | [`error_ext`] | Context helpers mapping foreign errors to the domain error |
//! | [`logging`] | Structured logging with tracing |
//! | [`supervisor`] | In-process execution of provisioning plans |

pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;
pub mod supervisor;

// Re-export commonly used types
pub use config::{AppConfig, ConfigBuilder, ConfigLoader};
pub use error_ext::ErrorContext;
pub use supervisor::{ProvisioningReport, Supervisor};

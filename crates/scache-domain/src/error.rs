//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for cache provisioning
#[derive(Error, Debug)]
pub enum Error {
    /// Dialect string does not name a known database dialect
    #[error("Invalid dialect: {value}")]
    InvalidDialect {
        /// The rejected dialect string
        value: String,
    },

    /// Service name text could not be parsed or has the wrong shape
    #[error("Invalid service name '{value}': {reason}")]
    InvalidServiceName {
        /// The rejected text
        value: String,
        /// Why it was rejected
        reason: String,
    },

    /// A dependency value was read before the supervisor supplied it
    #[error("Dependency not resolved: {service}")]
    DependencyNotResolved {
        /// Service the dependency refers to
        service: String,
    },

    /// The supervisor supplied a dependency value twice
    #[error("Dependency already resolved: {service}")]
    DependencyAlreadyResolved {
        /// Service the dependency refers to
        service: String,
    },

    /// The supervisor supplied a value of the wrong type
    #[error("Dependency type mismatch for {service}: expected {expected}")]
    DependencyTypeMismatch {
        /// Service the dependency refers to
        service: String,
        /// Type name the dependency expects
        expected: &'static str,
    },

    /// A step required a service that is not available
    #[error("Dependency resolution failed for {step}: {service} is not available")]
    DependencyResolution {
        /// Service installed by the step
        step: String,
        /// Missing service
        service: String,
    },

    /// An extension provider failed during discovery or contribution
    #[error("Provider '{provider}' failed: {message}")]
    ProviderContribution {
        /// Provider name
        provider: String,
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Infrastructure failure outside the provisioning model
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

impl Error {
    /// Create an invalid dialect error
    pub fn invalid_dialect<S: Into<String>>(value: S) -> Self {
        Self::InvalidDialect {
            value: value.into(),
        }
    }

    /// Create an invalid service name error
    pub fn invalid_service_name<V: Into<String>, R: Into<String>>(value: V, reason: R) -> Self {
        Self::InvalidServiceName {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

// Dependency error creation methods
impl Error {
    /// Create a dependency-not-resolved error
    pub fn dependency_not_resolved<S: ToString>(service: S) -> Self {
        Self::DependencyNotResolved {
            service: service.to_string(),
        }
    }

    /// Create a dependency-already-resolved error
    pub fn dependency_already_resolved<S: ToString>(service: S) -> Self {
        Self::DependencyAlreadyResolved {
            service: service.to_string(),
        }
    }

    /// Create a dependency resolution error
    pub fn dependency_resolution<S: ToString, D: ToString>(step: S, service: D) -> Self {
        Self::DependencyResolution {
            step: step.to_string(),
            service: service.to_string(),
        }
    }
}

// Provider error creation methods
impl Error {
    /// Create a provider contribution error
    pub fn provider<P: Into<String>, M: Into<String>>(provider: P, message: M) -> Self {
        Self::ProviderContribution {
            provider: provider.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a provider contribution error with source
    pub fn provider_with_source<
        P: Into<String>,
        M: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        provider: P,
        message: M,
        source: E,
    ) -> Self {
        Self::ProviderContribution {
            provider: provider.into(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Configuration and I/O error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

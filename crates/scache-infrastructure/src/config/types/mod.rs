//! Configuration types

mod app;
mod environment;
mod logging;

pub use app::AppConfig;
pub use environment::{ContainerEnvironment, DataSourceConfig, EnvironmentConfig, TemplateConfig};
pub use logging::LoggingConfig;

//! Infrastructure constants

// Configuration
/// Prefix of configuration environment variables (`SCACHE__LOGGING__LEVEL`)
pub const CONFIG_ENV_PREFIX: &str = "SCACHE";
/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";
/// Configuration file name looked up in the default locations
pub const DEFAULT_CONFIG_FILENAME: &str = "scache.toml";
/// Directory name used under the user config and home directories
pub const DEFAULT_CONFIG_DIR: &str = "scache";

// Logging
/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "SCACHE_LOG";
/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// File stem used when the configured log path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "scache";

// Environment
/// Default data source offered to stores
pub const DEFAULT_DATA_SOURCE_NAME: &str = "ExampleDS";
/// Disabled lifespan/max-idle, in milliseconds
pub const EXPIRATION_DISABLED_MS: i64 = -1;

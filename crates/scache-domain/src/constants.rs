//! Domain constants
//!
//! Service naming roots shared by the core steps, the capability registry
//! and extension providers.

// ============================================================================
// NAMING
// ============================================================================

/// Separator used when joining cache name segments
pub const CACHE_NAME_SEPARATOR: &str = "/";

/// Root segments of top-level deployment unit service names
pub const DEPLOYMENT_UNIT_ROOT: [&str; 2] = ["deployment", "unit"];

/// Root segments of deployment sub-unit service names
pub const DEPLOYMENT_SUBUNIT_ROOT: [&str; 2] = ["deployment", "subunit"];

/// Child segment naming the marshalling context of a deployment unit
pub const MARSHALLING_SEGMENT: &str = "marshalling";

// ============================================================================
// SERVICE ROOTS
// ============================================================================

/// Root of derived cache configuration services
pub const CACHE_CONFIGURATION_SERVICE: &str = "cache-configuration";

/// Root of cache services
pub const CACHE_SERVICE: &str = "cache";

/// Root of persistent store configuration services
pub const STORE_CONFIGURATION_SERVICE: &str = "cache-store";

/// Root of string-keyed table schema services
pub const STRING_TABLE_SERVICE: &str = "cache-store-table";

/// Root of extension module services of a cache container
pub const CONTAINER_MODULES_SERVICE: &str = "cache-container-modules";

/// Root of data source services
pub const DATA_SOURCE_SERVICE: &str = "data-source";

// ============================================================================
// DEFAULTS
// ============================================================================

/// Default cache container
pub const DEFAULT_CONTAINER_NAME: &str = "session";

/// Default template cache within the container
pub const DEFAULT_TEMPLATE_CACHE_NAME: &str = "passivation";

/// Default table name prefix for string-keyed stores
pub const DEFAULT_TABLE_PREFIX: &str = "scache_entry";

/// Default JDBC fetch size
pub const DEFAULT_FETCH_SIZE: u32 = 100;

/// Default JDBC batch size
pub const DEFAULT_BATCH_SIZE: u32 = 100;

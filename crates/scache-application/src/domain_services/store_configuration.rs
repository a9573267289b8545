//! Persistent store configuration derivation

use scache_domain::Result;
use scache_domain::value_objects::{
    ConnectionFactoryKind, DataSourceDescriptor, DatabaseDialect, ExtensionModule,
    KeyMapperDescriptor, StoreConfiguration, TableSchema,
};
use tracing::debug;

/// Parse an optional dialect name
///
/// Absent stays absent so the store can detect the dialect itself; an
/// unknown name is rejected.
pub fn resolve_dialect(dialect: Option<&str>) -> Result<Option<DatabaseDialect>> {
    dialect.map(str::parse::<DatabaseDialect>).transpose()
}

/// First key mapper declared by `modules`, scanning in registration order
pub fn find_key_mapper(modules: &[ExtensionModule]) -> Option<KeyMapperDescriptor> {
    modules.iter().find_map(ExtensionModule::key_mapper)
}

/// Derives the configuration of a string-keyed JDBC store
#[derive(Debug, Clone)]
pub struct StoreConfigurationDeriver {
    data_source_name: String,
    dialect: Option<DatabaseDialect>,
}

impl StoreConfigurationDeriver {
    /// Deriver for `data_source_name`; fails on an unknown dialect
    pub fn new(data_source_name: impl Into<String>, dialect: Option<&str>) -> Result<Self> {
        Ok(Self {
            data_source_name: data_source_name.into(),
            dialect: resolve_dialect(dialect)?,
        })
    }

    /// Logical data source name
    pub fn data_source_name(&self) -> &str {
        &self.data_source_name
    }

    /// Resolved dialect
    pub fn dialect(&self) -> Option<DatabaseDialect> {
        self.dialect
    }

    /// Compose the store configuration from resolved inputs
    ///
    /// Bean stores are always segmented and never transactional.
    pub fn derive(
        &self,
        table: &TableSchema,
        modules: &[ExtensionModule],
        data_source: &DataSourceDescriptor,
    ) -> StoreConfiguration {
        let key_mapper = find_key_mapper(modules);
        match &key_mapper {
            Some(mapper) => debug!(
                mapper = %mapper.name,
                module = %mapper.module,
                "Using key mapper"
            ),
            None => debug!(
                data_source = %self.data_source_name,
                "No module declares a key mapper; store default applies"
            ),
        }

        StoreConfiguration {
            dialect: self.dialect,
            data_source: data_source.clone(),
            key_mapper,
            table: table.clone(),
            segmented: true,
            transactional: false,
            connection_factory: ConnectionFactoryKind::ManagedDataSource,
        }
    }
}

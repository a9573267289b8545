//! Persistent store value objects

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BATCH_SIZE, DEFAULT_FETCH_SIZE, DEFAULT_TABLE_PREFIX};
use crate::error::{Error, Result};

/// SQL dialects understood by string-keyed stores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DatabaseDialect {
    /// Microsoft Access
    Access,
    /// IBM DB2
    Db2,
    /// IBM DB2 for z/OS
    #[serde(rename = "DB2_390")]
    Db2390,
    /// Apache Derby
    Derby,
    /// H2
    H2,
    /// MariaDB
    MariaDb,
    /// MySQL
    #[serde(rename = "MYSQL")]
    MySql,
    /// Oracle
    Oracle,
    /// PostgreSQL
    Postgres,
    /// SQLite
    Sqlite,
    /// Microsoft SQL Server
    SqlServer,
    /// Sybase
    Sybase,
}

impl DatabaseDialect {
    /// Every dialect, in declaration order
    pub const ALL: [DatabaseDialect; 12] = [
        Self::Access,
        Self::Db2,
        Self::Db2390,
        Self::Derby,
        Self::H2,
        Self::MariaDb,
        Self::MySql,
        Self::Oracle,
        Self::Postgres,
        Self::Sqlite,
        Self::SqlServer,
        Self::Sybase,
    ];

    /// Configuration name of the dialect
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Access => "ACCESS",
            Self::Db2 => "DB2",
            Self::Db2390 => "DB2_390",
            Self::Derby => "DERBY",
            Self::H2 => "H2",
            Self::MariaDb => "MARIA_DB",
            Self::MySql => "MYSQL",
            Self::Oracle => "ORACLE",
            Self::Postgres => "POSTGRES",
            Self::Sqlite => "SQLITE",
            Self::SqlServer => "SQL_SERVER",
            Self::Sybase => "SYBASE",
        }
    }
}

impl FromStr for DatabaseDialect {
    type Err = Error;

    /// Exact, case-sensitive match against [`DatabaseDialect::as_str`]
    fn from_str(value: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|dialect| dialect.as_str() == value)
            .ok_or_else(|| Error::invalid_dialect(value))
    }
}

impl fmt::Display for DatabaseDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A table column: name and SQL type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    /// Column name
    pub name: String,
    /// SQL type
    pub sql_type: String,
}

impl ColumnDefinition {
    /// Create a column definition
    pub fn new(name: impl Into<String>, sql_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sql_type: sql_type.into(),
        }
    }
}

/// Layout of the table backing a string-keyed store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSchema {
    /// Table name prefix; the cache name is appended by the store
    pub prefix: String,
    /// Key column
    pub id_column: ColumnDefinition,
    /// Serialized entry column
    pub data_column: ColumnDefinition,
    /// Expiry timestamp column
    pub timestamp_column: ColumnDefinition,
    /// Segment number column
    pub segment_column: ColumnDefinition,
    /// Rows fetched per round trip
    pub fetch_size: u32,
    /// Rows written per batch
    pub batch_size: u32,
}

impl Default for TableSchema {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_TABLE_PREFIX.to_string(),
            id_column: ColumnDefinition::new("id", "VARCHAR"),
            data_column: ColumnDefinition::new("datum", "BINARY"),
            timestamp_column: ColumnDefinition::new("version", "BIGINT"),
            segment_column: ColumnDefinition::new("segment", "INTEGER"),
            fetch_size: DEFAULT_FETCH_SIZE,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

/// A two-way key/string mapper offered by an extension module
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyMapperDescriptor {
    /// Mapper implementation name
    pub name: String,
    /// Module that declares it
    pub module: String,
}

/// A loaded extension module and the key mappers it declares
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionModule {
    /// Module name
    pub name: String,
    /// Declared key mapper implementations, in declaration order
    #[serde(default)]
    pub key_mappers: Vec<String>,
}

impl ExtensionModule {
    /// Create a module declaring `key_mappers`
    pub fn new<I, S>(name: impl Into<String>, key_mappers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            key_mappers: key_mappers.into_iter().map(Into::into).collect(),
        }
    }

    /// First key mapper declared by this module
    pub fn key_mapper(&self) -> Option<KeyMapperDescriptor> {
        self.key_mappers.first().map(|mapper| KeyMapperDescriptor {
            name: mapper.clone(),
            module: self.name.clone(),
        })
    }
}

/// How the store obtains connections
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionFactoryKind {
    /// Connections come from a data source managed by the host
    #[default]
    ManagedDataSource,
}

/// A host-managed data source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSourceDescriptor {
    /// Logical data source name
    pub name: String,
    /// Connection URL, when known
    #[serde(default)]
    pub connection_url: Option<String>,
}

/// Final configuration of a string-keyed persistent store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfiguration {
    /// SQL dialect; `None` lets the store detect it
    pub dialect: Option<DatabaseDialect>,
    /// Data source the connection factory is bound to
    pub data_source: DataSourceDescriptor,
    /// Key mapper; `None` falls back to the store's default encoding
    pub key_mapper: Option<KeyMapperDescriptor>,
    /// Table layout
    pub table: TableSchema,
    /// Whether the store is segmented
    pub segmented: bool,
    /// Whether the store joins cluster transactions
    pub transactional: bool,
    /// Connection factory
    pub connection_factory: ConnectionFactoryKind,
}

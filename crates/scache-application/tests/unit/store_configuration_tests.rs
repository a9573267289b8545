//! Tests for persistent store configuration derivation

use scache_application::{StoreConfigurationDeriver, find_key_mapper, resolve_dialect};
use scache_domain::Error;
use scache_domain::value_objects::{
    ConnectionFactoryKind, DataSourceDescriptor, DatabaseDialect, ExtensionModule,
    KeyMapperDescriptor, TableSchema,
};

fn data_source() -> DataSourceDescriptor {
    DataSourceDescriptor {
        name: "ExampleDS".to_string(),
        connection_url: Some("jdbc:h2:mem:sessions".to_string()),
    }
}

#[test]
fn test_every_dialect_name_resolves() {
    for dialect in DatabaseDialect::ALL {
        assert_eq!(resolve_dialect(Some(dialect.as_str())).unwrap(), Some(dialect));
    }
}

#[test]
fn test_unknown_dialect_is_rejected() {
    let err = StoreConfigurationDeriver::new("ExampleDS", Some("COBOL")).unwrap_err();
    assert!(matches!(err, Error::InvalidDialect { ref value } if value == "COBOL"));
}

#[test]
fn test_first_module_with_mapper_wins() {
    let modules = vec![
        ExtensionModule::new("org.example.empty", Vec::<String>::new()),
        ExtensionModule::new("org.example.web", ["WebKeyMapper", "OtherKeyMapper"]),
        ExtensionModule::new("org.example.ejb", ["BeanKeyMapper"]),
    ];

    assert_eq!(
        find_key_mapper(&modules),
        Some(KeyMapperDescriptor {
            name: "WebKeyMapper".to_string(),
            module: "org.example.web".to_string(),
        })
    );
}

#[test]
fn test_no_mapper_when_modules_declare_none() {
    assert_eq!(find_key_mapper(&[]), None);
    let modules = vec![ExtensionModule::new("org.example.empty", Vec::<String>::new())];
    assert_eq!(find_key_mapper(&modules), None);
}

#[test]
fn test_store_is_segmented_and_non_transactional() {
    let deriver = StoreConfigurationDeriver::new("ExampleDS", Some("H2")).unwrap();
    let table = TableSchema::default();
    let modules = vec![ExtensionModule::new("org.example.web", ["WebKeyMapper"])];

    let store = deriver.derive(&table, &modules, &data_source());

    assert!(store.segmented);
    assert!(!store.transactional);
    assert_eq!(store.dialect, Some(DatabaseDialect::H2));
    assert_eq!(store.data_source, data_source());
    assert_eq!(store.table, table);
    assert_eq!(store.connection_factory, ConnectionFactoryKind::ManagedDataSource);
    assert_eq!(
        store.key_mapper.map(|mapper| mapper.name),
        Some("WebKeyMapper".to_string())
    );
}

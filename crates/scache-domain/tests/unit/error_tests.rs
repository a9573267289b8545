//! Error type tests

use std::error::Error as _;
use std::io;

use scache_domain::Error;

#[test]
fn test_display_messages() {
    assert_eq!(
        Error::invalid_dialect("COBOL").to_string(),
        "Invalid dialect: COBOL"
    );
    assert_eq!(
        Error::dependency_resolution("cache.session.c", "data-source.DS").to_string(),
        "Dependency resolution failed for cache.session.c: data-source.DS is not available"
    );
    assert_eq!(
        Error::provider("group", "boom").to_string(),
        "Provider 'group' failed: boom"
    );
}

#[test]
fn test_sources_are_preserved() {
    let err = Error::provider_with_source("group", "factory failed", io::Error::other("disk"));
    assert_eq!(err.source().map(ToString::to_string), Some("disk".to_string()));

    assert!(Error::configuration("missing").source().is_none());
}


//! Application ports
//!
//! Extension point registries. Domain ports live in `scache_domain::ports`.

pub mod registry;

//! Shared application domain and persistence modules.

pub mod domain;
pub mod settings;
pub mod store;
pub mod uuids;

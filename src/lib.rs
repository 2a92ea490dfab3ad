pub mod admin;
pub mod cli;
pub mod commands;
pub mod config;
pub mod listings;
pub mod models;
pub mod storage;

pub use admin::AdminSession;
pub use listings::PropertyStore;
pub use models::{NewProperty, Property, PropertyType, PropertyUpdate};
pub use storage::{FileStore, KeyValueStore, MemoryStore};

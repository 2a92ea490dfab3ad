pub mod file;
pub mod memory;
pub mod traits;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use traits::KeyValueStore;

/// Key holding the serialized property collection
pub const PROPERTIES_KEY: &str = "imobiliaria_leon_properties";

/// Key holding the admin flag
pub const ADMIN_KEY: &str = "imobiliaria_leon_admin";

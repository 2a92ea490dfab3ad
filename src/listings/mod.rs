pub mod forms;
pub mod gallery;
pub mod ids;
pub mod store;

pub use forms::{format_price, parse_price, FormError, PropertyForm};
pub use gallery::{add_photo, remove_photo};
pub use ids::IdGenerator;
pub use store::PropertyStore;

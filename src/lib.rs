mod error;
mod record;
mod store;

pub use error::CatalogError;
pub use record::{Fields, Record};
pub use store::CatalogStore;

// Re-export the JSON map/value types callers build field mappings with
pub use serde_json::{Map, Value};

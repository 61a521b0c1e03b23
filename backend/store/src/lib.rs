pub mod schema;
pub mod sqlite_store;

pub use schema::{SCHEMA_VERSION, TABLE_NAME};
pub use sqlite_store::LogStore;

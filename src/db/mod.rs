pub mod schema;
pub mod keys;
pub mod kv_store;

pub use kv_store::{clear_session_keys, KeyValueStore, MemoryStore, SqliteStore};

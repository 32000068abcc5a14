//! Meas Store
//!
//! Implementations of the [`KeyValueStore`] port:
//!
//! - [`InMemoryStore`]: process-local, for tests and throwaway sessions
//! - [`JsonFileStore`]: a single JSON object on disk, rewritten on every write

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::InMemoryStore;

pub use meas_ports::{KeyValueStore, StoreError, StoreResult};

use crate::error::StoreResult;

/// Port for flat string key-value persistence
///
/// No invariants beyond last write wins.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Removing a missing key is not an error
    fn remove(&self, key: &str) -> StoreResult<()>;
}

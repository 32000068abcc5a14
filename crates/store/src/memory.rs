use dashmap::DashMap;
use meas_ports::{KeyValueStore, StoreResult};

/// Concurrent in-memory store
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: DashMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.get(key).map(|v| v.value().clone()))
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_write_wins() {
        let store = InMemoryStore::new();
        store.set("gold_buy_price", "100").unwrap();
        store.set("gold_buy_price", "120").unwrap();

        assert_eq!(store.get("gold_buy_price").unwrap(), Some("120".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_missing_key() {
        let store = InMemoryStore::new();
        store.remove("nothing").unwrap();
        assert!(store.is_empty());
        assert_eq!(store.get("nothing").unwrap(), None);
    }
}

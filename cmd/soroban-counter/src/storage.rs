use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Key/value capability handed to contract operations.
///
/// Operations never reach for storage on their own; callers pass it in, so the
/// same code runs against a ledger snapshot, a server's shared state, or a
/// throwaway map in tests.
pub trait Storage {
    fn get(&self, key: &str) -> Option<u32>;

    fn set(&mut self, key: &str, value: u32);

    fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

/// Storage of a single contract instance.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstanceStorage {
    entries: BTreeMap<String, u32>,
}

impl InstanceStorage {
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

impl Storage for InstanceStorage {
    fn get(&self, key: &str) -> Option<u32> {
        self.entries.get(key).copied()
    }

    fn set(&mut self, key: &str, value: u32) {
        self.entries.insert(key.to_string(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_is_none() {
        let storage = InstanceStorage::new();
        assert_eq!(storage.get("COUNTER"), None);
        assert!(!storage.has("COUNTER"));
        assert!(storage.is_empty());
    }

    #[test]
    fn set_replaces_prior_value() {
        let mut storage = InstanceStorage::new();
        storage.set("COUNTER", 1);
        storage.set("COUNTER", 7);
        assert_eq!(storage.get("COUNTER"), Some(7));
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn serializes_as_plain_map() {
        let mut storage = InstanceStorage::new();
        storage.set("COUNTER", 3);
        assert_eq!(
            serde_json::to_string(&storage).unwrap(),
            r#"{"COUNTER":3}"#
        );
    }
}

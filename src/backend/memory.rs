use std::collections::HashMap;
use std::sync::Mutex;

use crate::backend::{OperationStatus, SecretRecord, SecureBackend};

/// In-memory backend: a `HashMap` behind a mutex. Used as a test double and
/// for embedding where no platform vault is available. State does not
/// survive the process.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    items: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SecureBackend for MemoryBackend {
    fn add(&self, key: &str, payload: &[u8]) -> OperationStatus {
        let mut items = self.items.lock().unwrap();
        if items.contains_key(key) {
            return OperationStatus::Duplicate;
        }
        items.insert(key.to_string(), payload.to_vec());
        OperationStatus::Success
    }

    fn query(&self, key: &str) -> (OperationStatus, Option<SecretRecord>) {
        let items = self.items.lock().unwrap();
        match items.get(key) {
            Some(payload) => (
                OperationStatus::Success,
                Some(SecretRecord {
                    account: key.to_string(),
                    value_data: Some(payload.clone()),
                }),
            ),
            None => (OperationStatus::NotFound, None),
        }
    }

    fn remove(&self, key: &str) -> OperationStatus {
        let mut items = self.items.lock().unwrap();
        match items.remove(key) {
            Some(_) => OperationStatus::Success,
            None => OperationStatus::NotFound,
        }
    }
}

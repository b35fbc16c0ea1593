//! The shared key-value store handed to every case during a run.
//!
//! Suites own one container and pass it by reference to each case's check.
//! The default [`MemoryContainer`] is a plain in-memory map; swap in another
//! implementation with [`crate::suite::TestSuite::set_container`].

use std::collections::HashMap;

use serde_json::Value;

/// String-keyed storage with plain map semantics.
pub trait Container {
    /// Whether anything is stored under `key`.
    fn has(&self, key: &str) -> bool;

    /// The value stored under `key`, or `None` when absent.
    fn get(&self, key: &str) -> Option<&Value>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: Value);

    /// Drop the value under `key`. A no-op when absent.
    fn forget(&mut self, key: &str);
}

/// The default in-memory container.
#[derive(Debug, Default)]
pub struct MemoryContainer {
    storage: HashMap<String, Value>,
}

impl MemoryContainer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Container for MemoryContainer {
    fn has(&self, key: &str) -> bool {
        self.storage.contains_key(key)
    }

    fn get(&self, key: &str) -> Option<&Value> {
        self.storage.get(key)
    }

    fn set(&mut self, key: &str, value: Value) {
        self.storage.insert(key.to_string(), value);
    }

    fn forget(&mut self, key: &str) {
        self.storage.remove(key);
    }
}

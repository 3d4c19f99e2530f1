//! In-memory registry backed by `DashMap`.

use dashmap::DashMap;

use crate::error::AppResult;
use crate::registry::{Registry, RegistryValue};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct RegistryKey {
    user_id: String,
    key: String,
    name: String,
}

impl RegistryKey {
    fn new(user_id: &str, key: &str, name: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            key: key.to_string(),
            name: name.to_string(),
        }
    }
}

/// Process-local registry; values live as long as the instance.
#[derive(Debug, Default)]
pub struct MemoryRegistry {
    store: DashMap<RegistryKey, RegistryValue>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Forget everything stored for one user.
    pub fn clear_user(&self, user_id: &str) {
        self.store.retain(|entry, _| entry.user_id != user_id);
    }
}

impl Registry for MemoryRegistry {
    fn read(&self, user_id: &str, key: &str, name: &str) -> AppResult<Option<RegistryValue>> {
        let entry = RegistryKey::new(user_id, key, name);
        Ok(self.store.get(&entry).map(|value| value.value().clone()))
    }

    fn write(&self, user_id: &str, key: &str, name: &str, value: RegistryValue) -> AppResult<()> {
        tracing::trace!(user_id, key, name, %value, "registry write");
        self.store.insert(RegistryKey::new(user_id, key, name), value);
        Ok(())
    }
}

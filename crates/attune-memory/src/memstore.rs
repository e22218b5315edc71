//! In-memory `MemoryStorage` backend.
//!
//! Rows live in a `DashMap` keyed by user id; every mutation locks the
//! user's whole entry, which provides the per-user write serialization the
//! storage contract requires. Suitable for tests and embedded use.

use dashmap::DashMap;

use attune_core::errors::{EngineResult, StoreError};
use attune_core::memory::Memory;
use attune_core::traits::MemoryStorage;

/// DashMap-backed storage: user id → owned memory rows.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    rows: DashMap<String, Vec<Memory>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MemoryStorage for InMemoryStore {
    fn insert(&self, memory: &Memory) -> EngineResult<()> {
        self.rows
            .entry(memory.user_id.clone())
            .or_default()
            .push(memory.clone());
        Ok(())
    }

    fn get(&self, id: &str) -> EngineResult<Option<Memory>> {
        Ok(self
            .rows
            .iter()
            .find_map(|rows| rows.value().iter().find(|m| m.id == id).cloned()))
    }

    fn update_row(
        &self,
        id: &str,
        apply: &mut dyn FnMut(&mut Memory),
    ) -> EngineResult<Memory> {
        // The closure runs while iter_mut holds the entry's write lock, so
        // no other mutation can land between the read and the write.
        for mut rows in self.rows.iter_mut() {
            if let Some(slot) = rows.iter_mut().find(|m| m.id == id) {
                apply(slot);
                return Ok(slot.clone());
            }
        }
        Err(StoreError::NotFound { id: id.to_string() }.into())
    }

    fn delete(&self, id: &str) -> EngineResult<()> {
        for mut rows in self.rows.iter_mut() {
            let before = rows.len();
            rows.retain(|m| m.id != id);
            if rows.len() != before {
                return Ok(());
            }
        }
        Err(StoreError::NotFound { id: id.to_string() }.into())
    }

    fn list_for_user(&self, user_id: &str) -> EngineResult<Vec<Memory>> {
        Ok(self
            .rows
            .get(user_id)
            .map(|rows| rows.clone())
            .unwrap_or_default())
    }

    fn count_for_user(&self, user_id: &str) -> EngineResult<usize> {
        Ok(self.rows.get(user_id).map(|rows| rows.len()).unwrap_or(0))
    }

    fn delete_user(&self, user_id: &str) -> EngineResult<usize> {
        Ok(self
            .rows
            .remove(user_id)
            .map(|(_, rows)| rows.len())
            .unwrap_or(0))
    }
}

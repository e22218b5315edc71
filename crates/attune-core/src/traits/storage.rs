use crate::errors::EngineResult;
use crate::memory::Memory;

/// Persistence seam for memory rows.
///
/// Row mutation goes through [`MemoryStorage::update_row`] so the
/// read-modify-write happens inside the backend's per-row lock; decay and
/// reinforcement of the same row serialize instead of one overwriting the
/// other with a stale snapshot.
///
/// The production backend is an external row store; the in-memory backend in
/// `attune-memory` exists for tests and embedding.
pub trait MemoryStorage: Send + Sync {
    // --- CRUD ---
    fn insert(&self, memory: &Memory) -> EngineResult<()>;
    fn get(&self, id: &str) -> EngineResult<Option<Memory>>;
    /// Atomically read-modify-write one row. The closure runs on the
    /// current stored row, under the backend's write lock for that row.
    /// Returns the row as written.
    fn update_row(
        &self,
        id: &str,
        apply: &mut dyn FnMut(&mut Memory),
    ) -> EngineResult<Memory>;
    fn delete(&self, id: &str) -> EngineResult<()>;

    // --- Query ---
    fn list_for_user(&self, user_id: &str) -> EngineResult<Vec<Memory>>;
    fn count_for_user(&self, user_id: &str) -> EngineResult<usize>;

    // --- Privacy erasure ---
    /// Delete every memory the user owns. Returns how many were removed.
    fn delete_user(&self, user_id: &str) -> EngineResult<usize>;
}

/// Memory store errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("memory not found: {id}")]
    NotFound { id: String },

    #[error("memory {id} is not owned by user {user_id}")]
    NotOwner { id: String, user_id: String },

    #[error("backend failure: {reason}")]
    Backend { reason: String },
}

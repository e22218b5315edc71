//! Error types for the Attune workspace.
//!
//! Each subsystem gets its own enum; `EngineError` is the umbrella the
//! orchestrator converts everything into before deciding how to fail open.

mod store_error;

pub use store_error::StoreError;

/// Umbrella error for the decision pipeline.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("config error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result alias used across the workspace.
pub type EngineResult<T> = Result<T, EngineError>;

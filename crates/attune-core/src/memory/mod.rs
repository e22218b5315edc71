pub mod base;
pub mod confidence;
pub mod types;

pub use base::Memory;
pub use confidence::Confidence;
pub use types::MemoryType;

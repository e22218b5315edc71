//! The five confidence factors, each a pure function returning [0, 1].

pub mod conflict_risk;
pub mod evidence_strength;
pub mod memory_support;
pub mod protocol_fit;
pub mod timing_fit;

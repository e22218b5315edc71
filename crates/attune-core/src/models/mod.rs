pub mod day_state;
pub mod decision;
pub mod priority;
pub mod protocol;

pub use day_state::{QuietHours, TimeOfDay, UserDayState};
pub use decision::{ConfidenceFactors, ConfidenceReport, NudgeDecision};
pub use priority::NudgePriority;
pub use protocol::{EvidenceLevel, ProtocolCandidate};

/// Attune system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Hard cap on memories held per user; pruning enforces it.
pub const MAX_MEMORIES_PER_USER: usize = 150;

/// Memories below this confidence are excluded from retrieval and pruned.
pub const MIN_RETRIEVAL_CONFIDENCE: f64 = 0.1;

/// Reinforcement never pushes confidence past this ceiling.
pub const REINFORCEMENT_CEILING: f64 = 0.95;

/// Diminishing-returns reinforcement rate: `c + RATE * (1 - c)`.
pub const REINFORCEMENT_RATE: f64 = 0.1;

/// Evidence count at which a memory's decay rate is halved.
pub const EVIDENCE_STABILITY_THRESHOLD: u32 = 5;

/// Weekly decay rate bounds and default.
pub const MIN_DECAY_RATE: f64 = 0.01;
pub const MAX_DECAY_RATE: f64 = 0.1;
pub const DEFAULT_DECAY_RATE: f64 = 0.05;

/// Confidence assigned to a new observation when the caller supplies none.
pub const DEFAULT_MEMORY_CONFIDENCE: f64 = 0.5;

/// Overall confidence below this marks a candidate for suppression.
pub const SUPPRESSION_CONFIDENCE_FLOOR: f64 = 0.4;

/// Decay sweeps skip memories decayed within this window (idempotence).
pub const DECAY_SWEEP_COOLDOWN_HOURS: i64 = 24;

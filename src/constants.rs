use tracing::Level;

pub const SCHEDULER_TRACING_LOG_LEVEL: Level = Level::DEBUG;

// A stalled connection may poll the scheduler in a tight loop. No-decision
// outcomes are logged at most this often by the tracing wrapper.
pub const NO_DECISION_LOG_EVERY_MS: u64 = 500;

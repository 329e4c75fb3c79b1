// Core business logic module

pub mod config;
pub mod dispatch;
pub mod evaluator;
pub mod logsink;
pub mod monitor;
pub mod probe;
pub mod units;

// Re-export commonly used items
pub use config::{Constraint, Settings};
pub use dispatch::AlertDispatcher;
pub use evaluator::{evaluate, Verdict};
pub use logsink::ActivityLog;
pub use monitor::{CycleOutcome, Monitor};
pub use probe::{Reading, Sampler, SystemSampler};

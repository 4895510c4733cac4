//! Incremental loading of playlist item summaries

pub mod events;
pub mod orchestrator;

pub use events::{BatchJob, JobScope, OrchestratorEvent, RunId, RunOutcome};
pub use orchestrator::PlaylistOrchestrator;

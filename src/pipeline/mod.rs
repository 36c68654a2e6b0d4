// file: src/pipeline/mod.rs
// description: batch extraction module exports
// reference: internal module structure

pub mod harvester;
pub mod progress;

pub use harvester::{HarvestOutcome, Harvester, UUID_NOT_FOUND};
pub use progress::{ExtractionStats, ProgressTracker};

//! Progress notification port
//!
//! Defines the interface for reporting progress while orchestrators run.

use duet_domain::{Model, Stage};

/// Callback for progress updates during orchestration
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bars, plain lines, nothing).
pub trait ProgressNotifier: Send + Sync {
    /// Called when a stage starts with the number of backend calls it makes
    fn on_stage_start(&self, stage: Stage, total_calls: usize);

    /// Called when one backend call of a stage finishes
    fn on_call_complete(&self, stage: Stage, model: &Model, success: bool);

    /// Called when a stage completes
    fn on_stage_complete(&self, stage: Stage);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_stage_start(&self, _stage: Stage, _total_calls: usize) {}
    fn on_call_complete(&self, _stage: Stage, _model: &Model, _success: bool) {}
    fn on_stage_complete(&self, _stage: Stage) {}
}

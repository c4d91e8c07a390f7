//! Coordinator parameters — orchestration knobs that are not domain policy.

use serde::{Deserialize, Serialize};

/// Orchestration control parameters.
///
/// Used by [`CreateLearningContentUseCase`](crate::CreateLearningContentUseCase).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoordinatorParams {
    /// Run the concept and practice stages concurrently.
    ///
    /// Neither stage reads the other's output, so the result is the same
    /// either way; the integration stage always waits for both.
    pub parallel_stages: bool,
}

impl CoordinatorParams {
    pub fn with_parallel_stages(mut self, parallel: bool) -> Self {
        self.parallel_stages = parallel;
        self
    }
}

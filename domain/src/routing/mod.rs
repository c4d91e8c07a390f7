//! Question routing
//!
//! Decides which [`ModelCategory`](crate::ModelCategory) should answer a
//! question. Orchestrators depend on the [`QuestionClassifier`] trait only,
//! so the keyword heuristic can be swapped for another classifier.

mod classifier;

pub use classifier::{CODE_KEYWORDS, KeywordClassifier, QuestionClassifier};

//! Prompt domain
//!
//! Literal prompt construction for the synthesis and learning stages.
//! Single queries send the question text unchanged.

mod template;

pub use template::PromptTemplate;

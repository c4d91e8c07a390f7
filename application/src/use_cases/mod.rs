//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod ask_both_models;
pub mod ask_single_model;
pub mod backend_client;
pub mod create_learning_content;
pub mod dispatch_tool;

#[cfg(test)]
pub(crate) mod test_support;

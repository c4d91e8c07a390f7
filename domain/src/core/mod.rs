//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`] — a backend model identifier (e.g. `llama3.2:3b`)
//! - [`category::ModelCategory`] — which kind of model answers a question
//! - [`registry::ModelRegistry`] — immutable category → model mapping
//! - [`question::Question`] / [`question::Topic`] — validated inputs
//! - [`error::DomainError`] — domain-level errors

pub mod category;
pub mod error;
pub mod model;
pub mod question;
pub mod registry;

//! Coordination domain
//!
//! Result types produced by the orchestrators and the stages they run
//! through.
//!
//! ```text
//! single:   Query
//! dual:     Fanout (general ∥ code) ─▶ Synthesis (general)
//! learning: Concept (general) ─▶ Practice (code) ─▶ Integration (general)
//! ```

pub mod entities;
pub mod value_objects;

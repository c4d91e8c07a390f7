//! Coordination stages

use serde::{Deserialize, Serialize};

/// Stage of an orchestration run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Single routed query
    Query,
    /// Both models answer the same question concurrently
    Fanout,
    /// General model compares the two answers
    Synthesis,
    /// General model explains the topic
    Concept,
    /// Code model gives implementation details
    Practice,
    /// General model merges concept and practice into a guide
    Integration,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Query => "query",
            Stage::Fanout => "fanout",
            Stage::Synthesis => "synthesis",
            Stage::Concept => "concept",
            Stage::Practice => "practice",
            Stage::Integration => "integration",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Stage::Query => "Query",
            Stage::Fanout => "Ask Both Models",
            Stage::Synthesis => "Synthesis",
            Stage::Concept => "Concept",
            Stage::Practice => "Practice",
            Stage::Integration => "Integration",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

//! Content store construction errors.

use thiserror::Error;

use super::phase::Phase;

/// Ways a roadmap document can be rejected.
///
/// All of these are configuration errors in the compiled-in dataset; the
/// binary reports them and exits before touching the terminal.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("failed to parse roadmap content: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate topic id '{0}'")]
    DuplicateId(String),

    #[error("topic in phase {phase} has an empty id")]
    EmptyId { phase: Phase },

    #[error("topic '{id}' has nesting level {found}, expected {expected}")]
    InvalidLevel { id: String, expected: u8, found: u8 },

    #[error("sub-item '{id}' cannot own further sub-items")]
    NestedTooDeep { id: String },

    #[error("phase {0} is missing from the roadmap content")]
    MissingPhase(Phase),

    #[error("phase {0} appears more than once in the roadmap content")]
    DuplicatePhase(Phase),
}

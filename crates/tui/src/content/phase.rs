//! Roadmap phases.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four learning stages, in cyclic tour order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    #[default]
    Foundation,
    Intermediate,
    Advanced,
    AiIntegration,
}

impl Phase {
    /// All phases in roadmap order.
    pub const ALL: [Phase; 4] = [
        Phase::Foundation,
        Phase::Intermediate,
        Phase::Advanced,
        Phase::AiIntegration,
    ];

    /// Zero-based position in [`Phase::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::Foundation => 0,
            Self::Intermediate => 1,
            Self::Advanced => 2,
            Self::AiIntegration => 3,
        }
    }

    /// Phase at `index`, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// One-based stage number shown on the phase buttons.
    pub fn stage(self) -> usize {
        self.index() + 1
    }

    /// Next phase, wrapping from the last back to the first.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous phase, wrapping from the first to the last.
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Stable identifier used in the content document and on the command line.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Foundation => "foundation",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::AiIntegration => "ai-integration",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Phase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.slug() == needle)
            .ok_or_else(|| {
                format!(
                    "unknown phase '{}' (expected one of: foundation, intermediate, advanced, ai-integration)",
                    s.trim()
                )
            })
    }
}

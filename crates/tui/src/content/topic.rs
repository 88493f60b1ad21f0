//! Topic tree types.

use serde::Deserialize;

use super::phase::Phase;

/// Nesting level of a top-level topic.
pub const TOP_LEVEL: u8 = 1;

/// Nesting level of a sub-item.
pub const SUB_LEVEL: u8 = 2;

/// Display icon attached to topics and phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Award,
    Layers,
    Check,
    BarChart,
    Cpu,
}

impl Icon {
    /// Single-column glyph used by the renderer.
    pub fn glyph(self) -> char {
        match self {
            Self::Award => '★',
            Self::Layers => '≡',
            Self::Check => '✓',
            Self::BarChart => '▤',
            Self::Cpu => '◈',
        }
    }
}

/// One skill entry in the roadmap.
///
/// Level-1 topics may own sub-items; level-2 topics never do. Both rules are
/// checked when the [`ContentStore`](super::ContentStore) is built.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Topic {
    pub id: String,
    pub title: String,
    pub description: String,
    pub level: u8,
    pub icon: Icon,
    #[serde(default)]
    pub sub_items: Vec<Topic>,
}

impl Topic {
    /// Whether expanding this topic reveals nested rows.
    pub fn has_sub_items(&self) -> bool {
        !self.sub_items.is_empty()
    }

    /// This topic's id followed by the ids of its sub-items.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.id.as_str()).chain(self.sub_items.iter().map(|t| t.id.as_str()))
    }
}

/// Everything the roadmap shows for one phase.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PhaseContent {
    pub phase: Phase,
    /// Short button label ("AI Integration").
    pub label: String,
    pub icon: Icon,
    /// Banner heading ("AI Integration Skills").
    pub heading: String,
    /// One-sentence banner text.
    pub summary: String,
    /// Profile tip shown under the topic list.
    pub tip: String,
    #[serde(default)]
    pub topics: Vec<Topic>,
}

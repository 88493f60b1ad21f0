//! Immutable roadmap content.
//!
//! Responsibilities:
//! - Define the topic tree (`Topic`, `PhaseContent`, `Phase`, `Icon`).
//! - Build and validate the `ContentStore` from the embedded roadmap document.
//! - Answer id and phase lookups for the tour state machine and the renderer.
//!
//! Does NOT handle:
//! - Expansion state (see `tour`).
//! - Rendering (see `ui`).
//!
//! Invariants:
//! - Every topic id is unique across the whole store.
//! - Top-level topics are level 1; sub-items are level 2 and own nothing.
//! - Every `Phase` appears exactly once, stored in `Phase::ALL` order.

mod error;
mod phase;
mod topic;

pub use error::ContentError;
pub use phase::Phase;
pub use topic::{Icon, PhaseContent, SUB_LEVEL, TOP_LEVEL, Topic};

use serde::Deserialize;
use std::collections::HashMap;

/// The roadmap document compiled into the binary.
const BUILTIN_ROADMAP: &str = include_str!("../../assets/roadmap.json");

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RoadmapDocument {
    phases: Vec<PhaseContent>,
}

/// Where a topic lives in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicLocation {
    pub phase: Phase,
    /// Index among the phase's top-level topics.
    pub index: usize,
    /// Index among that topic's sub-items, for level-2 topics.
    pub sub_index: Option<usize>,
}

/// Validated, read-only topic tree.
#[derive(Debug, Clone)]
pub struct ContentStore {
    phases: Vec<PhaseContent>,
    locations: HashMap<String, TopicLocation>,
}

impl ContentStore {
    /// Parse and validate the compiled-in roadmap.
    pub fn builtin() -> Result<Self, ContentError> {
        Self::from_json(BUILTIN_ROADMAP)
    }

    /// Parse and validate a roadmap document.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let document: RoadmapDocument = serde_json::from_str(json)?;
        Self::from_phases(document.phases)
    }

    /// Validate phase content and index every topic id.
    pub fn from_phases(phases: Vec<PhaseContent>) -> Result<Self, ContentError> {
        let mut slots: [Option<PhaseContent>; 4] = Default::default();
        for content in phases {
            let slot = &mut slots[content.phase.index()];
            if slot.is_some() {
                return Err(ContentError::DuplicatePhase(content.phase));
            }
            *slot = Some(content);
        }

        let mut ordered = Vec::with_capacity(Phase::ALL.len());
        for (phase, slot) in Phase::ALL.into_iter().zip(slots) {
            ordered.push(slot.ok_or(ContentError::MissingPhase(phase))?);
        }

        let mut locations = HashMap::new();
        for content in &ordered {
            for (index, topic) in content.topics.iter().enumerate() {
                check_level(topic, TOP_LEVEL)?;
                register(&mut locations, content.phase, topic, index, None)?;

                for (sub_index, sub) in topic.sub_items.iter().enumerate() {
                    check_level(sub, SUB_LEVEL)?;
                    if sub.has_sub_items() {
                        return Err(ContentError::NestedTooDeep {
                            id: sub.id.clone(),
                        });
                    }
                    register(&mut locations, content.phase, sub, index, Some(sub_index))?;
                }
            }
        }

        tracing::debug!(topics = locations.len(), "Roadmap content validated");
        Ok(Self {
            phases: ordered,
            locations,
        })
    }

    /// Content for one phase.
    pub fn phase(&self, phase: Phase) -> &PhaseContent {
        &self.phases[phase.index()]
    }

    /// Top-level topics of a phase, in display order.
    pub fn topics(&self, phase: Phase) -> &[Topic] {
        &self.phase(phase).topics
    }

    /// Whether `id` names a topic anywhere in the store.
    pub fn contains(&self, id: &str) -> bool {
        self.locations.contains_key(id)
    }

    /// Where `id` lives, if it exists.
    pub fn locate(&self, id: &str) -> Option<TopicLocation> {
        self.locations.get(id).copied()
    }

    /// Look up any topic (top-level or sub-item) by id.
    pub fn topic(&self, id: &str) -> Option<&Topic> {
        let loc = self.locate(id)?;
        let top = self.topics(loc.phase).get(loc.index)?;
        match loc.sub_index {
            Some(sub) => top.sub_items.get(sub),
            None => Some(top),
        }
    }

    /// Every topic id in the store, in roadmap order.
    pub fn all_ids(&self) -> Vec<&str> {
        self.phases
            .iter()
            .flat_map(|p| p.topics.iter())
            .flat_map(Topic::ids)
            .collect()
    }

    /// Total number of topics, sub-items included.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Whether the store holds no topics at all.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

fn check_level(topic: &Topic, expected: u8) -> Result<(), ContentError> {
    if topic.level != expected {
        return Err(ContentError::InvalidLevel {
            id: topic.id.clone(),
            expected,
            found: topic.level,
        });
    }
    Ok(())
}

fn register(
    locations: &mut HashMap<String, TopicLocation>,
    phase: Phase,
    topic: &Topic,
    index: usize,
    sub_index: Option<usize>,
) -> Result<(), ContentError> {
    if topic.id.trim().is_empty() {
        return Err(ContentError::EmptyId { phase });
    }
    let location = TopicLocation {
        phase,
        index,
        sub_index,
    };
    if locations.insert(topic.id.clone(), location).is_some() {
        return Err(ContentError::DuplicateId(topic.id.clone()));
    }
    Ok(())
}

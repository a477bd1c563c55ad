//! Read-only actor snapshots.
//!
//! A [`ReactionActor`] is assembled fresh for every evaluation or execution
//! from the knowledge and tooling ports. It is never cached or mutated.

use std::collections::BTreeSet;

use crate::config::ReactionConfig;
use crate::ids::{ActorId, KnowledgeKey, ToolTag};

/// A tool held by an actor.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToolInstance {
    pub tag: ToolTag,
    /// 0-100, 50 is average and quality-neutral.
    #[cfg_attr(feature = "serde", serde(default = "default_quality"))]
    pub quality: i32,
}

#[cfg(feature = "serde")]
fn default_quality() -> i32 {
    ReactionConfig::DEFAULT_TOOL_QUALITY
}

impl ToolInstance {
    pub fn new(tag: ToolTag, quality: i32) -> Self {
        Self { tag, quality }
    }

    /// A tool of average quality.
    pub fn average(tag: ToolTag) -> Self {
        Self::new(tag, ReactionConfig::DEFAULT_TOOL_QUALITY)
    }
}

/// Knowledge and tools of one actor at the time of the call.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReactionActor {
    actor_id: ActorId,
    knowledge: BTreeSet<KnowledgeKey>,
    tools: Vec<ToolInstance>,
}

impl ReactionActor {
    pub fn new(
        actor_id: ActorId,
        knowledge: impl IntoIterator<Item = KnowledgeKey>,
        tools: impl IntoIterator<Item = ToolInstance>,
    ) -> Self {
        Self {
            actor_id,
            knowledge: knowledge.into_iter().collect(),
            tools: tools.into_iter().collect(),
        }
    }

    pub fn actor_id(&self) -> ActorId {
        self.actor_id
    }

    pub fn knowledge(&self) -> &BTreeSet<KnowledgeKey> {
        &self.knowledge
    }

    pub fn tools(&self) -> &[ToolInstance] {
        &self.tools
    }

    pub fn knows(&self, key: &KnowledgeKey) -> bool {
        self.knowledge.contains(key)
    }

    /// First held tool with the given tag, in the order the tooling port reported them.
    pub fn first_tool(&self, tag: &ToolTag) -> Option<&ToolInstance> {
        self.tools.iter().find(|tool| &tool.tag == tag)
    }

    pub fn has_tool(&self, tag: &ToolTag) -> bool {
        self.first_tool(tag).is_some()
    }
}

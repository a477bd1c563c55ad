//! Capability interfaces the engine depends on but does not implement.
//!
//! Hosts plug their own storage in behind these traits. Each call is assumed
//! to apply atomically from the engine's point of view; transactional
//! guarantees across calls (for example compare-and-swap debits) belong to
//! the adapter, not the engine.
//!
//! In-memory adapters and random sources for tests, tools and simple hosts
//! live in [`memory`] and [`random`].
pub mod memory;
pub mod random;

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use reaction_core::{
    ActorId, ItemTag, KnowledgeKey, Quantity, ReactionDefinition, ReactionId, ToolInstance,
};
use thiserror::Error;

pub use memory::{InMemoryInventory, InMemoryKnowledge, InMemoryReactions, InMemoryTooling};
pub use random::{SeededRandom, SequenceRandom};

pub type PortResult<T> = std::result::Result<T, PortError>;

/// Failures reported by port adapters.
#[derive(Debug, Error)]
pub enum PortError {
    #[error("{port} adapter lock was poisoned")]
    LockPoisoned { port: PortKind },

    #[error("{actor} holds fewer than {required} of '{item}'")]
    InsufficientItems {
        actor: ActorId,
        item: ItemTag,
        required: i64,
    },

    #[error("{0}")]
    Backend(String),
}

/// Names a port in errors and logs.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PortKind {
    Reactions,
    Knowledge,
    Tooling,
    Inventory,
    Random,
}

impl fmt::Display for PortKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PortKind::Reactions => "reaction repository",
            PortKind::Knowledge => "knowledge repository",
            PortKind::Tooling => "tooling",
            PortKind::Inventory => "inventory",
            PortKind::Random => "random",
        };
        write!(f, "{}", label)
    }
}

/// Source of reaction definitions.
#[async_trait]
pub trait ReactionRepository: Send + Sync {
    async fn find_by_id(&self, id: &ReactionId) -> PortResult<Option<Arc<ReactionDefinition>>>;
}

/// Knowledge an actor has learned. Unknown actors know nothing.
#[async_trait]
pub trait KnowledgeRepository: Send + Sync {
    async fn knowledge_set(&self, actor: ActorId) -> PortResult<BTreeSet<KnowledgeKey>>;
}

/// Tools an actor holds, in a stable order. Unknown actors hold none.
#[async_trait]
pub trait ToolingPort: Send + Sync {
    async fn tools(&self, actor: ActorId) -> PortResult<Vec<ToolInstance>>;
}

/// Actor inventories.
#[async_trait]
pub trait InventoryPort: Send + Sync {
    /// True iff the actor holds at least every listed quantity.
    async fn has_items(&self, actor: ActorId, items: &[Quantity]) -> PortResult<bool>;

    /// Removes every listed quantity, all or nothing.
    async fn consume(&self, actor: ActorId, items: &[Quantity]) -> PortResult<()>;

    async fn produce(&self, actor: ActorId, items: &[Quantity]) -> PortResult<()>;
}

/// Uniform draws in `[0, 1)`.
///
/// Always injected; the engine never reaches for a process-global generator,
/// which keeps outcomes reproducible under a deterministic source.
pub trait RandomPort: Send + Sync {
    fn next_unit(&self) -> f64;
}

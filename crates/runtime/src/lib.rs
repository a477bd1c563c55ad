//! Async orchestration of reaction executions.
//!
//! This crate wires the pure rules of `reaction-core` to the outside world
//! through ports. Consumers assemble a [`ReactionEngine`] from port adapters
//! and call [`ReactionEngine::execute`] or [`ReactionEngine::preview`].
//!
//! Modules are organized by responsibility:
//! - [`engine`] hosts the orchestrator and its builder
//! - [`ports`] defines the capability traits plus in-memory and random adapters
//! - [`serial`] layers per-actor mutual exclusion above the engine
pub mod engine;
pub mod error;
pub mod ports;
pub mod serial;

pub use engine::{ReactionEngine, ReactionEngineBuilder};
pub use error::{Result, RuntimeError};
pub use ports::{
    InMemoryInventory, InMemoryKnowledge, InMemoryReactions, InMemoryTooling, InventoryPort,
    KnowledgeRepository, PortError, PortKind, PortResult, RandomPort, ReactionRepository,
    SeededRandom, SequenceRandom, ToolingPort,
};
pub use serial::ActorSerializer;

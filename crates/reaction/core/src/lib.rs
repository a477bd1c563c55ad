//! Deterministic reaction rules shared by every host.
//!
//! `reaction-core` decides whether an actor may attempt a reaction, how long
//! it takes and how likely it is to succeed. Everything here is pure: actor
//! snapshots go in, a [`ReactionFeasibility`] comes out. Execution against
//! inventories and random sources lives in the runtime crate.
pub mod actor;
pub mod computation;
pub mod config;
pub mod context;
pub mod definition;
pub mod error;
pub mod feasibility;
pub mod ids;
pub mod modifier;
pub mod precondition;
pub mod quantity;
pub mod result;

pub use actor::{ReactionActor, ToolInstance};
pub use computation::Computation;
pub use config::{QualityCurve, ReactionConfig};
pub use context::ReactionContext;
pub use definition::{ReactionDefinition, ReactionDefinitionBuilder};
pub use error::{CoreError, DefinitionError, ErrorSeverity, IdentifierError, QuantityError};
pub use feasibility::{ReactionFeasibility, evaluate};
pub use ids::{ActorId, IdentifierKind, ItemTag, KnowledgeKey, ReactionId, ToolTag};
pub use modifier::{
    KnowledgeModifier, Modifier, ModifierEffect, ModifierEffectBuilder, ToolModifier,
};
pub use precondition::{Precondition, PreconditionResult, RequiresKnowledge, RequiresTool};
pub use quantity::Quantity;
pub use result::{ReactionOutcome, ReactionResult};

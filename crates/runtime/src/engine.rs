//! Reaction orchestration against external ports.
//!
//! The engine holds no mutable state. Each call builds a fresh actor snapshot,
//! evaluates feasibility through `reaction_core`, and for executions drives
//! the inventory and random ports in a fixed order:
//!
//! ```text
//! lookup -> actor -> evaluate -> [preconditions] -> has_items -> consume -> roll -> produce
//! ```
//!
//! Precondition and input failures short-circuit before anything is debited.
//! Once inputs are available they are consumed whatever the roll says.
//! Serializing executions per actor is left to [`crate::ActorSerializer`] or
//! the host.

use std::sync::Arc;

use reaction_core::{
    ActorId, ReactionActor, ReactionConfig, ReactionContext, ReactionDefinition,
    ReactionFeasibility, ReactionId, ReactionResult,
};

use crate::error::{Result, RuntimeError};
use crate::ports::{
    InventoryPort, KnowledgeRepository, PortKind, RandomPort, ReactionRepository, ToolingPort,
};

pub struct ReactionEngine {
    reactions: Arc<dyn ReactionRepository>,
    knowledge: Arc<dyn KnowledgeRepository>,
    tooling: Arc<dyn ToolingPort>,
    inventory: Arc<dyn InventoryPort>,
    random: Arc<dyn RandomPort>,
}

impl ReactionEngine {
    pub fn builder() -> ReactionEngineBuilder {
        ReactionEngineBuilder::default()
    }

    /// Snapshots the actor's current knowledge and tools. Never cached.
    pub async fn build_actor(&self, actor_id: ActorId) -> Result<ReactionActor> {
        let knowledge = self
            .knowledge
            .knowledge_set(actor_id)
            .await
            .map_err(RuntimeError::port(PortKind::Knowledge))?;
        let tools = self
            .tooling
            .tools(actor_id)
            .await
            .map_err(RuntimeError::port(PortKind::Tooling))?;

        tracing::debug!(
            %actor_id,
            knowledge = knowledge.len(),
            tools = tools.len(),
            "built actor snapshot"
        );

        Ok(ReactionActor::new(actor_id, knowledge, tools))
    }

    /// Pure feasibility evaluation; see [`reaction_core::evaluate`].
    pub fn evaluate(
        &self,
        definition: &ReactionDefinition,
        context: &ReactionContext,
        actor: &ReactionActor,
    ) -> ReactionFeasibility {
        reaction_core::evaluate(definition, context, actor)
    }

    /// Looks up the reaction, snapshots the actor and evaluates.
    ///
    /// Touches neither the inventory nor the random port.
    pub async fn preview(
        &self,
        reaction_id: &ReactionId,
        actor_id: ActorId,
        context: &ReactionContext,
    ) -> Result<ReactionFeasibility> {
        let definition = self.definition(reaction_id).await?;
        let actor = self.build_actor(actor_id).await?;
        Ok(self.evaluate(&definition, context, &actor))
    }

    /// Attempts the reaction for `actor_id`.
    ///
    /// Returns `Err` only for fatal failures: an unknown reaction, a port
    /// error, or a scaled output that floors to zero or below.
    pub async fn execute(
        &self,
        reaction_id: &ReactionId,
        actor_id: ActorId,
        context: &ReactionContext,
    ) -> Result<ReactionResult> {
        let definition = self.definition(reaction_id).await?;
        let actor = self.build_actor(actor_id).await?;
        let feasibility = self.evaluate(&definition, context, &actor);

        tracing::debug!(
            reaction = %reaction_id,
            %actor_id,
            can_execute = feasibility.can_execute,
            success_chance = feasibility.success_chance,
            duration = ?feasibility.duration,
            "evaluated reaction"
        );

        if !feasibility.can_execute {
            let notes: Vec<String> = feasibility.unmet_messages().map(str::to_owned).collect();
            tracing::info!(reaction = %reaction_id, %actor_id, ?notes, "preconditions unmet");
            return Ok(ReactionResult::failed_precondition(notes));
        }

        let has_inputs = self
            .inventory
            .has_items(actor_id, definition.inputs())
            .await
            .map_err(RuntimeError::port(PortKind::Inventory))?;
        if !has_inputs {
            tracing::info!(reaction = %reaction_id, %actor_id, "required inputs missing");
            return Ok(ReactionResult::failed_inputs(
                ReactionConfig::MISSING_INPUTS_NOTE,
            ));
        }

        self.inventory
            .consume(actor_id, definition.inputs())
            .await
            .map_err(RuntimeError::port(PortKind::Inventory))?;

        let roll = self.random.next_unit();
        // A NaN chance compares false and fails the roll.
        let rolled_success = roll < feasibility.success_chance;
        if !rolled_success {
            tracing::info!(
                reaction = %reaction_id,
                %actor_id,
                roll,
                success_chance = feasibility.success_chance,
                "roll failed"
            );
            return Ok(ReactionResult::failed_roll(feasibility.duration));
        }

        let produced = feasibility
            .scale_outputs(definition.outputs())
            .inspect_err(|err| {
                tracing::warn!(
                    reaction = %reaction_id,
                    %actor_id,
                    error = %err,
                    "scaled output is not a valid quantity; consumed inputs stand"
                );
            })?;

        self.inventory
            .produce(actor_id, &produced)
            .await
            .map_err(RuntimeError::port(PortKind::Inventory))?;

        tracing::info!(
            reaction = %reaction_id,
            %actor_id,
            produced = produced.len(),
            "reaction succeeded"
        );

        Ok(ReactionResult::succeeded(feasibility.duration, produced))
    }

    async fn definition(&self, reaction_id: &ReactionId) -> Result<Arc<ReactionDefinition>> {
        self.reactions
            .find_by_id(reaction_id)
            .await
            .map_err(RuntimeError::port(PortKind::Reactions))?
            .ok_or_else(|| RuntimeError::ReactionNotFound(reaction_id.clone()))
    }
}

/// Builder for [`ReactionEngine`]. Every port is required.
#[derive(Default)]
pub struct ReactionEngineBuilder {
    reactions: Option<Arc<dyn ReactionRepository>>,
    knowledge: Option<Arc<dyn KnowledgeRepository>>,
    tooling: Option<Arc<dyn ToolingPort>>,
    inventory: Option<Arc<dyn InventoryPort>>,
    random: Option<Arc<dyn RandomPort>>,
}

impl ReactionEngineBuilder {
    pub fn reactions(mut self, port: Arc<dyn ReactionRepository>) -> Self {
        self.reactions = Some(port);
        self
    }

    pub fn knowledge(mut self, port: Arc<dyn KnowledgeRepository>) -> Self {
        self.knowledge = Some(port);
        self
    }

    pub fn tooling(mut self, port: Arc<dyn ToolingPort>) -> Self {
        self.tooling = Some(port);
        self
    }

    pub fn inventory(mut self, port: Arc<dyn InventoryPort>) -> Self {
        self.inventory = Some(port);
        self
    }

    pub fn random(mut self, port: Arc<dyn RandomPort>) -> Self {
        self.random = Some(port);
        self
    }

    pub fn build(self) -> Result<ReactionEngine> {
        let missing = |port| RuntimeError::MissingPort { port };
        Ok(ReactionEngine {
            reactions: self.reactions.ok_or_else(|| missing(PortKind::Reactions))?,
            knowledge: self.knowledge.ok_or_else(|| missing(PortKind::Knowledge))?,
            tooling: self.tooling.ok_or_else(|| missing(PortKind::Tooling))?,
            inventory: self.inventory.ok_or_else(|| missing(PortKind::Inventory))?,
            random: self.random.ok_or_else(|| missing(PortKind::Random))?,
        })
    }
}

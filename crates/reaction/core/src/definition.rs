//! Immutable reaction recipes.
//!
//! Definitions are authored and stored elsewhere; the engine only fetches them
//! by id. Preconditions and modifiers are shared trait objects so a definition
//! is cheap to clone and can be handed across threads.

use std::sync::Arc;
use std::time::Duration;

use crate::config::ReactionConfig;
use crate::error::DefinitionError;
use crate::ids::ReactionId;
use crate::modifier::Modifier;
use crate::precondition::Precondition;
use crate::quantity::Quantity;

#[derive(Clone, Debug)]
pub struct ReactionDefinition {
    id: ReactionId,
    name: String,
    inputs: Vec<Quantity>,
    outputs: Vec<Quantity>,
    base_duration: Duration,
    base_success_chance: f64,
    preconditions: Vec<Arc<dyn Precondition>>,
    modifiers: Vec<Arc<dyn Modifier>>,
}

impl ReactionDefinition {
    pub fn builder(id: ReactionId, name: impl Into<String>) -> ReactionDefinitionBuilder {
        ReactionDefinitionBuilder {
            definition: ReactionDefinition {
                id,
                name: name.into(),
                inputs: Vec::new(),
                outputs: Vec::new(),
                base_duration: Duration::ZERO,
                base_success_chance: ReactionConfig::MAX_SUCCESS_CHANCE,
                preconditions: Vec::new(),
                modifiers: Vec::new(),
            },
        }
    }

    pub fn id(&self) -> &ReactionId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Consumed on every attempt that passes the precondition and inventory checks.
    pub fn inputs(&self) -> &[Quantity] {
        &self.inputs
    }

    /// Base yield before output multipliers.
    pub fn outputs(&self) -> &[Quantity] {
        &self.outputs
    }

    pub fn base_duration(&self) -> Duration {
        self.base_duration
    }

    pub fn base_success_chance(&self) -> f64 {
        self.base_success_chance
    }

    pub fn preconditions(&self) -> &[Arc<dyn Precondition>] {
        &self.preconditions
    }

    /// In fold order.
    pub fn modifiers(&self) -> &[Arc<dyn Modifier>] {
        &self.modifiers
    }
}

/// Builder for [`ReactionDefinition`].
///
/// Defaults: no inputs or outputs, zero duration, certain success.
#[derive(Debug)]
pub struct ReactionDefinitionBuilder {
    definition: ReactionDefinition,
}

impl ReactionDefinitionBuilder {
    pub fn input(mut self, quantity: Quantity) -> Self {
        self.definition.inputs.push(quantity);
        self
    }

    pub fn output(mut self, quantity: Quantity) -> Self {
        self.definition.outputs.push(quantity);
        self
    }

    pub fn base_duration(mut self, duration: Duration) -> Self {
        self.definition.base_duration = duration;
        self
    }

    pub fn base_success_chance(mut self, chance: f64) -> Self {
        self.definition.base_success_chance = chance;
        self
    }

    pub fn precondition(mut self, precondition: impl Precondition + 'static) -> Self {
        self.definition.preconditions.push(Arc::new(precondition));
        self
    }

    pub fn modifier(mut self, modifier: impl Modifier + 'static) -> Self {
        self.definition.modifiers.push(Arc::new(modifier));
        self
    }

    pub fn build(self) -> Result<ReactionDefinition, DefinitionError> {
        let chance = self.definition.base_success_chance;
        let bounds = ReactionConfig::MIN_SUCCESS_CHANCE..=ReactionConfig::MAX_SUCCESS_CHANCE;
        if !bounds.contains(&chance) {
            return Err(DefinitionError::SuccessChanceOutOfRange(chance));
        }
        Ok(self.definition)
    }
}

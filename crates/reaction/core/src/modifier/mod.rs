//! Numeric adjustments folded over a [`Computation`].
//!
//! Modifiers are applied left to right in definition order, and only when
//! [`Modifier::applies`] holds for the actor. Like preconditions they form an
//! open set behind a trait.

mod knowledge;
mod tool;

pub use knowledge::KnowledgeModifier;
pub use tool::ToolModifier;

use std::collections::BTreeMap;

use crate::actor::ReactionActor;
use crate::computation::Computation;
use crate::context::ReactionContext;
use crate::error::DefinitionError;
use crate::ids::ItemTag;

/// A contribution to success chance, duration and output yield.
pub trait Modifier: core::fmt::Debug + Send + Sync {
    /// Short name of this modifier kind (used in logging).
    fn kind(&self) -> &'static str;

    fn applies(&self, actor: &ReactionActor) -> bool;

    /// Mutates `computation` in place. Only called when `applies` is true.
    fn apply(
        &self,
        context: &ReactionContext,
        actor: &ReactionActor,
        computation: &mut Computation,
    );
}

/// The raw adjustments a built-in modifier carries.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ModifierEffect {
    success_chance_delta: f64,
    duration_multiplier: f64,
    output_multipliers: BTreeMap<ItemTag, f64>,
}

impl ModifierEffect {
    pub fn builder() -> ModifierEffectBuilder {
        ModifierEffectBuilder::default()
    }

    pub fn success_chance_delta(&self) -> f64 {
        self.success_chance_delta
    }

    pub fn duration_multiplier(&self) -> f64 {
        self.duration_multiplier
    }

    pub fn output_multipliers(&self) -> &BTreeMap<ItemTag, f64> {
        &self.output_multipliers
    }

    /// Composes the output multipliers onto `computation`. Never quality-scaled.
    fn apply_outputs(&self, computation: &mut Computation) {
        for (item, factor) in &self.output_multipliers {
            computation.compose_output_multiplier(item, *factor);
        }
    }
}

impl Default for ModifierEffect {
    fn default() -> Self {
        Self {
            success_chance_delta: 0.0,
            duration_multiplier: 1.0,
            output_multipliers: BTreeMap::new(),
        }
    }
}

/// Builder for [`ModifierEffect`]; `build` validates every number.
#[derive(Clone, Debug, Default)]
pub struct ModifierEffectBuilder {
    effect: ModifierEffect,
}

impl ModifierEffectBuilder {
    pub fn success_chance_delta(mut self, delta: f64) -> Self {
        self.effect.success_chance_delta = delta;
        self
    }

    pub fn duration_multiplier(mut self, multiplier: f64) -> Self {
        self.effect.duration_multiplier = multiplier;
        self
    }

    /// Sets the output multiplier for `item`, replacing any earlier value for it.
    pub fn output_multiplier(mut self, item: ItemTag, factor: f64) -> Self {
        self.effect.output_multipliers.insert(item, factor);
        self
    }

    pub fn build(self) -> Result<ModifierEffect, DefinitionError> {
        let effect = self.effect;
        if !effect.success_chance_delta.is_finite() {
            return Err(DefinitionError::NonFiniteDelta(effect.success_chance_delta));
        }
        if !is_non_negative_factor(effect.duration_multiplier) {
            return Err(DefinitionError::InvalidDurationMultiplier(
                effect.duration_multiplier,
            ));
        }
        if let Some((item, factor)) = effect
            .output_multipliers
            .iter()
            .find(|(_, factor)| !is_non_negative_factor(**factor))
        {
            return Err(DefinitionError::InvalidOutputMultiplier {
                item: item.clone(),
                factor: *factor,
            });
        }
        Ok(effect)
    }
}

fn is_non_negative_factor(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_effect_is_neutral() {
        let effect = ModifierEffect::builder().build().unwrap();
        assert_eq!(effect.success_chance_delta(), 0.0);
        assert_eq!(effect.duration_multiplier(), 1.0);
        assert!(effect.output_multipliers().is_empty());
    }

    #[test]
    fn rejects_invalid_numbers() {
        assert!(
            ModifierEffect::builder()
                .success_chance_delta(f64::NAN)
                .build()
                .is_err()
        );
        assert_eq!(
            ModifierEffect::builder().duration_multiplier(-0.5).build(),
            Err(DefinitionError::InvalidDurationMultiplier(-0.5))
        );

        let plank = ItemTag::parse("plank").unwrap();
        assert_eq!(
            ModifierEffect::builder()
                .output_multiplier(plank.clone(), f64::INFINITY)
                .build(),
            Err(DefinitionError::InvalidOutputMultiplier {
                item: plank,
                factor: f64::INFINITY
            })
        );
    }

    #[test]
    fn zero_factors_are_allowed() {
        let effect = ModifierEffect::builder()
            .duration_multiplier(0.0)
            .output_multiplier(ItemTag::parse("plank").unwrap(), 0.0)
            .build();
        assert!(effect.is_ok());
    }
}

//! Pure feasibility evaluation.
//!
//! [`evaluate`] checks every precondition, folds the applicable modifiers over
//! a fresh [`Computation`], and freezes the result. It performs no I/O and
//! draws no randomness, so it is safe to call for previews.
//!
//! `can_execute` reflects preconditions only. Whether the actor holds the
//! inputs right now is decided later, at execution time.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::actor::ReactionActor;
use crate::computation::Computation;
use crate::config::ReactionConfig;
use crate::context::ReactionContext;
use crate::definition::ReactionDefinition;
use crate::error::QuantityError;
use crate::ids::ItemTag;
use crate::precondition::PreconditionResult;
use crate::quantity::Quantity;

/// Fully resolved prediction of a reaction for one actor.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReactionFeasibility {
    pub can_execute: bool,
    pub precondition_results: Vec<PreconditionResult>,
    pub duration: Duration,
    /// Always within `[0, 1]`.
    pub success_chance: f64,
    pub output_multipliers: BTreeMap<ItemTag, f64>,
}

impl ReactionFeasibility {
    /// Combined multiplier for `item`; 1.0 when no modifier touched it.
    pub fn output_multiplier(&self, item: &ItemTag) -> f64 {
        self.output_multipliers.get(item).copied().unwrap_or(1.0)
    }

    /// Messages of every unsatisfied precondition, in definition order.
    pub fn unmet_messages(&self) -> impl Iterator<Item = &str> {
        self.precondition_results
            .iter()
            .filter(|result| !result.satisfied)
            .map(|result| result.message.as_str())
    }

    /// Applies the output multipliers to base `outputs`, flooring each amount.
    ///
    /// A floored amount of zero or less fails with the quantity invariant
    /// instead of being dropped. A factor of exactly 1.0 keeps the base
    /// amount without a round trip through `f64`.
    pub fn scale_outputs(&self, outputs: &[Quantity]) -> Result<Vec<Quantity>, QuantityError> {
        outputs
            .iter()
            .map(|base| {
                let factor = self.output_multiplier(base.item());
                if factor == 1.0 {
                    return Ok(base.clone());
                }
                let amount = (base.amount() as f64 * factor).floor() as i64;
                Quantity::new(base.item().clone(), amount)
            })
            .collect()
    }
}

/// Evaluates `definition` for `actor`.
pub fn evaluate(
    definition: &ReactionDefinition,
    context: &ReactionContext,
    actor: &ReactionActor,
) -> ReactionFeasibility {
    let precondition_results: Vec<PreconditionResult> = definition
        .preconditions()
        .iter()
        .map(|precondition| precondition.evaluate(actor))
        .collect();
    let can_execute = precondition_results.iter().all(|result| result.satisfied);

    let mut computation = Computation::seed(definition);
    for modifier in definition.modifiers() {
        if modifier.applies(actor) {
            modifier.apply(context, actor, &mut computation);
        }
    }

    let (success_chance, duration, output_multipliers) = computation.into_parts();

    ReactionFeasibility {
        can_execute,
        precondition_results,
        duration,
        success_chance: clamp_success_chance(success_chance),
        output_multipliers,
    }
}

/// Clamps into `[0, 1]`. NaN (e.g. from a host modifier) becomes the minimum.
fn clamp_success_chance(chance: f64) -> f64 {
    if chance.is_nan() {
        return ReactionConfig::MIN_SUCCESS_CHANCE;
    }
    chance.clamp(
        ReactionConfig::MIN_SUCCESS_CHANCE,
        ReactionConfig::MAX_SUCCESS_CHANCE,
    )
}

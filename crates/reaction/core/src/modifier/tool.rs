use crate::actor::ReactionActor;
use crate::computation::Computation;
use crate::config::QualityCurve;
use crate::context::ReactionContext;
use crate::ids::ToolTag;

use super::{Modifier, ModifierEffect};

/// Applies its effect, scaled by tool quality, when the actor holds a `tag` tool.
///
/// With quality factor `q` of the first matching tool:
/// - success chance += delta × q
/// - duration ×= multiplier / q
/// - output multipliers compose unscaled
#[derive(Clone, Debug, PartialEq)]
pub struct ToolModifier {
    pub tag: ToolTag,
    pub effect: ModifierEffect,
    pub curve: QualityCurve,
}

impl ToolModifier {
    pub fn new(tag: ToolTag, effect: ModifierEffect) -> Self {
        Self {
            tag,
            effect,
            curve: QualityCurve::default(),
        }
    }

    pub fn with_curve(mut self, curve: QualityCurve) -> Self {
        self.curve = curve;
        self
    }

    /// Quality factor for `actor`, or `None` if it holds no matching tool.
    pub fn quality_factor(&self, actor: &ReactionActor) -> Option<f64> {
        actor
            .first_tool(&self.tag)
            .map(|tool| self.curve.factor(tool.quality))
    }
}

impl Modifier for ToolModifier {
    fn kind(&self) -> &'static str {
        "tool"
    }

    fn applies(&self, actor: &ReactionActor) -> bool {
        actor.has_tool(&self.tag)
    }

    fn apply(
        &self,
        _context: &ReactionContext,
        actor: &ReactionActor,
        computation: &mut Computation,
    ) {
        let Some(q) = self.quality_factor(actor) else {
            return;
        };
        computation.add_success_chance(self.effect.success_chance_delta * q);
        computation.scale_duration(self.effect.duration_multiplier / q);
        self.effect.apply_outputs(computation);
    }
}

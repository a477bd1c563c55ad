use crate::actor::ReactionActor;
use crate::computation::Computation;
use crate::context::ReactionContext;
use crate::ids::KnowledgeKey;

use super::{Modifier, ModifierEffect};

/// Applies its effect unscaled when the actor knows `key`.
#[derive(Clone, Debug, PartialEq)]
pub struct KnowledgeModifier {
    pub key: KnowledgeKey,
    pub effect: ModifierEffect,
}

impl KnowledgeModifier {
    pub fn new(key: KnowledgeKey, effect: ModifierEffect) -> Self {
        Self { key, effect }
    }
}

impl Modifier for KnowledgeModifier {
    fn kind(&self) -> &'static str {
        "knowledge"
    }

    fn applies(&self, actor: &ReactionActor) -> bool {
        actor.knows(&self.key)
    }

    fn apply(
        &self,
        _context: &ReactionContext,
        _actor: &ReactionActor,
        computation: &mut Computation,
    ) {
        computation.add_success_chance(self.effect.success_chance_delta);
        computation.scale_duration(self.effect.duration_multiplier);
        self.effect.apply_outputs(computation);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::definition::ReactionDefinition;
    use crate::ids::{ActorId, ItemTag, ReactionId};

    #[test]
    fn applies_effect_without_scaling() {
        let key = KnowledgeKey::parse("joinery").unwrap();
        let plank = ItemTag::parse("plank").unwrap();
        let modifier = KnowledgeModifier::new(
            key.clone(),
            ModifierEffect::builder()
                .success_chance_delta(0.1)
                .duration_multiplier(0.5)
                .output_multiplier(plank.clone(), 2.0)
                .build()
                .unwrap(),
        );
        let actor = ReactionActor::new(ActorId(1), [key], []);
        assert!(modifier.applies(&actor));

        let definition = ReactionDefinition::builder(ReactionId::parse("r").unwrap(), "R")
            .base_duration(Duration::from_secs(8))
            .base_success_chance(0.5)
            .build()
            .unwrap();
        let mut computation = Computation::seed(&definition);
        modifier.apply(&ReactionContext::new(), &actor, &mut computation);

        assert!((computation.success_chance() - 0.6).abs() < 1e-12);
        assert_eq!(computation.duration(), Duration::from_secs(4));
        assert_eq!(computation.output_multipliers()[&plank], 2.0);
    }

    #[test]
    fn does_not_apply_to_strangers() {
        let modifier = KnowledgeModifier::new(
            KnowledgeKey::parse("joinery").unwrap(),
            ModifierEffect::default(),
        );
        assert!(!modifier.applies(&ReactionActor::new(ActorId(2), [], [])));
    }
}

use crate::actor::ReactionActor;
use crate::ids::KnowledgeKey;

use super::{Precondition, PreconditionResult};

/// Satisfied iff the actor knows `key`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequiresKnowledge {
    pub key: KnowledgeKey,
}

impl RequiresKnowledge {
    pub const REASON_CODE: &'static str = "missing_knowledge";

    pub fn new(key: KnowledgeKey) -> Self {
        Self { key }
    }
}

impl Precondition for RequiresKnowledge {
    fn kind(&self) -> &'static str {
        "requires_knowledge"
    }

    fn evaluate(&self, actor: &ReactionActor) -> PreconditionResult {
        if actor.knows(&self.key) {
            PreconditionResult::satisfied()
        } else {
            PreconditionResult::unsatisfied(
                Self::REASON_CODE,
                format!("Requires knowledge '{}'.", self.key),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ActorId;

    #[test]
    fn reports_lowercased_key_when_missing() {
        let precondition = RequiresKnowledge::new(KnowledgeKey::parse("WOODWORKING").unwrap());
        let actor = ReactionActor::new(ActorId(1), [], []);

        let result = precondition.evaluate(&actor);
        assert!(!result.satisfied);
        assert_eq!(result.reason_code, "missing_knowledge");
        assert_eq!(result.message, "Requires knowledge 'woodworking'.");
    }

    #[test]
    fn satisfied_when_known() {
        let key = KnowledgeKey::parse("woodworking").unwrap();
        let precondition = RequiresKnowledge::new(key.clone());
        let actor = ReactionActor::new(ActorId(1), [key], []);

        assert_eq!(precondition.evaluate(&actor), PreconditionResult::satisfied());
    }
}

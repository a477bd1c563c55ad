use crate::actor::ReactionActor;
use crate::ids::ToolTag;

use super::{Precondition, PreconditionResult};

/// Satisfied iff the actor holds any tool tagged `tag`, regardless of quality.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequiresTool {
    pub tag: ToolTag,
}

impl RequiresTool {
    pub const REASON_CODE: &'static str = "missing_tool";

    pub fn new(tag: ToolTag) -> Self {
        Self { tag }
    }
}

impl Precondition for RequiresTool {
    fn kind(&self) -> &'static str {
        "requires_tool"
    }

    fn evaluate(&self, actor: &ReactionActor) -> PreconditionResult {
        if actor.has_tool(&self.tag) {
            PreconditionResult::satisfied()
        } else {
            PreconditionResult::unsatisfied(
                Self::REASON_CODE,
                format!("Requires tool '{}'.", self.tag),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::ToolInstance;
    use crate::ids::ActorId;

    #[test]
    fn any_quality_satisfies() {
        let saw = ToolTag::parse("saw").unwrap();
        let actor = ReactionActor::new(ActorId(3), [], [ToolInstance::new(saw.clone(), 0)]);

        assert!(RequiresTool::new(saw).evaluate(&actor).satisfied);
    }

    #[test]
    fn missing_tool_message() {
        let actor = ReactionActor::new(ActorId(3), [], []);
        let result = RequiresTool::new(ToolTag::parse("Saw").unwrap()).evaluate(&actor);

        assert_eq!(result.reason_code, "missing_tool");
        assert_eq!(result.message, "Requires tool 'saw'.");
    }
}

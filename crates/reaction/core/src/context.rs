//! Contextual data threaded through evaluation and execution.

/// Extension point for situational inputs (location, time of day, weather).
///
/// Currently carries nothing. Preconditions and modifiers that need context
/// read it from here so adding fields never changes engine signatures.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub struct ReactionContext {}

impl ReactionContext {
    pub fn new() -> Self {
        Self::default()
    }
}

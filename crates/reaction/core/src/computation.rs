//! Call-scoped accumulator folded over by modifiers.
//!
//! A [`Computation`] is seeded from a definition's base values, mutated by
//! each applicable modifier in definition order, then frozen into a
//! feasibility. It never outlives one `evaluate` call.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::definition::ReactionDefinition;
use crate::ids::ItemTag;

#[derive(Clone, Debug, PartialEq)]
pub struct Computation {
    success_chance: f64,
    duration: Duration,
    output_multipliers: BTreeMap<ItemTag, f64>,
}

impl Computation {
    pub(crate) fn seed(definition: &ReactionDefinition) -> Self {
        Self {
            success_chance: definition.base_success_chance(),
            duration: definition.base_duration(),
            output_multipliers: BTreeMap::new(),
        }
    }

    /// Unclamped running success chance.
    pub fn success_chance(&self) -> f64 {
        self.success_chance
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn output_multipliers(&self) -> &BTreeMap<ItemTag, f64> {
        &self.output_multipliers
    }

    pub fn add_success_chance(&mut self, delta: f64) {
        self.success_chance += delta;
    }

    /// Multiplies the duration by `factor`. Overflow saturates at `Duration::MAX`.
    ///
    /// No lower bound: a chain of small multipliers may reach zero.
    pub fn scale_duration(&mut self, factor: f64) {
        let scaled = self.duration.as_secs_f64() * factor;
        self.duration = Duration::try_from_secs_f64(scaled).unwrap_or(Duration::MAX);
    }

    /// Composes `factor` multiplicatively onto the multiplier for `item` (starting at 1.0).
    pub fn compose_output_multiplier(&mut self, item: &ItemTag, factor: f64) {
        *self.output_multipliers.entry(item.clone()).or_insert(1.0) *= factor;
    }

    pub(crate) fn into_parts(self) -> (f64, Duration, BTreeMap<ItemTag, f64>) {
        (self.success_chance, self.duration, self.output_multipliers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ReactionId;

    fn seeded() -> Computation {
        let id = ReactionId::parse("saw_planks").unwrap();
        let definition = ReactionDefinition::builder(id, "Saw planks")
            .base_duration(Duration::from_secs(10))
            .base_success_chance(0.5)
            .build()
            .unwrap();
        Computation::seed(&definition)
    }

    #[test]
    fn seeds_from_base_values() {
        let computation = seeded();
        assert_eq!(computation.success_chance(), 0.5);
        assert_eq!(computation.duration(), Duration::from_secs(10));
        assert!(computation.output_multipliers().is_empty());
    }

    #[test]
    fn output_multipliers_compose_multiplicatively() {
        let mut computation = seeded();
        let plank = ItemTag::parse("plank").unwrap();
        computation.compose_output_multiplier(&plank, 1.5);
        computation.compose_output_multiplier(&plank, 1.2);

        let combined = computation.output_multipliers()[&plank];
        assert!((combined - 1.8).abs() < 1e-12);
    }

    #[test]
    fn duration_may_reach_zero_and_saturates_on_overflow() {
        let mut computation = seeded();
        computation.scale_duration(0.0);
        assert_eq!(computation.duration(), Duration::ZERO);

        let mut computation = seeded();
        computation.scale_duration(f64::MAX);
        assert_eq!(computation.duration(), Duration::MAX);
    }

    #[test]
    fn success_chance_accumulates_unclamped() {
        let mut computation = seeded();
        computation.add_success_chance(0.8);
        assert!((computation.success_chance() - 1.3).abs() < 1e-12);
    }
}

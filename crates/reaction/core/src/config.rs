//! Reaction tuning constants and the tool quality curve.

use crate::error::DefinitionError;

/// Compile-time constants shared by the engine and its adapters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReactionConfig;

impl ReactionConfig {
    /// Quality assigned to tools when none is specified. Quality-neutral.
    pub const DEFAULT_TOOL_QUALITY: i32 = 50;
    /// Lowest tool quality on the nominal scale.
    pub const MIN_TOOL_QUALITY: i32 = 0;
    /// Highest tool quality on the nominal scale.
    pub const MAX_TOOL_QUALITY: i32 = 100;
    /// Bounds the final success chance is clamped to.
    pub const MIN_SUCCESS_CHANCE: f64 = 0.0;
    pub const MAX_SUCCESS_CHANCE: f64 = 1.0;
    /// Note attached to results that failed the inventory check.
    pub const MISSING_INPUTS_NOTE: &'static str = "Missing required inputs.";
}

/// Maps a tool quality onto the factor that scales a tool modifier.
///
/// `factor(q) = clamp(1 + (q - neutral) / span, floor, ceiling)`
///
/// Every value is finite, `span` is non-zero and `0 < floor <= ceiling`, so
/// the factor is always a positive finite number.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawQualityCurve")
)]
pub struct QualityCurve {
    neutral: f64,
    span: f64,
    floor: f64,
    ceiling: f64,
}

impl QualityCurve {
    pub const DEFAULT_NEUTRAL: f64 = 50.0;
    pub const DEFAULT_SPAN: f64 = 100.0;
    pub const DEFAULT_FLOOR: f64 = 0.6;
    pub const DEFAULT_CEILING: f64 = 1.5;

    /// Neutral at 50, one point of factor per 100 quality, within `[0.6, 1.5]`.
    pub const STANDARD: Self = Self {
        neutral: Self::DEFAULT_NEUTRAL,
        span: Self::DEFAULT_SPAN,
        floor: Self::DEFAULT_FLOOR,
        ceiling: Self::DEFAULT_CEILING,
    };

    pub fn new(
        neutral: f64,
        span: f64,
        floor: f64,
        ceiling: f64,
    ) -> Result<Self, DefinitionError> {
        let invalid = |reason| Err(DefinitionError::InvalidQualityCurve { reason });
        if ![neutral, span, floor, ceiling].iter().all(|value| value.is_finite()) {
            return invalid("values must be finite");
        }
        if span == 0.0 {
            return invalid("span must be non-zero");
        }
        if floor <= 0.0 {
            return invalid("floor must be positive");
        }
        if floor > ceiling {
            return invalid("floor must not exceed ceiling");
        }
        Ok(Self {
            neutral,
            span,
            floor,
            ceiling,
        })
    }

    pub fn neutral(&self) -> f64 {
        self.neutral
    }

    pub fn span(&self) -> f64 {
        self.span
    }

    pub fn floor(&self) -> f64 {
        self.floor
    }

    pub fn ceiling(&self) -> f64 {
        self.ceiling
    }

    /// Quality factor for a tool of the given quality.
    pub fn factor(&self, quality: i32) -> f64 {
        let raw = 1.0 + (f64::from(quality) - self.neutral) / self.span;
        raw.clamp(self.floor, self.ceiling)
    }
}

impl Default for QualityCurve {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawQualityCurve {
    neutral: f64,
    span: f64,
    floor: f64,
    ceiling: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawQualityCurve> for QualityCurve {
    type Error = DefinitionError;

    fn try_from(raw: RawQualityCurve) -> Result<Self, Self::Error> {
        Self::new(raw.neutral, raw.span, raw.floor, raw.ceiling)
    }
}

//! Item quantities.

use crate::error::QuantityError;
use crate::ids::ItemTag;

/// A positive amount of one item kind.
///
/// The `amount > 0` invariant is checked on every construction. Degenerate
/// computed outputs surface through it as hard errors instead of vanishing.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Quantity {
    item: ItemTag,
    amount: i64,
}

impl Quantity {
    pub fn new(item: ItemTag, amount: i64) -> Result<Self, QuantityError> {
        if amount <= 0 {
            return Err(QuantityError::NonPositiveAmount { item, amount });
        }
        Ok(Self { item, amount })
    }

    pub fn item(&self) -> &ItemTag {
        &self.item
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Quantity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            item: ItemTag,
            amount: i64,
        }

        let raw = Raw::deserialize(deserializer)?;
        Quantity::new(raw.item, raw.amount).map_err(serde::de::Error::custom)
    }
}

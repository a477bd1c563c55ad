//! Identifier value objects.
//!
//! Tags and keys are opaque, case-normalized strings. They can only be built
//! through `parse`, which trims and lowercases the input and rejects empty
//! values, so two identifiers compare equal exactly when their normalized
//! spellings match.

use core::fmt;

use crate::error::IdentifierError;

/// Which identifier type a validation error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
pub enum IdentifierKind {
    #[strum(serialize = "item tag")]
    ItemTag,
    #[strum(serialize = "knowledge key")]
    KnowledgeKey,
    #[strum(serialize = "tool tag")]
    ToolTag,
    #[strum(serialize = "reaction id")]
    ReactionId,
}

macro_rules! normalized_identifier {
    ($(#[$meta:meta])* $name:ident => $kind:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize),
            serde(try_from = "String", into = "String")
        )]
        pub struct $name(String);

        impl $name {
            /// Normalizes `raw` (trim + lowercase) and rejects empty values.
            pub fn parse(raw: &str) -> Result<Self, IdentifierError> {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Err(IdentifierError::Empty {
                        kind: IdentifierKind::$kind,
                    });
                }
                Ok(Self(trimmed.to_lowercase()))
            }

            /// The normalized spelling.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = IdentifierError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse(&value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = IdentifierError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::parse(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

normalized_identifier!(
    /// Names an item kind held in inventories (`iron_ingot`, `plank`).
    ItemTag => ItemTag
);

normalized_identifier!(
    /// Names a piece of knowledge an actor may have learned.
    KnowledgeKey => KnowledgeKey
);

normalized_identifier!(
    /// Names a tool kind an actor may hold.
    ToolTag => ToolTag
);

normalized_identifier!(
    /// Identifies a reaction definition in the reaction repository.
    ReactionId => ReactionId
);

/// Opaque identifier of the actor attempting a reaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorId(pub u64);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "actor#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_and_lowercases() {
        let key = KnowledgeKey::parse("  WoodWorking ").unwrap();
        assert_eq!(key.as_str(), "woodworking");
        assert_eq!(key, KnowledgeKey::parse("WOODWORKING").unwrap());
        assert_eq!(key.to_string(), "woodworking");
    }

    #[test]
    fn parse_rejects_blank_input() {
        assert_eq!(
            ItemTag::parse("   "),
            Err(IdentifierError::Empty {
                kind: IdentifierKind::ItemTag
            })
        );
        assert!(ToolTag::parse("").is_err());
        assert!(ReactionId::try_from(String::new()).is_err());
    }

    #[test]
    fn identifiers_order_by_normalized_spelling() {
        let mut tags = vec![
            ItemTag::parse("Plank").unwrap(),
            ItemTag::parse("ash").unwrap(),
        ];
        tags.sort();
        assert_eq!(tags[0].as_str(), "ash");
        assert_eq!(tags[1].as_str(), "plank");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialization_revalidates() {
        let tag: ToolTag = serde_json::from_str("\" Saw \"").unwrap();
        assert_eq!(tag.as_str(), "saw");
        assert!(serde_json::from_str::<ToolTag>("\"  \"").is_err());
    }
}

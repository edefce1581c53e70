//! Error taxonomy for definition loading.

use thiserror::Error;

/// A single definition failed to compile or register. Fatal to that
/// definition only: batch loading reports each failure individually and
/// keeps going.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required field is absent from the section.
    #[error("definition `{definition}`: missing required field `{field}`")]
    MissingField {
        /// Give name of the failing section.
        definition: String,
        /// The absent field.
        field: &'static str,
    },

    /// A symbolic field value matched no known name.
    #[error("definition `{definition}`: unrecognized {field} `{value}`")]
    InvalidEnum {
        /// Give name of the failing section.
        definition: String,
        /// Which field held the bad symbol.
        field: &'static str,
        /// The offending value.
        value: String,
    },

    /// A `$TOKEN$` placeholder named an unknown color.
    #[error("definition `{definition}`: unknown color token `${token}$`")]
    UnknownColorToken {
        /// Give name of the failing section.
        definition: String,
        /// The unresolved token name.
        token: String,
    },

    /// A numeric field failed to parse.
    #[error("definition `{definition}`: malformed number in {field}: `{value}`")]
    InvalidNumber {
        /// Give name of the failing section.
        definition: String,
        /// Which field held the bad number.
        field: &'static str,
        /// The offending value.
        value: String,
    },

    /// A recipe grid cell named an unknown material, or the grid
    /// overflowed its nine cells.
    #[error("definition `{definition}`: invalid recipe cell `{cell}`")]
    InvalidRecipeCell {
        /// Give name of the failing section.
        definition: String,
        /// The offending cell content.
        cell: String,
    },

    /// Two sections share a give name (case-insensitive).
    #[error("duplicate give name `{0}`")]
    DuplicateGiveName(String),

    /// Two definitions render to structurally identical items, which
    /// would make equipped-instance matching ambiguous.
    #[error("definition `{second}` renders identically to `{first}` (same material, name and lore)")]
    DuplicateIdentity {
        /// The definition loaded first.
        first: String,
        /// The definition rejected because of the collision.
        second: String,
    },
}

//! Equipment instances and the structural-identity rule.

use crate::material::Material;
use serde::{Deserialize, Serialize};

/// Maximum units a single stack can hold.
pub const MAX_STACK_SIZE: u32 = 64;

/// A concrete, mutable item occurrence in an agent's container.
///
/// Identity between an instance and a definition is structural: same
/// material, same display name (case-insensitive), same lore sequence
/// (order-sensitive, case-insensitive). There is no hidden identifier,
/// so in-game duplication or renaming breaks or preserves identity
/// predictably. Wear and count are excluded from identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemInstance {
    /// Item material.
    pub material: Material,
    /// Custom display name, if any. May embed `§x` color escapes.
    pub display_name: Option<String>,
    /// Ordered lore lines shown under the name.
    pub lore: Vec<String>,
    /// Accumulated wear (durability used), 0 for a fresh item.
    pub wear: u16,
    /// Units in this stack.
    pub count: u32,
}

impl ItemInstance {
    /// A plain stack with no custom metadata.
    pub fn new(material: Material, count: u32) -> Self {
        Self {
            material,
            display_name: None,
            lore: Vec::new(),
            wear: 0,
            count,
        }
    }

    /// A single named item with the given lore.
    pub fn named(material: Material, display_name: impl Into<String>, lore: Vec<String>) -> Self {
        Self {
            material,
            display_name: Some(display_name.into()),
            lore,
            wear: 0,
            count: 1,
        }
    }

    /// Structural identity check (see type docs).
    pub fn matches(&self, other: &ItemInstance) -> bool {
        if self.material != other.material {
            return false;
        }
        let names_equal = match (&self.display_name, &other.display_name) {
            (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
            (None, None) => true,
            _ => false,
        };
        names_equal
            && self.lore.len() == other.lore.len()
            && self
                .lore
                .iter()
                .zip(&other.lore)
                .all(|(a, b)| a.eq_ignore_ascii_case(b))
    }

    /// Whether another stack can merge into this one. Requires structural
    /// identity plus equal wear; a burning fuel unit therefore never
    /// merges with a fresh one, since its lore differs.
    pub fn can_stack_with(&self, other: &ItemInstance) -> bool {
        self.matches(other) && self.wear == other.wear && self.count < MAX_STACK_SIZE
    }
}

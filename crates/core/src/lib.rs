#![warn(missing_docs)]
//! Host-facing data model shared across the workspace: materials,
//! color markup, equipment instances, agent containers and the
//! collaborator traits the engine talks to the host through.

pub mod color;
pub mod host;
pub mod inventory;
pub mod item;
pub mod material;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use color::{resolve_color_tokens, strip_color, ColorCode, RESET};
pub use host::{CraftingRecipe, Host, NullRecipes, RecipeSink, RECIPE_GRID_CELLS};
pub use inventory::{
    ArmorSlot, Inventory, ARMOR_SLOT_OFFSET, HOTBAR_SIZE, MAIN_SLOTS, OFFHAND_SLOT, TOTAL_SLOTS,
};
pub use item::{ItemInstance, MAX_STACK_SIZE};
pub use material::Material;

/// Stable identifier for a connected agent (player) in the host simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AgentId(pub u64);

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "agent#{}", self.0)
    }
}

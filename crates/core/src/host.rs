//! Collaborator traits: the narrow interface the engine consumes the
//! host simulation through, plus the crafting-recipe sink.

use crate::inventory::Inventory;
use crate::item::ItemInstance;
use crate::material::Material;
use crate::AgentId;
use glam::Vec3;

/// Cells in the positional 3×3 crafting grid.
pub const RECIPE_GRID_CELLS: usize = 9;

/// The world/agent surface the engine reads and mutates. Everything the
/// engine knows about the host goes through this trait; implementations
/// are expected to be driven from a single tick thread.
pub trait Host {
    /// Whether the agent is still connected to the simulation.
    fn is_connected(&self, agent: AgentId) -> bool;

    /// Current world position.
    fn position(&self, agent: AgentId) -> Vec3;

    /// Current velocity.
    fn velocity(&self, agent: AgentId) -> Vec3;

    /// Overwrite the agent's velocity.
    fn set_velocity(&mut self, agent: AgentId, velocity: Vec3);

    /// Unit facing direction (includes pitch).
    fn facing(&self, agent: AgentId) -> Vec3;

    /// Current (yaw, pitch) in degrees.
    fn orientation(&self, agent: AgentId) -> (f32, f32);

    /// Move the agent, preserving nothing; callers save/restore velocity
    /// themselves when they need to.
    fn teleport(&mut self, agent: AgentId, position: Vec3, yaw: f32, pitch: f32);

    /// Nearest solid surface along the agent's facing ray, ignoring empty
    /// space, up to `max_distance`. Returns the block's base position.
    fn raycast_solid(&self, agent: AgentId, max_distance: f32) -> Option<Vec3>;

    /// Boolean capability lookup (permission string).
    fn has_capability(&self, agent: AgentId, key: &str) -> bool;

    /// Send a plain chat notice to the agent.
    fn send_message(&mut self, agent: AgentId, message: &str);

    /// Fire-and-forget cosmetic effect at the agent's position.
    fn play_effect(&mut self, agent: AgentId);

    /// Read access to the agent's container.
    fn inventory(&self, agent: AgentId) -> &Inventory;

    /// Write access to the agent's container.
    fn inventory_mut(&mut self, agent: AgentId) -> &mut Inventory;
}

/// A shaped crafting recipe: positional 3×3 grid of ingredient
/// materials (`None` = empty cell) producing `output`.
#[derive(Debug, Clone, PartialEq)]
pub struct CraftingRecipe {
    /// The item the recipe produces (count included).
    pub output: ItemInstance,
    /// Grid cells in row-major order.
    pub grid: [Option<Material>; RECIPE_GRID_CELLS],
}

/// Where compiled definitions register their crafting recipes. A
/// one-time side effect at definition-load time; the engine never
/// consults recipes afterwards.
pub trait RecipeSink {
    /// Register one recipe with the host's crafting system.
    fn register(&mut self, recipe: CraftingRecipe);
}

/// A sink that drops every recipe; for hosts without a crafting system
/// and for config validation runs.
#[derive(Debug, Default)]
pub struct NullRecipes;

impl RecipeSink for NullRecipes {
    fn register(&mut self, _recipe: CraftingRecipe) {}
}

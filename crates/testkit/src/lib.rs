#![warn(missing_docs)]
//! Deterministic testing surfaces: an in-memory [`Host`] double plus a
//! recording recipe sink.

use exogear_core::{AgentId, CraftingRecipe, Host, Inventory, RecipeSink};
use glam::Vec3;
use std::collections::{BTreeMap, BTreeSet};

/// Shorthand for the `AgentId` used throughout the test suites.
pub fn agent(n: u64) -> AgentId {
    AgentId(n)
}

/// One simulated agent's observable state.
#[derive(Debug)]
pub struct FakeAgent {
    /// Connection flag; flip to `false` to simulate a disconnect.
    pub connected: bool,
    /// World position.
    pub position: Vec3,
    /// Current velocity.
    pub velocity: Vec3,
    /// View yaw in degrees.
    pub yaw: f32,
    /// View pitch in degrees.
    pub pitch: f32,
    /// Unit facing direction handed back by `Host::facing`.
    pub facing: Vec3,
    /// The agent's container.
    pub inventory: Inventory,
    /// Granted capability keys.
    pub capabilities: BTreeSet<String>,
    /// Every chat notice sent to the agent, in order.
    pub messages: Vec<String>,
    /// Number of cosmetic effects fired at the agent.
    pub effects: u32,
    /// Canned answer for `Host::raycast_solid`; `None` = no surface.
    pub raycast_hit: Option<Vec3>,
    /// Every teleport applied, as (position, yaw, pitch).
    pub teleports: Vec<(Vec3, f32, f32)>,
}

impl Default for FakeAgent {
    fn default() -> Self {
        Self {
            connected: true,
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            facing: Vec3::new(0.0, 0.0, -1.0),
            inventory: Inventory::new(),
            capabilities: BTreeSet::new(),
            messages: Vec::new(),
            effects: 0,
            raycast_hit: None,
            teleports: Vec::new(),
        }
    }
}

/// In-memory [`Host`] double. Agents are created on first touch;
/// everything an engine call mutates is left inspectable.
#[derive(Debug, Default)]
pub struct FakeHost {
    agents: BTreeMap<AgentId, FakeAgent>,
}

impl FakeHost {
    /// An empty host with no agents.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mutable access to one agent's state, creating it if new.
    pub fn agent_mut(&mut self, agent: AgentId) -> &mut FakeAgent {
        self.agents.entry(agent).or_default()
    }

    /// Read access to one agent's state.
    ///
    /// # Panics
    /// Panics if the agent was never touched.
    pub fn agent(&self, agent: AgentId) -> &FakeAgent {
        self.agents.get(&agent).expect("unknown test agent")
    }

    /// Grant a capability key to the agent.
    pub fn grant(&mut self, agent: AgentId, key: &str) {
        self.agent_mut(agent).capabilities.insert(key.to_string());
    }

    /// The last chat notice sent to the agent, if any.
    pub fn last_message(&self, agent: AgentId) -> Option<&str> {
        self.agent(agent).messages.last().map(String::as_str)
    }
}

impl Host for FakeHost {
    fn is_connected(&self, agent: AgentId) -> bool {
        self.agents.get(&agent).is_some_and(|a| a.connected)
    }

    fn position(&self, agent: AgentId) -> Vec3 {
        self.agent(agent).position
    }

    fn velocity(&self, agent: AgentId) -> Vec3 {
        self.agent(agent).velocity
    }

    fn set_velocity(&mut self, agent: AgentId, velocity: Vec3) {
        self.agent_mut(agent).velocity = velocity;
    }

    fn facing(&self, agent: AgentId) -> Vec3 {
        self.agent(agent).facing
    }

    fn orientation(&self, agent: AgentId) -> (f32, f32) {
        let a = self.agent(agent);
        (a.yaw, a.pitch)
    }

    fn teleport(&mut self, agent: AgentId, position: Vec3, yaw: f32, pitch: f32) {
        let a = self.agent_mut(agent);
        a.position = position;
        a.yaw = yaw;
        a.pitch = pitch;
        a.teleports.push((position, yaw, pitch));
    }

    fn raycast_solid(&self, agent: AgentId, max_distance: f32) -> Option<Vec3> {
        let a = self.agent(agent);
        a.raycast_hit
            .filter(|hit| hit.distance(a.position) <= max_distance)
    }

    fn has_capability(&self, agent: AgentId, key: &str) -> bool {
        self.agents
            .get(&agent)
            .is_some_and(|a| a.capabilities.contains(key))
    }

    fn send_message(&mut self, agent: AgentId, message: &str) {
        self.agent_mut(agent).messages.push(message.to_string());
    }

    fn play_effect(&mut self, agent: AgentId) {
        self.agent_mut(agent).effects += 1;
    }

    fn inventory(&self, agent: AgentId) -> &Inventory {
        &self.agent(agent).inventory
    }

    fn inventory_mut(&mut self, agent: AgentId) -> &mut Inventory {
        &mut self.agent_mut(agent).inventory
    }
}

/// A [`RecipeSink`] that records every registration for inspection.
#[derive(Debug, Default)]
pub struct RecordedRecipes {
    /// Registered recipes, in registration order.
    pub recipes: Vec<CraftingRecipe>,
}

impl RecipeSink for RecordedRecipes {
    fn register(&mut self, recipe: CraftingRecipe) {
        self.recipes.push(recipe);
    }
}

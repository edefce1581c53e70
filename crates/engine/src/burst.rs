//! Burst timer registry: the repeating per-tick action lifecycle.
//!
//! One live handle per (definition, agent) pair, driven from the host's
//! single tick loop. Handles self-terminate on disconnect, fuel
//! exhaustion or equipment destruction; everything else is explicit
//! cancellation. The registry is owned, never shared: all access stays
//! on the tick thread.

use crate::actions::{self, burst_impulse};
use crate::definition::EquipmentDefinition;
use crate::durability;
use crate::fuel::{self, FuelScope};
use exogear_core::{AgentId, Host};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Fuel checks and wear run once per this many ticks; movement applies
/// every tick.
pub const FUEL_CHECK_INTERVAL: u64 = 20;

/// Agent notice sent when a reload tears the handle down.
pub const RELOAD_NOTICE: &str =
    "Equipment reloaded. Re-engage your burst equipment to resume flying.";

/// A live repeating action. Owns its own tick counter; there is no
/// captured mutable state anywhere else.
#[derive(Debug)]
struct BurstHandle {
    definition: Arc<EquipmentDefinition>,
    ticks: u64,
}

/// Registry of live burst handles keyed by (give name, agent).
#[derive(Debug, Default)]
pub struct BurstTimers {
    handles: BTreeMap<(String, AgentId), BurstHandle>,
}

impl BurstTimers {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a repeating action. Starting while a handle already exists
    /// for the pair is a no-op, never a duplicate.
    pub fn start(&mut self, definition: Arc<EquipmentDefinition>, agent: AgentId) {
        self.handles
            .entry((definition.give_name.clone(), agent))
            .or_insert(BurstHandle { definition, ticks: 0 });
    }

    /// Cancel the handle for one (definition, agent) pair, if present.
    /// No further callback fires for a cancelled handle.
    pub fn cancel(&mut self, give_name: &str, agent: AgentId) {
        self.handles.remove(&(give_name.to_string(), agent));
    }

    /// Drop every handle belonging to `agent` (disconnect path).
    pub fn cancel_agent(&mut self, agent: AgentId) {
        self.handles.retain(|(_, owner), _| *owner != agent);
    }

    /// Tear down every handle (reload path), notifying each affected
    /// agent that re-engagement is required.
    pub fn cancel_all(&mut self, host: &mut dyn Host) {
        for (_, agent) in std::mem::take(&mut self.handles).into_keys() {
            if host.is_connected(agent) {
                host.send_message(agent, RELOAD_NOTICE);
            }
        }
    }

    /// Whether a live handle exists for the pair.
    pub fn is_active(&self, give_name: &str, agent: AgentId) -> bool {
        self.handles.contains_key(&(give_name.to_string(), agent))
    }

    /// Number of live handles.
    pub fn live_handles(&self) -> usize {
        self.handles.len()
    }

    /// Advance every live handle by one host tick. Runs to completion on
    /// the tick thread; a handle removed here never fires again.
    pub fn tick(&mut self, host: &mut dyn Host) {
        let keys: Vec<_> = self.handles.keys().cloned().collect();
        for key in keys {
            let Some(handle) = self.handles.get_mut(&key) else {
                continue;
            };
            let agent = key.1;
            let definition = Arc::clone(&handle.definition);
            let cadence = handle.ticks % FUEL_CHECK_INTERVAL == 0;
            handle.ticks += 1;

            if !host.is_connected(agent)
                || (cadence && !fuel::try_consume(&definition, host, agent, FuelScope::Hands))
            {
                self.handles.remove(&key);
                continue;
            }

            let velocity = host.velocity(agent);
            let impulse = burst_impulse(velocity, host.facing(agent));
            host.set_velocity(
                agent,
                actions::merge_velocity(velocity, impulse, definition.velocity_clamp),
            );
            host.play_effect(agent);

            if cadence && durability::damage(&definition, host, agent) {
                self.handles.remove(&key);
            }
        }
    }
}

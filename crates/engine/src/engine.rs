//! Engine entry points: host events in, world mutations out.

use crate::actions::{self, DamageCause};
use crate::burst::BurstTimers;
use crate::definition::ActionKind;
use crate::registry::Registry;
use exogear_core::{AgentId, Host, ItemInstance};
use tracing::info;

/// The equipment engine. Owns the definition registry and the burst
/// timer registry; the host owns everything else and hands itself in
/// per event. All methods run on the host's single tick thread.
#[derive(Debug, Default)]
pub struct Engine {
    registry: Registry,
    bursts: BurstTimers,
}

impl Engine {
    /// An engine serving the given definitions.
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            bursts: BurstTimers::new(),
        }
    }

    /// The current definition catalogue.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The burst timer registry (inspection only).
    pub fn bursts(&self) -> &BurstTimers {
        &self.bursts
    }

    /// Replace the catalogue wholesale. Every outstanding burst handle
    /// is cancelled (with an agent notice) before the swap.
    ///
    /// The replacement arrives already compiled: callers load the new
    /// batch first and only then tear the old state down, so a config
    /// file that fails to read or parse never disturbs the running
    /// registry.
    pub fn reload(&mut self, host: &mut dyn Host, registry: Registry) {
        self.bursts.cancel_all(host);
        info!(definitions = registry.len(), "equipment registry replaced");
        self.registry = registry;
    }

    /// Posture toggle event (crouch engaged/disengaged).
    pub fn on_posture_toggle(&mut self, host: &mut dyn Host, agent: AgentId, engaged: bool) {
        for definition in self.registry.equipped(host.inventory(agent)) {
            if !actions::has_permission(&definition, host, agent) {
                continue;
            }
            match (definition.action, engaged) {
                (ActionKind::Boost, true) => actions::boost(&definition, host, agent),
                (ActionKind::Burst, true) => self.bursts.start(definition, agent),
                (ActionKind::Burst, false) => self.bursts.cancel(&definition.give_name, agent),
                (ActionKind::Teleport, true) => actions::teleport(&definition, host, agent),
                _ => {}
            }
        }
    }

    /// Damage event. Returns `true` when the damage outcome should be
    /// cancelled by the host.
    ///
    /// The blanket no-fall capability wins outright: it cancels the fall
    /// before any definition is consulted, burning neither fuel nor
    /// durability.
    pub fn on_damage(&mut self, host: &mut dyn Host, agent: AgentId, cause: DamageCause) -> bool {
        if cause != DamageCause::Fall {
            return false;
        }
        if host.has_capability(agent, actions::PERM_NO_FALL) {
            return true;
        }
        for definition in self.registry.equipped(host.inventory(agent)) {
            if definition.action == ActionKind::NoFallDamage
                && actions::negate_fall_damage(&definition, host, agent)
            {
                return true;
            }
        }
        false
    }

    /// Repair-attempt event against a workstation input item. Returns
    /// `true` when the operation may proceed; `false` cancels it.
    pub fn on_repair_attempt(&self, input: &ItemInstance) -> bool {
        match self.registry.definition_for_item(input) {
            Some(definition) => actions::allow_repair(&definition),
            None => true,
        }
    }

    /// Agent disconnect: drop every burst handle the agent owns.
    pub fn on_disconnect(&mut self, agent: AgentId) {
        self.bursts.cancel_agent(agent);
    }

    /// Advance all repeating actions by one host tick.
    pub fn tick(&mut self, host: &mut dyn Host) {
        self.bursts.tick(host);
    }
}

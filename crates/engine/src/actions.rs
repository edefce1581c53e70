//! Action state machine: interprets host events against a definition's
//! single action kind and executes the resulting behavior.

use crate::definition::EquipmentDefinition;
use crate::durability;
use crate::fuel::{self, FuelScope};
use exogear_core::{AgentId, Host};
use glam::Vec3;

/// Blanket capability allowing every definition without per-name grants.
pub const PERM_USE_ALL: &str = "exogear.use_all";

/// Blanket fall-damage immunity, independent of any definition.
pub const PERM_NO_FALL: &str = "exogear.no_fall";

/// How far a teleport action scans for a solid surface.
pub const TELEPORT_RANGE: f32 = 30.0;

/// Cause of an incoming damage event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageCause {
    /// Fall impact; the only cause the engine reacts to.
    Fall,
    /// Anything else; passed through untouched.
    Other,
}

/// Whether the agent may use `definition` at all. Absence of the grant
/// is a silent no-op, not an error.
pub fn has_permission(definition: &EquipmentDefinition, host: &dyn Host, agent: AgentId) -> bool {
    host.has_capability(agent, PERM_USE_ALL)
        || host.has_capability(agent, &definition.permission_key())
}

/// Merge an impulse into the current velocity under the definition's
/// per-axis clamp triple. X and Z are clamped symmetrically; Y only from
/// above, so an already-falling agent is never slowed by the clamp.
pub fn merge_velocity(current: Vec3, impulse: Vec3, clamp: Vec3) -> Vec3 {
    let v = current + impulse;
    Vec3::new(
        v.x.clamp(-clamp.x, clamp.x),
        v.y.min(clamp.y),
        v.z.clamp(-clamp.z, clamp.z),
    )
}

/// BOOST: one impulse along the facing direction, then wear.
pub fn boost(definition: &EquipmentDefinition, host: &mut dyn Host, agent: AgentId) {
    if !fuel::try_consume(definition, host, agent, FuelScope::Hands) {
        return;
    }

    let dir = host.facing(agent);
    let impulse = Vec3::new(dir.x * 0.8, 0.8, dir.z * 0.8);
    let merged = merge_velocity(host.velocity(agent), impulse, definition.velocity_clamp);
    host.set_velocity(agent, merged);

    if definition.uses_visual_effect {
        host.play_effect(agent);
    }
    durability::damage(definition, host, agent);
}

/// TELEPORT: blink to the first solid surface along the facing ray,
/// preserving velocity and view angles. No surface within range is a
/// no-op that burns no durability.
pub fn teleport(definition: &EquipmentDefinition, host: &mut dyn Host, agent: AgentId) {
    if !fuel::try_consume(definition, host, agent, FuelScope::Hands) {
        return;
    }

    let Some(surface) = host.raycast_solid(agent, TELEPORT_RANGE) else {
        return;
    };
    let velocity = host.velocity(agent);
    let (yaw, pitch) = host.orientation(agent);
    host.teleport(agent, surface + Vec3::new(0.5, 1.0, 0.5), yaw, pitch);
    host.set_velocity(agent, velocity);

    if definition.uses_visual_effect {
        host.play_effect(agent);
    }
    durability::damage(definition, host, agent);
}

/// NO_FALL_DAMAGE: burn fuel and wear, then report that the fall-damage
/// outcome should be cancelled. Returns `false` when fuel or permission
/// gates fail, leaving the damage to land.
pub fn negate_fall_damage(
    definition: &EquipmentDefinition,
    host: &mut dyn Host,
    agent: AgentId,
) -> bool {
    if !has_permission(definition, host, agent) {
        return false;
    }
    if !fuel::try_consume(definition, host, agent, FuelScope::Hands) {
        return false;
    }
    durability::damage(definition, host, agent);
    true
}

/// Repair gate: `true` allows the workstation operation to proceed.
pub fn allow_repair(definition: &EquipmentDefinition) -> bool {
    definition.repairable
}

/// The burst per-tick impulse: strong vertical lift, gentle horizontal
/// drift along the facing direction.
pub fn burst_impulse(velocity: Vec3, facing: Vec3) -> Vec3 {
    let vertical = (velocity.y.max(0.3) * 1.3).min(10.0);
    Vec3::new(facing.x * 0.5, vertical, facing.z * 0.5)
}

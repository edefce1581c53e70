//! Durability tracker: wear accumulation and the break lifecycle.

use crate::definition::EquipmentDefinition;
use exogear_core::{AgentId, ColorCode, Host};
use tracing::warn;

/// Capability exempting an agent from all equipment wear.
pub const PERM_UNBREAKABLE: &str = "exogear.unbreakable";

/// Advance wear on the agent's equipped instance of `definition` by one
/// use. Returns `true` iff the instance was destroyed by this call.
///
/// No-op for unbreakable definitions and for agents holding the
/// unbreakable capability. An instance that should be equipped but
/// cannot be found is a consistency fault: logged, nothing mutated.
pub fn damage(definition: &EquipmentDefinition, host: &mut dyn Host, agent: AgentId) -> bool {
    let Some(cap) = definition.durability_cap else {
        return false;
    };
    if host.has_capability(agent, PERM_UNBREAKABLE) {
        return false;
    }

    let located = definition
        .locate(host.inventory(agent))
        .and_then(|slot| host.inventory(agent).slot(slot).cloned().map(|item| (slot, item)));
    let Some((slot, mut item)) = located else {
        warn!(
            definition = definition.give_name.as_str(),
            %agent,
            "wear update skipped: equipped instance not found"
        );
        return false;
    };

    item.wear = item.wear.saturating_add(1);
    if item.wear > cap {
        host.send_message(
            agent,
            &format!(
                "{}Your {}{} has broken!",
                ColorCode::Red,
                definition.display_name,
                ColorCode::Red
            ),
        );
        host.inventory_mut(agent).set_slot(slot, None);
        true
    } else {
        host.inventory_mut(agent).set_slot(slot, Some(item));
        false
    }
}

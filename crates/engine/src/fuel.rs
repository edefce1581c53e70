//! Resource ledger: the fuel-percent counter persisted as lore text.
//!
//! Remaining fuel is encoded directly into the instance's visible
//! metadata — lore line 0 carries `"<percent>% left"` and the display
//! name carries the burning discriminator. All parsing and formatting
//! of that grammar lives here; nothing else in the engine touches the
//! raw text.

use crate::definition::EquipmentDefinition;
use exogear_core::{
    strip_color, AgentId, ColorCode, Host, ItemInstance, Material, OFFHAND_SLOT, RESET,
    TOTAL_SLOTS,
};

/// The textual marker distinguishing a burning fuel unit.
pub const FUEL_SUFFIX: &str = "% left";

/// How far a burn-down call looks for fuel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuelScope {
    /// Main hand, then off hand.
    Hands,
    /// The whole container, preferring an already-burning instance.
    Anywhere,
}

/// Remaining percent of a burning fuel instance, or `None` for a fresh
/// (unburned) one. Absence of the pattern means full capacity.
pub fn burn_percent(item: &ItemInstance) -> Option<i16> {
    let line = item.lore.first()?;
    if !line.contains(FUEL_SUFFIX) {
        return None;
    }
    let stripped = strip_color(line);
    stripped.split('%').next()?.trim().parse().ok()
}

/// Render a burning fuel unit at the given remaining percent.
pub fn burning_item(kind: Material, percent: i16) -> ItemInstance {
    ItemInstance::named(
        kind,
        format!(
            "{RESET}{}Burning {} - {percent}{FUEL_SUFFIX}",
            ColorCode::DarkRed,
            kind.name()
        ),
        vec![format!("{RESET}{percent}{FUEL_SUFFIX}")],
    )
}

/// Burn one dose of fuel for `definition`. Tries each configured kind
/// in order and succeeds on the first that burns; an empty kind list
/// means unlimited fuel. On total failure the agent is notified and
/// `false` is returned — fail-fast, never retried.
pub fn try_consume(
    definition: &EquipmentDefinition,
    host: &mut dyn Host,
    agent: AgentId,
    scope: FuelScope,
) -> bool {
    if definition.fuel_kinds.is_empty() {
        return true;
    }
    for &kind in &definition.fuel_kinds {
        if consume_kind(host, agent, kind, scope, 1.0) {
            return true;
        }
    }
    host.send_message(agent, "You have no fuel!");
    false
}

/// Burn one dose of a single fuel kind. `factor` divides the burn rate;
/// every call site today passes 1.0, giving ten doses per unit.
pub fn consume_kind(
    host: &mut dyn Host,
    agent: AgentId,
    kind: Material,
    scope: FuelScope,
    factor: f64,
) -> bool {
    let Some((slot, found)) = locate_fuel(host, agent, kind, scope) else {
        return false;
    };

    let percent = burn_percent(&found);
    let fresh = percent.is_none();
    let remaining = f64::from(percent.unwrap_or(100)) - (100.0 / 10.0) / factor;
    let remaining = remaining as i16;

    // Burning and fresh fuel never stack; the surplus of a fresh stack
    // goes back to general storage as its own stack.
    let give_back = if fresh { found.count.saturating_sub(1) } else { 0 };

    if remaining < 1 {
        host.inventory_mut(agent).set_slot(slot, None);
        redistribute(host, agent, kind, scope, slot);
    } else {
        let mut burning = burning_item(kind, remaining);
        burning.wear = found.wear;
        host.inventory_mut(agent).set_slot(slot, Some(burning));
    }

    if give_back > 0 {
        let mut surplus = ItemInstance::new(kind, give_back);
        surplus.wear = found.wear;
        host.inventory_mut(agent).add(surplus);
    }

    true
}

// Locate the fuel unit to burn. Hands scope accepts whatever the agent
// is holding; Anywhere prefers a burning instance over a fresh one so
// partially burnt units are always finished first.
fn locate_fuel(
    host: &dyn Host,
    agent: AgentId,
    kind: Material,
    scope: FuelScope,
) -> Option<(usize, ItemInstance)> {
    let inventory = host.inventory(agent);
    match scope {
        FuelScope::Hands => {
            let main = inventory.held_slot();
            for slot in [main, OFFHAND_SLOT] {
                if let Some(item) = inventory.slot(slot) {
                    if item.material == kind {
                        return Some((slot, item.clone()));
                    }
                }
            }
            None
        }
        FuelScope::Anywhere => {
            let mut fresh = None;
            for i in 0..TOTAL_SLOTS {
                let Some(item) = inventory.slot(i) else { continue };
                if item.material != kind {
                    continue;
                }
                if burn_percent(item).is_some() {
                    return Some((i, item.clone()));
                }
                if fresh.is_none() {
                    fresh = Some((i, item.clone()));
                }
            }
            fresh
        }
    }
}

// A fuel unit just burnt out of `vacated_slot`; move another unit of the
// same kind into the vacated role so the agent keeps flying. The last
// matching stack in the container wins.
fn redistribute(
    host: &mut dyn Host,
    agent: AgentId,
    kind: Material,
    scope: FuelScope,
    vacated_slot: usize,
) {
    let inventory = host.inventory_mut(agent);
    let Some(position) = inventory.rfind(|item| item.material == kind) else {
        host.send_message(agent, &format!("You have run out of {}!", kind.name()));
        return;
    };
    if let Some(replacement) = inventory.take_slot(position) {
        match scope {
            FuelScope::Hands => inventory.set_slot(vacated_slot, Some(replacement)),
            FuelScope::Anywhere => {
                inventory.add(replacement);
            }
        }
    }
}

//! Agent container model: main storage, armor slots, hands.

use crate::item::{ItemInstance, MAX_STACK_SIZE};
use serde::{Deserialize, Serialize};

/// Number of hotbar slots (the first row of main storage).
pub const HOTBAR_SIZE: usize = 9;

/// Main storage slots (hotbar + backpack), indices `0..36`.
pub const MAIN_SLOTS: usize = 36;

/// First armor slot index; helmet/chest/legs/boots occupy `36..40`.
pub const ARMOR_SLOT_OFFSET: usize = 36;

/// Off-hand slot index.
pub const OFFHAND_SLOT: usize = 40;

/// Total addressable slots.
pub const TOTAL_SLOTS: usize = 41;

/// One of the four fixed body slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArmorSlot {
    /// Head slot (fixed index 0).
    Helmet,
    /// Torso slot (fixed index 1).
    Chestplate,
    /// Leg slot (fixed index 2).
    Leggings,
    /// Feet slot (fixed index 3).
    Boots,
}

impl ArmorSlot {
    /// Parse a config slot name, case-insensitively.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "HELMET" => Some(ArmorSlot::Helmet),
            "CHESTPLATE" => Some(ArmorSlot::Chestplate),
            "LEGGINGS" => Some(ArmorSlot::Leggings),
            "BOOTS" => Some(ArmorSlot::Boots),
            _ => None,
        }
    }

    /// Fixed body-slot index in `0..4`.
    pub fn body_index(self) -> usize {
        match self {
            ArmorSlot::Helmet => 0,
            ArmorSlot::Chestplate => 1,
            ArmorSlot::Leggings => 2,
            ArmorSlot::Boots => 3,
        }
    }

    /// Absolute container slot index.
    pub fn slot_index(self) -> usize {
        ARMOR_SLOT_OFFSET + self.body_index()
    }
}

/// An agent's container. Slots `0..36` are general storage (0-8 being
/// the hotbar), `36..40` the armor slots, `40` the off hand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inventory {
    slots: Vec<Option<ItemInstance>>,
    held_slot: usize,
}

impl Inventory {
    /// An empty container holding nothing, hotbar slot 0 selected.
    pub fn new() -> Self {
        Self {
            slots: vec![None; TOTAL_SLOTS],
            held_slot: 0,
        }
    }

    /// The instance at `index`, if the index is valid and occupied.
    pub fn slot(&self, index: usize) -> Option<&ItemInstance> {
        self.slots.get(index).and_then(|s| s.as_ref())
    }

    /// Replace the contents of `index`. Out-of-range indices are ignored.
    pub fn set_slot(&mut self, index: usize, item: Option<ItemInstance>) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = item;
        }
    }

    /// Empty the slot at `index`, returning what was there.
    pub fn take_slot(&mut self, index: usize) -> Option<ItemInstance> {
        self.slots.get_mut(index).and_then(|s| s.take())
    }

    /// Currently selected hotbar slot (0-8).
    pub fn held_slot(&self) -> usize {
        self.held_slot
    }

    /// Select a hotbar slot; out-of-range selections are ignored.
    pub fn set_held_slot(&mut self, slot: usize) {
        if slot < HOTBAR_SIZE {
            self.held_slot = slot;
        }
    }

    /// The item in the main hand (the selected hotbar slot).
    pub fn main_hand(&self) -> Option<&ItemInstance> {
        self.slot(self.held_slot)
    }

    /// The item in the off hand.
    pub fn off_hand(&self) -> Option<&ItemInstance> {
        self.slot(OFFHAND_SLOT)
    }

    /// Add a stack to general storage, merging with structurally
    /// identical stacks of equal wear first. Returns the unit count
    /// that did not fit.
    pub fn add(&mut self, item: ItemInstance) -> u32 {
        let mut remaining = item.count;

        for slot in self.slots.iter_mut().take(MAIN_SLOTS) {
            if remaining == 0 {
                break;
            }
            if let Some(stack) = slot {
                if stack.can_stack_with(&item) {
                    let space = MAX_STACK_SIZE - stack.count;
                    let moved = remaining.min(space);
                    stack.count += moved;
                    remaining -= moved;
                }
            }
        }

        for slot in self.slots.iter_mut().take(MAIN_SLOTS) {
            if remaining == 0 {
                break;
            }
            if slot.is_none() {
                let moved = remaining.min(MAX_STACK_SIZE);
                let mut stack = item.clone();
                stack.count = moved;
                *slot = Some(stack);
                remaining -= moved;
            }
        }

        remaining
    }

    /// First slot index (in index order) whose contents satisfy `pred`.
    pub fn find(&self, mut pred: impl FnMut(&ItemInstance) -> bool) -> Option<usize> {
        (0..TOTAL_SLOTS).find(|&i| self.slot(i).is_some_and(&mut pred))
    }

    /// Last slot index whose contents satisfy `pred`.
    pub fn rfind(&self, mut pred: impl FnMut(&ItemInstance) -> bool) -> Option<usize> {
        (0..TOTAL_SLOTS).rev().find(|&i| self.slot(i).is_some_and(&mut pred))
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Material;

    #[test]
    fn add_merges_identical_stacks() {
        let mut inv = Inventory::new();
        assert_eq!(inv.add(ItemInstance::new(Material::Coal, 40)), 0);
        assert_eq!(inv.add(ItemInstance::new(Material::Coal, 40)), 0);
        assert_eq!(inv.slot(0).map(|s| s.count), Some(64));
        assert_eq!(inv.slot(1).map(|s| s.count), Some(16));
    }

    #[test]
    fn add_does_not_merge_different_metadata() {
        let mut inv = Inventory::new();
        inv.add(ItemInstance::new(Material::Coal, 1));
        let burning = ItemInstance::named(
            Material::Coal,
            "§r§4Burning coal - 90% left",
            vec!["§r90% left".to_string()],
        );
        inv.add(burning);
        assert_eq!(inv.slot(0).map(|s| s.count), Some(1));
        assert!(inv.slot(1).is_some());
    }

    #[test]
    fn add_never_touches_armor_or_offhand() {
        let mut inv = Inventory::new();
        // 36 full slots of 64, then one more unit must not fit
        assert_eq!(inv.add(ItemInstance::new(Material::Coal, 36 * 64)), 0);
        assert_eq!(inv.add(ItemInstance::new(Material::Coal, 1)), 1);
        assert!(inv.slot(ARMOR_SLOT_OFFSET).is_none());
        assert!(inv.slot(OFFHAND_SLOT).is_none());
    }

    #[test]
    fn hands_follow_held_slot() {
        let mut inv = Inventory::new();
        inv.set_slot(3, Some(ItemInstance::new(Material::Stick, 1)));
        inv.set_held_slot(3);
        assert_eq!(inv.main_hand().map(|i| i.material), Some(Material::Stick));
        inv.set_held_slot(0);
        assert!(inv.main_hand().is_none());
    }

    #[test]
    fn armor_slot_indices() {
        assert_eq!(ArmorSlot::Helmet.slot_index(), 36);
        assert_eq!(ArmorSlot::Boots.slot_index(), 39);
        assert_eq!(ArmorSlot::parse("ChestPlate"), Some(ArmorSlot::Chestplate));
        assert_eq!(ArmorSlot::parse("cape"), None);
    }

    #[test]
    fn rfind_returns_last_match() {
        let mut inv = Inventory::new();
        inv.set_slot(2, Some(ItemInstance::new(Material::Coal, 1)));
        inv.set_slot(7, Some(ItemInstance::new(Material::Coal, 1)));
        assert_eq!(inv.rfind(|i| i.material == Material::Coal), Some(7));
        assert_eq!(inv.find(|i| i.material == Material::Coal), Some(2));
    }
}

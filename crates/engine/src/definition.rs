//! Definition compiler: raw config sections into immutable rulesets.

use crate::error::ConfigError;
use exogear_core::{
    resolve_color_tokens, ArmorSlot, CraftingRecipe, Inventory, ItemInstance, Material,
    RecipeSink, RECIPE_GRID_CELLS, RESET, TOTAL_SLOTS,
};
use glam::Vec3;
use serde::Deserialize;

/// Prefix shared by every capability key the engine checks.
pub const PERMISSION_PREFIX: &str = "exogear.";

/// Default per-axis velocity clamp when a section omits `velocity`.
pub const DEFAULT_VELOCITY_CLAMP: Vec3 = Vec3::new(0.45, 0.6, 0.45);

/// One raw configuration section, exactly as deserialized. Every field
/// is optional; validation happens in [`EquipmentDefinition::compile`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawDefinition {
    /// In-game display name, may embed `$COLOR$` tokens. Required.
    pub item_name: Option<String>,
    /// Lore text; `\n` separates lines. May embed `$COLOR$` tokens.
    pub description: Option<String>,
    /// Item material name. Required.
    pub material: Option<String>,
    /// `"armor"` or `"tool"`; defaults to armor.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// One of `none`, `boost`, `burst`, `teleport`, `no_fall_damage`.
    pub action_type: Option<String>,
    /// Armor slot name; defaults to chestplate. Ignored for tools.
    pub slot: Option<String>,
    /// Whitespace-delimited per-axis clamp triple, e.g. `"0.45 0.6 0.45"`.
    pub velocity: Option<String>,
    /// Whitespace-delimited fuel material names; empty means unlimited.
    pub fuel: Option<String>,
    /// Uses before the item breaks; negative or absent means unbreakable.
    pub uses: Option<i32>,
    /// Whether anvil repair attempts are allowed.
    pub repairable: Option<bool>,
    /// Whether actions play the cosmetic effect.
    pub use_effect: Option<bool>,
    /// Whitespace-delimited 9-cell crafting grid, `empty` leaving a hole.
    pub recipe: Option<String>,
    /// Output stack size for the recipe.
    pub recipe_amount: Option<u32>,
}

/// Which behavior a definition exhibits. Mutually exclusive and
/// immutable for the definition's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// No behavior; the item is inert.
    None,
    /// One impulse along the facing direction per posture engage.
    Boost,
    /// A repeating per-tick impulse while the posture is held.
    Burst,
    /// Blink to the surface the agent is looking at.
    Teleport,
    /// Cancel incoming fall damage.
    NoFallDamage,
}

impl ActionKind {
    fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "NONE" => Some(ActionKind::None),
            "BOOST" => Some(ActionKind::Boost),
            "BURST" => Some(ActionKind::Burst),
            "TELEPORT" => Some(ActionKind::Teleport),
            "NO_FALL_DAMAGE" => Some(ActionKind::NoFallDamage),
            _ => None,
        }
    }
}

/// Where an equipped instance of a definition is allowed to sit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotPolicy {
    /// Bound to one fixed body slot.
    Armor(ArmorSlot),
    /// Anywhere in the container; slot search scans all slots.
    Tool,
}

/// Immutable compiled ruleset for one configured item. Created once at
/// load time; replaced wholesale on reload.
#[derive(Debug, Clone, PartialEq)]
pub struct EquipmentDefinition {
    /// Unique key, sourced from the config section name. Case-insensitive.
    pub give_name: String,
    /// Rendered display name (reset-prefixed, color tokens resolved).
    pub display_name: String,
    /// Rendered lore lines.
    pub description: Vec<String>,
    /// Item material.
    pub material: Material,
    /// Slot binding policy.
    pub slot_policy: SlotPolicy,
    /// The single behavior this definition exhibits.
    pub action: ActionKind,
    /// Per-axis clamp bounds for impulse merging.
    pub velocity_clamp: Vec3,
    /// Accepted fuel kinds in priority order; empty means unlimited.
    pub fuel_kinds: Vec<Material>,
    /// Uses before destruction; `None` means unbreakable.
    pub durability_cap: Option<u16>,
    /// Whether actions play the cosmetic effect.
    pub uses_visual_effect: bool,
    /// Whether anvil repair attempts are allowed.
    pub repairable: bool,
}

impl EquipmentDefinition {
    /// Compile one configuration section. Registers the section's
    /// crafting recipe with `recipes` as a final side effect, after all
    /// validation has passed.
    pub fn compile(
        give_name: &str,
        raw: &RawDefinition,
        recipes: &mut dyn RecipeSink,
    ) -> Result<Self, ConfigError> {
        let give_name = give_name.to_string();

        let item_name = raw.item_name.as_deref().ok_or(ConfigError::MissingField {
            definition: give_name.clone(),
            field: "item_name",
        })?;
        let display_name = format!(
            "{RESET}{}",
            resolve_color_tokens(item_name).map_err(|token| ConfigError::UnknownColorToken {
                definition: give_name.clone(),
                token,
            })?
        );

        let description = match raw.description.as_deref().unwrap_or("") {
            "" => Vec::new(),
            text => {
                let resolved = resolve_color_tokens(text).map_err(|token| {
                    ConfigError::UnknownColorToken {
                        definition: give_name.clone(),
                        token,
                    }
                })?;
                resolved.split('\n').map(|line| format!("{RESET}{line}")).collect()
            }
        };

        let material_name = raw.material.as_deref().ok_or(ConfigError::MissingField {
            definition: give_name.clone(),
            field: "material",
        })?;
        let material =
            Material::parse(material_name).ok_or_else(|| ConfigError::InvalidEnum {
                definition: give_name.clone(),
                field: "material",
                value: material_name.to_string(),
            })?;

        let kind = raw.kind.as_deref().unwrap_or("armor");
        let slot_policy = match kind.to_ascii_uppercase().as_str() {
            "ARMOR" => {
                let slot_name = raw.slot.as_deref().unwrap_or("chestplate");
                let slot = ArmorSlot::parse(slot_name).ok_or_else(|| ConfigError::InvalidEnum {
                    definition: give_name.clone(),
                    field: "slot",
                    value: slot_name.to_string(),
                })?;
                SlotPolicy::Armor(slot)
            }
            "TOOL" => SlotPolicy::Tool,
            _ => {
                return Err(ConfigError::InvalidEnum {
                    definition: give_name,
                    field: "type",
                    value: kind.to_string(),
                })
            }
        };

        let action_name = raw.action_type.as_deref().unwrap_or("none");
        let action = ActionKind::parse(action_name).ok_or_else(|| ConfigError::InvalidEnum {
            definition: give_name.clone(),
            field: "action_type",
            value: action_name.to_string(),
        })?;

        let velocity_clamp = match raw.velocity.as_deref() {
            None => DEFAULT_VELOCITY_CLAMP,
            Some(text) => parse_velocity(&give_name, text)?,
        };

        let fuel_kinds = match raw.fuel.as_deref().map(str::trim).unwrap_or("") {
            "" => Vec::new(),
            text => {
                let mut kinds = Vec::new();
                for word in split_fields(text) {
                    kinds.push(Material::parse(word).ok_or_else(|| ConfigError::InvalidEnum {
                        definition: give_name.clone(),
                        field: "fuel",
                        value: word.to_string(),
                    })?);
                }
                kinds
            }
        };

        let durability_cap = match raw.uses.unwrap_or(-1) {
            uses if uses < 0 => None,
            uses => {
                // Wear saturates at u16::MAX, so a cap at or beyond it
                // could never be exceeded.
                let cap = u16::try_from(uses)
                    .ok()
                    .filter(|&cap| cap < u16::MAX)
                    .ok_or_else(|| ConfigError::InvalidNumber {
                        definition: give_name.clone(),
                        field: "uses",
                        value: uses.to_string(),
                    })?;
                Some(cap)
            }
        };

        let definition = Self {
            give_name,
            display_name,
            description,
            material,
            slot_policy,
            action,
            velocity_clamp,
            fuel_kinds,
            durability_cap,
            uses_visual_effect: raw.use_effect.unwrap_or(false),
            repairable: raw.repairable.unwrap_or(false),
        };

        // Recipe registration is the one load-time side effect; it runs
        // only once every other field has validated.
        if let Some(recipe_text) = raw.recipe.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            let recipe = definition.build_recipe(recipe_text, raw.recipe_amount.unwrap_or(1))?;
            recipes.register(recipe);
        }

        Ok(definition)
    }

    fn build_recipe(&self, text: &str, amount: u32) -> Result<CraftingRecipe, ConfigError> {
        let mut grid = [None; RECIPE_GRID_CELLS];
        for (i, cell) in split_fields(text).enumerate() {
            if i >= RECIPE_GRID_CELLS {
                return Err(ConfigError::InvalidRecipeCell {
                    definition: self.give_name.clone(),
                    cell: cell.to_string(),
                });
            }
            if cell.eq_ignore_ascii_case("empty") {
                continue;
            }
            grid[i] = Some(Material::parse(cell).ok_or_else(|| ConfigError::InvalidRecipeCell {
                definition: self.give_name.clone(),
                cell: cell.to_string(),
            })?);
        }
        let mut output = self.item();
        output.count = amount;
        Ok(CraftingRecipe { output, grid })
    }

    /// The canonical rendered instance of this definition: count 1,
    /// display name, description lore, zero wear.
    pub fn item(&self) -> ItemInstance {
        ItemInstance::named(self.material, self.display_name.clone(), self.description.clone())
    }

    /// Whether `item` is structurally this definition's equipment.
    pub fn matches_item(&self, item: &ItemInstance) -> bool {
        self.item().matches(item)
    }

    /// Locate the owned instance in a container.
    ///
    /// ARMOR checks exactly the fixed body slot; TOOL scans every slot
    /// in index order. Never cached: instances move between calls.
    pub fn locate(&self, inventory: &Inventory) -> Option<usize> {
        match self.slot_policy {
            SlotPolicy::Armor(slot) => {
                let index = slot.slot_index();
                inventory
                    .slot(index)
                    .filter(|item| self.matches_item(item))
                    .map(|_| index)
            }
            SlotPolicy::Tool => {
                (0..TOTAL_SLOTS).find(|&i| {
                    inventory.slot(i).is_some_and(|item| self.matches_item(item))
                })
            }
        }
    }

    /// Per-definition capability key (`exogear.<give_name>`).
    pub fn permission_key(&self) -> String {
        format!("{PERMISSION_PREFIX}{}", self.give_name.to_ascii_lowercase())
    }
}

fn parse_velocity(give_name: &str, text: &str) -> Result<Vec3, ConfigError> {
    let invalid = || ConfigError::InvalidNumber {
        definition: give_name.to_string(),
        field: "velocity",
        value: text.to_string(),
    };
    let mut axes = [0.0f32; 3];
    let mut fields = split_fields(text);
    for axis in &mut axes {
        let word = fields.next().ok_or_else(invalid)?;
        *axis = word.parse().map_err(|_| invalid())?;
    }
    if fields.next().is_some() {
        return Err(invalid());
    }
    Ok(Vec3::from_array(axes))
}

// Whitespace-delimited fields; collapses repeated spaces like the
// config format promises.
fn split_fields(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

#[cfg(test)]
mod tests {
    use super::*;
    use exogear_core::NullRecipes;

    fn raw(material: &str, name: &str) -> RawDefinition {
        RawDefinition {
            item_name: Some(name.to_string()),
            material: Some(material.to_string()),
            ..RawDefinition::default()
        }
    }

    #[test]
    fn compile_is_deterministic() {
        let mut section = raw("gold chestplate", "$GOLD$Basic Jetpack");
        section.description = Some("$GRAY$Crouch to fly.\n$GRAY$Burns coal.".to_string());
        section.action_type = Some("boost".to_string());
        section.fuel = Some("coal  charcoal".to_string());
        section.uses = Some(100);

        let a = EquipmentDefinition::compile("basic", &section, &mut NullRecipes).unwrap();
        let b = EquipmentDefinition::compile("basic", &section, &mut NullRecipes).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn missing_item_name_fails() {
        let mut section = raw("coal", "x");
        section.item_name = None;
        let err = EquipmentDefinition::compile("bad", &section, &mut NullRecipes).unwrap_err();
        assert_eq!(
            err,
            ConfigError::MissingField { definition: "bad".to_string(), field: "item_name" }
        );
    }

    #[test]
    fn missing_material_fails() {
        let mut section = raw("coal", "x");
        section.material = None;
        let err = EquipmentDefinition::compile("bad", &section, &mut NullRecipes).unwrap_err();
        assert_eq!(
            err,
            ConfigError::MissingField { definition: "bad".to_string(), field: "material" }
        );
    }

    #[test]
    fn unknown_color_token_fails() {
        let section = raw("coal", "$NEON$glow");
        let err = EquipmentDefinition::compile("bad", &section, &mut NullRecipes).unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownColorToken {
                definition: "bad".to_string(),
                token: "NEON".to_string()
            }
        );
    }

    #[test]
    fn rendered_name_and_lore_are_reset_prefixed() {
        let mut section = raw("blaze_rod", "$AQUA$Wand");
        section.description = Some("line one\nline two".to_string());
        let def = EquipmentDefinition::compile("wand", &section, &mut NullRecipes).unwrap();
        assert_eq!(def.display_name, "§r§bWand");
        assert_eq!(def.description, vec!["§rline one", "§rline two"]);
    }

    #[test]
    fn armor_defaults_to_chestplate() {
        let def =
            EquipmentDefinition::compile("jp", &raw("gold chestplate", "x"), &mut NullRecipes)
                .unwrap();
        assert_eq!(def.slot_policy, SlotPolicy::Armor(ArmorSlot::Chestplate));
    }

    #[test]
    fn bad_slot_name_fails() {
        let mut section = raw("gold chestplate", "x");
        section.slot = Some("cape".to_string());
        let err = EquipmentDefinition::compile("jp", &section, &mut NullRecipes).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnum { field: "slot", .. }));
    }

    #[test]
    fn velocity_parses_with_collapsed_spaces() {
        let mut section = raw("coal", "x");
        section.velocity = Some("0.1  0.2 0.3".to_string());
        let def = EquipmentDefinition::compile("jp", &section, &mut NullRecipes).unwrap();
        assert_eq!(def.velocity_clamp, Vec3::new(0.1, 0.2, 0.3));
    }

    #[test]
    fn velocity_with_wrong_arity_fails() {
        for text in ["0.1 0.2", "0.1 0.2 0.3 0.4", "a b c"] {
            let mut section = raw("coal", "x");
            section.velocity = Some(text.to_string());
            let err = EquipmentDefinition::compile("jp", &section, &mut NullRecipes).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidNumber { field: "velocity", .. }));
        }
    }

    #[test]
    fn negative_uses_means_unbreakable() {
        let mut section = raw("coal", "x");
        section.uses = Some(-1);
        let def = EquipmentDefinition::compile("jp", &section, &mut NullRecipes).unwrap();
        assert_eq!(def.durability_cap, None);

        section.uses = Some(5);
        let def = EquipmentDefinition::compile("jp", &section, &mut NullRecipes).unwrap();
        assert_eq!(def.durability_cap, Some(5));
    }

    #[test]
    fn uses_beyond_wear_range_is_rejected() {
        for uses in [i32::from(u16::MAX), 100_000] {
            let mut section = raw("coal", "x");
            section.uses = Some(uses);
            let err = EquipmentDefinition::compile("jp", &section, &mut NullRecipes).unwrap_err();
            assert_eq!(
                err,
                ConfigError::InvalidNumber {
                    definition: "jp".to_string(),
                    field: "uses",
                    value: uses.to_string()
                }
            );
        }
    }

    #[test]
    fn recipe_registers_positionally() {
        struct Captured(Vec<CraftingRecipe>);
        impl RecipeSink for Captured {
            fn register(&mut self, recipe: CraftingRecipe) {
                self.0.push(recipe);
            }
        }

        let mut section = raw("gold chestplate", "Jetpack");
        section.recipe =
            Some("iron_ingot empty iron_ingot empty blaze_powder empty empty empty empty".into());
        section.recipe_amount = Some(2);

        let mut sink = Captured(Vec::new());
        EquipmentDefinition::compile("jp", &section, &mut sink).unwrap();

        assert_eq!(sink.0.len(), 1);
        let recipe = &sink.0[0];
        assert_eq!(recipe.output.count, 2);
        assert_eq!(recipe.grid[0], Some(Material::IronIngot));
        assert_eq!(recipe.grid[1], None);
        assert_eq!(recipe.grid[4], Some(Material::BlazePowder));
    }

    #[test]
    fn bad_recipe_cell_fails_without_registering() {
        struct Counting(usize);
        impl RecipeSink for Counting {
            fn register(&mut self, _recipe: CraftingRecipe) {
                self.0 += 1;
            }
        }

        let mut section = raw("gold chestplate", "Jetpack");
        section.recipe = Some("iron_ingot mystery_meat".to_string());
        let mut sink = Counting(0);
        let err = EquipmentDefinition::compile("jp", &section, &mut sink).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidRecipeCell {
                definition: "jp".to_string(),
                cell: "mystery_meat".to_string()
            }
        );
        assert_eq!(sink.0, 0);
    }

    #[test]
    fn recipe_with_ten_cells_fails() {
        let mut section = raw("coal", "x");
        section.recipe = Some("coal coal coal coal coal coal coal coal coal coal".to_string());
        let err = EquipmentDefinition::compile("jp", &section, &mut NullRecipes).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRecipeCell { .. }));
    }

    #[test]
    fn locate_armor_checks_only_the_fixed_slot() {
        let mut section = raw("gold chestplate", "Jetpack");
        section.slot = Some("chestplate".to_string());
        let def = EquipmentDefinition::compile("jp", &section, &mut NullRecipes).unwrap();

        let mut inv = Inventory::new();
        // Same item in a hotbar slot must not count for armor policy.
        inv.set_slot(0, Some(def.item()));
        assert_eq!(def.locate(&inv), None);

        inv.set_slot(ArmorSlot::Chestplate.slot_index(), Some(def.item()));
        assert_eq!(def.locate(&inv), Some(ArmorSlot::Chestplate.slot_index()));
    }

    #[test]
    fn locate_tool_scans_in_index_order() {
        let mut section = raw("blaze_rod", "Wand");
        section.kind = Some("tool".to_string());
        let def = EquipmentDefinition::compile("wand", &section, &mut NullRecipes).unwrap();

        let mut inv = Inventory::new();
        inv.set_slot(5, Some(def.item()));
        inv.set_slot(12, Some(def.item()));
        assert_eq!(def.locate(&inv), Some(5));
    }

    #[test]
    fn permission_key_is_lowercased() {
        let def = EquipmentDefinition::compile("MegaJet", &raw("coal", "x"), &mut NullRecipes)
            .unwrap();
        assert_eq!(def.permission_key(), "exogear.megajet");
    }
}

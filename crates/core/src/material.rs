//! Material catalogue for equipment and fuel items.

use serde::{Deserialize, Serialize};

/// Item material identifier.
///
/// The set is intentionally small: it covers the materials the shipped
/// equipment configs reference (wearables, wands, fuels). `parse` accepts
/// config spellings case-insensitively with spaces treated as underscores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Material {
    /// Empty slot placeholder.
    Air,
    /// Coal lump, the default fuel.
    Coal,
    /// Charcoal, interchangeable fuel.
    Charcoal,
    /// Redstone dust.
    Redstone,
    /// Gunpowder.
    Gunpowder,
    /// Blaze powder.
    BlazePowder,
    /// Blaze rod, a common wand material.
    BlazeRod,
    /// Feather, a light fuel.
    Feather,
    /// Stick.
    Stick,
    /// Iron ingot.
    IronIngot,
    /// Gold ingot.
    GoldIngot,
    /// Diamond.
    Diamond,
    /// Emerald.
    Emerald,
    /// Leather.
    Leather,
    /// Leather boots.
    LeatherBoots,
    /// Leather chestplate.
    LeatherChestplate,
    /// Chainmail chestplate.
    ChainmailChestplate,
    /// Iron boots.
    IronBoots,
    /// Iron chestplate.
    IronChestplate,
    /// Gold boots.
    GoldBoots,
    /// Gold chestplate.
    GoldChestplate,
    /// Diamond boots.
    DiamondBoots,
    /// Diamond chestplate.
    DiamondChestplate,
    /// Elytra wings.
    Elytra,
}

impl Material {
    /// Parse a material from its config spelling (e.g. "gold chestplate",
    /// "BLAZE_ROD"). Case-insensitive; spaces are treated as underscores.
    pub fn parse(s: &str) -> Option<Self> {
        let normalized = s.trim().to_ascii_uppercase().replace(' ', "_");
        match normalized.as_str() {
            "AIR" => Some(Material::Air),
            "COAL" => Some(Material::Coal),
            "CHARCOAL" => Some(Material::Charcoal),
            "REDSTONE" => Some(Material::Redstone),
            "GUNPOWDER" => Some(Material::Gunpowder),
            "BLAZE_POWDER" => Some(Material::BlazePowder),
            "BLAZE_ROD" => Some(Material::BlazeRod),
            "FEATHER" => Some(Material::Feather),
            "STICK" => Some(Material::Stick),
            "IRON_INGOT" => Some(Material::IronIngot),
            "GOLD_INGOT" => Some(Material::GoldIngot),
            "DIAMOND" => Some(Material::Diamond),
            "EMERALD" => Some(Material::Emerald),
            "LEATHER" => Some(Material::Leather),
            "LEATHER_BOOTS" => Some(Material::LeatherBoots),
            "LEATHER_CHESTPLATE" => Some(Material::LeatherChestplate),
            "CHAINMAIL_CHESTPLATE" => Some(Material::ChainmailChestplate),
            "IRON_BOOTS" => Some(Material::IronBoots),
            "IRON_CHESTPLATE" => Some(Material::IronChestplate),
            "GOLD_BOOTS" => Some(Material::GoldBoots),
            "GOLD_CHESTPLATE" => Some(Material::GoldChestplate),
            "DIAMOND_BOOTS" => Some(Material::DiamondBoots),
            "DIAMOND_CHESTPLATE" => Some(Material::DiamondChestplate),
            "ELYTRA" => Some(Material::Elytra),
            _ => None,
        }
    }

    /// Lowercase name used in agent-facing text (fuel labels, notices).
    pub fn name(self) -> &'static str {
        match self {
            Material::Air => "air",
            Material::Coal => "coal",
            Material::Charcoal => "charcoal",
            Material::Redstone => "redstone",
            Material::Gunpowder => "gunpowder",
            Material::BlazePowder => "blaze_powder",
            Material::BlazeRod => "blaze_rod",
            Material::Feather => "feather",
            Material::Stick => "stick",
            Material::IronIngot => "iron_ingot",
            Material::GoldIngot => "gold_ingot",
            Material::Diamond => "diamond",
            Material::Emerald => "emerald",
            Material::Leather => "leather",
            Material::LeatherBoots => "leather_boots",
            Material::LeatherChestplate => "leather_chestplate",
            Material::ChainmailChestplate => "chainmail_chestplate",
            Material::IronBoots => "iron_boots",
            Material::IronChestplate => "iron_chestplate",
            Material::GoldBoots => "gold_boots",
            Material::GoldChestplate => "gold_chestplate",
            Material::DiamondBoots => "diamond_boots",
            Material::DiamondChestplate => "diamond_chestplate",
            Material::Elytra => "elytra",
        }
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

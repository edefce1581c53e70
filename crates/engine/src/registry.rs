//! Top-level catalogue of loaded equipment definitions.

use crate::definition::{EquipmentDefinition, RawDefinition};
use crate::error::ConfigError;
use exogear_core::{Inventory, ItemInstance, RecipeSink};
use std::collections::BTreeMap;
use std::sync::Arc;

/// All loaded definitions, indexed case-insensitively by give name.
/// Replaced wholesale on reload; iteration order is deterministic.
#[derive(Debug, Default)]
pub struct Registry {
    definitions: BTreeMap<String, Arc<EquipmentDefinition>>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile and register a whole configuration batch. One bad section
    /// never aborts the batch: every failure is collected and reported
    /// individually while the remaining sections load.
    pub fn load(
        sections: impl IntoIterator<Item = (String, RawDefinition)>,
        recipes: &mut dyn RecipeSink,
    ) -> (Self, Vec<ConfigError>) {
        let mut registry = Self::new();
        let mut errors = Vec::new();
        for (give_name, raw) in sections {
            match EquipmentDefinition::compile(&give_name, &raw, recipes) {
                Ok(definition) => {
                    if let Err(err) = registry.insert(definition) {
                        errors.push(err);
                    }
                }
                Err(err) => errors.push(err),
            }
        }
        (registry, errors)
    }

    /// Register one compiled definition, enforcing give-name uniqueness
    /// and the structural-identity ambiguity check.
    pub fn insert(&mut self, definition: EquipmentDefinition) -> Result<(), ConfigError> {
        let key = definition.give_name.to_ascii_lowercase();
        if self.definitions.contains_key(&key) {
            return Err(ConfigError::DuplicateGiveName(definition.give_name));
        }
        let rendered = definition.item();
        if let Some(existing) = self
            .definitions
            .values()
            .find(|other| other.item().matches(&rendered))
        {
            return Err(ConfigError::DuplicateIdentity {
                first: existing.give_name.clone(),
                second: definition.give_name,
            });
        }
        self.definitions.insert(key, Arc::new(definition));
        Ok(())
    }

    /// Look up a definition by give name, case-insensitively.
    pub fn get(&self, give_name: &str) -> Option<Arc<EquipmentDefinition>> {
        self.definitions.get(&give_name.to_ascii_lowercase()).cloned()
    }

    /// Every loaded definition, in give-name order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<EquipmentDefinition>> {
        self.definitions.values()
    }

    /// Number of loaded definitions.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether the registry holds no definitions.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// The definitions whose equipment the container currently holds.
    /// Recomputed per event; slot search is never cached.
    pub fn equipped(&self, inventory: &Inventory) -> Vec<Arc<EquipmentDefinition>> {
        self.definitions
            .values()
            .filter(|definition| definition.locate(inventory).is_some())
            .cloned()
            .collect()
    }

    /// The definition an arbitrary instance structurally belongs to.
    pub fn definition_for_item(&self, item: &ItemInstance) -> Option<Arc<EquipmentDefinition>> {
        self.definitions
            .values()
            .find(|definition| definition.matches_item(item))
            .cloned()
    }
}

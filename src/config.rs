use anyhow::{Context, Result};
use exogear_core::RecipeSink;
use exogear_engine::{ConfigError, RawDefinition, Registry};
use std::{collections::BTreeMap, fs, path::Path};
use tracing::warn;

pub const DEFAULT_EQUIPMENT_PATH: &str = "config/equipment.toml";

/// Load and compile the equipment definition file. I/O and TOML syntax
/// failures abort; per-section compile failures are returned alongside
/// whatever loaded.
pub fn load_registry(
    path: &Path,
    recipes: &mut dyn RecipeSink,
) -> Result<(Registry, Vec<ConfigError>)> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading equipment config {}", path.display()))?;
    let sections: BTreeMap<String, RawDefinition> = toml::from_str(&text)
        .with_context(|| format!("parsing equipment config {}", path.display()))?;
    Ok(Registry::load(sections, recipes))
}

/// Log every per-section failure at warn level.
pub fn report_errors(errors: &[ConfigError]) {
    for error in errors {
        warn!(%error, "equipment section rejected");
    }
}

use exogear_core::{AgentId, Host, RecipeSink};
use exogear_engine::Engine;
use std::fmt;
use std::path::Path;

use crate::config;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandError {
    message: String,
}

impl CommandError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CommandError {}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub lines: Vec<String>,
}

impl CommandOutput {
    fn line(message: impl Into<String>) -> Self {
        Self {
            lines: vec![message.into()],
        }
    }
}

/// Render one `(give_name) display_name` line per loaded definition,
/// in give-name order.
pub fn list(engine: &Engine) -> CommandOutput {
    let mut out = CommandOutput::default();
    if engine.registry().is_empty() {
        out.lines.push("No equipment loaded.".to_string());
        return out;
    }
    for definition in engine.registry().iter() {
        out.lines
            .push(format!("({}) {}", definition.give_name, definition.display_name));
    }
    out
}

/// Hand `count` canonical instances of the named definition to the
/// agent. Name lookup is case-insensitive.
pub fn give(
    engine: &Engine,
    host: &mut dyn Host,
    agent: AgentId,
    name: &str,
    count: u32,
) -> Result<CommandOutput, CommandError> {
    let definition = engine
        .registry()
        .get(name)
        .ok_or_else(|| CommandError::new(format!("Unknown equipment: {name}")))?;
    let mut item = definition.item();
    item.count = count.max(1);
    let leftover = host.inventory_mut(agent).add(item);
    if leftover > 0 {
        return Ok(CommandOutput::line(format!(
            "Gave {} ({leftover} did not fit)",
            definition.give_name
        )));
    }
    Ok(CommandOutput::line(format!("Gave {}", definition.give_name)))
}

/// Re-read the definition file and swap the engine's registry. Burst
/// handles are cancelled with a notice; a file that fails to read or
/// parse leaves the old registry in place.
pub fn reload(
    engine: &mut Engine,
    host: &mut dyn Host,
    path: &Path,
    recipes: &mut dyn RecipeSink,
) -> Result<CommandOutput, CommandError> {
    let (registry, errors) = config::load_registry(path, recipes)
        .map_err(|err| CommandError::new(format!("Reload failed: {err:#}")))?;
    config::report_errors(&errors);
    let loaded = registry.len();
    engine.reload(host, registry);
    Ok(CommandOutput::line(format!(
        "Loaded {loaded} definitions ({} rejected)",
        errors.len()
    )))
}

//! exogear - rule-driven powered-equipment engine
//!
//! Headless validator: compiles an equipment definition file and lists
//! what loaded.

mod commands;
mod config;

use anyhow::Result;
use exogear_core::NullRecipes;
use exogear_engine::Engine;
use std::{env, path::PathBuf, process::ExitCode};
use tracing::info;

struct CliOptions {
    config: PathBuf,
}

impl CliOptions {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let mut config = PathBuf::from(config::DEFAULT_EQUIPMENT_PATH);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    let value = args
                        .next()
                        .ok_or_else(|| anyhow::anyhow!("--config requires a path"))?;
                    config = PathBuf::from(value);
                }
                other => anyhow::bail!("unknown argument: {other}"),
            }
        }
        Ok(Self { config })
    }
}

fn main() -> Result<ExitCode> {
    // WARN by default, overridable via RUST_LOG.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    info!("Starting exogear v{}", env!("CARGO_PKG_VERSION"));

    let cli = CliOptions::parse(env::args().skip(1))?;
    let (registry, errors) = config::load_registry(&cli.config, &mut NullRecipes)?;
    config::report_errors(&errors);

    let engine = Engine::new(registry);
    for line in commands::list(&engine).lines {
        println!("{line}");
    }
    println!(
        "{} definitions loaded, {} rejected",
        engine.registry().len(),
        errors.len()
    );

    Ok(if errors.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

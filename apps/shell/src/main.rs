#![allow(clippy::print_stdout)]

mod args;
mod store;

use crate::args::{Cli, Commands};
use crate::store::DirStore;
use anyhow::{Context, Result};
use clap::Parser;
use georeg::domain::config::RegistryConfig;
use georeg::kernel::config::load_config;
use georeg::kernel::context::{Detached, ViewContext};
use georeg::kernel::registry::ClassRegistry;
use georeg::kernel::view::text;
use georeg_logger::Logger;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config: RegistryConfig =
        load_config(cli.config.as_deref()).context("Critical: Configuration is malformed")?;
    let _log = Logger::from_config(env!("CARGO_BIN_NAME"), &config.logging)?;

    let registry = georeg::registry(&config)?;

    match cli.command {
        Commands::Classes {} => {
            for class in registry.classes() {
                let meta = class.meta();
                println!("{:<22} {:<30} {}", meta.id, meta.title, meta.description);
            }
        },
        Commands::Defaults { class } => {
            let defaults = registry.require(&class)?.defaults()?;
            println!("{}", serde_json::to_string_pretty(&defaults)?);
        },
        Commands::Validate { class, file } => {
            return validate(&registry, &class, &file).await;
        },
        Commands::Sanitize { class, file } => {
            let payload = read_payload(&file)?;
            let clean = registry.require(&class)?.sanitize_payload(payload).await;
            println!("{}", serde_json::to_string_pretty(&clean)?);
        },
        Commands::Show { class, file, items } => {
            let payload = read_payload(&file)?;
            let class = registry.require(&class)?;
            let nodes = match items {
                Some(dir) => {
                    let store = DirStore::open(&dir);
                    let cx = ViewContext::new(&store, &registry).with_presentation(&config.presentation);
                    class.detail_view(&payload, &cx)?
                },
                None => {
                    let cx = ViewContext::new(&Detached, &registry).with_presentation(&config.presentation);
                    class.detail_view(&payload, &cx)?
                },
            };
            print!("{}", text::render(&nodes));
        },
    }

    Ok(ExitCode::SUCCESS)
}

async fn validate(registry: &ClassRegistry, class_id: &str, file: &Path) -> Result<ExitCode> {
    let class = registry.require(class_id)?;
    let payload = read_payload(file)?;

    if class.validate_payload(&payload).await {
        println!("valid");
        return Ok(ExitCode::SUCCESS);
    }

    println!("invalid");
    match class.diagnose(&payload) {
        Ok(violations) => violations.iter().for_each(|violation| println!("  {violation}")),
        Err(e) => println!("  {e}"),
    }
    Ok(ExitCode::FAILURE)
}

fn read_payload(file: &Path) -> Result<Value> {
    let raw =
        fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("{} is not JSON", file.display()))
}

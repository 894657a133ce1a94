// Copyright 2023 System76 <info@system76.com>
// SPDX-License-Identifier: GPL-3.0-only

use clap::Parser;
use std::fs;
use std::path::Path;
use std::time::Instant;

mod constants;

use category::Category;
mod category;

use cli::{Cli, Command, ExportFormat};
mod cli;

use config::Config;
mod config;

use error::Error;
mod error;

use registry::Registry;
mod registry;

mod translation;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(ok) => ok,
        Err(err) => {
            log::error!("failed to load config: {}", err);
            Config::default()
        }
    };

    let namespace = cli.namespace.unwrap_or(config.namespace);
    let registry = Registry::new(&namespace);

    match cli.command {
        Command::Categories => {
            for entry in registry.entries() {
                println!("{}", entry.category.id());
            }
        }
        Command::Keys { category } => keys(&registry, category),
        Command::Export { format, output } => export(&registry, format, output.as_deref())?,
    }

    Ok(())
}

fn keys(registry: &Registry, category: Option<Category>) {
    match category {
        Some(category) => {
            let entry = registry.entry(category);
            println!("{}", entry.translation_key_name);
            println!("{}", entry.translation_key_description);
        }
        None => {
            for entry in registry.entries() {
                println!("{}", entry.translation_key_name);
                println!("{}", entry.translation_key_description);
            }
        }
    }
}

fn export(registry: &Registry, format: ExportFormat, output: Option<&Path>) -> Result<(), Error> {
    let start = Instant::now();
    let data = match format {
        ExportFormat::Json => serde_json::to_string_pretty(registry)?,
        ExportFormat::Yaml => serde_yaml::to_string(registry)?,
    };
    match output {
        Some(path) => {
            fs::write(path, &data)?;
            log::info!(
                "wrote {} categories for namespace {:?} to {:?} in {:?}",
                registry.entries().len(),
                registry.namespace(),
                path,
                start.elapsed()
            );
        }
        None => println!("{}", data),
    }
    Ok(())
}

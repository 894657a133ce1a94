use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::category::Category;

#[derive(Debug, Parser)]
#[command(name = "guidebook")]
#[command(about = "Guidebook category registry and translation key tooling")]
pub struct Cli {
    /// Mod namespace override for generated translation keys
    #[arg(long)]
    pub namespace: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List category ids in guidebook display order
    Categories,

    /// Print translation keys for one category, or for all of them
    Keys {
        /// Category id, e.g. `blocks_machines`
        #[arg(long)]
        category: Option<Category>,
    },

    /// Write the registry document consumed by external tooling
    Export {
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Yaml,
}

//! Pagetree CLI Library
//!
//! Presentation layer: loads a page file, runs the core list operations and
//! prints the resulting rows.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use pagetree_core::vfs::PhysicalFileSystem;
use pagetree_core::PageTreeConfig;

mod commands;

pub use commands::run;

#[derive(Debug, Parser)]
#[command(name = "pagetree", version, about = "Show a page hierarchy as an indented list")]
pub struct Cli {
    /// YAML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the flattened, indented page list
    Show(ShowArgs),
    /// Remove a page and its subtree from the list, then print it
    Remove(RemoveArgs),
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Page file (.yaml, .yml or .json)
    pub file: PathBuf,

    /// Print rows as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct RemoveArgs {
    /// Page file (.yaml, .yml or .json)
    pub file: PathBuf,

    /// Position in the flattened list; out-of-range values change nothing
    #[arg(long, allow_hyphen_values = true)]
    pub at: i64,

    /// Print rows as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Config from `--config`, or the defaults
    pub fn load_config(&self) -> anyhow::Result<PageTreeConfig> {
        match &self.config {
            Some(path) => PageTreeConfig::load(path, &PhysicalFileSystem)
                .with_context(|| format!("loading config {}", path.display())),
            None => Ok(PageTreeConfig::default()),
        }
    }
}

//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::LevelFilter;

use component_tree::output::OutputConfig;

use crate::commands;

/// Component Tree - Resolve and install component descriptor trees
#[derive(Parser, Debug)]
#[command(name = "component-tree")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(
        long,
        global = true,
        value_name = "LEVEL",
        default_value = "info",
        env = "COMPONENT_TREE_LOG"
    )]
    log_level: LevelFilter,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Install git subcomponents across the whole component tree
    Install(commands::install::InstallArgs),

    /// Display the resolved component tree
    Tree(commands::tree::TreeArgs),

    /// Print the fully merged configuration of every component
    Show(commands::show::ShowArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(self.log_level);
        let output = OutputConfig::from_flag(&self.color);

        match self.command {
            Commands::Install(args) => commands::install::execute(args, &output),
            Commands::Tree(args) => commands::tree::execute(args, &output),
            Commands::Show(args) => commands::show::execute(args),
        }
    }
}

/// Initialize `env_logger`. `RUST_LOG`, when set, refines the level given on
/// the command line.
fn init_logging(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();
}

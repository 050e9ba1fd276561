//! CLI definition using clap

use clap::{Parser, Subcommand};
use rental_app::config::MAX_PRICE_DECIMALS;
use rental_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "car-rental")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "In-memory car rental fleet manager with an interactive menu")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Do not print the menu before each choice (overrides config)
    #[arg(long, global = true)]
    pub no_menu: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive menu (default)
    Shell {
        /// Read menu input from a file instead of stdin
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Show or hide the menu before each choice
        #[arg(long)]
        set_show_menu: Option<bool>,

        /// Set decimals for the price column (0-12)
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=i64::from(MAX_PRICE_DECIMALS)))]
        set_price_decimals: Option<u8>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

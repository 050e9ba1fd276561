//! Command handlers

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use crate::cli::{Cli, Commands};
use rental_app::config::Config;
use rental_app::shell::{Shell, ShellOptions};
use rental_types::{OutputFormat, Result};
use tracing::info;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        None => cmd_shell(&cli, None),
        Some(Commands::Shell { ref input }) => cmd_shell(&cli, input.clone()),
        Some(Commands::Config {
            show,
            set_output,
            set_show_menu,
            set_price_decimals,
            reset,
        }) => cmd_config(show, set_output, set_show_menu, set_price_decimals, reset),
    }
}

fn cmd_shell(cli: &Cli, input: Option<PathBuf>) -> Result<()> {
    let config = Config::load()?;

    // Override from CLI args
    let mut options = ShellOptions::from(&config);
    if let Some(format) = cli.format {
        options.format = format;
    }
    if cli.no_menu {
        options.show_menu = false;
    }

    let stdout = io::stdout().lock();
    match input {
        Some(path) => {
            info!(path = %path.display(), "replaying menu input from file");
            let reader = BufReader::new(File::open(&path)?);
            let mut shell = Shell::new(reader, stdout, options);
            shell.run()
        }
        None => {
            let mut shell = Shell::new(io::stdin().lock(), stdout, options);
            shell.run()
        }
    }
}

fn cmd_config(
    show: bool,
    set_output: Option<OutputFormat>,
    set_show_menu: Option<bool>,
    set_price_decimals: Option<u8>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let modified = apply_config_changes(&mut config, set_output, set_show_menu, set_price_decimals);

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}

/// Apply requested settings, returning whether anything changed
fn apply_config_changes(
    config: &mut Config,
    set_output: Option<OutputFormat>,
    set_show_menu: Option<bool>,
    set_price_decimals: Option<u8>,
) -> bool {
    let mut modified = false;

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(show_menu) = set_show_menu {
        config.show_menu = show_menu;
        modified = true;
    }

    if let Some(decimals) = set_price_decimals {
        config.price_decimals = decimals;
        modified = true;
    }

    modified
}

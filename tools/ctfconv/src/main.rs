//! ctfconv - Conversion toolkit for CTF workflows
//!
//! Thin command-line front end over the `ctf-convert` engine: one
//! sub-command per conversion, results on stdout, errors on stderr.

mod commands;
mod config;
mod output;

use crate::commands::ConvertCommands;
use crate::config::{load_config, CliConfig};
use anyhow::Result;
use clap::Parser;
use colored::*;
use ctf_convert::Converter;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "ctfconv")]
#[command(about = "Convert between text, decimal, hex and binary, and XOR byte sequences")]
#[command(long_about = "Convert between text, decimal, hex and binary, and XOR byte sequences

Examples:
  ctfconv text-to-hex 'Hello, World!'          # 48656c6c6f2c20576f726c6421
  ctfconv hex-to-text 0x48656c6c6f             # Hello
  ctfconv binary-to-text 01001000 01101001     # Hi
  ctfconv decimal-to-hex 72,105                # 4869
  ctfconv xor-decimal 1,2,3 --key 255          # 254 253 252
  ctfconv --json hex-to-binary -f cipher.txt   # [\"01001000\", ...]

Use 'ctfconv <command> --help' for more information on a specific command.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: ConvertCommands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Configuration file (default: ./ctfconv.toml or ./ctfconv.yaml if present)
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,
}

impl Cli {
    /// Command-line flags override file and environment settings
    fn apply_overrides(&self, config: &mut CliConfig) {
        if self.no_color {
            config.output.color = false;
        }
        if self.json {
            config.output.json = true;
        }
        if self.verbose {
            config.log.level = "debug".to_string();
        }
    }
}

fn init_logging(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(level))
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    // A subscriber may already be installed when run() is called repeatedly
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Resolve configuration, run the conversion and render its result
fn run(cli: &Cli) -> Result<String> {
    let mut config = load_config(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);

    // Configure colored output
    if !config.output.color {
        colored::control::set_override(false);
    }

    init_logging(&config.log.level);
    debug!(?config, "configuration loaded");

    let output = cli.command.run(&Converter::new())?;
    Ok(output.render(&config.output)?)
}

fn main() {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(rendered) => {
            println!("{}", rendered);
        },
        Err(e) => {
            eprintln!("{} {:#}", "error:".bright_red().bold(), e);
            std::process::exit(1);
        },
    }
}

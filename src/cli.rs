//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for bitsnip using clap's derive macros.

use clap::{Parser, Subcommand};

/// Bitsnip - a command-line client for the Bitly v4 shorten API
#[derive(Parser)]
#[command(name = "bitsnip")]
#[command(version)]
#[command(about = "Shorten URLs through the Bitly API", long_about = None)]
pub struct Cli {
    /// Path to a configuration file (default: config.toml, bitsnip.toml, ...)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Shorten a URL
    ///
    /// Usage: shorten <URL>
    /// The remote service is the sole validator of URL well-formedness;
    /// the only local check is that the input is non-empty after trimming.
    Shorten {
        /// The long URL to shorten
        url: String,

        /// Override the short-link domain (default from config, e.g. bit.ly)
        #[arg(long)]
        domain: Option<String>,

        /// Copy the short URL to the system clipboard
        #[arg(long)]
        copy: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.toml)
        output_path: Option<String>,

        /// Force overwrite without confirmation
        #[arg(long)]
        force: bool,
    },
}

//! CLI interface module
//!
//! This module provides command-line interface functionality for bitsnip.

pub mod commands;

use std::fmt;

use crate::cli::{Commands, ConfigCommands};
use crate::errors::BitsnipError;

#[derive(Debug)]
pub enum CliError {
    InputError(String),
    ConfigError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::InputError(msg) => format!("Input error: {}", msg),
            CliError::ConfigError(msg) => format!("Config error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::InputError(msg) => {
                format!("{} {}", "Input error:".yellow().bold(), msg.white())
            }
            CliError::ConfigError(msg) => {
                format!("{} {}", "Config error:".red().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<BitsnipError> for CliError {
    fn from(err: BitsnipError) -> Self {
        match err {
            BitsnipError::Validation(msg) => CliError::InputError(msg),
            BitsnipError::Config(msg) => CliError::ConfigError(msg),
            // Service and transport failures surface with the message the
            // handler already chose; everything else keeps its type prefix.
            BitsnipError::Service(msg) | BitsnipError::Transport(msg) => {
                CliError::CommandError(msg)
            }
            other => CliError::CommandError(other.format_simple()),
        }
    }
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(cmd: Commands) -> Result<(), CliError> {
    match cmd {
        Commands::Shorten {
            url,
            domain,
            copy,
            json,
        } => commands::shorten_url(url, domain, copy, json).await,

        Commands::Config { action } => match action {
            ConfigCommands::Generate { output_path, force } => {
                commands::generate_config(output_path, force)
            }
        },
    }
}

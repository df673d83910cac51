//! Bitsnip - a command-line client for the Bitly v4 shorten API
//!
//! This library provides the core functionality for the bitsnip CLI,
//! including the shorten client, configuration loading and the terminal
//! interface.
//!
//! # Features
//! - **clipboard**: `--copy` support via the system clipboard (default)
//!
//! # Architecture
//! - `client`: the shorten request handler and its request lifecycle types
//! - `config`: TOML + environment configuration management
//! - `interfaces`: user interfaces (CLI)
//! - `system`: logging and platform utilities
//! - `errors`: crate-wide error type

pub mod cli;
pub mod client;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod system;

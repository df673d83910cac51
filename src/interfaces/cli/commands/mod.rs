//! CLI command implementations

mod config_gen;
mod shorten;

pub use config_gen::generate_config;
pub use shorten::shorten_url;

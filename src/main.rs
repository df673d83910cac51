use clap::Parser;
use tracing::debug;

use bitsnip::cli::Cli;
use bitsnip::config;
use bitsnip::interfaces::cli::run_cli_command;
use bitsnip::system::logging;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Config must be frozen before logging reads its level
    let app_config = config::init_config_with(cli.config.as_deref());
    let _guard = logging::init_logging(app_config);

    debug!("Using shorten endpoint: {}", app_config.api.endpoint);

    if let Err(e) = run_cli_command(cli.command).await {
        eprintln!("{}", e.format_colored());
        std::process::exit(1);
    }
}

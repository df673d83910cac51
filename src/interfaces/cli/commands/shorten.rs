//! Shorten command

use colored::Colorize;
use tracing::debug;

use crate::client::{RequestState, ShortenClient, ShortenedLink};
use crate::config;
use crate::errors::BitsnipError;
use crate::interfaces::cli::CliError;

pub async fn shorten_url(
    url: String,
    domain: Option<String>,
    copy: bool,
    json: bool,
) -> Result<(), CliError> {
    let input = url.trim().to_string();
    if input.is_empty() {
        // Caught before any network call, same message as the upstream form
        return Err(BitsnipError::validation("Please add a link").into());
    }

    let app_config = config::get_config();
    let client = ShortenClient::from_config(app_config)?;

    let mut state = RequestState::Idle;
    state = state.begin();
    if !json {
        eprintln!("{} {}", "…".bold().blue(), state.label());
    }

    let result = match domain {
        Some(d) => client.shorten_with_domain(&input, &d).await,
        None => client.shorten(&input).await,
    };

    match result {
        Ok(link) => {
            state = state.finish(true);
            debug!("Request finished: {:?}", state);

            if json {
                println!(
                    "{}",
                    serde_json::json!({
                        "long_url": input,
                        "id": link.id,
                        "short_url": link.display_url(),
                    })
                );
            } else {
                render_result_card(&input, &link);
            }

            if copy {
                copy_short_url(&link, json);
            }

            Ok(())
        }
        Err(e) => {
            state = state.finish(false);
            debug!("Request finished: {:?}", state);
            Err(e.into())
        }
    }
}

/// Render the result card: original link plus the copyable short link
fn render_result_card(original: &str, link: &ShortenedLink) {
    println!("{} {}", "✓".bold().green(), original.white());
    println!(
        "  {} {}",
        "→".bold(),
        link.display_url().cyan().underline()
    );
}

#[cfg(feature = "clipboard")]
fn copy_short_url(link: &ShortenedLink, json: bool) {
    // Copy failure never fails the command; the short link is already shown
    match crate::system::clipboard::copy_to_clipboard(&link.display_url()) {
        Ok(()) => {
            if !json {
                println!("  {} Copied to clipboard", "✓".bold().green());
            }
        }
        Err(e) => {
            eprintln!("  {} {}", "⚠".bold().yellow(), e.format_simple());
        }
    }
}

#[cfg(not(feature = "clipboard"))]
fn copy_short_url(_link: &ShortenedLink, _json: bool) {
    eprintln!(
        "  {} --copy requires the \"clipboard\" feature",
        "⚠".bold().yellow()
    );
}

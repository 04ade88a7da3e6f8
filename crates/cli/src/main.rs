//! FontPair - professional font pairings from your terminal.
//!
//! Type a font name and Gemini recommends a complementary headline, body,
//! and accent font with a rationale, a live preview, and ready-to-paste
//! HTML/CSS/Tailwind snippets.

mod app;
mod cli;
mod input;
mod logging;
mod theme;
mod ui;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use fontpair_core::{Config, GeminiClient};

use crate::app::App;
use crate::cli::Cli;
use crate::theme::Theme;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init();

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_default()?,
    };

    // A missing credential must fail here, before the alternate screen
    // starts, so the message stays readable.
    let api_key = config.resolve_api_key()?;

    let model = cli.model.unwrap_or_else(|| config.model.clone());
    let default_font = cli.font.unwrap_or_else(|| config.default_font.clone());
    let timeout = Duration::from_secs(config.timeout_secs);

    let client =
        GeminiClient::new(api_key, &model, timeout).context("building the Gemini client")?;

    let variant = cli.theme.map(Into::into).unwrap_or_else(theme::detect_variant);
    let app = App::new(Arc::new(client), Theme::new(variant));

    tracing::info!(model = %model, font = %default_font, "starting fontpair");
    app::run(app, &default_font)
}

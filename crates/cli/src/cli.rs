//! Command-line interface definitions

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::theme::ThemeVariant;

/// Professional font pairings from your terminal.
///
/// Type a font name and get three complementary recommendations (headline,
/// body, accent) with a rationale and ready-to-paste integration snippets.
#[derive(Parser, Debug)]
#[command(name = "fontpair", version, about)]
pub struct Cli {
    /// Font searched at startup instead of the configured default
    #[arg(short, long)]
    pub font: Option<String>,

    /// Gemini model used for generation
    #[arg(short, long)]
    pub model: Option<String>,

    /// Color theme; detected from the terminal when omitted
    #[arg(long, value_enum)]
    pub theme: Option<ThemeArg>,

    /// Config file path (default: ~/.config/fontpair/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum ThemeArg {
    Dark,
    Light,
}

impl From<ThemeArg> for ThemeVariant {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Dark => ThemeVariant::Dark,
            ThemeArg::Light => ThemeVariant::Light,
        }
    }
}

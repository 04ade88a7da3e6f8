//! fontpair-core - Font pairing recommendations backed by Gemini
//!
//! This crate holds everything about the pairing flow that is not a terminal
//! concern: the typed contract with the model, the request controllers, and
//! the font stylesheet registry. The frontend supplies an input font name;
//! this crate asks Gemini for a complementary headline/body/accent pairing,
//! registers the stylesheet references for every recommended font, and keeps
//! ready-to-paste HTML/CSS/Tailwind snippets in sync with whatever pairing is
//! currently displayed.
//!
//! ## Flow
//!
//! - [`GeminiClient`] implements [`GenerationBackend`]: schema-constrained
//!   `generateContent` calls that deserialize straight into [`PairingResult`]
//!   and [`CodeSnippets`].
//! - [`PairingController`] runs the search state machine. It hands out a
//!   [`SearchTicket`] per accepted submission and discards any resolution
//!   whose sequence number is no longer current, so rapid re-submissions
//!   never display a stale pairing.
//! - [`SnippetController`] regenerates snippets whenever the displayed
//!   `(input font, pairing)` key changes, and owns the export tab selection.
//! - [`FontLibrary`] records one idempotent [`FontLink`] per `(family,
//!   weight)` so the frontend can list every stylesheet the session loaded.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::time::Duration;
//!
//! use fontpair_core::{
//!     FontLibrary, GeminiClient, GenerationBackend, PairingController, SearchPhase,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GeminiClient::new("api-key", "gemini-2.5-flash", Duration::from_secs(120))?;
//!
//!     let library = FontLibrary::new();
//!     let mut search = PairingController::new(library.clone());
//!
//!     if let Some(ticket) = search.begin_search("Lato") {
//!         let outcome = client.request_pairing(&ticket.font_name).await;
//!         search.apply(ticket.seq, outcome);
//!     }
//!
//!     if search.phase() == SearchPhase::Success {
//!         for link in library.links() {
//!             println!("{} -> {}", link.id, link.css_url);
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Remote operations return [`GenerationResult<T>`], an alias for
//! `Result<T, GenerationError>`. The error keeps the failed operation and
//! the technical detail for logs, while [`GenerationError::user_message`]
//! yields the stable sentence the frontend shows:
//!
//! ```rust
//! use fontpair_core::{GenerationError, GenerationOp};
//!
//! let err = GenerationError::parse(GenerationOp::Pairing, "missing field `accent`");
//! assert_eq!(
//!     err.user_message(),
//!     "Failed to generate font pairing. The model may be unable to find a suitable match \
//!      or there was a network issue.",
//! );
//! ```

/// Configuration file loading and API key resolution.
pub mod config;

/// Error types and result aliases.
pub mod error;

/// Gemini client and the generation backend seam.
pub mod gemini;

/// Registry of loaded font stylesheet references.
pub mod loader;

/// Data models shared across the pairing flow.
pub mod models;

/// State machine for the pairing search.
pub mod pairing;

/// State machine for snippet generation and export.
pub mod snippets;

pub use config::Config;
pub use error::{ConfigError, GenerationError, GenerationOp, GenerationResult};
pub use gemini::{DEFAULT_BASE_URL, GeminiClient, GenerationBackend};
pub use loader::{FontLibrary, FontLink};
pub use models::{CodeSnippets, FontRecommendation, FontRole, PairingResult, SnippetTab};
pub use pairing::{INPUT_FONT_WEIGHT, PairingController, SearchPhase, SearchTicket};
pub use snippets::{COPIED_ACK_WINDOW, SnippetController, SnippetTicket, SnippetView};

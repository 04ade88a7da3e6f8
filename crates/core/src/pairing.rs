//! Pairing search controller
//!
//! Owns the end-to-end search state: `Idle → Loading → (Success | Failed)`,
//! re-entrant from every terminal state. The controller never performs the
//! remote call itself; [`begin_search`] hands out a sequence-numbered ticket,
//! the caller runs the call wherever it likes, and [`apply`] accepts the
//! outcome only while that ticket is still the latest. A resolution from a
//! superseded request is discarded, so out-of-order completions can never put
//! stale data on screen.
//!
//! [`begin_search`]: PairingController::begin_search
//! [`apply`]: PairingController::apply

use crate::error::GenerationError;
use crate::loader::FontLibrary;
use crate::models::{FontRole, PairingResult};

/// Weight used to register the user's input font before any pairing exists.
pub const INPUT_FONT_WEIGHT: u16 = 400;

/// Where the controller is in the search lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    /// No search has run yet
    Idle,
    /// A request is in flight
    Loading,
    /// The latest request produced a pairing
    Success,
    /// The latest request failed; an error message is held
    Failed,
}

/// Proof that a search was accepted, carrying what the remote call needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    /// Sequence number the outcome must be tagged with
    pub seq: u64,
    /// Trimmed font name to request a pairing for
    pub font_name: String,
}

/// State machine for the pairing search flow.
pub struct PairingController {
    phase: SearchPhase,
    input_font: String,
    result: Option<PairingResult>,
    error: Option<String>,
    seq: u64,
    library: FontLibrary,
}

impl PairingController {
    /// Create an idle controller writing font registrations into `library`.
    pub fn new(library: FontLibrary) -> Self {
        Self {
            phase: SearchPhase::Idle,
            input_font: String::new(),
            result: None,
            error: None,
            seq: 0,
            library,
        }
    }

    /// Accept a new search, clearing the prior result and error.
    ///
    /// Returns `None` when the trimmed input is empty or a request is already
    /// in flight; both are ignored without touching state. Otherwise the
    /// controller enters `Loading` and the returned ticket identifies the one
    /// outcome [`apply`](Self::apply) will accept.
    pub fn begin_search(&mut self, raw_input: &str) -> Option<SearchTicket> {
        let font_name = raw_input.trim();
        if font_name.is_empty() || self.phase == SearchPhase::Loading {
            return None;
        }

        self.result = None;
        self.error = None;
        self.input_font = font_name.to_string();
        self.seq += 1;
        self.phase = SearchPhase::Loading;

        tracing::info!(font = font_name, seq = self.seq, "pairing search started");
        Some(SearchTicket {
            seq: self.seq,
            font_name: font_name.to_string(),
        })
    }

    /// Feed back the outcome of the request identified by `seq`.
    ///
    /// An outcome whose sequence number is not the current one, or that
    /// arrives when the controller is not `Loading`, is discarded. On success
    /// the input font (weight 400) and the three role fonts are registered
    /// with the font library; on failure only the user-facing message is
    /// kept, never a partial result.
    pub fn apply(&mut self, seq: u64, outcome: Result<PairingResult, GenerationError>) {
        if seq != self.seq || self.phase != SearchPhase::Loading {
            tracing::debug!(seq, current = self.seq, "discarding stale pairing outcome");
            return;
        }

        match outcome {
            Ok(result) => {
                self.library.ensure_loaded(&self.input_font, INPUT_FONT_WEIGHT);
                for role in FontRole::ALL {
                    let font = result.role(role);
                    self.library.ensure_loaded(&font.name, font.weight);
                }
                self.result = Some(result);
                self.phase = SearchPhase::Success;
            }
            Err(err) => {
                tracing::warn!(error = %err, "pairing request failed");
                self.error = Some(err.user_message().to_string());
                self.phase = SearchPhase::Failed;
            }
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    /// True while a request is in flight.
    pub fn is_loading(&self) -> bool {
        self.phase == SearchPhase::Loading
    }

    /// The font name of the latest accepted search.
    pub fn input_font(&self) -> &str {
        &self.input_font
    }

    /// The current pairing, present only in `Success`.
    pub fn result(&self) -> Option<&PairingResult> {
        self.result.as_ref()
    }

    /// The user-facing failure message, present only in `Failed`.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenerationOp;
    use crate::models::FontRecommendation;

    fn sample_pairing() -> PairingResult {
        PairingResult {
            headline: FontRecommendation::new("Oswald", 700),
            body: FontRecommendation::new("Lato", 400),
            accent: FontRecommendation::new("Playfair Display", 600),
            reasoning: "Contrast between condensed and humanist forms.".to_string(),
        }
    }

    fn backend_error() -> GenerationError {
        GenerationError::backend(GenerationOp::Pairing, 503, "model overloaded")
    }

    #[test]
    fn test_empty_input_is_ignored() {
        let mut controller = PairingController::new(FontLibrary::new());
        assert_eq!(controller.begin_search(""), None);
        assert_eq!(controller.begin_search("   "), None);
        assert_eq!(controller.phase(), SearchPhase::Idle);
    }

    #[test]
    fn test_begin_search_trims_and_enters_loading() {
        let mut controller = PairingController::new(FontLibrary::new());
        let ticket = controller.begin_search("  Lato  ").unwrap();
        assert_eq!(ticket.font_name, "Lato");
        assert_eq!(controller.input_font(), "Lato");
        assert_eq!(controller.phase(), SearchPhase::Loading);
    }

    #[test]
    fn test_submission_while_loading_is_a_no_op() {
        let mut controller = PairingController::new(FontLibrary::new());
        let first = controller.begin_search("Lato").unwrap();
        assert_eq!(controller.begin_search("Inter"), None);
        // The in-flight request is unaffected: same input font, same ticket.
        assert_eq!(controller.input_font(), "Lato");
        controller.apply(first.seq, Ok(sample_pairing()));
        assert_eq!(controller.phase(), SearchPhase::Success);
    }

    #[test]
    fn test_success_registers_input_and_role_fonts() {
        let library = FontLibrary::new();
        let mut controller = PairingController::new(library.clone());
        let ticket = controller.begin_search("Montserrat").unwrap();

        controller.apply(ticket.seq, Ok(sample_pairing()));

        assert_eq!(controller.phase(), SearchPhase::Success);
        assert_eq!(controller.result().unwrap().headline.name, "Oswald");
        assert_eq!(controller.error(), None);

        let ids: Vec<_> = library.links().into_iter().map(|link| link.id).collect();
        assert_eq!(
            ids,
            [
                "font-Montserrat-400",
                "font-Oswald-700",
                "font-Lato-400",
                "font-Playfair-Display-600",
            ]
        );
    }

    #[test]
    fn test_input_font_shared_with_a_role_is_registered_once() {
        let library = FontLibrary::new();
        let mut controller = PairingController::new(library.clone());
        let ticket = controller.begin_search("Lato").unwrap();

        controller.apply(ticket.seq, Ok(sample_pairing()));

        // Input Lato at 400 and the body role are the same pair; the
        // registry keeps one entry for it.
        let ids: Vec<_> = library.links().into_iter().map(|link| link.id).collect();
        assert_eq!(ids, ["font-Lato-400", "font-Oswald-700", "font-Playfair-Display-600"]);
    }

    #[test]
    fn test_failure_stores_message_and_loads_nothing() {
        let library = FontLibrary::new();
        let mut controller = PairingController::new(library.clone());
        let ticket = controller.begin_search("Lato").unwrap();

        controller.apply(ticket.seq, Err(backend_error()));

        assert_eq!(controller.phase(), SearchPhase::Failed);
        assert!(controller.error().is_some_and(|msg| !msg.is_empty()));
        assert_eq!(controller.result(), None);
        assert!(library.is_empty());
    }

    #[test]
    fn test_stale_outcome_is_discarded() {
        let mut controller = PairingController::new(FontLibrary::new());
        let first = controller.begin_search("Lato").unwrap();
        controller.apply(first.seq, Err(backend_error()));

        let second = controller.begin_search("Inter").unwrap();
        assert!(second.seq > first.seq);

        // A late duplicate of the first request must not be applied.
        controller.apply(first.seq, Ok(sample_pairing()));
        assert_eq!(controller.phase(), SearchPhase::Loading);
        assert_eq!(controller.result(), None);

        controller.apply(second.seq, Ok(sample_pairing()));
        assert_eq!(controller.phase(), SearchPhase::Success);
    }

    #[test]
    fn test_duplicate_outcome_is_discarded() {
        let mut controller = PairingController::new(FontLibrary::new());
        let ticket = controller.begin_search("Lato").unwrap();
        controller.apply(ticket.seq, Ok(sample_pairing()));
        assert_eq!(controller.phase(), SearchPhase::Success);

        // Same seq again, but the controller already left Loading.
        controller.apply(ticket.seq, Err(backend_error()));
        assert_eq!(controller.phase(), SearchPhase::Success);
        assert_eq!(controller.error(), None);
    }

    #[test]
    fn test_new_search_clears_prior_result_and_error() {
        let mut controller = PairingController::new(FontLibrary::new());
        let first = controller.begin_search("Lato").unwrap();
        controller.apply(first.seq, Ok(sample_pairing()));
        assert!(controller.result().is_some());

        controller.begin_search("Inter").unwrap();
        assert_eq!(controller.result(), None);
        assert_eq!(controller.error(), None);
        assert_eq!(controller.input_font(), "Inter");
    }

    #[test]
    fn test_every_resolution_reaches_a_terminal_phase() {
        let mut controller = PairingController::new(FontLibrary::new());

        let ticket = controller.begin_search("Lato").unwrap();
        controller.apply(ticket.seq, Ok(sample_pairing()));
        assert!(matches!(controller.phase(), SearchPhase::Success | SearchPhase::Failed));

        let ticket = controller.begin_search("Inter").unwrap();
        controller.apply(ticket.seq, Err(backend_error()));
        assert!(matches!(controller.phase(), SearchPhase::Success | SearchPhase::Failed));
    }
}

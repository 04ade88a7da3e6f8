//! Snippet request controller
//!
//! Dependent on the pairing flow: the code snippets are keyed by the pair
//! `(input font, PairingResult)` and regenerated whenever that key changes.
//! [`sync`] is called with whatever pairing is currently on screen; it
//! compares against the held key and only issues a new request on a change,
//! so identical repeated inputs never trigger duplicate calls. Stale
//! resolutions are dropped with the same sequence-number rule as the pairing
//! controller. The controller also owns the export-tab selection and the
//! copy acknowledgment.
//!
//! [`sync`]: SnippetController::sync

use std::time::{Duration, Instant};

use crate::error::GenerationError;
use crate::models::{CodeSnippets, PairingResult, SnippetTab};

/// How long the "copied" acknowledgment stays visible after a copy.
pub const COPIED_ACK_WINDOW: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SnippetPhase {
    Idle,
    Loading,
    Success,
    Failed,
}

/// What the export panel should render. Exactly one of these holds at any
/// time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnippetView<'a> {
    /// No pairing exists yet, so there is nothing to generate
    Idle,
    /// A snippet request is in flight
    Loading,
    /// The latest request failed with this user-facing message
    Error(&'a str),
    /// Snippets for the current key
    Ready(&'a CodeSnippets),
}

/// Proof that a snippet request was accepted, carrying what the remote call
/// needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetTicket {
    /// Sequence number the outcome must be tagged with
    pub seq: u64,
    /// Input font the snippets are generated for
    pub font_name: String,
    /// The pairing the snippets must integrate
    pub pairing: PairingResult,
}

/// State machine for the snippet generation flow.
pub struct SnippetController {
    phase: SnippetPhase,
    key: Option<(String, PairingResult)>,
    snippets: Option<CodeSnippets>,
    error: Option<String>,
    seq: u64,
    active_tab: SnippetTab,
    copied_at: Option<Instant>,
}

impl SnippetController {
    pub fn new() -> Self {
        Self {
            phase: SnippetPhase::Idle,
            key: None,
            snippets: None,
            error: None,
            seq: 0,
            active_tab: SnippetTab::default(),
            copied_at: None,
        }
    }

    /// Offer the currently displayed pairing to the controller.
    ///
    /// A key identical to the held one is a no-op. A changed key (including
    /// the first pairing after [`clear`](Self::clear)) discards prior
    /// snippets and error, enters `Loading`, and returns the ticket for a
    /// fresh request.
    pub fn sync(&mut self, font_name: &str, pairing: &PairingResult) -> Option<SnippetTicket> {
        if self.key.as_ref().is_some_and(|(font, held)| font == font_name && held == pairing) {
            return None;
        }

        self.key = Some((font_name.to_string(), pairing.clone()));
        self.snippets = None;
        self.error = None;
        self.seq += 1;
        self.phase = SnippetPhase::Loading;

        tracing::info!(font = font_name, seq = self.seq, "snippet generation started");
        Some(SnippetTicket {
            seq: self.seq,
            font_name: font_name.to_string(),
            pairing: pairing.clone(),
        })
    }

    /// Drop the key and all held state, and invalidate in-flight requests.
    ///
    /// Called when a new pairing search begins, so a late snippet resolution
    /// for the outgoing pairing can never attach to the incoming one.
    pub fn clear(&mut self) {
        self.key = None;
        self.snippets = None;
        self.error = None;
        self.seq += 1;
        self.phase = SnippetPhase::Idle;
    }

    /// Feed back the outcome of the request identified by `seq`. Stale and
    /// duplicate outcomes are discarded.
    pub fn apply(&mut self, seq: u64, outcome: Result<CodeSnippets, GenerationError>) {
        if seq != self.seq || self.phase != SnippetPhase::Loading {
            tracing::debug!(seq, current = self.seq, "discarding stale snippet outcome");
            return;
        }

        match outcome {
            Ok(snippets) => {
                self.snippets = Some(snippets);
                self.phase = SnippetPhase::Success;
            }
            Err(err) => {
                tracing::warn!(error = %err, "snippet request failed");
                self.error = Some(err.user_message().to_string());
                self.phase = SnippetPhase::Failed;
            }
        }
    }

    /// The mutually exclusive view the export panel renders.
    pub fn view(&self) -> SnippetView<'_> {
        match self.phase {
            SnippetPhase::Idle => SnippetView::Idle,
            SnippetPhase::Loading => SnippetView::Loading,
            SnippetPhase::Failed => SnippetView::Error(self.error.as_deref().unwrap_or_default()),
            SnippetPhase::Success => match &self.snippets {
                Some(snippets) => SnippetView::Ready(snippets),
                None => SnippetView::Idle,
            },
        }
    }

    /// True while a request is in flight.
    pub fn is_loading(&self) -> bool {
        self.phase == SnippetPhase::Loading
    }

    /// The tab whose text a copy action would take.
    pub fn active_tab(&self) -> SnippetTab {
        self.active_tab
    }

    pub fn select_tab(&mut self, tab: SnippetTab) {
        self.active_tab = tab;
    }

    pub fn next_tab(&mut self) {
        self.active_tab = self.active_tab.next();
    }

    pub fn prev_tab(&mut self) {
        self.active_tab = self.active_tab.prev();
    }

    /// Text of the active tab, present only when snippets are held.
    pub fn copy_payload(&self) -> Option<&str> {
        self.snippets.as_ref().map(|snippets| snippets.tab(self.active_tab))
    }

    /// Record a copy. Every call restarts the acknowledgment window, so
    /// rapid successive copies extend it instead of racing.
    pub fn mark_copied(&mut self) {
        self.copied_at = Some(Instant::now());
    }

    /// True while the last copy is younger than [`COPIED_ACK_WINDOW`].
    pub fn copied_ack(&self) -> bool {
        self.ack_visible_at(Instant::now())
    }

    fn ack_visible_at(&self, now: Instant) -> bool {
        self.copied_at
            .is_some_and(|at| now.saturating_duration_since(at) < COPIED_ACK_WINDOW)
    }
}

impl Default for SnippetController {
    fn default() -> Self {
        Self::new()
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

    fn sample_snippets() -> CodeSnippets {
        CodeSnippets {
            html: "<link rel=\"preconnect\" href=\"https://fonts.googleapis.com\">".to_string(),
            css: ":root { --font-headline: 'Oswald', sans-serif; }".to_string(),
            tailwind: "module.exports = { theme: { extend: {} } }".to_string(),
        }
    }

    fn snippet_error() -> GenerationError {
        GenerationError::parse(GenerationOp::Snippets, "missing field `tailwind`")
    }

    #[test]
    fn test_first_sync_issues_a_request() {
        let mut controller = SnippetController::new();
        let pairing = sample_pairing();

        let ticket = controller.sync("Lato", &pairing).unwrap();
        assert_eq!(ticket.font_name, "Lato");
        assert_eq!(ticket.pairing, pairing);
        assert_eq!(controller.view(), SnippetView::Loading);
    }

    #[test]
    fn test_identical_key_is_a_no_op() {
        let mut controller = SnippetController::new();
        let pairing = sample_pairing();

        let ticket = controller.sync("Lato", &pairing).unwrap();
        assert_eq!(controller.sync("Lato", &pairing), None);

        controller.apply(ticket.seq, Ok(sample_snippets()));
        // Still a no-op once snippets are held.
        assert_eq!(controller.sync("Lato", &pairing), None);
        assert!(matches!(controller.view(), SnippetView::Ready(_)));
    }

    #[test]
    fn test_changed_font_reissues() {
        let mut controller = SnippetController::new();
        let pairing = sample_pairing();

        let first = controller.sync("Lato", &pairing).unwrap();
        controller.apply(first.seq, Ok(sample_snippets()));

        let second = controller.sync("Inter", &pairing).unwrap();
        assert!(second.seq > first.seq);
        assert_eq!(controller.view(), SnippetView::Loading);
    }

    #[test]
    fn test_changed_pairing_reissues() {
        let mut controller = SnippetController::new();
        let pairing = sample_pairing();

        let first = controller.sync("Lato", &pairing).unwrap();
        controller.apply(first.seq, Ok(sample_snippets()));

        let mut changed = sample_pairing();
        changed.headline = FontRecommendation::new("Bebas Neue", 400);
        let second = controller.sync("Lato", &changed).unwrap();
        assert!(second.seq > first.seq);
    }

    #[test]
    fn test_failure_shows_error_view() {
        let mut controller = SnippetController::new();
        let ticket = controller.sync("Lato", &sample_pairing()).unwrap();

        controller.apply(ticket.seq, Err(snippet_error()));

        match controller.view() {
            SnippetView::Error(message) => {
                assert_eq!(message, "Failed to generate code snippets.");
            }
            other => panic!("expected error view, got {:?}", other),
        }
        assert_eq!(controller.copy_payload(), None);
    }

    #[test]
    fn test_stale_outcome_is_discarded() {
        let mut controller = SnippetController::new();
        let pairing = sample_pairing();

        let first = controller.sync("Lato", &pairing).unwrap();
        let mut changed = sample_pairing();
        changed.accent = FontRecommendation::new("Cormorant", 500);
        let second = controller.sync("Lato", &changed).unwrap();

        // The superseded request resolves late; nothing must change.
        controller.apply(first.seq, Ok(sample_snippets()));
        assert_eq!(controller.view(), SnippetView::Loading);

        controller.apply(second.seq, Ok(sample_snippets()));
        assert!(matches!(controller.view(), SnippetView::Ready(_)));
    }

    #[test]
    fn test_clear_invalidates_in_flight_requests() {
        let mut controller = SnippetController::new();
        let ticket = controller.sync("Lato", &sample_pairing()).unwrap();

        controller.clear();
        controller.apply(ticket.seq, Ok(sample_snippets()));

        assert_eq!(controller.view(), SnippetView::Idle);
        assert_eq!(controller.copy_payload(), None);
    }

    #[test]
    fn test_sync_after_clear_reissues_for_the_same_key() {
        let mut controller = SnippetController::new();
        let pairing = sample_pairing();

        let first = controller.sync("Lato", &pairing).unwrap();
        controller.apply(first.seq, Err(snippet_error()));

        // A new search for the same font clears the key, so the retry after
        // the pairing resolves again issues a fresh request.
        controller.clear();
        let second = controller.sync("Lato", &pairing).unwrap();
        assert!(second.seq > first.seq);
        assert_eq!(controller.view(), SnippetView::Loading);
    }

    #[test]
    fn test_copy_payload_follows_the_active_tab() {
        let mut controller = SnippetController::new();
        let ticket = controller.sync("Lato", &sample_pairing()).unwrap();
        let snippets = sample_snippets();
        controller.apply(ticket.seq, Ok(snippets.clone()));

        // CSS is the default tab.
        assert_eq!(controller.active_tab(), SnippetTab::Css);
        assert_eq!(controller.copy_payload(), Some(snippets.css.as_str()));

        controller.next_tab();
        assert_eq!(controller.active_tab(), SnippetTab::Tailwind);
        assert_eq!(controller.copy_payload(), Some(snippets.tailwind.as_str()));

        controller.select_tab(SnippetTab::Html);
        assert_eq!(controller.copy_payload(), Some(snippets.html.as_str()));
    }

    #[test]
    fn test_copied_ack_window_expires() {
        let mut controller = SnippetController::new();
        assert!(!controller.copied_ack());

        let t0 = Instant::now();
        controller.copied_at = Some(t0);
        assert!(controller.ack_visible_at(t0 + Duration::from_secs(1)));
        assert!(!controller.ack_visible_at(t0 + Duration::from_secs(2)));
    }

    #[test]
    fn test_every_copy_restarts_the_ack_window() {
        let mut controller = SnippetController::new();
        let t0 = Instant::now();

        controller.copied_at = Some(t0);
        // A second copy one second in extends visibility past the first
        // window's end.
        controller.copied_at = Some(t0 + Duration::from_secs(1));
        assert!(controller.ack_visible_at(t0 + Duration::from_millis(2500)));
        assert!(!controller.ack_visible_at(t0 + Duration::from_secs(4)));
    }
}

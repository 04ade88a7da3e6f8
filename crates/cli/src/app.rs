//! Application state and event loop.
//!
//! All controller state lives on the UI thread and is mutated only there.
//! Remote calls run on spawned tasks that send their sequence-tagged outcome
//! back over an mpsc channel; [`App::pump`] drains those channels each frame
//! and feeds the outcomes through the controllers' `apply`, which discards
//! anything stale. The draw loop polls input every 16 ms and restores the
//! terminal even when a frame errors.

use std::io;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use fontpair_core::{
    CodeSnippets, FontLibrary, GenerationBackend, GenerationError, PairingController,
    PairingResult, SearchPhase, SnippetController,
};

use crate::input::{InputAction, InputState};
use crate::theme::Theme;
use crate::ui;

type PairingOutcome = (u64, Result<PairingResult, GenerationError>);
type SnippetOutcome = (u64, Result<CodeSnippets, GenerationError>);

pub struct App {
    pub theme: Theme,
    pub input: InputState,
    pub pairing: PairingController,
    pub snippets: SnippetController,
    pub library: FontLibrary,
    /// Show the loaded-stylesheet listing instead of the result area
    pub show_links: bool,
    /// When the in-flight search started; drives the skeleton pulse
    pub launched_at: Instant,

    backend: Arc<dyn GenerationBackend>,
    pairing_tx: Sender<PairingOutcome>,
    pairing_rx: Receiver<PairingOutcome>,
    snippet_tx: Sender<SnippetOutcome>,
    snippet_rx: Receiver<SnippetOutcome>,
    should_quit: bool,
}

impl App {
    pub fn new(backend: Arc<dyn GenerationBackend>, theme: Theme) -> Self {
        let library = FontLibrary::new();
        let (pairing_tx, pairing_rx) = channel();
        let (snippet_tx, snippet_rx) = channel();

        Self {
            theme,
            input: InputState::new(),
            pairing: PairingController::new(library.clone()),
            snippets: SnippetController::new(),
            library,
            show_links: false,
            launched_at: Instant::now(),
            backend,
            pairing_tx,
            pairing_rx,
            snippet_tx,
            snippet_rx,
            should_quit: false,
        }
    }

    /// Start a pairing search. Ignored while a request is in flight or when
    /// the trimmed input is empty; an accepted search invalidates the
    /// snippets held for the outgoing pairing.
    pub fn submit_search(&mut self, raw_input: &str) {
        let Some(ticket) = self.pairing.begin_search(raw_input) else {
            return;
        };

        self.snippets.clear();
        self.show_links = false;
        self.launched_at = Instant::now();

        let backend = self.backend.clone();
        let tx = self.pairing_tx.clone();
        tokio::spawn(async move {
            let outcome = backend.request_pairing(&ticket.font_name).await;
            let _ = tx.send((ticket.seq, outcome));
        });
    }

    /// Drain resolved outcomes and keep the snippet controller in sync with
    /// the displayed pairing. Called once per frame.
    pub fn pump(&mut self) {
        while let Ok((seq, outcome)) = self.pairing_rx.try_recv() {
            self.pairing.apply(seq, outcome);
        }
        while let Ok((seq, outcome)) = self.snippet_rx.try_recv() {
            self.snippets.apply(seq, outcome);
        }
        self.sync_snippets();
    }

    /// Offer the current pairing to the snippet controller; an unchanged key
    /// is a no-op inside `sync`, so calling this every frame is free.
    fn sync_snippets(&mut self) {
        if self.pairing.phase() != SearchPhase::Success {
            return;
        }
        let Some(result) = self.pairing.result() else {
            return;
        };
        let Some(ticket) = self.snippets.sync(self.pairing.input_font(), result) else {
            return;
        };

        let backend = self.backend.clone();
        let tx = self.snippet_tx.clone();
        tokio::spawn(async move {
            let outcome = backend.request_snippets(&ticket.font_name, &ticket.pairing).await;
            let _ = tx.send((ticket.seq, outcome));
        });
    }

    /// Copy the active tab's snippet text to the system clipboard.
    pub fn copy_active_snippet(&mut self) {
        let Some(payload) = self.snippets.copy_payload() else {
            return;
        };
        if cli_clipboard::set_contents(payload.to_string()).is_ok() {
            self.snippets.mark_copied();
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => self.should_quit = true,
            (KeyCode::Char('t'), KeyModifiers::CONTROL) => self.theme.cycle(),
            (KeyCode::Char('y'), KeyModifiers::CONTROL) => self.copy_active_snippet(),
            (KeyCode::Char('l'), KeyModifiers::CONTROL) => self.show_links = !self.show_links,
            (KeyCode::Tab, _) => self.snippets.next_tab(),
            (KeyCode::BackTab, _) => self.snippets.prev_tab(),
            _ => match self.input.handle_key(key) {
                InputAction::Submit(text) => self.submit_search(&text),
                InputAction::Exit => self.should_quit = true,
                InputAction::None => {}
            },
        }
    }
}

/// Run the terminal UI until the user quits.
///
/// Seeds the search box with `default_font` and fires the startup search
/// before the first frame, as the web original does on mount.
pub fn run(mut app: App, default_font: &str) -> Result<()> {
    app.input.set_content(default_font);
    app.submit_search(default_font);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = (|| -> Result<()> {
        loop {
            app.pump();
            terminal.draw(|frame| ui::render(frame, &mut app))?;

            if event::poll(Duration::from_millis(16))?
                && let Event::Key(key) = event::read()?
            {
                app.handle_key(key);
            }

            if app.should_quit {
                break;
            }
        }
        Ok(())
    })();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

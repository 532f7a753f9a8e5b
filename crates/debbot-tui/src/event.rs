//! Event handling for the debbot TUI.

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use std::time::Duration;
use tokio::sync::mpsc;

/// Events that can occur in the TUI.
#[derive(Debug, Clone)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// A mouse event occurred.
    Mouse(MouseEvent),
    /// A tick event for UI updates.
    Tick,
    /// Terminal was resized.
    Resize(u16, u16),
}

/// Event handler that polls crossterm on a background thread.
///
/// Crossterm input is blocking, so polling lives on its own thread and
/// feeds the async main loop through a channel. A poll timeout with no
/// input becomes a [`Event::Tick`], which drives the waiting spinner.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
    _tx: mpsc::UnboundedSender<Event>,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate.
    pub fn new(tick_rate_ms: u64) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let tx_clone = tx.clone();

        std::thread::spawn(move || poll_loop(&tx_clone, Duration::from_millis(tick_rate_ms)));

        Self { rx, _tx: tx }
    }

    /// Get the next event, blocking until one is available.
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}

fn poll_loop(tx: &mpsc::UnboundedSender<Event>, tick_rate: Duration) {
    loop {
        let event = if event::poll(tick_rate).unwrap_or(false) {
            match event::read() {
                Ok(CrosstermEvent::Key(key)) => Event::Key(key),
                Ok(CrosstermEvent::Mouse(mouse)) => Event::Mouse(mouse),
                Ok(CrosstermEvent::Resize(w, h)) => Event::Resize(w, h),
                Ok(_) | Err(_) => continue,
            }
        } else {
            Event::Tick
        };

        // Receiver dropped: the app is shutting down.
        if tx.send(event).is_err() {
            break;
        }
    }
}

/// Key action that can be performed in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Help,
    ToggleChat,
    Back,
    Up,
    Down,
    None,
}

/// Convert a key event to an action.
///
/// Only used outside the chat input: while the panel is open and idle,
/// printable keys go to the draft instead (see `handle_chat_key`).
pub fn key_to_action(key: KeyEvent) -> Action {
    // Check for Ctrl+C first
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('?') => Action::Help,
        KeyCode::Char('c') => Action::ToggleChat,
        KeyCode::Esc => Action::Back,
        KeyCode::Up | KeyCode::Char('k') => Action::Up,
        KeyCode::Down | KeyCode::Char('j') => Action::Down,
        _ => Action::None,
    }
}

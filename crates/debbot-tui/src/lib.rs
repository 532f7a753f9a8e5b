//! debbot-tui: Terminal UI for the debbot portfolio assistant
//!
//! This crate provides the TUI layer for debbot, including:
//! - Portfolio screen rendered from the profile
//! - The floating chat panel, driven by the engine's conversation panel
//! - Event plumbing and rendering helpers testable without a terminal

mod app;
mod event;
mod screens;
#[cfg(test)]
pub mod test_utils;
mod ui;

use screens::Screen as ScreenTrait;

pub use app::App;
pub use debbot_engine;
pub use event::{Action, Event, EventHandler};

use crossterm::{
    cursor::Show as ShowCursor,
    event::{DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use debbot_engine::{Config, GeminiGenerator, Profile, ResponseGenerator, FALLBACK_REPLY};
use ratatui::{backend::CrosstermBackend, buffer::Buffer, layout::Rect, Terminal};
use std::io::{self, stdout};

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen, ShowCursor);
    }
}

/// Run the TUI application.
///
/// This is the main entry point for the TUI. It sets up the terminal,
/// runs the event loop, and restores the terminal on exit.
pub async fn run_tui(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let profile = Profile::default();
    let generator = GeminiGenerator::new(config, &profile)?;

    // Setup terminal with RAII guard for cleanup
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(profile);
    if !generator.has_api_key() {
        app.notify("no API key (set GEMINI_API_KEY) - replies will be fallbacks");
    }

    // Create event handler (4 Hz tick rate = 250ms)
    let mut events = EventHandler::new(250);

    let result = run_loop(&mut terminal, &mut app, &mut events, &generator).await;

    // Restore cursor before guard drops
    terminal.show_cursor()?;

    result
}

/// Render the whole frame: portfolio, then the chat and help overlays.
pub(crate) fn draw(app: &App, area: Rect, buf: &mut Buffer) {
    screens::portfolio::PortfolioScreen.render(app, area, buf);

    if app.panel.is_open() {
        screens::chat::render_chat_overlay(app, area, buf);
    }

    if app.show_help {
        screens::render_help_overlay(area, buf);
    }
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
    generator: &GeminiGenerator,
) -> Result<(), Box<dyn std::error::Error>> {
    // At most one generation task runs at a time; the panel's waiting
    // flag rejects further submissions until this settles.
    let mut pending_reply: Option<tokio::task::JoinHandle<String>> = None;

    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            draw(app, area, frame.buffer_mut());
        })?;

        // Settle a finished generation before handling new input.
        if pending_reply
            .as_ref()
            .is_some_and(tokio::task::JoinHandle::is_finished)
        {
            let handle = pending_reply.take().expect("handle checked finished");
            match handle.await {
                Ok(reply) => app.panel.complete(reply),
                // A dead task settles with the fallback so the panel
                // cannot stay waiting forever.
                Err(_) => app.panel.complete(FALLBACK_REPLY),
            }
            app.transcript_scroll = 0;
        }

        if let Some(event) = events.next().await {
            match event {
                Event::Key(key) => {
                    if app.panel.is_open() && !app.panel.is_waiting() {
                        match handle_chat_key(app, key) {
                            ChatKey::Handled => {}
                            ChatKey::Submit(prompt) => {
                                let generator = generator.clone();
                                pending_reply = Some(tokio::spawn(async move {
                                    generator.generate(&prompt).await
                                }));
                            }
                            ChatKey::Pass => app.handle_action(event::key_to_action(key)),
                        }
                    } else if app.panel.is_open() {
                        // Waiting: the draft is locked, but the panel can
                        // still be closed or scrolled, and the app quit.
                        let action = event::key_to_action(key);
                        if matches!(
                            action,
                            Action::Quit
                                | Action::Back
                                | Action::ToggleChat
                                | Action::Up
                                | Action::Down
                        ) {
                            app.handle_action(action);
                        }
                    } else {
                        app.handle_action(event::key_to_action(key));
                    }
                }
                Event::Mouse(mouse) => {
                    use crossterm::event::MouseEventKind;
                    match mouse.kind {
                        MouseEventKind::ScrollUp => app.handle_action(Action::Up),
                        MouseEventKind::ScrollDown => app.handle_action(Action::Down),
                        _ => {}
                    }
                }
                Event::Tick => app.tick(),
                Event::Resize(_, _) => {
                    // Terminal will handle resize automatically
                }
            }
        }

        if app.should_quit {
            if let Some(handle) = pending_reply.take() {
                handle.abort();
            }
            break;
        }
    }

    Ok(())
}

/// Outcome of routing a key to the chat input.
enum ChatKey {
    /// The key edited the draft (or was swallowed as a no-op).
    Handled,
    /// A submission was accepted; spawn a generation for this prompt.
    Submit(String),
    /// Not an input key; fall through to action handling.
    Pass,
}

/// Route a key to the chat input while the panel is open and idle.
///
/// Every edit is mirrored into the panel's draft so the engine state
/// stays authoritative; Enter submits through the panel's guards.
fn handle_chat_key(app: &mut App, key: KeyEvent) -> ChatKey {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return ChatKey::Pass; // Ctrl+C etc.
    }

    match key.code {
        KeyCode::Esc => ChatKey::Pass,

        KeyCode::Enter => {
            app.panel.set_draft(app.input_state.content());
            if let Some(prompt) = app.panel.begin_submit() {
                app.input_state.clear();
                ChatKey::Submit(prompt)
            } else {
                // Blank draft: silent no-op, keep whatever was typed.
                ChatKey::Handled
            }
        }

        KeyCode::Char(c) => {
            app.input_state.insert(c);
            app.panel.set_draft(app.input_state.content());
            ChatKey::Handled
        }
        KeyCode::Backspace => {
            app.input_state.backspace();
            app.panel.set_draft(app.input_state.content());
            ChatKey::Handled
        }
        KeyCode::Delete => {
            app.input_state.delete();
            app.panel.set_draft(app.input_state.content());
            ChatKey::Handled
        }
        KeyCode::Left => {
            app.input_state.move_left();
            ChatKey::Handled
        }
        KeyCode::Right => {
            app.input_state.move_right();
            ChatKey::Handled
        }
        KeyCode::Home => {
            app.input_state.move_home();
            ChatKey::Handled
        }
        KeyCode::End => {
            app.input_state.move_end();
            ChatKey::Handled
        }

        // Up/Down scroll the transcript via the action path.
        _ => ChatKey::Pass,
    }
}

/// Get the TUI version.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tui_version() {
        let version = tui_version();
        assert!(!version.is_empty());
        assert!(version.starts_with("0."));
    }
}


/// Rendering tests over the full frame.
#[cfg(test)]
mod rendering_tests {
    use crate::test_utils::{create_test_app, render_app_to_string};

    #[test]
    fn test_portfolio_screen_shows_profile() {
        let app = create_test_app();
        let rendered = render_app_to_string(&app);

        assert!(rendered.contains("Deb Barman"));
        assert!(rendered.contains("Skills"));
        assert!(rendered.contains("Projects"));
        assert!(rendered.contains("Experience"));
        assert!(rendered.contains("Python"));
        // Chat panel closed by default.
        assert!(!rendered.contains("Deb's Assistant"));
    }

    #[test]
    fn test_open_chat_shows_welcome_and_placeholder() {
        let mut app = create_test_app();
        app.panel.toggle_open();
        let rendered = render_app_to_string(&app);

        assert!(rendered.contains("Deb's Assistant"));
        assert!(rendered.contains("Online"));
        // The welcome message wraps inside the panel; check its start.
        assert!(rendered.contains("Hello! I'm Deb's AI Assistant."));
        assert!(rendered.contains("Ask about my Python skills..."));
    }

    #[test]
    fn test_waiting_shows_thinking_indicator() {
        let mut app = create_test_app();
        app.panel.toggle_open();
        app.panel.set_draft("hi");
        app.panel.begin_submit().unwrap();

        let rendered = render_app_to_string(&app);
        assert!(rendered.contains("Thinking..."));

        app.panel.complete("All done.");
        let rendered = render_app_to_string(&app);
        assert!(!rendered.contains("Thinking..."));
        assert!(rendered.contains("All done."));
    }

    #[test]
    fn test_help_overlay_renders() {
        let mut app = create_test_app();
        app.show_help = true;
        let rendered = render_app_to_string(&app);
        assert!(rendered.contains("Open/close the chat"));
    }

    #[test]
    fn test_notification_shows_in_status_bar() {
        let mut app = create_test_app();
        app.notify("no API key");
        let rendered = render_app_to_string(&app);
        assert!(rendered.contains("no API key"));
    }
}

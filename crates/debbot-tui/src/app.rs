//! Application state and update logic for the debbot TUI.

use crate::event::Action;
use crate::ui::widgets::TextInputState;
use debbot_engine::{Panel, Profile};

/// Ticks a notification stays visible (4 Hz tick rate).
const NOTIFICATION_TTL: usize = 16;

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Whether the app should quit.
    pub should_quit: bool,

    /// Whether the help overlay is visible.
    pub show_help: bool,

    /// The conversation panel (transcript, draft, open/waiting flags).
    pub panel: Panel,

    /// Text input state backing the draft while the panel is open.
    pub input_state: TextInputState,

    /// Portfolio content rendered on the main screen.
    pub profile: Profile,

    /// Scroll offset for the transcript.
    pub transcript_scroll: usize,

    /// Scroll offset for the portfolio panes.
    pub portfolio_scroll: usize,

    /// Tick counter for the waiting spinner.
    pub tick: usize,

    /// Notification message shown in the status bar, cleared after a while.
    pub notification: Option<String>,

    /// Ticks remaining until the notification is cleared.
    notification_ttl: usize,
}

impl App {
    /// Create a new app instance around the given portfolio.
    pub fn new(profile: Profile) -> Self {
        Self {
            should_quit: false,
            show_help: false,
            panel: Panel::new(),
            input_state: TextInputState::new(),
            profile,
            transcript_scroll: 0,
            portfolio_scroll: 0,
            tick: 0,
            notification: None,
            notification_ttl: 0,
        }
    }

    /// Handle an action.
    pub fn handle_action(&mut self, action: Action) {
        // Global actions
        match action {
            Action::Quit => {
                self.should_quit = true;
                return;
            }
            Action::Help => {
                self.show_help = !self.show_help;
                return;
            }
            _ => {}
        }

        // If help is showing, any key closes it
        if self.show_help {
            self.show_help = false;
            return;
        }

        match action {
            Action::ToggleChat => {
                self.panel.toggle_open();
                if self.panel.is_open() {
                    // Jump back to the newest messages on reopen.
                    self.transcript_scroll = 0;
                }
            }
            Action::Back => {
                // Esc closes the chat; outside the chat it does nothing.
                self.panel.close();
            }
            Action::Up => {
                if self.panel.is_open() {
                    self.transcript_scroll = self.transcript_scroll.saturating_add(1);
                } else {
                    self.portfolio_scroll = self.portfolio_scroll.saturating_sub(1);
                }
            }
            Action::Down => {
                if self.panel.is_open() {
                    self.transcript_scroll = self.transcript_scroll.saturating_sub(1);
                } else {
                    self.portfolio_scroll = self.portfolio_scroll.saturating_add(1);
                }
            }
            Action::Quit | Action::Help | Action::None => {}
        }
    }

    /// Advance the tick counter and expire notifications.
    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        if self.notification_ttl > 0 {
            self.notification_ttl -= 1;
            if self.notification_ttl == 0 {
                self.notification = None;
            }
        }
    }

    /// Show a transient notification in the status bar.
    pub fn notify(&mut self, message: impl Into<String>) {
        self.notification = Some(message.into());
        self.notification_ttl = NOTIFICATION_TTL;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use debbot_engine::WELCOME_MESSAGE;

    fn test_app() -> App {
        App::new(Profile::default())
    }

    #[test]
    fn test_fresh_app_state() {
        let app = test_app();
        assert!(!app.should_quit);
        assert!(!app.panel.is_open());
        assert_eq!(app.panel.transcript().len(), 1);
        assert_eq!(app.panel.transcript().last().unwrap().content, WELCOME_MESSAGE);
    }

    #[test]
    fn test_toggle_chat_open_and_closed() {
        let mut app = test_app();

        app.handle_action(Action::ToggleChat);
        assert!(app.panel.is_open());

        app.handle_action(Action::ToggleChat);
        assert!(!app.panel.is_open());
    }

    #[test]
    fn test_back_closes_chat_and_keeps_state() {
        let mut app = test_app();
        app.handle_action(Action::ToggleChat);
        for ch in "half a question".chars() {
            app.input_state.insert(ch);
        }
        app.panel.set_draft(app.input_state.content());

        app.handle_action(Action::Back);
        assert!(!app.panel.is_open());
        assert_eq!(app.panel.draft(), "half a question");
        assert_eq!(app.input_state.content(), "half a question");

        // Esc with the chat already closed changes nothing.
        app.handle_action(Action::Back);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_quit_action() {
        let mut app = test_app();
        app.handle_action(Action::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_help_closes_before_other_actions() {
        let mut app = test_app();
        app.handle_action(Action::Help);
        assert!(app.show_help);

        // Any non-global action closes help without side effects.
        app.handle_action(Action::ToggleChat);
        assert!(!app.show_help);
        assert!(!app.panel.is_open());
    }

    #[test]
    fn test_notification_expires() {
        let mut app = test_app();
        app.notify("no API key configured");
        assert!(app.notification.is_some());

        for _ in 0..NOTIFICATION_TTL {
            app.tick();
        }
        assert!(app.notification.is_none());
    }

    #[test]
    fn test_scroll_targets_follow_panel_state() {
        let mut app = test_app();

        app.handle_action(Action::Down);
        assert_eq!(app.portfolio_scroll, 1);
        assert_eq!(app.transcript_scroll, 0);

        app.handle_action(Action::ToggleChat);
        app.handle_action(Action::Up);
        assert_eq!(app.transcript_scroll, 1);
        assert_eq!(app.portfolio_scroll, 1);
    }
}

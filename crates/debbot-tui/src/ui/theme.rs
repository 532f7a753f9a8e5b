//! Theme and styling definitions for the debbot TUI.
//!
//! The palette follows the portfolio site: near-black background,
//! indigo accent, cyan highlights.

use ratatui::style::{Color, Modifier, Style};

/// Color palette for the TUI.
pub struct Palette;

impl Palette {
    // Base colors
    pub const BG: Color = Color::Rgb(11, 15, 20);
    pub const FG: Color = Color::Rgb(225, 228, 235);
    pub const DIM: Color = Color::Rgb(130, 138, 155);

    // Accent colors
    pub const ACCENT: Color = Color::Rgb(129, 140, 248);
    pub const HIGHLIGHT: Color = Color::Rgb(103, 232, 249);

    // Status bar colors (high contrast)
    pub const STATUS_BG: Color = Color::Rgb(26, 32, 44);
    pub const STATUS_KEY_BG: Color = Color::Rgb(67, 76, 130);

    // Status colors
    pub const ONLINE: Color = Color::Rgb(74, 222, 128);

    // Border colors
    pub const BORDER: Color = Color::Rgb(55, 62, 80);
    pub const BORDER_ACTIVE: Color = Color::Rgb(129, 140, 248);
}

/// Indicator symbols.
pub struct Symbols;

impl Symbols {
    pub const SPINNER: [&'static str; 4] = ["|", "/", "-", "\\"];
}

/// Common styles used throughout the TUI.
pub struct Styles;

impl Styles {
    /// Default text style.
    pub fn default() -> Style {
        Style::default().fg(Palette::FG).bg(Palette::BG)
    }

    /// Dimmed text for secondary information.
    pub fn dim() -> Style {
        Style::default().fg(Palette::DIM).bg(Palette::BG)
    }

    /// Highlighted text (cyan, like the site's section accents).
    pub fn highlight() -> Style {
        Style::default()
            .fg(Palette::HIGHLIGHT)
            .bg(Palette::BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Active/focused element.
    pub fn active() -> Style {
        Style::default().fg(Palette::ACCENT).bg(Palette::BG)
    }

    /// "Online" status dot next to the assistant name.
    pub fn online() -> Style {
        Style::default().fg(Palette::ONLINE).bg(Palette::BG)
    }

    /// Title style.
    pub fn title() -> Style {
        Style::default()
            .fg(Palette::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// Key hint style (for status bar) - bright on dark for visibility.
    pub fn key_hint() -> Style {
        Style::default()
            .fg(Palette::FG)
            .bg(Palette::STATUS_KEY_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Key hint label style - readable on status bar background.
    pub fn key_label() -> Style {
        Style::default().fg(Palette::FG).bg(Palette::STATUS_BG)
    }

    /// Status bar background style.
    pub fn status_bar() -> Style {
        Style::default().fg(Palette::FG).bg(Palette::STATUS_BG)
    }

    /// Border style for inactive elements.
    pub fn border() -> Style {
        Style::default().fg(Palette::BORDER)
    }

    /// Border style for active/focused elements.
    pub fn border_active() -> Style {
        Style::default().fg(Palette::BORDER_ACTIVE)
    }
}

/// Pick the spinner frame for a tick counter.
pub fn spinner_frame(tick: usize) -> &'static str {
    Symbols::SPINNER[tick % Symbols::SPINNER.len()]
}

//! Screen definitions for the debbot TUI.

pub mod chat;
pub mod portfolio;

use crate::app::App;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

/// Trait for screens that can be rendered.
pub trait Screen {
    /// Render the screen to the buffer.
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer);
}

/// Render the help overlay.
pub fn render_help_overlay(area: Rect, buf: &mut Buffer) {
    use crate::ui::centered_fixed;
    use crate::ui::theme::Styles;
    use ratatui::widgets::{Block, Borders, Clear, Paragraph};

    let help_text = r"
  Keys
    c                 Open/close the chat
    Enter             Send message (in chat)
    Esc               Close the chat
    j/k or Up/Down    Scroll
    q                 Quit
    ?                 Toggle this help

  [Press any key to close]
";

    let width = 46.min(area.width.saturating_sub(4));
    let height = 13.min(area.height.saturating_sub(4));
    let overlay_area = centered_fixed(width, height, area);

    Clear.render(overlay_area, buf);

    let block = Block::default()
        .title(" Help ")
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border_active())
        .style(Styles::default());

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .style(Styles::default());

    paragraph.render(overlay_area, buf);
}

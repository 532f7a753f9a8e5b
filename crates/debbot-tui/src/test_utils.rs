//! Test utilities for debbot-tui rendering and interaction tests.
//!
//! Frames are rendered into a plain [`Buffer`] and flattened to a string
//! so tests can assert on visible text without a terminal.

use crate::app::App;
use debbot_engine::Profile;
use ratatui::{buffer::Buffer, layout::Rect};

/// Default terminal width for tests.
pub const TEST_WIDTH: u16 = 80;

/// Default terminal height for tests.
pub const TEST_HEIGHT: u16 = 24;

/// Create a test app with the default portfolio.
pub fn create_test_app() -> App {
    App::new(Profile::default())
}

/// Convert a buffer to a string representation.
///
/// Produces a simple text rendering of the buffer content, with trailing
/// whitespace trimmed per line.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut result = String::new();

    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            let cell = buffer.cell((x, y)).unwrap();
            result.push_str(cell.symbol());
        }
        while result.ends_with(' ') {
            result.pop();
        }
        result.push('\n');
    }

    if result.ends_with('\n') {
        result.pop();
    }

    result
}

/// Render the full frame (portfolio + overlays) to a string.
pub fn render_app_to_string(app: &App) -> String {
    render_app_to_string_sized(app, TEST_WIDTH, TEST_HEIGHT)
}

/// Render the full frame to a string with custom dimensions.
pub fn render_app_to_string_sized(app: &App, width: u16, height: u16) -> String {
    let area = Rect::new(0, 0, width, height);
    let mut buffer = Buffer::empty(area);
    crate::draw(app, area, &mut buffer);
    buffer_to_string(&buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Style;

    #[test]
    fn test_buffer_to_string() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buffer = Buffer::empty(area);
        buffer.set_string(0, 0, "Hello", Style::default());
        buffer.set_string(0, 1, "World", Style::default());

        let result = buffer_to_string(&buffer);
        assert!(result.contains("Hello"));
        assert!(result.contains("World"));
    }

    #[test]
    fn test_render_small_terminal_does_not_panic() {
        let mut app = create_test_app();
        app.panel.toggle_open();
        let rendered = render_app_to_string_sized(&app, 20, 8);
        assert!(!rendered.is_empty());
    }
}

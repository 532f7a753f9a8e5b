//! Bottom status bar with key hints.

use crate::ui::theme::{Palette, Styles};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

/// A key hint shown in the status bar.
#[derive(Debug, Clone, Copy)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
}

impl KeyHint {
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }
}

/// One-line status bar: title on the left, key hints after it, optional
/// right-aligned text (model name or a notification).
#[derive(Debug, Clone)]
pub struct StatusBar<'a> {
    title: &'a str,
    hints: &'a [KeyHint],
    right_text: Option<&'a str>,
}

impl<'a> StatusBar<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            hints: &[],
            right_text: None,
        }
    }

    #[must_use]
    pub fn hints(mut self, hints: &'a [KeyHint]) -> Self {
        self.hints = hints;
        self
    }

    #[must_use]
    pub fn right(mut self, text: &'a str) -> Self {
        self.right_text = Some(text);
        self
    }
}

impl Widget for StatusBar<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        for x in area.x..area.x.saturating_add(area.width) {
            buf[(x, area.y)].set_char(' ').set_bg(Palette::STATUS_BG);
        }

        let mut spans = vec![
            Span::styled(
                format!(" {} ", self.title),
                Styles::status_bar().patch(Styles::title()),
            ),
            Span::styled("  ", Styles::status_bar()),
        ];
        for hint in self.hints {
            spans.push(Span::styled(format!(" {} ", hint.key), Styles::key_hint()));
            spans.push(Span::styled(format!(" {}  ", hint.label), Styles::key_label()));
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);

        if let Some(text) = self.right_text {
            let text_len = text.len() as u16;
            if text_len < area.width {
                let x = area.x + area.width - text_len - 1;
                buf.set_string(x, area.y, text, Styles::status_bar());
            }
        }
    }
}

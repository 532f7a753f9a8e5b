//! Single-line text input for the chat draft.

use crate::ui::theme::Styles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// State for the draft input: content plus cursor position.
///
/// The cursor is a character index, so edits are safe on multi-byte
/// input.
#[derive(Debug, Clone, Default)]
pub struct TextInputState {
    content: String,
    cursor: usize,
}

impl TextInputState {
    /// Create a new empty input state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the content is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Clear the content.
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map_or(self.content.len(), |(offset, _)| offset)
    }

    /// Insert a character at the cursor position.
    pub fn insert(&mut self, ch: char) {
        let offset = self.byte_offset(self.cursor);
        self.content.insert(offset, ch);
        self.cursor += 1;
    }

    /// Delete the character before the cursor (backspace).
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let offset = self.byte_offset(self.cursor);
            self.content.remove(offset);
        }
    }

    /// Delete the character at the cursor (delete).
    pub fn delete(&mut self) {
        if self.cursor < self.content.chars().count() {
            let offset = self.byte_offset(self.cursor);
            self.content.remove(offset);
        }
    }

    /// Move cursor left.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor right.
    pub fn move_right(&mut self) {
        if self.cursor < self.content.chars().count() {
            self.cursor += 1;
        }
    }

    /// Move cursor to start.
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end.
    pub fn move_end(&mut self) {
        self.cursor = self.content.chars().count();
    }

    /// Create a render widget from this state.
    pub fn widget(&self) -> TextInput<'_> {
        TextInput {
            state: self,
            focused: true,
            placeholder: None,
        }
    }
}

/// Render widget for [`TextInputState`].
#[derive(Debug, Clone)]
pub struct TextInput<'a> {
    state: &'a TextInputState,
    focused: bool,
    placeholder: Option<&'a str>,
}

impl<'a> TextInput<'a> {
    /// Set focus state. An unfocused input hides the cursor.
    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Set placeholder text shown while empty.
    #[must_use]
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }
}

impl Widget for TextInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 || area.width < 1 {
            return;
        }

        let mut spans = vec![Span::styled("> ", Styles::active())];

        if self.state.content.is_empty() {
            if self.focused {
                spans.push(Span::styled("_", Styles::active()));
            }
            if let Some(placeholder) = self.placeholder {
                spans.push(Span::styled(placeholder, Styles::dim()));
            }
        } else {
            for (i, ch) in self.state.content.chars().enumerate() {
                if self.focused && i == self.state.cursor {
                    spans.push(Span::styled("|", Styles::active()));
                }
                spans.push(Span::styled(ch.to_string(), Styles::default()));
            }
            if self.focused && self.state.cursor >= self.state.content.chars().count() {
                spans.push(Span::styled("_", Styles::active()));
            }
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(state: &mut TextInputState, s: &str) {
        for ch in s.chars() {
            state.insert(ch);
        }
    }

    #[test]
    fn test_insert_and_backspace() {
        let mut state = TextInputState::new();
        assert!(state.is_empty());

        state.insert('H');
        state.insert('i');
        assert_eq!(state.content(), "Hi");

        state.backspace();
        assert_eq!(state.content(), "H");

        state.clear();
        assert!(state.is_empty());
    }

    #[test]
    fn test_cursor_movement_and_mid_insert() {
        let mut state = TextInputState::new();
        type_str(&mut state, "Hello");

        state.move_left();
        state.move_left();
        state.insert('X');
        assert_eq!(state.content(), "HelXlo");

        state.move_home();
        state.delete();
        assert_eq!(state.content(), "elXlo");

        state.move_end();
        state.backspace();
        assert_eq!(state.content(), "elXl");
    }

    #[test]
    fn test_multibyte_input() {
        let mut state = TextInputState::new();
        type_str(&mut state, "héllo");
        state.move_home();
        state.move_right();
        state.move_right();
        state.backspace();
        assert_eq!(state.content(), "hllo");
    }
}

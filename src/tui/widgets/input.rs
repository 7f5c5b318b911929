//! Text input field
//!
//! Holds the text and cursor for one form field and turns it into a styled
//! line. The cursor counts characters, not bytes.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::theme::ColorPalette;

/// An editable single-line field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    content: String,
    cursor: usize,
    /// Shown dimmed while the field is empty
    pub placeholder: String,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn value(&self) -> &str {
        &self.content
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.content = value.into();
        self.cursor = self.content.chars().count();
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let at = self.byte_index();
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index();
            self.content.remove(at);
        }
    }

    /// Delete the character under the cursor
    pub fn delete(&mut self) {
        if self.cursor < self.len() {
            let at = self.byte_index();
            self.content.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len());
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Styled line for the field, with a block cursor when focused
    pub fn line(&self, palette: &ColorPalette, focused: bool) -> Line<'static> {
        let text = Style::default().fg(palette.text).bg(palette.surface);

        if self.content.is_empty() && !focused {
            return Line::from(Span::styled(
                format!(" {} ", self.placeholder),
                Style::default().fg(palette.text_secondary).bg(palette.surface),
            ));
        }
        if !focused {
            return Line::from(Span::styled(format!(" {} ", self.content), text));
        }

        let before: String = self.content.chars().take(self.cursor).collect();
        let under = self.content.chars().nth(self.cursor);
        let after: String = self.content.chars().skip(self.cursor + 1).collect();
        let cursor = Style::default()
            .fg(palette.surface)
            .bg(palette.primary)
            .add_modifier(Modifier::BOLD);

        Line::from(vec![
            Span::styled(format!(" {}", before), text),
            Span::styled(under.unwrap_or(' ').to_string(), cursor),
            Span::styled(format!("{} ", after), text),
        ])
    }

    fn len(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self) -> usize {
        self.content
            .char_indices()
            .nth(self.cursor)
            .map(|(index, _)| index)
            .unwrap_or(self.content.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::LIGHT;

    #[test]
    fn test_editing() {
        let mut input = TextInput::new();
        for c in "Cofee".chars() {
            input.insert(c);
        }
        input.move_left();
        input.move_left();
        input.insert('f');
        assert_eq!(input.value(), "Coffee");

        input.move_end();
        input.backspace();
        assert_eq!(input.value(), "Coffe");

        input.move_start();
        input.delete();
        assert_eq!(input.value(), "offe");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_multibyte_characters() {
        let mut input = TextInput::new();
        input.set_value("Café");
        input.backspace();
        input.insert('e');
        assert_eq!(input.value(), "Cafe");
    }

    #[test]
    fn test_cursor_bounds() {
        let mut input = TextInput::new();
        input.move_left();
        input.backspace();
        assert_eq!(input.cursor(), 0);
        input.set_value("ab");
        input.move_right();
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_placeholder_line() {
        let input = TextInput::new().placeholder("0.00");
        let line = input.line(&LIGHT, false);
        assert_eq!(line.spans[0].content, " 0.00 ");
        assert!(input.is_blank());
    }
}

//! Add income / add expense dialog
//!
//! A bottom sheet with a category field and an amount field. The sheet
//! slides in over 300 ms and out over 250 ms; keys are only accepted while
//! it is fully open.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::animation::{Easing, Tween};
use crate::models::{EntryKind, Money};
use crate::theme::{blend, ColorPalette, ON_ACCENT};
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

pub const OPEN_DURATION: Duration = Duration::from_millis(300);
pub const CLOSE_DURATION: Duration = Duration::from_millis(250);

const WIDTH: u16 = 48;
const HEIGHT: u16 = 13;

/// Where the sheet is in its open/close cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalPhase {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

/// Which field has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryField {
    #[default]
    Category,
    Amount,
}

impl EntryField {
    pub fn next(self) -> Self {
        match self {
            Self::Category => Self::Amount,
            Self::Amount => Self::Category,
        }
    }
}

/// A validated entry ready to be applied to the snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub kind: EntryKind,
    pub category: String,
    pub amount: Money,
}

/// Validate raw form input
///
/// The category must have non-whitespace text and the amount must be a
/// finite, non-negative decimal.
pub fn parse_entry(category: &str, amount: &str) -> Option<(String, Money)> {
    let category = category.trim();
    if category.is_empty() {
        return None;
    }
    let amount = Money::parse_non_negative(amount).ok()?;
    Some((category.to_string(), amount))
}

#[derive(Debug, Clone)]
pub struct AddEntryDialog {
    phase: ModalPhase,
    kind: EntryKind,
    pub category: TextInput,
    pub amount: TextInput,
    pub focused_field: EntryField,
    transition: Tween,
    elapsed: Duration,
}

impl Default for AddEntryDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl AddEntryDialog {
    pub fn new() -> Self {
        Self {
            phase: ModalPhase::Closed,
            kind: EntryKind::Income,
            category: TextInput::new(),
            amount: TextInput::new(),
            focused_field: EntryField::Category,
            transition: Tween::new(0.0, 0.0, Duration::ZERO),
            elapsed: Duration::ZERO,
        }
    }

    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Anything but `Closed` puts the sheet on screen
    pub fn is_visible(&self) -> bool {
        self.phase != ModalPhase::Closed
    }

    /// How far the sheet is on screen, 0 hidden to 1 fully shown
    pub fn visibility(&self) -> f64 {
        match self.phase {
            ModalPhase::Closed => 0.0,
            ModalPhase::Open => 1.0,
            ModalPhase::Opening | ModalPhase::Closing => self.transition.value_at(self.elapsed),
        }
    }

    /// Open for `kind` with empty fields; ignored unless `Closed`
    pub fn open(&mut self, kind: EntryKind) -> bool {
        if self.phase != ModalPhase::Closed {
            return false;
        }
        self.kind = kind;
        self.category = TextInput::new().placeholder(kind.placeholder());
        self.amount = TextInput::new().placeholder("0.00");
        self.focused_field = EntryField::Category;
        self.phase = ModalPhase::Opening;
        self.transition = Tween::new(0.0, 1.0, OPEN_DURATION).with_easing(Easing::OutCubic);
        self.elapsed = Duration::ZERO;
        true
    }

    /// Start closing from `Opening` or `Open`
    pub fn request_close(&mut self) -> bool {
        if !matches!(self.phase, ModalPhase::Opening | ModalPhase::Open) {
            return false;
        }
        let from = self.visibility();
        self.phase = ModalPhase::Closing;
        self.transition = Tween::new(from, 0.0, CLOSE_DURATION).with_easing(Easing::InCubic);
        self.elapsed = Duration::ZERO;
        true
    }

    pub fn advance(&mut self, dt: Duration) {
        if !matches!(self.phase, ModalPhase::Opening | ModalPhase::Closing) {
            return;
        }
        self.elapsed += dt;
        if self.transition.is_complete(self.elapsed) {
            self.phase = match self.phase {
                ModalPhase::Opening => ModalPhase::Open,
                _ => ModalPhase::Closed,
            };
        }
    }

    pub fn can_submit(&self) -> bool {
        self.phase == ModalPhase::Open
            && parse_entry(self.category.value(), self.amount.value()).is_some()
    }

    /// The entry `submit` would hand back, without closing
    pub fn pending(&self) -> Option<Submission> {
        if self.phase != ModalPhase::Open {
            return None;
        }
        let (category, amount) = parse_entry(self.category.value(), self.amount.value())?;
        Some(Submission {
            kind: self.kind,
            category,
            amount,
        })
    }

    /// Hand back the entry and start closing, or do nothing if invalid
    pub fn submit(&mut self) -> Option<Submission> {
        let submission = self.pending()?;
        self.request_close();
        Some(submission)
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    fn focused_input(&mut self) -> &mut TextInput {
        match self.focused_field {
            EntryField::Category => &mut self.category,
            EntryField::Amount => &mut self.amount,
        }
    }

    /// Type into the focused field; the amount field takes digits and `.`
    pub fn insert_char(&mut self, c: char) {
        if self.focused_field == EntryField::Amount && !(c.is_ascii_digit() || c == '.') {
            return;
        }
        self.focused_input().insert(c);
    }

    pub fn backspace(&mut self) {
        self.focused_input().backspace();
    }

    pub fn delete(&mut self) {
        self.focused_input().delete();
    }

    pub fn move_left(&mut self) {
        self.focused_input().move_left();
    }

    pub fn move_right(&mut self) {
        self.focused_input().move_right();
    }

    pub fn move_start(&mut self) {
        self.focused_input().move_start();
    }

    pub fn move_end(&mut self) {
        self.focused_input().move_end();
    }
}

/// Handle a key while the sheet is on screen
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let dialog = &mut app.home.dialog;

    // Let the sheet finish moving before accepting input
    if dialog.phase() != ModalPhase::Open {
        return true;
    }

    match key.code {
        KeyCode::Esc => {
            dialog.request_close();
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            dialog.next_field();
        }
        KeyCode::Enter => {
            app.submit_entry();
        }
        KeyCode::Backspace => dialog.backspace(),
        KeyCode::Delete => dialog.delete(),
        KeyCode::Left => dialog.move_left(),
        KeyCode::Right => dialog.move_right(),
        KeyCode::Home => dialog.move_start(),
        KeyCode::End => dialog.move_end(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            dialog.insert_char(c);
        }
        _ => return false,
    }
    true
}

/// Render the sheet, sliding up from the bottom as it opens
pub fn render(frame: &mut Frame, app: &App) {
    let dialog = &app.home.dialog;
    if !dialog.is_visible() {
        return;
    }

    let palette = app.palette();
    let visibility = dialog.visibility();
    let area = sheet_area(frame.area(), visibility);
    if area.height < 3 {
        return;
    }
    let fade = |color| blend(palette.background, color, visibility);

    frame.render_widget(Clear, area);

    let accent = match dialog.kind() {
        EntryKind::Income => palette.primary,
        EntryKind::Expense => palette.secondary,
    };
    let block = Block::default()
        .title(format!(" Add {} ", dialog.kind().label()))
        .title_style(Style::default().fg(fade(palette.text)).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(fade(accent)))
        .style(Style::default().bg(fade(palette.card)));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Category label
            Constraint::Length(1), // Category input
            Constraint::Length(1),
            Constraint::Length(1), // Amount label
            Constraint::Length(1), // Amount input
            Constraint::Length(1),
            Constraint::Length(1), // Submit button
            Constraint::Length(1),
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let label = |text: &str, focused: bool| {
        let style = if focused {
            Style::default().fg(fade(accent)).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(fade(palette.text))
        };
        Paragraph::new(Span::styled(text.to_string(), style))
    };

    let category_focused = dialog.focused_field == EntryField::Category;
    frame.render_widget(label(dialog.kind().field_label(), category_focused), chunks[0]);
    frame.render_widget(
        Paragraph::new(dialog.category.line(palette, category_focused)),
        chunks[1],
    );

    let amount_focused = dialog.focused_field == EntryField::Amount;
    frame.render_widget(label("Amount", amount_focused), chunks[3]);
    frame.render_widget(
        Paragraph::new(dialog.amount.line(palette, amount_focused)),
        chunks[4],
    );

    frame.render_widget(
        Paragraph::new(submit_button(dialog, palette, accent)).alignment(Alignment::Center),
        chunks[6],
    );

    let hints = Line::from(vec![
        Span::styled("Tab", Style::default().fg(fade(accent))),
        Span::styled(" switch  ", Style::default().fg(fade(palette.text_secondary))),
        Span::styled("Enter", Style::default().fg(fade(accent))),
        Span::styled(" add  ", Style::default().fg(fade(palette.text_secondary))),
        Span::styled("Esc", Style::default().fg(fade(accent))),
        Span::styled(" close", Style::default().fg(fade(palette.text_secondary))),
    ]);
    frame.render_widget(Paragraph::new(hints).alignment(Alignment::Center), chunks[8]);
}

/// The submit button, drawn dimmed while the form is incomplete
fn submit_button(dialog: &AddEntryDialog, palette: &ColorPalette, accent: Color) -> Line<'static> {
    let text = format!("  + Add {}  ", dialog.kind().label());
    let style = if dialog.can_submit() {
        Style::default().fg(ON_ACCENT).bg(accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(palette.text_secondary)
            .bg(blend(palette.card, accent, 0.5))
            .add_modifier(Modifier::DIM)
    };
    Line::from(Span::styled(text, style))
}

/// Bottom-anchored area pushed down by the hidden fraction of the sheet
fn sheet_area(screen: Rect, visibility: f64) -> Rect {
    let base = centered_rect_fixed(WIDTH, HEIGHT, screen);
    let bottom = screen.y + screen.height;
    let resting_y = bottom.saturating_sub(base.height + 1).max(screen.y);
    let travel = bottom.saturating_sub(resting_y) as f64;
    let y = resting_y + ((1.0 - visibility.clamp(0.0, 1.0)) * travel).round() as u16;
    let height = base.height.min(bottom.saturating_sub(y));
    Rect::new(base.x, y, base.width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn open_dialog(kind: EntryKind) -> AddEntryDialog {
        let mut dialog = AddEntryDialog::new();
        assert!(dialog.open(kind));
        dialog.advance(OPEN_DURATION);
        assert_eq!(dialog.phase(), ModalPhase::Open);
        dialog
    }

    #[test]
    fn test_phase_cycle() {
        let mut dialog = AddEntryDialog::new();
        assert_eq!(dialog.phase(), ModalPhase::Closed);
        assert!(!dialog.request_close());

        dialog.open(EntryKind::Expense);
        assert_eq!(dialog.phase(), ModalPhase::Opening);
        dialog.advance(ms(150));
        assert_eq!(dialog.phase(), ModalPhase::Opening);
        assert!(dialog.visibility() > 0.0 && dialog.visibility() < 1.0);
        dialog.advance(ms(150));
        assert_eq!(dialog.phase(), ModalPhase::Open);
        assert_eq!(dialog.visibility(), 1.0);

        assert!(dialog.request_close());
        assert_eq!(dialog.phase(), ModalPhase::Closing);
        dialog.advance(ms(249));
        assert_eq!(dialog.phase(), ModalPhase::Closing);
        dialog.advance(ms(1));
        assert_eq!(dialog.phase(), ModalPhase::Closed);
        assert!(!dialog.is_visible());
    }

    #[test]
    fn test_open_only_from_closed() {
        let mut dialog = open_dialog(EntryKind::Income);
        assert!(!dialog.open(EntryKind::Expense));
        assert_eq!(dialog.kind(), EntryKind::Income);
    }

    #[test]
    fn test_close_while_opening() {
        let mut dialog = AddEntryDialog::new();
        dialog.open(EntryKind::Income);
        dialog.advance(ms(100));
        assert!(dialog.request_close());
        dialog.advance(CLOSE_DURATION);
        assert_eq!(dialog.phase(), ModalPhase::Closed);
    }

    #[test]
    fn test_open_resets_fields() {
        let mut dialog = open_dialog(EntryKind::Income);
        dialog.category.set_value("Salary");
        dialog.next_field();
        dialog.request_close();
        dialog.advance(CLOSE_DURATION);

        dialog.open(EntryKind::Expense);
        assert_eq!(dialog.category.value(), "");
        assert_eq!(dialog.focused_field, EntryField::Category);
        assert_eq!(dialog.category.placeholder, "e.g., Food, Transport");
    }

    #[test]
    fn test_valid_submit_closes() {
        let mut dialog = open_dialog(EntryKind::Expense);
        dialog.category.set_value("Coffee");
        dialog.amount.set_value("4.50");
        assert!(dialog.can_submit());

        let submission = dialog.submit().expect("valid entry");
        assert_eq!(submission.kind, EntryKind::Expense);
        assert_eq!(submission.category, "Coffee");
        assert_eq!(submission.amount, Money::from_cents(450));
        assert_eq!(dialog.phase(), ModalPhase::Closing);

        dialog.advance(CLOSE_DURATION);
        assert_eq!(dialog.phase(), ModalPhase::Closed);
    }

    #[test]
    fn test_invalid_submit_is_noop() {
        let mut dialog = open_dialog(EntryKind::Expense);
        dialog.category.set_value("Coffee");
        dialog.amount.set_value("abc");
        assert!(!dialog.can_submit());
        assert_eq!(dialog.submit(), None);
        assert_eq!(dialog.phase(), ModalPhase::Open);

        dialog.category.set_value("   ");
        dialog.amount.set_value("4.50");
        assert_eq!(dialog.submit(), None);

        dialog.category.set_value("Coffee");
        dialog.amount.set_value("-4.50");
        assert_eq!(dialog.submit(), None);
    }

    #[test]
    fn test_cannot_submit_unless_open() {
        let mut dialog = AddEntryDialog::new();
        dialog.open(EntryKind::Income);
        dialog.category.set_value("Salary");
        dialog.amount.set_value("100");
        assert!(!dialog.can_submit());
        assert_eq!(dialog.submit(), None);
    }

    #[test]
    fn test_amount_field_filters_input() {
        let mut dialog = open_dialog(EntryKind::Income);
        dialog.next_field();
        for c in "1a2.5x".chars() {
            dialog.insert_char(c);
        }
        assert_eq!(dialog.amount.value(), "12.5");
    }

    #[test]
    fn test_parse_entry() {
        assert_eq!(
            parse_entry("  Salary ", "12"),
            Some(("Salary".to_string(), Money::from_cents(1200)))
        );
        assert_eq!(parse_entry("", "12"), None);
        assert_eq!(parse_entry("Salary", ""), None);
        assert_eq!(parse_entry("Salary", "1e3"), None);
    }

    #[test]
    fn test_sheet_slides_from_bottom() {
        let screen = Rect::new(0, 0, 80, 40);
        let shown = sheet_area(screen, 1.0);
        let hidden = sheet_area(screen, 0.0);
        assert_eq!(shown.height, HEIGHT);
        assert_eq!(shown.y + shown.height, 39);
        assert!(hidden.y > shown.y);
    }
}

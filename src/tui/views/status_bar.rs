//! Status bar view
//!
//! Shows the current theme, the latest status message, and key hints

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, Tab};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();
    let mut spans = vec![];

    spans.push(Span::styled(
        format!(" {} ", app.theme.effective()),
        Style::default()
            .fg(palette.background)
            .bg(palette.primary)
            .add_modifier(Modifier::BOLD),
    ));
    if app.theme.is_loading() {
        spans.push(Span::styled(" …", Style::default().fg(palette.text_secondary)));
    }

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.clone(),
            Style::default().fg(palette.warning),
        ));
    }

    let hints = if app.has_dialog() {
        " Tab:Field  Enter:Add  Esc:Close "
    } else {
        match app.active_tab {
            Tab::Home => " i:Income  e:Expense  j/k:Scroll  s:Summary  q:Quit ",
            Tab::Settings => " j/k:Move  ←/→:Theme  Enter:Select  q:Quit ",
        }
    };

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.chars().count());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(palette.text_secondary)));

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(palette.surface));
    frame.render_widget(paragraph, area);
}

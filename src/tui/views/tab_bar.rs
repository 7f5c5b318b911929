//! Tab bar

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::{App, Tab};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();

    let mut spans = Vec::new();
    for (index, tab) in Tab::ALL.iter().enumerate() {
        let icon = match tab {
            Tab::Home => "⌂",
            Tab::Settings => "⚙",
        };
        let text = format!(" {} {} {} ", index + 1, icon, tab.title());
        let style = if *tab == app.active_tab {
            Style::default().fg(palette.primary).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text_secondary)
        };
        spans.push(Span::styled(text, style));
        spans.push(Span::raw("   "));
    }

    let bar = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.surface))
                .style(Style::default().bg(palette.card)),
        );
    frame.render_widget(bar, area);
}

//! Settings tab: theme switcher and the grouped setting rows

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::theme::{ThemeMode, ON_ACCENT};
use crate::tui::app::{App, SETTING_ITEMS};

/// Render the settings tab
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(4), // Theme switcher
            Constraint::Min(0),    // Items
        ])
        .split(area);

    let header = Paragraph::new(Span::styled(
        "Settings",
        Style::default().fg(ON_ACCENT).add_modifier(Modifier::BOLD),
    ))
    .block(
        Block::default()
            .style(Style::default().bg(palette.gradient[1]))
            .padding(Padding::new(2, 2, 1, 0)),
    );
    frame.render_widget(header, chunks[0]);

    render_theme_switcher(frame, app, chunks[1]);
    render_items(frame, app, chunks[2]);
}

fn render_theme_switcher(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();
    let selected_row = app.selected_setting().is_none();

    let block = Block::default()
        .title(Span::styled(
            " Theme ",
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if selected_row {
            palette.primary
        } else {
            palette.surface
        }))
        .style(Style::default().bg(palette.card))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let current = app.theme.mode();
    let mut spans = Vec::new();
    for mode in ThemeMode::ALL {
        let icon = match mode {
            ThemeMode::Light => "☀",
            ThemeMode::Dark => "☾",
            ThemeMode::System => "◐",
        };
        let text = format!(" {} {} ", icon, mode.label());
        let style = if mode == current {
            Style::default()
                .fg(ON_ACCENT)
                .bg(palette.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text_secondary).bg(palette.surface)
        };
        spans.push(Span::styled(text, style));
        spans.push(Span::raw(" "));
    }
    let mut lines = vec![Line::from(spans)];
    if inner.height > 1 {
        lines.push(Line::from(Span::styled(
            format!("Showing {} · ←/→ to change", app.theme.effective()),
            Style::default().fg(palette.text_secondary),
        )));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_items(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();
    let selected = app.selected_setting();

    let mut lines = Vec::new();
    let mut section = "";
    for item in SETTING_ITEMS.iter() {
        if item.section != section {
            section = item.section;
            lines.push(Line::raw(""));
            lines.push(Line::from(Span::styled(
                format!("  {}", section),
                Style::default()
                    .fg(palette.text_secondary)
                    .add_modifier(Modifier::BOLD),
            )));
        }

        let is_selected = selected.map(|s| s.title) == Some(item.title);
        let marker = if is_selected { "▶ " } else { "  " };
        let title_style = if is_selected {
            Style::default().fg(palette.primary).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("  {}", marker), Style::default().fg(palette.primary)),
            Span::styled(item.title, title_style),
            Span::styled(
                format!("  {}", item.subtitle),
                Style::default().fg(palette.text_secondary),
            ),
        ]));
    }

    // Keep the selection on screen in short terminals
    let visible = area.height as usize;
    let selected_line = selected
        .and_then(|s| {
            lines
                .iter()
                .position(|line| line.spans.iter().any(|span| span.content == s.title))
        })
        .unwrap_or(0);
    let scroll = selected_line.saturating_sub(visible.saturating_sub(1)) as u16;

    frame.render_widget(
        Paragraph::new(lines)
            .scroll((scroll, 0))
            .style(Style::default().bg(palette.background)),
        area,
    );
}

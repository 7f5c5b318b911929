//! Home tab
//!
//! Balance card, today figure, overview chart, spending list and the add
//! buttons. Every region reads the current animation frame, so drawing the
//! same state twice gives the same picture.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::animation::balance::{ITEM_SLIDE_DISTANCE, SLIDE_DISTANCE};
use crate::animation::BalanceFrame;
use crate::models::ActivityAccent;
use crate::theme::{blend, ColorPalette, ON_ACCENT};
use crate::tui::app::{App, HomeButton};
use crate::tui::layout::{offset_down, HomeLayout};
use crate::tui::widgets::PieChart;

/// Rows the card travels over its full slide distance
const CARD_TRAVEL_ROWS: f64 = 4.0;
/// Columns a spending row travels over its full slide distance
const ITEM_TRAVEL_COLUMNS: f64 = 6.0;

/// Render the home tab
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();
    let balance = app.home.animation.frame();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );

    let layout = HomeLayout::new(area);
    let rows = (balance.slide_offset / SLIDE_DISTANCE * CARD_TRAVEL_ROWS).round().max(0.0) as u16;

    render_header(frame, app, &balance, offset_down(layout.header, rows, area));
    render_today(frame, app, &balance, offset_down(layout.today, rows, area));
    render_chart(frame, app, &balance, offset_down(layout.chart, rows, area));
    render_spending(frame, app, offset_down(layout.spending, rows, area));
    render_actions(frame, app, palette, layout.actions);
}

/// Colour of row `row` out of `height` along the three-stop gradient
fn gradient_row(stops: &[Color; 3], row: u16, height: u16) -> Color {
    if height <= 1 {
        return stops[0];
    }
    let t = row as f64 / (height - 1) as f64;
    if t <= 0.5 {
        blend(stops[0], stops[1], t * 2.0)
    } else {
        blend(stops[1], stops[2], (t - 0.5) * 2.0)
    }
}

fn render_header(frame: &mut Frame, app: &App, balance: &BalanceFrame, area: Rect) {
    if area.height == 0 {
        return;
    }
    let palette = app.palette();
    let fade = |color| blend(palette.background, color, balance.opacity);

    for row in 0..area.height {
        let color = fade(gradient_row(&palette.gradient, row, area.height));
        let line = Rect::new(area.x, area.y + row, area.width, 1);
        frame.render_widget(Block::default().style(Style::default().bg(color)), line);
    }

    let inner = Block::default()
        .padding(Padding::new(2, 2, 1, 0))
        .inner(area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1),
            Constraint::Length(1), // Balance
            Constraint::Length(1), // Out of
            Constraint::Length(1), // Progress
            Constraint::Length(1),
            Constraint::Length(1), // Quick stats
            Constraint::Min(0),
        ])
        .split(inner);

    let on_accent = fade(ON_ACCENT);
    frame.render_widget(
        Paragraph::new(Span::styled(
            "Cravox",
            Style::default().fg(on_accent).add_modifier(Modifier::BOLD),
        )),
        chunks[0],
    );

    // The count-up also drives the balance emphasis
    let emphasis = ((balance.balance_scale - 0.8) / 0.2).clamp(0.0, 1.0);
    let mut balance_style = Style::default().fg(blend(palette.gradient[1], on_accent, emphasis));
    if balance.balance_scale >= 0.95 {
        balance_style = balance_style.add_modifier(Modifier::BOLD);
    }
    let symbol = app.currency();
    frame.render_widget(
        Paragraph::new(Span::styled(
            balance.shown_balance.format_currency(symbol),
            balance_style,
        )),
        chunks[2],
    );

    let subtext = format!(
        "Out of {}",
        app.home.snapshot.total_income.format_currency(symbol)
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            subtext,
            Style::default().fg(blend(palette.gradient[2], on_accent, 0.8)),
        )),
        chunks[3],
    );

    frame.render_widget(
        Paragraph::new(progress_line(
            balance.fill_percentage,
            chunks[4].width,
            on_accent,
            fade(palette.gradient[0]),
        )),
        chunks[4],
    );

    let stat = |label: &str, key: char, button: HomeButton| {
        let text = format!(" {} ({}) ", label, key);
        if app.home.press.is_pressed(button) {
            Span::styled(
                text,
                Style::default()
                    .fg(fade(palette.primary))
                    .bg(on_accent)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(
                text,
                Style::default()
                    .fg(on_accent)
                    .bg(fade(palette.gradient[2]))
                    .add_modifier(Modifier::BOLD),
            )
        }
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            stat("↗ Summary", 's', HomeButton::Summary),
            Span::raw("  "),
            stat("▤ Scan Receipt", 'r', HomeButton::ScanReceipt),
        ])),
        chunks[6],
    );
}

/// A bar `width` cells wide with `fill` percent drawn solid
fn progress_line(fill: f64, width: u16, filled: Color, track: Color) -> Line<'static> {
    let width = width as usize;
    let solid = ((fill.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    let solid = solid.min(width);
    Line::from(vec![
        Span::styled("█".repeat(solid), Style::default().fg(filled)),
        Span::styled("█".repeat(width - solid), Style::default().fg(track)),
    ])
}

fn render_today(frame: &mut Frame, app: &App, balance: &BalanceFrame, area: Rect) {
    if area.height == 0 {
        return;
    }
    let palette = app.palette();
    let fade = |color| blend(palette.background, color, balance.opacity);
    let pressed = app.home.press.is_pressed(HomeButton::Today);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(fade(if pressed {
            palette.primary
        } else {
            palette.surface
        })))
        .style(Style::default().bg(fade(palette.surface)))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "Today (t)",
            Style::default().fg(fade(palette.text)).add_modifier(Modifier::BOLD),
        )),
        halves[0],
    );
    let today = app.home.snapshot.today_spending();
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("-{}", today.format_currency(app.currency())),
            Style::default().fg(fade(palette.error)).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Right),
        halves[1],
    );
}

fn render_chart(frame: &mut Frame, app: &App, balance: &BalanceFrame, area: Rect) {
    if area.height == 0 {
        return;
    }
    let palette = app.palette();
    let fade = |color| blend(palette.card, color, balance.chart_opacity);

    let block = Block::default()
        .title(Span::styled(
            " Overview ",
            Style::default()
                .fg(blend(palette.background, palette.text, balance.opacity))
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.surface))
        .style(Style::default().bg(palette.card));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if balance.chart_opacity <= 0.0 || inner.height < 2 {
        return;
    }

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let snapshot = &app.home.snapshot;
    let (income_share, expense_share) = snapshot.chart_shares();
    let chart = PieChart::new(vec![
        (income_share, fade(palette.success)),
        (expense_share, fade(palette.error)),
    ])
    .scale(balance.chart_scale)
    .background(palette.card);
    frame.render_widget(chart, parts[0]);

    let symbol = app.currency();
    let legend = Line::from(vec![
        Span::styled("● ", Style::default().fg(fade(palette.success))),
        Span::styled(
            format!("Income {}  ", snapshot.total_income.format_currency(symbol)),
            Style::default().fg(fade(palette.text_secondary)),
        ),
        Span::styled("● ", Style::default().fg(fade(palette.error))),
        Span::styled(
            format!("Expenses {}", snapshot.total_expenses.format_currency(symbol)),
            Style::default().fg(fade(palette.text_secondary)),
        ),
    ]);
    frame.render_widget(Paragraph::new(legend).alignment(Alignment::Center), parts[1]);
}

fn accent_color(accent: ActivityAccent, palette: &ColorPalette) -> Color {
    match accent {
        ActivityAccent::Entertainment => palette.secondary,
        ActivityAccent::Groceries => palette.success,
        ActivityAccent::Phone => palette.primary,
        ActivityAccent::Other => palette.warning,
        ActivityAccent::Income => palette.success,
        ActivityAccent::Expense => palette.error,
    }
}

fn render_spending(frame: &mut Frame, app: &App, area: Rect) {
    if area.height == 0 {
        return;
    }
    let palette = app.palette();
    let block = Block::default()
        .title(Span::styled(
            " Spending ",
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.surface))
        .style(Style::default().bg(palette.card))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let symbol = app.currency();
    let mut lines = Vec::new();
    for (index, activity) in app.home.activities.iter().enumerate() {
        let item = app.home.animation.item_frame(index);
        let fade = |color| blend(palette.card, color, item.opacity);
        let indent = (item.slide_offset / ITEM_SLIDE_DISTANCE * ITEM_TRAVEL_COLUMNS)
            .round()
            .max(0.0) as usize;

        let amount = activity.amount_label(symbol);
        let label_width = inner.width as usize;
        let used = indent + 2 + activity.label.chars().count() + amount.chars().count();
        let gap = label_width.saturating_sub(used).max(1);

        lines.push(Line::from(vec![
            Span::raw(" ".repeat(indent)),
            Span::styled("● ", Style::default().fg(fade(accent_color(activity.accent, palette)))),
            Span::styled(
                activity.label.clone(),
                Style::default().fg(fade(palette.text)).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" ".repeat(gap)),
            Span::styled(amount, Style::default().fg(fade(palette.text))),
        ]));
        lines.push(Line::from(vec![
            Span::raw(" ".repeat(indent + 2)),
            Span::styled(
                activity.date_label(),
                Style::default().fg(fade(palette.text_secondary)),
            ),
        ]));
    }

    // Two lines per row; never scroll past the last full page
    let max_scroll = lines.len().saturating_sub(inner.height as usize);
    let scroll = (app.home.spending_scroll * 2).min(max_scroll);
    let scroll = u16::try_from(scroll).unwrap_or(u16::MAX);

    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), inner);
}

fn render_actions(frame: &mut Frame, app: &App, palette: &ColorPalette, area: Rect) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let button = |label: &str, color: Color, pressed: bool| {
        let bg = if pressed {
            blend(color, palette.background, 0.35)
        } else {
            color
        };
        Paragraph::new(Line::from(Span::styled(
            label.to_string(),
            Style::default().fg(ON_ACCENT).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(bg))
                .style(Style::default().bg(bg)),
        )
    };

    frame.render_widget(
        button(
            "+ Add Income (i)",
            palette.primary,
            app.home.press.is_pressed(HomeButton::AddIncome),
        ),
        halves[0],
    );
    frame.render_widget(
        button(
            "- Add Expense (e)",
            palette.secondary,
            app.home.press.is_pressed(HomeButton::AddExpense),
        ),
        halves[1],
    );
}

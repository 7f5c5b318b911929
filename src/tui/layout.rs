//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: tab content, tab bar, status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Content of the active tab
    pub content: Rect,
    /// Tab bar below the content
    pub tab_bar: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Content
                Constraint::Length(3), // Tab bar
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            content: chunks[0],
            tab_bar: chunks[1],
            status_bar: chunks[2],
        }
    }
}

/// Layout for the home tab
pub struct HomeLayout {
    /// Gradient card with the balance and progress bar
    pub header: Rect,
    /// "Today" figure
    pub today: Rect,
    /// Overview pie chart
    pub chart: Rect,
    /// Spending list
    pub spending: Rect,
    /// Add Income / Add Expense buttons
    pub actions: Rect,
}

impl HomeLayout {
    pub const HEADER_HEIGHT: u16 = 9;

    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(Self::HEADER_HEIGHT),
                Constraint::Length(3), // Today
                Constraint::Min(6),    // Chart and spending
                Constraint::Length(3), // Actions
            ])
            .split(area);

        let middle = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(vertical[2]);

        Self {
            header: vertical[0],
            today: vertical[1],
            chart: middle[0],
            spending: middle[1],
            actions: vertical[3],
        }
    }
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

/// Move `area` down by `rows`, shrinking it to stay inside `bounds`
pub fn offset_down(area: Rect, rows: u16, bounds: Rect) -> Rect {
    let bottom = bounds.y + bounds.height;
    let y = (area.y + rows).min(bottom);
    Rect::new(area.x, y, area.width, area.height.min(bottom - y))
}

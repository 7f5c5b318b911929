//! Theme status formatting

use ratatui::style::Color;
use tabled::{settings::Style, Table, Tabled};

use crate::theme::{Appearance, ColorPalette, ThemeMode};

#[derive(Tabled)]
struct ColorRow {
    #[tabled(rename = "Role")]
    role: &'static str,
    #[tabled(rename = "Color")]
    color: String,
}

/// Format the chosen mode with what it resolves to
pub fn format_theme_status(mode: ThemeMode, system: Appearance) -> String {
    let mut output = String::new();
    output.push_str(&format!("Theme:      {}\n", mode));
    output.push_str(&format!("System:     {}\n", system));
    output.push_str(&format!("Effective:  {}\n", mode.resolve(system)));
    output
}

/// Format the colour roles of a palette as a table
pub fn format_palette(palette: &ColorPalette) -> String {
    let mut rows = vec![
        ColorRow { role: "background", color: hex(palette.background) },
        ColorRow { role: "surface", color: hex(palette.surface) },
        ColorRow { role: "card", color: hex(palette.card) },
        ColorRow { role: "primary", color: hex(palette.primary) },
        ColorRow { role: "secondary", color: hex(palette.secondary) },
        ColorRow { role: "text", color: hex(palette.text) },
        ColorRow { role: "text_secondary", color: hex(palette.text_secondary) },
        ColorRow { role: "success", color: hex(palette.success) },
        ColorRow { role: "error", color: hex(palette.error) },
        ColorRow { role: "warning", color: hex(palette.warning) },
    ];
    let stops = ["gradient[0]", "gradient[1]", "gradient[2]"];
    for (role, color) in stops.into_iter().zip(palette.gradient) {
        rows.push(ColorRow { role, color: hex(color) });
    }

    Table::new(rows).with(Style::rounded()).to_string()
}

fn hex(color: Color) -> String {
    match color {
        Color::Rgb(r, g, b) => format!("#{:02X}{:02X}{:02X}", r, g, b),
        other => format!("{:?}", other),
    }
}

//! Light and dark colour palettes

use ratatui::style::Color;

use super::mode::Appearance;

/// Named colour roles used by every view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub background: Color,
    pub surface: Color,
    pub primary: Color,
    pub secondary: Color,
    pub text: Color,
    pub text_secondary: Color,
    pub card: Color,
    /// Header gradient, darkest stop first
    pub gradient: [Color; 3],
    pub success: Color,
    pub error: Color,
    pub warning: Color,
}

pub const LIGHT: ColorPalette = ColorPalette {
    background: Color::Rgb(0xFF, 0xFF, 0xFF),
    surface: Color::Rgb(0xF8, 0xFA, 0xFC),
    primary: Color::Rgb(0x4F, 0x46, 0xE5),
    secondary: Color::Rgb(0x8B, 0x5C, 0xF6),
    text: Color::Rgb(0x1F, 0x29, 0x37),
    text_secondary: Color::Rgb(0x6B, 0x72, 0x80),
    card: Color::Rgb(0xFF, 0xFF, 0xFF),
    gradient: [
        Color::Rgb(0x1E, 0x1B, 0x4B),
        Color::Rgb(0x37, 0x30, 0xA3),
        Color::Rgb(0x63, 0x66, 0xF1),
    ],
    success: Color::Rgb(0x16, 0xA3, 0x4A),
    error: Color::Rgb(0xEF, 0x44, 0x44),
    warning: Color::Rgb(0xF5, 0x9E, 0x0B),
};

pub const DARK: ColorPalette = ColorPalette {
    background: Color::Rgb(0x0F, 0x17, 0x2A),
    surface: Color::Rgb(0x1E, 0x29, 0x3B),
    primary: Color::Rgb(0x63, 0x66, 0xF1),
    secondary: Color::Rgb(0xA8, 0x55, 0xF7),
    text: Color::Rgb(0xF1, 0xF5, 0xF9),
    text_secondary: Color::Rgb(0x94, 0xA3, 0xB8),
    card: Color::Rgb(0x1E, 0x29, 0x3B),
    gradient: [
        Color::Rgb(0x0F, 0x17, 0x2A),
        Color::Rgb(0x1E, 0x29, 0x3B),
        Color::Rgb(0x33, 0x41, 0x55),
    ],
    success: Color::Rgb(0x22, 0xC5, 0x5E),
    error: Color::Rgb(0xF8, 0x71, 0x71),
    warning: Color::Rgb(0xFB, 0xBF, 0x24),
};

/// Foreground used on top of the gradient and on filled buttons
pub const ON_ACCENT: Color = Color::Rgb(0xFF, 0xFF, 0xFF);

impl ColorPalette {
    /// The palette for an appearance
    pub fn for_appearance(appearance: Appearance) -> &'static ColorPalette {
        match appearance {
            Appearance::Light => &LIGHT,
            Appearance::Dark => &DARK,
        }
    }

    /// Every role with its name, gradient stops listed individually
    pub fn roles(&self) -> [(&'static str, Color); 13] {
        [
            ("background", self.background),
            ("surface", self.surface),
            ("primary", self.primary),
            ("secondary", self.secondary),
            ("text", self.text),
            ("textSecondary", self.text_secondary),
            ("card", self.card),
            ("gradient[0]", self.gradient[0]),
            ("gradient[1]", self.gradient[1]),
            ("gradient[2]", self.gradient[2]),
            ("success", self.success),
            ("error", self.error),
            ("warning", self.warning),
        ]
    }
}

/// Mix `to` over `from` by `amount` in [0, 1]
///
/// Terminals have no alpha, so fades are drawn by blending a colour towards
/// the background. Non-RGB colours snap at the halfway point.
pub fn blend(from: Color, to: Color, amount: f64) -> Color {
    let amount = amount.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * amount).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if amount < 0.5 => from,
        _ => to,
    }
}

/// `#RRGGBB` for RGB colours, the debug name otherwise
pub fn hex(color: Color) -> String {
    match color {
        Color::Rgb(r, g, b) => format!("#{:02X}{:02X}{:02X}", r, g, b),
        other => format!("{:?}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_is_by_appearance() {
        assert_eq!(ColorPalette::for_appearance(Appearance::Light), &LIGHT);
        assert_eq!(ColorPalette::for_appearance(Appearance::Dark), &DARK);
    }

    #[test]
    fn test_palettes_define_every_role_as_rgb() {
        for palette in [LIGHT, DARK] {
            for (name, color) in palette.roles() {
                assert!(matches!(color, Color::Rgb(..)), "{} is not RGB", name);
            }
        }
    }

    #[test]
    fn test_blend() {
        let black = Color::Rgb(0, 0, 0);
        let white = Color::Rgb(200, 100, 50);
        assert_eq!(blend(black, white, 0.0), black);
        assert_eq!(blend(black, white, 1.0), white);
        assert_eq!(blend(black, white, 0.5), Color::Rgb(100, 50, 25));
        assert_eq!(blend(Color::Reset, white, 0.2), Color::Reset);
    }

    #[test]
    fn test_hex() {
        assert_eq!(hex(LIGHT.primary), "#4F46E5");
        assert_eq!(hex(DARK.background), "#0F172A");
    }
}

//! Host light/dark signal
//!
//! Terminals have no portable "prefers dark" query. The default source
//! honours an explicit override, then the `COLORFGBG` convention many
//! terminals export, and otherwise reports Light.

use super::mode::Appearance;

/// Environment variable forcing the host appearance (`light` or `dark`)
pub const SYSTEM_THEME_ENV: &str = "CRAVOX_SYSTEM_THEME";

/// Anything that can report the host's current appearance
pub trait SystemThemeSource {
    fn detect(&self) -> Appearance;
}

/// Reads the host appearance from environment variables
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSystemTheme;

impl SystemThemeSource for EnvSystemTheme {
    fn detect(&self) -> Appearance {
        let forced = std::env::var(SYSTEM_THEME_ENV).ok();
        let colorfgbg = std::env::var("COLORFGBG").ok();
        detect_from(forced.as_deref(), colorfgbg.as_deref())
    }
}

/// A source that always reports the same appearance
#[derive(Debug, Clone, Copy)]
pub struct FixedSystemTheme(pub Appearance);

impl SystemThemeSource for FixedSystemTheme {
    fn detect(&self) -> Appearance {
        self.0
    }
}

fn detect_from(forced: Option<&str>, colorfgbg: Option<&str>) -> Appearance {
    if let Some(value) = forced {
        match value.trim().to_lowercase().as_str() {
            "dark" => return Appearance::Dark,
            "light" => return Appearance::Light,
            _ => {}
        }
    }

    colorfgbg
        .and_then(appearance_from_colorfgbg)
        .unwrap_or(Appearance::Light)
}

/// `COLORFGBG` is `fg;bg` or `fg;extra;bg`; the last field is the background
/// palette index. Indices 0-6 and 8 are dark colours in the standard 16.
fn appearance_from_colorfgbg(value: &str) -> Option<Appearance> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    match bg {
        0..=6 | 8 => Some(Appearance::Dark),
        7 | 9..=15 => Some(Appearance::Light),
        _ => None,
    }
}

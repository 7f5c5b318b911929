//! Theme modes and appearances

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CravoxError;

/// The user's theme choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the host's light/dark preference
    #[default]
    System,
}

impl ThemeMode {
    /// All modes in the order the switcher shows them
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System];

    /// The literal stored in the preference store
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Parse a stored literal; anything but the three exact literals is `None`
    pub fn from_literal(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "system" => Some(Self::System),
            _ => None,
        }
    }

    /// Switcher label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::System => "System",
        }
    }

    /// Next option to the right in the switcher, wrapping around
    pub fn next(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::System,
            Self::System => Self::Light,
        }
    }

    /// Next option to the left in the switcher, wrapping around
    pub fn prev(self) -> Self {
        match self {
            Self::Light => Self::System,
            Self::Dark => Self::Light,
            Self::System => Self::Dark,
        }
    }

    /// Resolve against the host appearance
    pub fn resolve(self, system: Appearance) -> Appearance {
        match self {
            Self::Light => Appearance::Light,
            Self::Dark => Appearance::Dark,
            Self::System => system,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = CravoxError;

    /// Lenient parse for command-line input (case and whitespace insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_literal(&s.trim().to_lowercase()).ok_or_else(|| {
            CravoxError::Validation(format!(
                "Unknown theme '{}', expected light, dark or system",
                s.trim()
            ))
        })
    }
}

/// A concrete light or dark rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

impl Appearance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for Appearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literals() {
        for mode in ThemeMode::ALL {
            assert_eq!(ThemeMode::from_literal(mode.as_str()), Some(mode));
        }
        assert_eq!(ThemeMode::from_literal("blue"), None);
        assert_eq!(ThemeMode::from_literal("Dark"), None);
        assert_eq!(ThemeMode::from_literal(""), None);
    }

    #[test]
    fn test_from_str_is_lenient() {
        assert_eq!(" Dark ".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        let err = "blue".parse::<ThemeMode>().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_explicit_modes_ignore_system() {
        for system in [Appearance::Light, Appearance::Dark] {
            assert_eq!(ThemeMode::Light.resolve(system), Appearance::Light);
            assert_eq!(ThemeMode::Dark.resolve(system), Appearance::Dark);
            assert_eq!(ThemeMode::System.resolve(system), system);
        }
    }

    #[test]
    fn test_cycling() {
        assert_eq!(ThemeMode::Light.next(), ThemeMode::Dark);
        assert_eq!(ThemeMode::System.next(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.prev(), ThemeMode::System);
        assert_eq!(ThemeMode::Dark.next().prev(), ThemeMode::Dark);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&ThemeMode::System).unwrap(), "\"system\"");
        assert_eq!(serde_json::to_string(&Appearance::Dark).unwrap(), "\"dark\"");
    }
}

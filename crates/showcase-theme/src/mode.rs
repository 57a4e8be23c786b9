//! Light/dark mode selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;
use crate::preset::{DARK_LUXE, LIGHT_LUXE, Preset};

/// Which of the two base presets a tenant's pages are skinned with.
///
/// Serialized as `"light"` / `"dark"`. Parsing accepts exactly those two
/// strings; anything else is [`ThemeError::InvalidThemeMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub const ALL: [Self; 2] = [Self::Light, Self::Dark];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The base preset for this mode.
    #[must_use]
    pub const fn preset(self) -> &'static Preset {
        match self {
            Self::Light => &LIGHT_LUXE,
            Self::Dark => &DARK_LUXE,
        }
    }

    /// Accent used when a tenant has not picked one.
    #[must_use]
    pub const fn default_accent(self) -> &'static str {
        match self {
            Self::Light => "#8B7355",
            Self::Dark => "#C9A66B",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(ThemeError::InvalidThemeMode(s.to_owned())),
        }
    }
}

impl TryFrom<String> for ThemeMode {
    type Error = ThemeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

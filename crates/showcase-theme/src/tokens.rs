//! Design token names and the ordered token set handed to renderers.
//!
//! Every theme is exactly nineteen tokens. Their order is fixed: the twelve
//! preset tokens, then the two destructive tokens, then the five
//! accent-derived tokens. Serializers (CSS, JSON) emit them in that order.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

// ---------------------------------------------------------------------------
// Token
// ---------------------------------------------------------------------------

/// One named design variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Token {
    // ── Preset (base) ─────────────────────────────────────────
    Background,
    Foreground,
    Card,
    CardForeground,
    Popover,
    PopoverForeground,
    Secondary,
    SecondaryForeground,
    Muted,
    MutedForeground,
    Border,
    Input,

    // ── Destructive ───────────────────────────────────────────
    Destructive,
    DestructiveForeground,

    // ── Accent-derived ────────────────────────────────────────
    Primary,
    PrimaryForeground,
    Accent,
    AccentForeground,
    Ring,
}

impl Token {
    /// All tokens in canonical order.
    pub const ALL: [Self; 19] = [
        Self::Background,
        Self::Foreground,
        Self::Card,
        Self::CardForeground,
        Self::Popover,
        Self::PopoverForeground,
        Self::Secondary,
        Self::SecondaryForeground,
        Self::Muted,
        Self::MutedForeground,
        Self::Border,
        Self::Input,
        Self::Destructive,
        Self::DestructiveForeground,
        Self::Primary,
        Self::PrimaryForeground,
        Self::Accent,
        Self::AccentForeground,
        Self::Ring,
    ];

    /// The camelCase key used in JSON and by callers.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Foreground => "foreground",
            Self::Card => "card",
            Self::CardForeground => "cardForeground",
            Self::Popover => "popover",
            Self::PopoverForeground => "popoverForeground",
            Self::Secondary => "secondary",
            Self::SecondaryForeground => "secondaryForeground",
            Self::Muted => "muted",
            Self::MutedForeground => "mutedForeground",
            Self::Border => "border",
            Self::Input => "input",
            Self::Destructive => "destructive",
            Self::DestructiveForeground => "destructiveForeground",
            Self::Primary => "primary",
            Self::PrimaryForeground => "primaryForeground",
            Self::Accent => "accent",
            Self::AccentForeground => "accentForeground",
            Self::Ring => "ring",
        }
    }

    /// The CSS custom property name, e.g. `--card-foreground`.
    #[must_use]
    pub const fn css_var(self) -> &'static str {
        match self {
            Self::Background => "--background",
            Self::Foreground => "--foreground",
            Self::Card => "--card",
            Self::CardForeground => "--card-foreground",
            Self::Popover => "--popover",
            Self::PopoverForeground => "--popover-foreground",
            Self::Secondary => "--secondary",
            Self::SecondaryForeground => "--secondary-foreground",
            Self::Muted => "--muted",
            Self::MutedForeground => "--muted-foreground",
            Self::Border => "--border",
            Self::Input => "--input",
            Self::Destructive => "--destructive",
            Self::DestructiveForeground => "--destructive-foreground",
            Self::Primary => "--primary",
            Self::PrimaryForeground => "--primary-foreground",
            Self::Accent => "--accent",
            Self::AccentForeground => "--accent-foreground",
            Self::Ring => "--ring",
        }
    }

    /// Look a token up by its camelCase key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.key() == key)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ---------------------------------------------------------------------------
// TokenSet
// ---------------------------------------------------------------------------

/// An ordered token → value mapping.
///
/// Values are HSL strings of the form `"H S% L%"`. Insertion order is kept;
/// inserting a token that is already present replaces its value in place,
/// so a token never appears twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet {
    entries: Vec<(Token, String)>,
}

impl TokenSet {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(Token::ALL.len()),
        }
    }

    /// Set `token` to `value`, keeping its original position if present.
    pub fn insert(&mut self, token: Token, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(t, _)| *t == token) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((token, value)),
        }
    }

    #[must_use]
    pub fn get(&self, token: Token) -> Option<&str> {
        self.entries
            .iter()
            .find(|(t, _)| *t == token)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Token, &str)> {
        self.entries.iter().map(|(t, v)| (*t, v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether all nineteen tokens are present.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        Token::ALL.iter().all(|t| self.get(*t).is_some())
    }

    /// Lightness of `token` as a fraction in `[0, 1]`.
    ///
    /// Reads the third field of the `"H S% L%"` value, so fractional
    /// percentages such as the destructive `"0 84.2% 60.2%"` work too.
    #[must_use]
    pub fn lightness(&self, token: Token) -> Option<f64> {
        let value = self.get(token)?;
        let l = value.split_whitespace().nth(2)?.strip_suffix('%')?;
        l.parse::<f64>().ok().map(|l| l / 100.0)
    }

    /// One `--css-var: value;` line per token, in insertion order.
    #[must_use]
    pub fn to_css_declarations(&self) -> String {
        self.iter()
            .map(|(t, v)| format!("{}: {v};\n", t.css_var()))
            .collect()
    }
}

impl Serialize for TokenSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (token, value) in &self.entries {
            map.serialize_entry(token.key(), value)?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Named base presets — the twelve tokens that never vary per tenant.
//!
//! Tenants sharing a mode share every base value; only the accent-derived
//! tokens tell their sites apart.

use showcase_color::Hsl;

use crate::mode::ThemeMode;
use crate::tokens::Token;

/// A fixed set of base (non-accent, non-destructive) token values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub mode: ThemeMode,

    // ── Surfaces ──────────────────────────────────────────────
    pub background: Hsl,
    pub foreground: Hsl,
    pub card: Hsl,
    pub card_foreground: Hsl,
    pub popover: Hsl,
    pub popover_foreground: Hsl,

    // ── Supporting ────────────────────────────────────────────
    pub secondary: Hsl,
    pub secondary_foreground: Hsl,
    pub muted: Hsl,
    pub muted_foreground: Hsl,
    pub border: Hsl,
    pub input: Hsl,
}

impl Preset {
    /// The twelve base tokens in canonical order.
    #[must_use]
    pub const fn base_tokens(&self) -> [(Token, Hsl); 12] {
        [
            (Token::Background, self.background),
            (Token::Foreground, self.foreground),
            (Token::Card, self.card),
            (Token::CardForeground, self.card_foreground),
            (Token::Popover, self.popover),
            (Token::PopoverForeground, self.popover_foreground),
            (Token::Secondary, self.secondary),
            (Token::SecondaryForeground, self.secondary_foreground),
            (Token::Muted, self.muted),
            (Token::MutedForeground, self.muted_foreground),
            (Token::Border, self.border),
            (Token::Input, self.input),
        ]
    }
}

/// Warm near-black surfaces with ivory text.
pub const DARK_LUXE: Preset = Preset {
    name: "darkLuxe",
    mode: ThemeMode::Dark,
    background: Hsl::new(30, 10, 6),
    foreground: Hsl::new(40, 20, 95),
    card: Hsl::new(30, 10, 9),
    card_foreground: Hsl::new(40, 20, 95),
    popover: Hsl::new(30, 10, 8),
    popover_foreground: Hsl::new(40, 20, 95),
    secondary: Hsl::new(30, 8, 15),
    secondary_foreground: Hsl::new(40, 20, 90),
    muted: Hsl::new(30, 8, 13),
    muted_foreground: Hsl::new(35, 10, 60),
    border: Hsl::new(30, 8, 18),
    input: Hsl::new(30, 8, 18),
};

/// Cream paper with espresso text.
pub const LIGHT_LUXE: Preset = Preset {
    name: "lightLuxe",
    mode: ThemeMode::Light,
    background: Hsl::new(40, 33, 98),
    foreground: Hsl::new(30, 10, 8),
    card: Hsl::new(0, 0, 100),
    card_foreground: Hsl::new(30, 10, 8),
    popover: Hsl::new(0, 0, 100),
    popover_foreground: Hsl::new(30, 10, 8),
    secondary: Hsl::new(40, 20, 94),
    secondary_foreground: Hsl::new(30, 10, 15),
    muted: Hsl::new(40, 15, 93),
    muted_foreground: Hsl::new(30, 8, 40),
    border: Hsl::new(35, 15, 86),
    input: Hsl::new(35, 15, 86),
};

/// Look up a preset by name.
///
/// Returns `None` if the name is not recognized.
#[must_use]
pub fn preset_by_name(name: &str) -> Option<&'static Preset> {
    match name {
        "darkLuxe" => Some(&DARK_LUXE),
        "lightLuxe" => Some(&LIGHT_LUXE),
        _ => None,
    }
}

/// List all preset names.
#[must_use]
pub const fn preset_names() -> &'static [&'static str] {
    &["darkLuxe", "lightLuxe"]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

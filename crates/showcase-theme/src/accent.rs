//! Accent derivation — one tenant color becomes five interactive tokens.
//!
//! The accent's hue is never altered. Saturation is capped so loud brand
//! colors don't overpower the preset surfaces, and lightness is clamped
//! into a band that reads on the mode's background. Everything else is a
//! fixed offset from the clamped primary.
//!
//! ```text
//! "#C9A66B" ──hex_to_hsl──▶ 38 47% 60%
//!                              │ s ≤ 85, l ∈ mode band
//!                              ▼
//!                 primary = ring = 38 47% 60%
//!                 accent         = 38 47% 55%   (dark: −5, light: +5)
//!                 *Foreground    = fixed per mode
//! ```

use showcase_color::{Hsl, hex_to_hsl};

use crate::contrast::{DEFAULT_TARGET_RATIO, ensure_contrast};
use crate::error::ThemeError;
use crate::mode::ThemeMode;
use crate::tokens::Token;

/// Saturation ceiling for the primary color. There is no floor.
pub const SATURATION_CEILING: u8 = 85;

/// The five accent-dependent tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccentTokens {
    pub primary: Hsl,
    pub primary_foreground: Hsl,
    pub accent: Hsl,
    pub accent_foreground: Hsl,
    pub ring: Hsl,
}

impl AccentTokens {
    /// The five tokens in canonical order.
    #[must_use]
    pub const fn tokens(&self) -> [(Token, Hsl); 5] {
        [
            (Token::Primary, self.primary),
            (Token::PrimaryForeground, self.primary_foreground),
            (Token::Accent, self.accent),
            (Token::AccentForeground, self.accent_foreground),
            (Token::Ring, self.ring),
        ]
    }
}

/// Inclusive lightness band the primary color is clamped into.
#[must_use]
pub const fn primary_lightness_band(mode: ThemeMode) -> (u8, u8) {
    match mode {
        ThemeMode::Dark => (55, 75),
        ThemeMode::Light => (35, 55),
    }
}

/// Fixed foreground drawn on top of primary and accent surfaces.
///
/// Dark mode gets a near-black foreground and light mode a near-white one,
/// the reverse of the usual pairing. Changing it changes every shipped theme.
#[must_use]
pub const fn primary_foreground(mode: ThemeMode) -> Hsl {
    match mode {
        ThemeMode::Dark => Hsl::new(0, 0, 10),
        ThemeMode::Light => Hsl::new(0, 0, 98),
    }
}

/// Derive the accent tokens from an already-parsed color.
#[must_use]
pub fn derive_accent(base: Hsl, mode: ThemeMode) -> AccentTokens {
    let (lo, hi) = primary_lightness_band(mode);
    let primary = Hsl::new(base.h, base.s.min(SATURATION_CEILING), base.l.clamp(lo, hi));

    // Not re-clamped: the accent may sit just outside the band.
    let accent = match mode {
        ThemeMode::Dark => primary.with_lightness(primary.l.saturating_sub(5)),
        ThemeMode::Light => primary.with_lightness(primary.l.saturating_add(5)),
    };
    let foreground = primary_foreground(mode);

    tracing::debug!(
        %mode,
        hue = primary.h,
        saturation = primary.s,
        lightness = primary.l,
        input_saturation = base.s,
        input_lightness = base.l,
        "derived accent tokens"
    );

    AccentTokens {
        primary,
        primary_foreground: foreground,
        accent,
        accent_foreground: foreground,
        ring: primary,
    }
}

/// Parse `hex` and derive the accent tokens for `mode`.
///
/// # Errors
///
/// [`ThemeError::InvalidColorFormat`] if `hex` is not six hex digits after an
/// optional `#`. There is no fallback color; callers pick their own default.
pub fn process_accent_color(hex: &str, mode: ThemeMode) -> Result<AccentTokens, ThemeError> {
    let base = hex_to_hsl(hex)?;
    Ok(derive_accent(base, mode))
}

/// Derive the primary color, then push its lightness until it reaches the
/// default 7:1 ratio against the mode's preset background.
///
/// The regular token set does not use this; it is for callers that want an
/// accessibility pass on top of the derived accent.
///
/// # Errors
///
/// [`ThemeError::InvalidColorFormat`] for a malformed `hex`.
pub fn accessible_primary(hex: &str, mode: ThemeMode) -> Result<Hsl, ThemeError> {
    let derived = process_accent_color(hex, mode)?;
    Ok(ensure_contrast(
        derived.primary,
        mode.preset().background,
        DEFAULT_TARGET_RATIO,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contrast::hsl_contrast;
    use pretty_assertions::assert_eq;

    fn derive(hex: &str, mode: ThemeMode) -> AccentTokens {
        process_accent_color(hex, mode).unwrap()
    }

    // ── Defaults ────────────────────────────────────────────────────

    #[test]
    fn dark_default_accent() {
        let t = derive("#C9A66B", ThemeMode::Dark);
        assert_eq!(t.primary, Hsl::new(38, 47, 60));
        assert_eq!(t.accent, Hsl::new(38, 47, 55));
        assert_eq!(t.primary_foreground, Hsl::new(0, 0, 10));
    }

    #[test]
    fn light_default_accent() {
        let t = derive("#8B7355", ThemeMode::Light);
        assert_eq!(t.primary, Hsl::new(33, 24, 44));
        assert_eq!(t.accent, Hsl::new(33, 24, 49));
        assert_eq!(t.primary_foreground, Hsl::new(0, 0, 98));
    }

    // ── Clamping ────────────────────────────────────────────────────

    #[test]
    fn saturation_capped_at_85() {
        let t = derive("#FF0000", ThemeMode::Light);
        assert_eq!(t.primary, Hsl::new(0, 85, 50));
    }

    #[test]
    fn low_saturation_has_no_floor() {
        let t = derive("#808080", ThemeMode::Dark);
        assert_eq!(t.primary.s, 0);
    }

    #[test]
    fn dark_lightness_snaps_up() {
        // Pure red is 50% light; the dark band starts at 55.
        let t = derive("#FF0000", ThemeMode::Dark);
        assert_eq!(t.primary, Hsl::new(0, 85, 55));
        assert_eq!(t.accent, Hsl::new(0, 85, 50));
    }

    #[test]
    fn dark_lightness_snaps_down() {
        let t = derive("#FFFFFF", ThemeMode::Dark);
        assert_eq!(t.primary.l, 75);
    }

    #[test]
    fn light_lightness_snaps_both_ways() {
        assert_eq!(derive("#000000", ThemeMode::Light).primary.l, 35);
        assert_eq!(derive("#FFFFFF", ThemeMode::Light).primary.l, 55);
    }

    #[test]
    fn accent_may_leave_the_band() {
        let dark = derive("#000000", ThemeMode::Dark);
        assert_eq!((dark.primary.l, dark.accent.l), (55, 50));
        let light = derive("#FFFFFF", ThemeMode::Light);
        assert_eq!((light.primary.l, light.accent.l), (55, 60));
    }

    // ── Identities ──────────────────────────────────────────────────

    #[test]
    fn hue_is_preserved() {
        for hex in ["#1E90FF", "#2E8B57", "#8A2BE2", "#FF4500"] {
            let input = hex_to_hsl(hex).unwrap();
            let t = derive(hex, ThemeMode::Dark);
            assert_eq!(t.primary.h, input.h, "{hex}");
            assert_eq!(t.accent.h, input.h, "{hex}");
        }
    }

    #[test]
    fn ring_equals_primary_and_foregrounds_match() {
        for mode in ThemeMode::ALL {
            let t = derive("#3366CC", mode);
            assert_eq!(t.ring, t.primary);
            assert_eq!(t.accent_foreground, t.primary_foreground);
        }
    }

    #[test]
    fn tokens_are_in_canonical_order() {
        let t = derive("#3366CC", ThemeMode::Light);
        let order: Vec<_> = t.tokens().iter().map(|(tok, _)| *tok).collect();
        assert_eq!(order, Token::ALL[14..].to_vec());
    }

    // ── Errors ──────────────────────────────────────────────────────

    #[test]
    fn malformed_hex_is_rejected() {
        let err = process_accent_color("#C9A6", ThemeMode::Dark).unwrap_err();
        assert!(matches!(err, ThemeError::InvalidColorFormat(_)));
    }

    // ── Accessibility wrapper ───────────────────────────────────────

    #[test]
    fn accessible_primary_meets_target_on_dark() {
        let primary = accessible_primary("#C9A66B", ThemeMode::Dark).unwrap();
        let bg = ThemeMode::Dark.preset().background;
        assert!(hsl_contrast(primary, bg) >= DEFAULT_TARGET_RATIO);
        assert_eq!((primary.h, primary.s), (38, 47));
    }

    #[test]
    fn accessible_primary_darkens_on_light() {
        let derived = derive("#8B7355", ThemeMode::Light);
        let primary = accessible_primary("#8B7355", ThemeMode::Light).unwrap();
        assert!(primary.l < derived.primary.l);
        let bg = ThemeMode::Light.preset().background;
        assert!(hsl_contrast(primary, bg) >= DEFAULT_TARGET_RATIO);
    }
}

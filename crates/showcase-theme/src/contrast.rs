//! Contrast ratio evaluation and lightness nudging.
//!
//! The ratio here is computed from HSL *lightness*, not from WCAG relative
//! luminance. It has the WCAG shape, `(lighter + 0.05) / (darker + 0.05)`,
//! but skips sRGB linearization and channel weighting. Callers who need
//! real WCAG compliance must not rely on it; every threshold in this crate
//! is defined against this simplified ratio.

use showcase_color::Hsl;

use crate::tokens::{Token, TokenSet};

/// Target ratio used when the caller has no preference.
pub const DEFAULT_TARGET_RATIO: f64 = 7.0;

/// Upper bound on one-point lightness steps in [`ensure_contrast`].
pub const MAX_ADJUST_STEPS: u32 = 100;

/// Simplified contrast ratio between two lightness fractions in `[0, 1]`.
///
/// Symmetric, and always `>= 1.0`.
#[must_use]
pub fn contrast_ratio(l1: f64, l2: f64) -> f64 {
    let (lighter, darker) = if l1 >= l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

/// [`contrast_ratio`] of two HSL colors' lightness.
#[must_use]
pub fn hsl_contrast(a: Hsl, b: Hsl) -> f64 {
    contrast_ratio(a.lightness_fraction(), b.lightness_fraction())
}

/// Move `color`'s lightness one point at a time until it reaches
/// `target_ratio` against `background`.
///
/// Darkens when the background lightness is above 50, lightens otherwise.
/// Stops after [`MAX_ADJUST_STEPS`] steps and returns whatever it reached;
/// lightness never leaves `[0, 100]`. Hue and saturation are untouched.
#[must_use]
pub fn ensure_contrast(color: Hsl, background: Hsl, target_ratio: f64) -> Hsl {
    let darken = background.l > 50;
    let mut adjusted = color;

    for step in 0..MAX_ADJUST_STEPS {
        if hsl_contrast(adjusted, background) >= target_ratio {
            tracing::trace!(steps = step, lightness = adjusted.l, "contrast target reached");
            return adjusted;
        }
        let l = if darken {
            adjusted.l.saturating_sub(1)
        } else {
            adjusted.l.saturating_add(1)
        };
        adjusted = adjusted.with_lightness(l);
    }

    tracing::trace!(
        lightness = adjusted.l,
        ratio = hsl_contrast(adjusted, background),
        "contrast step budget exhausted"
    );
    adjusted
}

// ---------------------------------------------------------------------------
// Audit
// ---------------------------------------------------------------------------

/// Foreground/background pairs a rendered page actually puts together.
pub const CONTRAST_PAIRS: [(Token, Token); 8] = [
    (Token::Foreground, Token::Background),
    (Token::CardForeground, Token::Card),
    (Token::PopoverForeground, Token::Popover),
    (Token::SecondaryForeground, Token::Secondary),
    (Token::MutedForeground, Token::Muted),
    (Token::PrimaryForeground, Token::Primary),
    (Token::AccentForeground, Token::Accent),
    (Token::DestructiveForeground, Token::Destructive),
];

/// Result of checking one token pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastCheck {
    pub foreground: Token,
    pub background: Token,
    pub ratio: f64,
    pub passes: bool,
}

/// Evaluate every pair in [`CONTRAST_PAIRS`] present in `tokens` against
/// `target_ratio`.
///
/// Informational only: nothing in derivation reads the result. Pairs whose
/// values are missing or unparseable are skipped.
#[must_use]
pub fn contrast_report(tokens: &TokenSet, target_ratio: f64) -> Vec<ContrastCheck> {
    CONTRAST_PAIRS
        .iter()
        .filter_map(|&(foreground, background)| {
            let ratio = contrast_ratio(tokens.lightness(foreground)?, tokens.lightness(background)?);
            Some(ContrastCheck {
                foreground,
                background,
                ratio,
                passes: ratio >= target_ratio,
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

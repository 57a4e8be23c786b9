//! Theme assembly — preset + destructive + accent tokens into one set.

use crate::accent::process_accent_color;
use crate::error::ThemeError;
use crate::mode::ThemeMode;
use crate::preset::Preset;
use crate::tokens::{Token, TokenSet};

/// Destructive surface and foreground values for `mode`.
///
/// These carry fractional percentages and are emitted verbatim.
#[must_use]
pub const fn destructive_tokens(mode: ThemeMode) -> (&'static str, &'static str) {
    match mode {
        ThemeMode::Dark => ("0 62.8% 60.6%", "0 0% 98%"),
        ThemeMode::Light => ("0 84.2% 60.2%", "0 0% 98%"),
    }
}

/// Build the full token set from a preset and an optional accent.
///
/// Order: the preset's twelve tokens, the two destructive tokens, then the
/// five accent tokens. Without an accent the mode's default is used.
///
/// # Errors
///
/// [`ThemeError::InvalidColorFormat`] if `accent_hex` is given but malformed.
pub fn generate_theme(preset: &Preset, accent_hex: Option<&str>) -> Result<TokenSet, ThemeError> {
    let mode = preset.mode;
    let hex = accent_hex.unwrap_or_else(|| mode.default_accent());
    let accent = process_accent_color(hex, mode)?;

    let mut tokens = TokenSet::new();
    for (token, value) in preset.base_tokens() {
        tokens.insert(token, value.to_string());
    }

    let (destructive, destructive_foreground) = destructive_tokens(mode);
    tokens.insert(Token::Destructive, destructive);
    tokens.insert(Token::DestructiveForeground, destructive_foreground);

    for (token, value) in accent.tokens() {
        tokens.insert(token, value.to_string());
    }

    tracing::debug!(
        preset = preset.name,
        accent = hex,
        defaulted = accent_hex.is_none(),
        tokens = tokens.len(),
        "assembled theme"
    );
    Ok(tokens)
}

/// Derive the complete token set for `mode`.
///
/// Pure and deterministic: identical input always yields an identical set.
///
/// # Errors
///
/// [`ThemeError::InvalidColorFormat`] if `accent_hex` is given but malformed.
pub fn derive_theme(mode: ThemeMode, accent_hex: Option<&str>) -> Result<TokenSet, ThemeError> {
    generate_theme(mode.preset(), accent_hex)
}

/// [`derive_theme`] for an unparsed mode string.
///
/// # Errors
///
/// [`ThemeError::InvalidThemeMode`] if `mode` is not `light` or `dark`, then
/// anything [`derive_theme`] returns.
pub fn derive_theme_str(mode: &str, accent_hex: Option<&str>) -> Result<TokenSet, ThemeError> {
    derive_theme(mode.parse()?, accent_hex)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset::{DARK_LUXE, LIGHT_LUXE};
    use pretty_assertions::assert_eq;

    #[test]
    fn dark_theme_has_all_tokens() {
        let t = derive_theme(ThemeMode::Dark, Some("#C9A66B")).unwrap();
        assert_eq!(t.len(), 19);
        assert!(t.is_complete());
    }

    #[test]
    fn light_default_uses_default_accent() {
        let defaulted = derive_theme(ThemeMode::Light, None).unwrap();
        let explicit = derive_theme(ThemeMode::Light, Some("#8B7355")).unwrap();
        assert_eq!(defaulted, explicit);
        assert_eq!(defaulted.len(), 19);
        assert_eq!(defaulted.get(Token::Primary), Some("33 24% 44%"));
    }

    #[test]
    fn dark_default_primary() {
        let t = derive_theme(ThemeMode::Dark, None).unwrap();
        assert_eq!(t.get(Token::Primary), Some("38 47% 60%"));
        assert_eq!(t.get(Token::Ring), Some("38 47% 60%"));
        assert_eq!(t.get(Token::Accent), Some("38 47% 55%"));
        assert_eq!(t.get(Token::PrimaryForeground), Some("0 0% 10%"));
        assert_eq!(t.get(Token::AccentForeground), Some("0 0% 10%"));
    }

    #[test]
    fn order_is_base_destructive_accent() {
        let t = derive_theme(ThemeMode::Dark, None).unwrap();
        let order: Vec<_> = t.iter().map(|(tok, _)| tok).collect();
        assert_eq!(order, Token::ALL.to_vec());
    }

    #[test]
    fn destructive_depends_only_on_mode() {
        let a = derive_theme(ThemeMode::Dark, Some("#112233")).unwrap();
        let b = derive_theme(ThemeMode::Dark, Some("#FFEEDD")).unwrap();
        assert_eq!(a.get(Token::Destructive), Some("0 62.8% 60.6%"));
        assert_eq!(a.get(Token::Destructive), b.get(Token::Destructive));
        let light = derive_theme(ThemeMode::Light, None).unwrap();
        assert_eq!(light.get(Token::Destructive), Some("0 84.2% 60.2%"));
        assert_eq!(light.get(Token::DestructiveForeground), Some("0 0% 98%"));
    }

    #[test]
    fn base_tokens_come_from_preset() {
        let t = generate_theme(&LIGHT_LUXE, Some("#123456")).unwrap();
        assert_eq!(t.get(Token::Background), Some("40 33% 98%"));
        let t = generate_theme(&DARK_LUXE, Some("#123456")).unwrap();
        assert_eq!(t.get(Token::Background), Some("30 10% 6%"));
        assert_eq!(t.get(Token::Input), Some("30 8% 18%"));
    }

    #[test]
    fn tenants_differ_only_in_accent_tokens() {
        let a = derive_theme(ThemeMode::Dark, Some("#1E90FF")).unwrap();
        let b = derive_theme(ThemeMode::Dark, Some("#FF4500")).unwrap();
        for token in &Token::ALL[..14] {
            assert_eq!(a.get(*token), b.get(*token), "{token}");
        }
        assert_ne!(a.get(Token::Primary), b.get(Token::Primary));
    }

    #[test]
    fn serialized_css_order() {
        let css = derive_theme(ThemeMode::Dark, None).unwrap().to_css_declarations();
        let first = css.lines().next().unwrap();
        let last = css.lines().last().unwrap();
        assert_eq!(first, "--background: 30 10% 6%;");
        assert_eq!(last, "--ring: 38 47% 60%;");
        let destructive = css.find("--destructive:").unwrap();
        assert!(css.find("--input:").unwrap() < destructive);
        assert!(destructive < css.find("--primary:").unwrap());
    }

    #[test]
    fn malformed_accent_fails() {
        assert!(matches!(
            derive_theme(ThemeMode::Light, Some("#GGGGGG")),
            Err(ThemeError::InvalidColorFormat(_))
        ));
    }

    #[test]
    fn invalid_mode_string_fails() {
        assert_eq!(
            derive_theme_str("auto", None),
            Err(ThemeError::InvalidThemeMode("auto".into()))
        );
        for mode in ["Dark", "LIGHT", " dark ", "dark\n"] {
            assert_eq!(
                derive_theme_str(mode, None),
                Err(ThemeError::InvalidThemeMode(mode.into()))
            );
        }
        assert!(derive_theme_str("dark", Some("C9A66B")).is_ok());
    }

    #[test]
    fn repeated_calls_are_identical() {
        let a = derive_theme(ThemeMode::Dark, Some("#7FFFD4")).unwrap();
        let b = derive_theme(ThemeMode::Dark, Some("#7FFFD4")).unwrap();
        assert_eq!(a, b);
    }
}

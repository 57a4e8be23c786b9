//! Style sinks — where a derived token set gets applied.
//!
//! Derivation never touches a sink; callers hand the finished
//! [`TokenSet`] to one. Swapping the sink (CSS text, a live document, a
//! test recorder) never changes what gets derived.

use crate::assemble::derive_theme;
use crate::error::ThemeError;
use crate::mode::ThemeMode;
use crate::tokens::TokenSet;

/// Something that can present a token set.
pub trait StyleSink {
    /// Apply `tokens`, replacing whatever the sink applied before.
    ///
    /// # Errors
    ///
    /// Sink-specific; [`CssSink`] never fails.
    fn apply(&mut self, tokens: &TokenSet) -> Result<(), ThemeError>;
}

/// Renders tokens as one CSS rule of custom properties.
///
/// ```
/// use showcase_theme::{CssSink, StyleSink, ThemeMode, derive_theme};
///
/// let mut sink = CssSink::new(":root");
/// sink.apply(&derive_theme(ThemeMode::Dark, None).unwrap()).unwrap();
/// assert!(sink.css().starts_with(":root {\n  --background: "));
/// ```
#[derive(Debug, Clone)]
pub struct CssSink {
    selector: String,
    css: String,
}

impl CssSink {
    #[must_use]
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            css: String::new(),
        }
    }

    #[must_use]
    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// The rule produced by the last [`apply`](StyleSink::apply), or an
    /// empty string.
    #[must_use]
    pub fn css(&self) -> &str {
        &self.css
    }

    #[must_use]
    pub fn into_css(self) -> String {
        self.css
    }
}

impl Default for CssSink {
    fn default() -> Self {
        Self::new(":root")
    }
}

impl StyleSink for CssSink {
    fn apply(&mut self, tokens: &TokenSet) -> Result<(), ThemeError> {
        let body: String = tokens
            .to_css_declarations()
            .lines()
            .map(|line| format!("  {line}\n"))
            .collect();
        self.css = format!("{} {{\n{body}}}\n", self.selector);
        Ok(())
    }
}

/// Derive the theme for `mode` and apply it to `sink`.
///
/// # Errors
///
/// Anything [`derive_theme`] or the sink returns. On a derivation error the
/// sink is left untouched.
pub fn apply_theme<S: StyleSink + ?Sized>(
    sink: &mut S,
    mode: ThemeMode,
    accent_hex: Option<&str>,
) -> Result<(), ThemeError> {
    let tokens = derive_theme(mode, accent_hex)?;
    sink.apply(&tokens)
}

//! Error type shared by every fallible theme operation.

use showcase_color::InvalidColorFormat;

/// Errors returned by theme derivation and its collaborators.
///
/// Derivation is pure, so every error is local to the call that produced it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    /// The accent is not six hex digits after an optional `#`.
    #[error(transparent)]
    InvalidColorFormat(#[from] InvalidColorFormat),

    /// The mode is neither `light` nor `dark`.
    #[error("invalid theme mode {0:?}: expected \"light\" or \"dark\"")]
    InvalidThemeMode(String),

    /// A [`ThemeStore`](crate::store::ThemeStore) has no theme for the tenant.
    #[error("no theme stored for tenant {0:?}")]
    UnknownTenant(String),
}

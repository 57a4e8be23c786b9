//! Tenant theme persistence seam.
//!
//! The engine stores nothing. A [`ThemeStore`] owns each tenant's
//! `(mode, accent)` pair and every lookup is followed by a fresh derivation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use showcase_color::Rgb;

use crate::assemble::derive_theme;
use crate::error::ThemeError;
use crate::mode::ThemeMode;
use crate::tokens::TokenSet;

/// The durable per-tenant theme choice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantTheme {
    pub mode: ThemeMode,
    /// `#RRGGBB`; `None` means the mode's default accent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
}

impl TenantTheme {
    #[must_use]
    pub fn new(mode: ThemeMode, accent: Option<&str>) -> Self {
        Self {
            mode,
            accent: accent.map(str::to_owned),
        }
    }

    /// Check the accent without deriving anything.
    ///
    /// # Errors
    ///
    /// [`ThemeError::InvalidColorFormat`] for a malformed accent.
    pub fn validate(&self) -> Result<(), ThemeError> {
        if let Some(hex) = &self.accent {
            Rgb::from_hex(hex)?;
        }
        Ok(())
    }

    /// Derive this tenant's token set.
    ///
    /// # Errors
    ///
    /// [`ThemeError::InvalidColorFormat`] for a malformed accent.
    pub fn derive(&self) -> Result<TokenSet, ThemeError> {
        derive_theme(self.mode, self.accent.as_deref())
    }
}

/// Loads and saves tenant theme choices.
pub trait ThemeStore {
    /// # Errors
    ///
    /// [`ThemeError::UnknownTenant`] if nothing is stored for `tenant_id`.
    fn load_theme(&self, tenant_id: &str) -> Result<TenantTheme, ThemeError>;

    /// # Errors
    ///
    /// Implementations reject themes that fail [`TenantTheme::validate`].
    fn save_theme(&mut self, tenant_id: &str, theme: TenantTheme) -> Result<(), ThemeError>;
}

/// In-process [`ThemeStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryThemeStore {
    themes: HashMap<String, TenantTheme>,
}

impl MemoryThemeStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load_theme(&self, tenant_id: &str) -> Result<TenantTheme, ThemeError> {
        self.themes
            .get(tenant_id)
            .cloned()
            .ok_or_else(|| ThemeError::UnknownTenant(tenant_id.to_owned()))
    }

    fn save_theme(&mut self, tenant_id: &str, theme: TenantTheme) -> Result<(), ThemeError> {
        theme.validate()?;
        tracing::debug!(tenant = tenant_id, mode = %theme.mode, accent = ?theme.accent, "saved tenant theme");
        self.themes.insert(tenant_id.to_owned(), theme);
        Ok(())
    }
}

/// Load `tenant_id`'s choice from `store` and derive its token set.
///
/// # Errors
///
/// Whatever the store or [`TenantTheme::derive`] returns.
pub fn derive_for_tenant<S: ThemeStore + ?Sized>(
    store: &S,
    tenant_id: &str,
) -> Result<TokenSet, ThemeError> {
    store.load_theme(tenant_id)?.derive()
}

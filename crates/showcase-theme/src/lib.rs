//! # showcase-theme — per-tenant design token derivation
//!
//! Turns one tenant-chosen accent color and a light/dark mode into the
//! nineteen design tokens that skin a tenant's public showcase pages. The
//! same input always produces the same tokens; nothing is cached or stored.
//!
//! # Architecture
//!
//! ```text
//! (mode, accent_hex?)
//!     │
//!     ▼
//! showcase-color: hex → integer HSL
//!     │
//!     ▼
//! accent.rs:   clamp saturation/lightness, derive 5 interactive tokens
//!     │
//!     ▼
//! assemble.rs: preset (12) + destructive (2) + accent (5) → TokenSet
//!     │
//!     ▼
//! sink.rs:     hand the TokenSet to a StyleSink (CSS text, live page, …)
//! ```
//!
//! `contrast.rs` sits beside the pipeline: a lightness-based contrast ratio
//! and a nudging loop callers can wrap around derived colors.
//! `store.rs` is the seam to whatever persists each tenant's choice.

pub mod accent;
pub mod assemble;
pub mod contrast;
pub mod error;
pub mod mode;
pub mod preset;
pub mod sink;
pub mod store;
pub mod tokens;

pub use accent::{AccentTokens, accessible_primary, derive_accent, process_accent_color};
pub use assemble::{derive_theme, derive_theme_str, generate_theme};
pub use contrast::{ContrastCheck, contrast_ratio, contrast_report, ensure_contrast};
pub use error::ThemeError;
pub use mode::ThemeMode;
pub use preset::{DARK_LUXE, LIGHT_LUXE, Preset};
pub use sink::{CssSink, StyleSink, apply_theme};
pub use store::{MemoryThemeStore, TenantTheme, ThemeStore, derive_for_tenant};
pub use tokens::{Token, TokenSet};

pub use showcase_color::{Hsl, Rgb};

// SPDX-License-Identifier: MIT
//
// Color types and the two conversions the theme engine is built on.
//
// `Rgb` is what tenants type; `Hsl` is what tokens are made of. Both are
// small `Copy` values with integer fields, so equality is exact and there is
// no epsilon anywhere downstream.

use std::fmt;
use std::str::FromStr;

// ─── Errors ──────────────────────────────────────────────────────────────────

/// A color string that is not exactly six hex digits after an optional `#`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color format {input:?}: expected 6 hex digits with an optional leading '#'")]
pub struct InvalidColorFormat {
    /// The rejected input, verbatim.
    pub input: String,
}

impl InvalidColorFormat {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }
}

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An opaque sRGB color with 8-bit channels.
///
/// ```
/// use showcase_color::Rgb;
///
/// let gold = Rgb::from_hex("#C9A66B").unwrap();
/// assert_eq!(gold, Rgb::new(201, 166, 107));
/// assert_eq!(gold.to_hex(), "#c9a66b");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `RRGGBB` hex string, with or without a single leading `#`.
    /// Digits are case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidColorFormat`] unless exactly six hex digits remain
    /// after stripping the optional `#`.
    pub fn from_hex(s: &str) -> Result<Self, InvalidColorFormat> {
        parse_hex(s).ok_or_else(|| InvalidColorFormat::new(s))
    }

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Convert to integer HSL.
    ///
    /// Lightness is the midpoint of the largest and smallest channel.
    /// Achromatic colors (all channels equal) get hue 0 and saturation 0,
    /// which also keeps the saturation and hue divisions away from zero.
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        let max8 = self.r.max(self.g).max(self.b);
        let min8 = self.r.min(self.g).min(self.b);
        if max8 == min8 {
            return Hsl::new(0, 0, round_percent(l));
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        // Ties go to red, then green, the same order the branches are tried.
        let sector = if max8 == self.r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max8 == self.g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        let h = (sector * 60.0).round() as u16 % 360;

        Hsl::new(h, round_percent(s), round_percent(l))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = InvalidColorFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// An integer HSL triple: hue in `[0, 360)`, saturation and lightness in
/// `[0, 100]`.
///
/// [`Hsl::new`] enforces the ranges, so every `Hsl` built through `new` is
/// valid.
/// `Display` renders the design-token form `"H S% L%"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Hsl {
    /// Hue angle in degrees.
    pub h: u16,
    /// Saturation percentage.
    pub s: u8,
    /// Lightness percentage.
    pub l: u8,
}

impl Hsl {
    /// Build an HSL triple, wrapping the hue into `[0, 360)` and capping
    /// saturation and lightness at 100.
    #[inline]
    #[must_use]
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self {
            h: h % 360,
            s: if s > 100 { 100 } else { s },
            l: if l > 100 { 100 } else { l },
        }
    }

    /// Same hue and saturation, different lightness (capped at 100).
    #[inline]
    #[must_use]
    pub const fn with_lightness(self, l: u8) -> Self {
        Self::new(self.h, self.s, l)
    }

    /// Lightness as a fraction in `[0, 1]`.
    #[inline]
    #[must_use]
    pub fn lightness_fraction(self) -> f64 {
        f64::from(self.l) / 100.0
    }

    /// Convert back to 8-bit RGB.
    ///
    /// Uses the closed-form inverse: with `a = s·min(l, 1−l)`, each channel
    /// is `l − a·clamp(min(k−3, 9−k), −1, 1)` where
    /// `k = (n + h/30) mod 12` and `n` is 0, 8, 4 for red, green, blue.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        let h = f64::from(self.h);
        let s = f64::from(self.s) / 100.0;
        let l = f64::from(self.l) / 100.0;
        let a = s * l.min(1.0 - l);

        let channel = |n: f64| {
            let k = (n + h / 30.0) % 12.0;
            let factor = (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0);
            to_u8(a.mul_add(-factor, l))
        };

        Rgb::new(channel(0.0), channel(8.0), channel(4.0))
    }

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_rgb().to_hex()
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}% {}%", self.h, self.s, self.l)
    }
}

impl FromStr for Hsl {
    type Err = InvalidColorFormat;

    /// Accepts hex input, the same as [`Rgb::from_hex`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex_to_hsl(s)
    }
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        rgb.to_hsl()
    }
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        hsl.to_rgb()
    }
}

// ─── Free functions ──────────────────────────────────────────────────────────

/// Parse a hex color and convert it to integer HSL.
///
/// # Errors
///
/// Returns [`InvalidColorFormat`] unless `hex` is exactly six hex digits
/// after an optional leading `#`.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl, InvalidColorFormat> {
    Rgb::from_hex(hex).map(Rgb::to_hsl)
}

/// Convert integer HSL to a lowercase `#rrggbb` string.
#[must_use]
pub fn hsl_to_hex(hsl: Hsl) -> String {
    hsl.to_hex()
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn parse_hex(s: &str) -> Option<Rgb> {
    let digits = s.strip_prefix('#').unwrap_or(s).as_bytes();
    if digits.len() != 6 {
        return None;
    }
    let r = parse_hex_byte(&digits[0..2])?;
    let g = parse_hex_byte(&digits[2..4])?;
    let b = parse_hex_byte(&digits[4..6])?;
    Some(Rgb::new(r, g, b))
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

/// Fraction in `[0, 1]` → whole percentage.
#[inline]
fn round_percent(v: f64) -> u8 {
    (v * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Fraction in `[0, 1]` → byte, rounding half up.
#[inline]
fn to_u8(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────

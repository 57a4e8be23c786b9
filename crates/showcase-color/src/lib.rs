// SPDX-License-Identifier: MIT
//
// showcase-color — hex RGB ↔ HSL conversion for the showcase theme engine.
//
// Tenants pick one accent color as a `#RRGGBB` string. Every design token
// the theme engine emits is an integer HSL triple, so this crate is the
// boundary between the two worlds. Conversions round to whole units on the
// way out: HSL comes back as integers, RGB as bytes. That keeps every
// derived token reproducible bit for bit.
//
// Conversion pipeline:
//
//   "#RRGGBB" ↔ Rgb (u8 channels) ↔ normalized [0,1] floats ↔ Hsl (integers)

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Rounded float → small integer casts are range-checked before the cast.
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

pub mod color;

pub use color::{Hsl, InvalidColorFormat, Rgb, hex_to_hsl, hsl_to_hex};

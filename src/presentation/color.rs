use std::fmt;

use crate::error::{ColorError, Result};

/// An sRGB colour with alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity in `[0, 1]`.
    pub a: f64,
}

impl Color {
    /// Creates an opaque colour.
    #[must_use]
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Creates a colour with the given opacity.
    #[must_use]
    pub fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Parses `#rgb` or `#rrggbb`.
    ///
    /// # Errors
    ///
    /// Returns `ColorError::InvalidHex` for any other input.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let invalid = || ColorError::InvalidHex(hex.to_owned());
        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.is_ascii() {
            return Err(invalid().into());
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match digits.len() {
            3 => {
                let short = |i: usize| channel(&digits[i..=i]).map(|v| v * 17);
                Ok(Self::rgb(short(0)?, short(1)?, short(2)?))
            }
            6 => Ok(Self::rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            _ => Err(invalid().into()),
        }
    }

    /// Lightens (`fraction > 0`) or darkens (`fraction < 0`) every channel by
    /// `fraction · 255`, truncated toward zero and clamped. Alpha is kept.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn brighten(&self, fraction: f64) -> Self {
        let delta = (255.0 * fraction).trunc();
        let shift = |c: u8| (f64::from(c) + delta).clamp(0.0, 255.0) as u8;
        Self {
            r: shift(self.r),
            g: shift(self.g),
            b: shift(self.b),
            a: self.a,
        }
    }
}

/// Formats as `rgb(r,g,b)` when opaque and `rgba(r,g,b,a)` otherwise.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a >= 1.0 {
            write!(f, "rgb({},{},{})", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
        }
    }
}

//! Color values and the metric color scale.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Simple RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self { Self { r, g, b } }
}

impl fmt::Display for Rgb {
    /// Format as CSS: rgb(r,g,b)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color {0:?}: expected rgb(r,g,b) or #rrggbb")]
pub struct ParseColorError(String);

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Accepts `rgb(r,g,b)` (spaces allowed) and `#rrggbb`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError(s.to_string());
        let text = s.trim();

        if let Some(hex) = text.strip_prefix('#') {
            if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) { return Err(err()) }
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
            return Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?));
        }

        let inner = text.strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(err)?;

        let channels = inner.split(',')
            .map(|part| part.trim().parse::<u8>().map_err(|_| err()))
            .collect::<Result<Vec<_>, _>>()?;

        match channels[..] {
            [r, g, b] => Ok(Rgb::new(r, g, b)),
            _ => Err(err()),
        }
    }
}

impl TryFrom<String> for Rgb {
    type Error = ParseColorError;
    fn try_from(value: String) -> Result<Self, Self::Error> { value.parse() }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self { color.to_string() }
}

/// Map `value` within `[min, max]` onto the light-to-dark warm scale.
///
/// `t` is clamped to `[0, 1]`. A degenerate range (`min == max`) uses `t = 1`,
/// and a NaN fraction falls back to `t = 0`.
pub fn interpolate(value: f64, min: f64, max: f64) -> Rgb {
    let t = if max == min { 1.0 } else { (value - min) / (max - min) };
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

    let channel = |base: f64, t: f64| (base + (255.0 - base) * t).floor().clamp(0.0, 255.0) as u8;

    Rgb {
        r: channel(128.0, t),
        g: channel(64.0, 1.0 - t),
        b: channel(26.0, 1.0 - t),
    }
}

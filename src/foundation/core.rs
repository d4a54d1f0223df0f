use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A numeric value read from raw configuration input.
///
/// JSON does not distinguish integers from floats at the type level; this keeps the distinction
/// so integer-only fields (`frame`, `frame_length`) can reject fractional input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    /// Integral value that fits in `i64`.
    Int(i64),
    /// Any other finite JSON number.
    Float(f64),
}

impl Number {
    /// Interpret a JSON value as a number.
    ///
    /// Returns `None` for every non-numeric shape, including booleans and numeric strings.
    pub fn from_json(v: &Value) -> Option<Self> {
        let Value::Number(n) = v else {
            return None;
        };
        if let Some(i) = n.as_i64() {
            return Some(Self::Int(i));
        }
        n.as_f64().map(Self::Float)
    }

    /// Widen to `f64`.
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(i) => i as f64,
            Self::Float(f) => f,
        }
    }

    /// Return the integer value, if this number is integral.
    pub fn as_i64(self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(i),
            Self::Float(_) => None,
        }
    }
}

/// Human-readable JSON type name used in error messages.
pub fn json_type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Normalized RGB color with components in `[0, 1]`.
///
/// Serialized as a `[r, g, b]` array so a resolved color survives a JSON round trip unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Rgb {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
}

impl Rgb {
    /// Build a color from normalized components (clamped into `[0, 1]`).
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
        }
    }

    /// Build a color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
        )
    }

    /// Quantize to 8-bit channels.
    pub fn to_rgb8(self) -> [u8; 3] {
        fn to_u8(x: f64) -> u8 {
            (x.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        [to_u8(self.r), to_u8(self.g), to_u8(self.b)]
    }

    /// `#rrggbb` form, for logs and error messages.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Exact, hashable identity of the normalized triple.
    pub(crate) fn key(self) -> ColorKey {
        // `+ 0.0` folds -0.0 into 0.0 so both hash alike.
        ColorKey([
            (self.r + 0.0).to_bits(),
            (self.g + 0.0).to_bits(),
            (self.b + 0.0).to_bits(),
        ])
    }
}

impl From<[f64; 3]> for Rgb {
    fn from([r, g, b]: [f64; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [f64; 3] {
    fn from(c: Rgb) -> Self {
        [c.r, c.g, c.b]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct ColorKey([u64; 3]);

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

use crate::foundation::core::{Number, Rgb, json_type_name};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Keyword that leaves a group's color to the palette.
pub const DEFAULT_COLOR_KEYWORD: &str = "default";

/// A group's color before and after resolution.
///
/// Serializes as the raw input shape: `"default"` when unset, `[r, g, b]` otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum ColorSlot {
    /// Not chosen yet; the color assigner picks one from the palette.
    #[default]
    Unset,
    /// A concrete color, supplied by the user or chosen during resolution.
    Explicit(Rgb),
}

impl ColorSlot {
    /// Return the concrete color, if any.
    pub fn rgb(self) -> Option<Rgb> {
        match self {
            Self::Unset => None,
            Self::Explicit(c) => Some(c),
        }
    }

    /// Return `true` when no color has been chosen.
    pub fn is_unset(self) -> bool {
        matches!(self, Self::Unset)
    }
}

impl Serialize for ColorSlot {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Unset => serializer.serialize_str(DEFAULT_COLOR_KEYWORD),
            Self::Explicit(c) => c.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ColorSlot {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let v = Value::deserialize(deserializer)?;
        parse_color_value(&v).map_err(serde::de::Error::custom)
    }
}

/// Interpret a raw `color` field.
///
/// Accepted shapes: `null` or `"default"` (unset), a color string understood by
/// [`parse_color_str`], or an `[r, g, b]` / `[r, g, b, a]` array of numbers in `[0, 1]` (alpha is
/// ignored).
pub fn parse_color_value(v: &Value) -> Result<ColorSlot, String> {
    match v {
        Value::Null => Ok(ColorSlot::Unset),
        Value::String(s) if s.trim() == DEFAULT_COLOR_KEYWORD => Ok(ColorSlot::Unset),
        Value::String(s) => parse_color_str(s).map(ColorSlot::Explicit),
        Value::Array(items) => parse_color_array(items).map(ColorSlot::Explicit),
        other => Err(format!(
            "expected a color string or [r, g, b] array, got {}",
            json_type_name(other)
        )),
    }
}

fn parse_color_array(items: &[Value]) -> Result<Rgb, String> {
    if items.len() != 3 && items.len() != 4 {
        return Err(format!(
            "rgb array must have len 3 ([r,g,b]) or 4 ([r,g,b,a]), got len {}",
            items.len()
        ));
    }
    let mut c = [0.0f64; 3];
    for (i, item) in items.iter().take(3).enumerate() {
        let x = Number::from_json(item)
            .ok_or_else(|| {
                format!(
                    "rgb component {i} must be a number, got {}",
                    json_type_name(item)
                )
            })?
            .as_f64();
        if !(0.0..=1.0).contains(&x) {
            return Err(format!("rgb component {i} must be in [0, 1], got {x}"));
        }
        c[i] = x;
    }
    Ok(Rgb::new(c[0], c[1], c[2]))
}

/// Parse a color string: `#rgb`, `#rrggbb`, `#rrggbbaa`, a named color (single-letter shorthand,
/// `tab:*`, `C0`..`C9`, common CSS names), or a grayscale level such as `"0.5"`.
pub fn parse_color_str(s: &str) -> Result<Rgb, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty color string".to_owned());
    }
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }
    if let Some(c) = named_color(s) {
        return Ok(c);
    }
    if let Ok(level) = s.parse::<f64>() {
        if (0.0..=1.0).contains(&level) {
            return Ok(Rgb::new(level, level, level));
        }
        return Err(format!("grayscale level must be in [0, 1], got \"{s}\""));
    }
    Err(format!("unrecognized color \"{s}\""))
}

fn parse_hex(s: &str) -> Result<Rgb, String> {
    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }
    fn hex_nibble(c: &str) -> Result<u8, String> {
        let v = u8::from_str_radix(c, 16).map_err(|_| format!("invalid hex digit \"{c}\""))?;
        Ok(v * 17)
    }

    if !s.is_ascii() {
        return Err(format!("invalid hex color \"#{s}\""));
    }
    let (r, g, b) = match s.len() {
        3 | 4 => (
            hex_nibble(&s[0..1])?,
            hex_nibble(&s[1..2])?,
            hex_nibble(&s[2..3])?,
        ),
        6 | 8 => (
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
        ),
        _ => {
            return Err(
                "hex color must be #RGB, #RRGGBB or #RRGGBBAA (case-insensitive)".to_owned(),
            );
        }
    };
    if s.len() == 4 {
        hex_nibble(&s[3..4])?;
    } else if s.len() == 8 {
        hex_byte(&s[6..8])?;
    }
    Ok(Rgb::from_rgb8(r, g, b))
}

fn named_color(name: &str) -> Option<Rgb> {
    // Single-letter shorthands are case-sensitive; everything else is not.
    let base = match name {
        "b" => Some(Rgb::new(0.0, 0.0, 1.0)),
        "g" => Some(Rgb::new(0.0, 0.5, 0.0)),
        "r" => Some(Rgb::new(1.0, 0.0, 0.0)),
        "c" => Some(Rgb::new(0.0, 0.75, 0.75)),
        "m" => Some(Rgb::new(0.75, 0.0, 0.75)),
        "y" => Some(Rgb::new(0.75, 0.75, 0.0)),
        "k" => Some(Rgb::new(0.0, 0.0, 0.0)),
        "w" => Some(Rgb::new(1.0, 1.0, 1.0)),
        _ => None,
    };
    if base.is_some() {
        return base;
    }

    let lower = name.to_ascii_lowercase();
    if let Some(digit) = lower.strip_prefix('c') {
        if let Ok(i) = digit.parse::<usize>() {
            let [r, g, b] = CYCLE[i % CYCLE.len()];
            return Some(Rgb::from_rgb8(r, g, b));
        }
    }
    NAMED
        .iter()
        .find(|(n, _)| *n == lower)
        .map(|&(_, [r, g, b])| Rgb::from_rgb8(r, g, b))
}

/// Default property cycle (`C0`..`C9`).
const CYCLE: [[u8; 3]; 10] = [
    [0x1f, 0x77, 0xb4],
    [0xff, 0x7f, 0x0e],
    [0x2c, 0xa0, 0x2c],
    [0xd6, 0x27, 0x28],
    [0x94, 0x67, 0xbd],
    [0x8c, 0x56, 0x4b],
    [0xe3, 0x77, 0xc2],
    [0x7f, 0x7f, 0x7f],
    [0xbc, 0xbd, 0x22],
    [0x17, 0xbe, 0xcf],
];

const NAMED: &[(&str, [u8; 3])] = &[
    ("tab:blue", [0x1f, 0x77, 0xb4]),
    ("tab:orange", [0xff, 0x7f, 0x0e]),
    ("tab:green", [0x2c, 0xa0, 0x2c]),
    ("tab:red", [0xd6, 0x27, 0x28]),
    ("tab:purple", [0x94, 0x67, 0xbd]),
    ("tab:brown", [0x8c, 0x56, 0x4b]),
    ("tab:pink", [0xe3, 0x77, 0xc2]),
    ("tab:gray", [0x7f, 0x7f, 0x7f]),
    ("tab:grey", [0x7f, 0x7f, 0x7f]),
    ("tab:olive", [0xbc, 0xbd, 0x22]),
    ("tab:cyan", [0x17, 0xbe, 0xcf]),
    ("black", [0x00, 0x00, 0x00]),
    ("white", [0xff, 0xff, 0xff]),
    ("red", [0xff, 0x00, 0x00]),
    ("green", [0x00, 0x80, 0x00]),
    ("blue", [0x00, 0x00, 0xff]),
    ("yellow", [0xff, 0xff, 0x00]),
    ("cyan", [0x00, 0xff, 0xff]),
    ("aqua", [0x00, 0xff, 0xff]),
    ("magenta", [0xff, 0x00, 0xff]),
    ("fuchsia", [0xff, 0x00, 0xff]),
    ("orange", [0xff, 0xa5, 0x00]),
    ("purple", [0x80, 0x00, 0x80]),
    ("pink", [0xff, 0xc0, 0xcb]),
    ("brown", [0xa5, 0x2a, 0x2a]),
    ("gray", [0x80, 0x80, 0x80]),
    ("grey", [0x80, 0x80, 0x80]),
    ("lime", [0x00, 0xff, 0x00]),
    ("navy", [0x00, 0x00, 0x80]),
    ("teal", [0x00, 0x80, 0x80]),
    ("olive", [0x80, 0x80, 0x00]),
    ("maroon", [0x80, 0x00, 0x00]),
    ("silver", [0xc0, 0xc0, 0xc0]),
    ("gold", [0xff, 0xd7, 0x00]),
    ("indigo", [0x4b, 0x00, 0x82]),
    ("violet", [0xee, 0x82, 0xee]),
    ("salmon", [0xfa, 0x80, 0x72]),
    ("coral", [0xff, 0x7f, 0x50]),
    ("crimson", [0xdc, 0x14, 0x3c]),
    ("turquoise", [0x40, 0xe0, 0xd0]),
    ("skyblue", [0x87, 0xce, 0xeb]),
    ("darkblue", [0x00, 0x00, 0x8b]),
    ("darkgreen", [0x00, 0x64, 0x00]),
    ("darkred", [0x8b, 0x00, 0x00]),
    ("lightblue", [0xad, 0xd8, 0xe6]),
    ("lightgreen", [0x90, 0xee, 0x90]),
    ("tan", [0xd2, 0xb4, 0x8c]),
    ("khaki", [0xf0, 0xe6, 0x8c]),
    ("orchid", [0xda, 0x70, 0xd6]),
];

#[cfg(test)]
#[path = "../../tests/unit/color/spec.rs"]
mod tests;

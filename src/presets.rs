//! Ready-made demo configs as JSON builders.
//!
//! Each builder returns a raw `serde_json::Value` in the input format, so it can be written to
//! disk or fed straight into [`crate::resolve_value`].

use crate::foundation::error::RadarResult;
use crate::resolve::{RenderPlan, resolve_value};
use serde_json::{Map, Value, json};

/// Radial value of the spokes a blade does not cover.
const BASE_VALUE: u32 = 1;

/// One row of data: `BASE_VALUE` everywhere, `peak` at `pos` (and `pos + 1` when `fat`).
fn spike(angles: usize, pos: usize, peak: u32, fat: bool) -> Vec<u32> {
    let mut data = vec![BASE_VALUE; angles];
    if angles == 0 {
        return data;
    }
    data[pos % angles] = peak;
    if fat {
        data[(pos + 1) % angles] = peak;
    }
    data
}

/// Rotating-rotor animation: `blades` evenly spaced blades advance one axis per frame.
///
/// Produces `angles` frames, each holding one group per blade (`group_{blade}_{frame}`, named
/// `blade_{blade}`), colored from `jet`.
pub fn helicopter_value(angles: usize, blades: usize, blade_length: u32, fat: bool) -> Value {
    let offsets: Vec<usize> = (0..blades).map(|b| angles * b / blades).collect();
    let mut groups = Map::new();
    for t in 0..angles {
        for (b, offset) in offsets.iter().enumerate() {
            groups.insert(
                format!("group_{b}_{t}"),
                json!({
                    "name": format!("blade_{b}"),
                    "data": spike(angles, t + offset, blade_length, fat),
                    "frame": t,
                }),
            );
        }
    }
    json!({
        "title": "helicopter",
        "colormap": "jet",
        "axes": vec![""; angles],
        "animated": true,
        "frame_length": 40,
        "groups": groups,
    })
}

/// Static chart with one distinctly named group per axis, colored from `Accent`.
///
/// `Accent` holds eight colors, so nine or more angles exhaust the palette and fail
/// resolution, while eight or fewer succeed.
pub fn colormap_probe_value(angles: usize, blade_length: u32, fat: bool) -> Value {
    let mut groups = Map::new();
    for t in 0..angles {
        groups.insert(
            format!("color_{t}"),
            json!({ "data": spike(angles, t, blade_length, fat) }),
        );
    }
    json!({
        "title": "colormap example",
        "colormap": "Accent",
        "axes": vec![""; angles],
        "groups": groups,
    })
}

/// [`helicopter_value`], resolved.
pub fn helicopter_plan(
    angles: usize,
    blades: usize,
    blade_length: u32,
    fat: bool,
) -> RadarResult<RenderPlan> {
    resolve_value(&helicopter_value(angles, blades, blade_length, fat))
}

#[cfg(test)]
#[path = "../tests/unit/presets.rs"]
mod tests;

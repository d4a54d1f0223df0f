//! Structural validation and default filling for raw configuration JSON.
//!
//! Validation is fail-fast: the first problem is reported as a [`RadarError::Config`] whose
//! message starts with a JSON path (`$.groups.g0.data[2]`) and states the expected and actual
//! shape.

use crate::color::colormap::Colormap;
use crate::color::spec::{ColorSlot, parse_color_value};
use crate::config::model::{Config, DEFAULT_COLORMAP, DEFAULT_FRAME_LENGTH_MS, Group};
use crate::foundation::core::{Number, json_type_name};
use crate::foundation::error::{RadarError, RadarResult};
use serde_json::{Map, Value};
use std::fmt;

const ROOT_KEYS: &[&str] = &[
    "title",
    "axes",
    "groups",
    "animated",
    "colormap",
    "frame_length",
    "min",
    "max",
];

const GROUP_KEYS: &[&str] = &["name", "data", "color", "frame", "date"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PathElem<'a> {
    Field(&'a str),
    Index(usize),
}

struct FieldPath<'p, 'a>(&'p [PathElem<'a>]);

impl fmt::Display for FieldPath<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for p in self.0 {
            match *p {
                PathElem::Field(name) => write!(f, ".{name}")?,
                PathElem::Index(i) => write!(f, "[{i}]")?,
            }
        }
        Ok(())
    }
}

fn err_at(path: &[PathElem<'_>], msg: impl fmt::Display) -> RadarError {
    RadarError::config(format!("{}: {msg}", FieldPath(path)))
}

fn type_mismatch(path: &[PathElem<'_>], expected: &str, actual: &Value) -> RadarError {
    err_at(
        path,
        format!("expected {expected}, got {}", json_type_name(actual)),
    )
}

/// Check a raw configuration and fill in defaults.
///
/// On success every group has `data.len() == axes.len()`, `min`/`max` are set, and for
/// non-animated configs every group's frame is `0`. Frames of animated configs and all
/// unset colors are resolved by the later pipeline stages.
#[tracing::instrument(skip(raw))]
pub fn validate_config(raw: &Value) -> RadarResult<Config> {
    let Value::Object(root) = raw else {
        return Err(type_mismatch(&[], "a JSON object", raw));
    };
    for key in root.keys() {
        if !ROOT_KEYS.contains(&key.as_str()) {
            tracing::debug!(key = key.as_str(), "ignoring unknown config key");
        }
    }

    let title = opt_string(root, "title", &[])?.unwrap_or_default();
    let axes = required_axes(root)?;

    let groups_obj = match root.get("groups") {
        None => return Err(err_at(&[PathElem::Field("groups")], "required key is missing")),
        Some(Value::Object(m)) => m,
        Some(other) => {
            return Err(type_mismatch(
                &[PathElem::Field("groups")],
                "an object mapping group keys to groups",
                other,
            ));
        }
    };

    let animated = match root.get("animated") {
        None => false,
        Some(Value::Bool(b)) => *b,
        Some(other) => {
            return Err(type_mismatch(&[PathElem::Field("animated")], "bool", other));
        }
    };

    let colormap =
        opt_string(root, "colormap", &[])?.unwrap_or_else(|| DEFAULT_COLORMAP.to_owned());
    if Colormap::lookup(&colormap).is_none() {
        return Err(err_at(
            &[PathElem::Field("colormap")],
            format!("unknown colormap \"{colormap}\""),
        ));
    }

    let frame_length = match root.get("frame_length") {
        None => DEFAULT_FRAME_LENGTH_MS,
        Some(v) => {
            let path = [PathElem::Field("frame_length")];
            match v.as_u64() {
                Some(n) => n,
                None => {
                    let n = integer(&path, v)?;
                    return Err(err_at(&path, format!("must be >= 0, got {n}")));
                }
            }
        }
    };

    let mut groups = Vec::with_capacity(groups_obj.len());
    for (key, gv) in groups_obj {
        groups.push(validate_group(key, gv, axes.len(), animated)?);
    }

    let explicit_min = opt_number(root, "min")?;
    let explicit_max = opt_number(root, "max")?;
    let (min, max) = bounds(&groups, explicit_min, explicit_max);
    if min >= max {
        return Err(err_at(
            &[PathElem::Field("min")],
            format!("min ({min}) must be less than max ({max})"),
        ));
    }
    tracing::debug!(min, max, groups = groups.len(), "config validated");

    Ok(Config {
        title,
        axes,
        groups,
        animated,
        colormap,
        frame_length,
        min,
        max,
    })
}

fn required_axes(root: &Map<String, Value>) -> RadarResult<Vec<String>> {
    let path = [PathElem::Field("axes")];
    let items = match root.get("axes") {
        None => return Err(err_at(&path, "required key is missing")),
        Some(Value::Array(items)) => items,
        Some(other) => return Err(type_mismatch(&path, "an array of strings", other)),
    };
    if items.is_empty() {
        return Err(err_at(&path, "must contain at least one axis"));
    }
    items
        .iter()
        .enumerate()
        .map(|(i, v)| match v {
            Value::String(s) => Ok(s.clone()),
            other => Err(type_mismatch(
                &[PathElem::Field("axes"), PathElem::Index(i)],
                "string",
                other,
            )),
        })
        .collect()
}

fn validate_group(key: &str, raw: &Value, n_axes: usize, animated: bool) -> RadarResult<Group> {
    let base = [PathElem::Field("groups"), PathElem::Field(key)];
    let Value::Object(obj) = raw else {
        return Err(type_mismatch(&base, "a group object", raw));
    };
    for k in obj.keys() {
        if !GROUP_KEYS.contains(&k.as_str()) {
            tracing::debug!(group = key, key = k.as_str(), "ignoring unknown group key");
        }
    }

    let name = opt_string(obj, "name", &base)?.unwrap_or_else(|| key.to_owned());

    let data_path = [base[0], base[1], PathElem::Field("data")];
    let items = match obj.get("data") {
        None => return Err(err_at(&data_path, "required key is missing")),
        Some(Value::Array(items)) => items,
        Some(other) => return Err(type_mismatch(&data_path, "an array of numbers", other)),
    };
    if items.len() != n_axes {
        return Err(err_at(
            &data_path,
            format!(
                "length must equal the number of axes ({n_axes}), got {}",
                items.len()
            ),
        ));
    }
    let data = items
        .iter()
        .enumerate()
        .map(|(i, v)| {
            Number::from_json(v).map(Number::as_f64).ok_or_else(|| {
                type_mismatch(
                    &[base[0], base[1], PathElem::Field("data"), PathElem::Index(i)],
                    "number",
                    v,
                )
            })
        })
        .collect::<RadarResult<Vec<f64>>>()?;

    let color = match obj.get("color") {
        None => ColorSlot::Unset,
        Some(v) => parse_color_value(v)
            .map_err(|e| err_at(&[base[0], base[1], PathElem::Field("color")], e))?,
    };

    let frame = match obj.get("frame") {
        None | Some(Value::Null) => None,
        Some(v) => Some(integer(&[base[0], base[1], PathElem::Field("frame")], v)?),
    };

    let date = match obj.get("date") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            return Err(type_mismatch(
                &[base[0], base[1], PathElem::Field("date")],
                "a dd/mm/yyyy string",
                other,
            ));
        }
    };

    let frame = if animated {
        if frame.is_none() && date.is_none() {
            return Err(err_at(
                &base,
                "animated configs need a \"frame\" or \"date\" on every group",
            ));
        }
        frame
    } else {
        Some(0)
    };

    Ok(Group {
        key: key.to_owned(),
        name,
        data,
        color,
        frame,
        date,
    })
}

/// Radial bounds: explicit values win; otherwise one below/above the data extremes, truncated
/// toward zero, with a derived lower bound never above zero.
fn bounds(groups: &[Group], min: Option<f64>, max: Option<f64>) -> (f64, f64) {
    let values = || groups.iter().flat_map(|g| g.data.iter().copied());
    let data_min = values().reduce(f64::min);
    let data_max = values().reduce(f64::max);

    let min = min.unwrap_or_else(|| match data_min {
        Some(lo) => (lo - 1.0).trunc().min(0.0),
        None => 0.0,
    });
    let max = max.unwrap_or_else(|| match data_max {
        Some(hi) => (hi + 1.0).trunc(),
        None => 1.0,
    });
    (min, max)
}

fn opt_string(
    obj: &Map<String, Value>,
    key: &'static str,
    base: &[PathElem<'_>],
) -> RadarResult<Option<String>> {
    match obj.get(key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => {
            let mut path = base.to_vec();
            path.push(PathElem::Field(key));
            Err(type_mismatch(&path, "string", other))
        }
    }
}

/// Read an `i64`; integers outside its range get their own message.
fn integer(path: &[PathElem<'_>], v: &Value) -> RadarResult<i64> {
    if let Value::Number(n) = v {
        if let Some(i) = n.as_i64() {
            return Ok(i);
        }
        if n.is_u64() {
            return Err(err_at(path, format!("integer out of i64 range, got {n}")));
        }
    }
    Err(type_mismatch(path, "integer", v))
}

fn opt_number(obj: &Map<String, Value>, key: &'static str) -> RadarResult<Option<f64>> {
    match obj.get(key) {
        None => Ok(None),
        Some(v) => Number::from_json(v)
            .map(|n| Some(n.as_f64()))
            .ok_or_else(|| type_mismatch(&[PathElem::Field(key)], "number", v)),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/validate.rs"]
mod tests;

use crate::color::spec::ColorSlot;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Colormap used when a config does not name one.
pub const DEFAULT_COLORMAP: &str = "tab20";

/// Frame duration (milliseconds) used when a config does not specify one.
pub const DEFAULT_FRAME_LENGTH_MS: u64 = 400;

/// A validated radar chart configuration.
///
/// Built once by [`crate::config::validate::validate_config`], then completed in place by the
/// resolution stages. After [`crate::resolve::resolve_value`] returns, every group has a frame
/// and an explicit color.
///
/// Serializes back to the input JSON shape (groups as an object keyed by group key) so a
/// resolved config can be written out and resolved again.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    /// Chart title.
    pub title: String,
    /// Axis labels, in drawing order.
    pub axes: Vec<String>,
    /// Data groups, in source order.
    #[serde(serialize_with = "serialize_groups")]
    pub groups: Vec<Group>,
    /// Whether groups are spread across animation frames.
    pub animated: bool,
    /// Colormap used for groups without an explicit color.
    pub colormap: String,
    /// Frame duration in milliseconds; only meaningful to renderers.
    pub frame_length: u64,
    /// Radial axis lower bound.
    pub min: f64,
    /// Radial axis upper bound.
    pub max: f64,
}

impl Config {
    /// Find a group by its mapping key.
    pub fn group(&self, key: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.key == key)
    }

    /// Number of distinct group names.
    pub fn distinct_names(&self) -> usize {
        let mut seen = std::collections::HashSet::new();
        self.groups.iter().filter(|g| seen.insert(g.name.as_str())).count()
    }
}

/// One data series (one polygon per frame).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Group {
    /// Key of this group in the source `groups` object.
    #[serde(skip)]
    pub key: String,
    /// Display name; groups that share a name share a color.
    pub name: String,
    /// One value per axis.
    pub data: Vec<f64>,
    /// Color, unset until resolved from the palette.
    pub color: ColorSlot,
    /// Animation frame (any integer).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame: Option<i64>,
    /// Raw `dd/mm/yyyy` date used to derive the frame.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl Group {
    /// Resolved frame; `0` before resolution assigned one.
    pub fn frame_or_zero(&self) -> i64 {
        self.frame.unwrap_or(0)
    }
}

fn serialize_groups<S>(groups: &[Group], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(groups.len()))?;
    for g in groups {
        map.serialize_entry(&g.key, g)?;
    }
    map.end()
}

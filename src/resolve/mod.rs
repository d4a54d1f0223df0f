//! Resolution stages and the resolved [`RenderPlan`].

pub(crate) mod colors;
pub(crate) mod frames;
pub(crate) mod order;

use crate::config::model::{Config, Group};
use crate::config::validate::validate_config;
use crate::foundation::error::{RadarError, RadarResult};
use serde::{Serialize, Serializer};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// A fully resolved chart: every group has a frame and a concrete color, and groups are
/// bucketed into contiguous frame slots.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    config: Config,
    frames: Vec<Vec<String>>,
}

impl RenderPlan {
    /// Parse and resolve a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> RadarResult<Self> {
        let raw: serde_json::Value = serde_json::from_reader(r)
            .map_err(|e| RadarError::config(format!("parse config JSON: {e}")))?;
        resolve_value(&raw)
    }

    /// Parse and resolve a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> RadarResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            RadarError::config(format!("open config JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// The resolved config.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Number of frame slots, gaps included.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Group keys per frame slot.
    pub fn frame_keys(&self) -> &[Vec<String>] {
        &self.frames
    }

    /// Groups active in frame slot `slot`, in source order. Out-of-range slots are empty.
    pub fn frame(&self, slot: usize) -> impl Iterator<Item = &Group> + '_ {
        self.frames
            .get(slot)
            .into_iter()
            .flatten()
            .filter_map(|key| self.config.group(key))
    }

    /// The resolved config as a JSON value.
    pub fn to_value(&self) -> RadarResult<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| RadarError::serde(e.to_string()))
    }
}

impl std::str::FromStr for RenderPlan {
    type Err = RadarError;

    fn from_str(s: &str) -> RadarResult<Self> {
        Self::from_reader(s.as_bytes())
    }
}

impl Serialize for RenderPlan {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.config.serialize(serializer)
    }
}

/// Validate a raw JSON config and run every resolution stage over it.
///
/// Stages run in order: validation, frame resolution, color assignment, frame ordering. The
/// first failing stage aborts resolution.
#[tracing::instrument(skip(raw))]
pub fn resolve_value(raw: &serde_json::Value) -> RadarResult<RenderPlan> {
    let mut config = validate_config(raw)?;
    frames::resolve_frames(&mut config)?;
    colors::resolve_colors(&mut config)?;
    let frames = order::order_frames(&config)?;
    tracing::info!(
        groups = config.groups.len(),
        frames = frames.len(),
        colormap = config.colormap.as_str(),
        "config resolved"
    );
    Ok(RenderPlan { config, frames })
}

#[cfg(test)]
#[path = "../../tests/unit/resolve/plan.rs"]
mod tests;

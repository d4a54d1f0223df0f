use crate::config::model::Config;
use crate::foundation::error::{RadarError, RadarResult};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Input format for group dates (`dd/mm/yyyy`).
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Parse a `dd/mm/yyyy` date.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

/// Give every group of an animated config a concrete frame.
///
/// Frames are either all explicit or all derived from dates; a mix is rejected. Groups with
/// both a frame and a date keep their frame. Derived frames number the distinct dates
/// `0, 1, 2, ...` in chronological order. Static configs are left unchanged.
#[tracing::instrument(skip(cfg), fields(groups = cfg.groups.len()))]
pub fn resolve_frames(cfg: &mut Config) -> RadarResult<()> {
    if !cfg.animated {
        return Ok(());
    }

    let with_frame = cfg.groups.iter().find(|g| g.frame.is_some());
    let date_only = cfg.groups.iter().find(|g| g.frame.is_none());
    match (with_frame, date_only) {
        (Some(f), Some(d)) => {
            return Err(RadarError::config(format!(
                "incomplete frame data: group \"{}\" has an explicit frame but group \"{}\" \
                 only has a date; use frames on every group or dates on every group",
                f.key, d.key
            )));
        }
        (_, None) => return Ok(()),
        (None, Some(_)) => {}
    }

    let mut dated = Vec::with_capacity(cfg.groups.len());
    for g in &cfg.groups {
        let raw = g.date.as_deref().ok_or_else(|| {
            RadarError::config(format!(
                "$.groups.{}: animated configs need a \"frame\" or \"date\" on every group",
                g.key
            ))
        })?;
        let date = parse_date(raw).ok_or_else(|| {
            RadarError::config(format!(
                "$.groups.{}.date: expected a dd/mm/yyyy date, got \"{raw}\"",
                g.key
            ))
        })?;
        dated.push(date);
    }

    let mut frame_of = BTreeMap::<NaiveDate, i64>::new();
    for d in &dated {
        frame_of.entry(*d).or_insert(0);
    }
    for (i, frame) in frame_of.values_mut().enumerate() {
        *frame = i as i64;
    }
    for (g, d) in cfg.groups.iter_mut().zip(&dated) {
        g.frame = frame_of.get(d).copied();
    }
    tracing::debug!(frames = frame_of.len(), "frames derived from dates");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/resolve/frames.rs"]
mod tests;

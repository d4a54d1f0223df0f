use crate::config::model::Config;
use crate::foundation::error::{RadarError, RadarResult};
use std::collections::BTreeMap;

/// Largest number of frame slots a config may span, gaps included.
pub const MAX_FRAME_SLOTS: usize = 100_000;

/// Group keys per frame slot, in render order.
///
/// Slot `i` holds the groups whose frame is `first + i`, where `first` is the smallest frame in
/// the config; frames nobody uses become empty slots. Within a slot groups keep source order.
/// Configs whose frames span more than [`MAX_FRAME_SLOTS`] slots are rejected.
pub fn order_frames(cfg: &Config) -> RadarResult<Vec<Vec<String>>> {
    let mut buckets = BTreeMap::<i64, Vec<String>>::new();
    for g in &cfg.groups {
        buckets
            .entry(g.frame_or_zero())
            .or_default()
            .push(g.key.clone());
    }

    let (Some(&first), Some(&last)) = (buckets.keys().next(), buckets.keys().next_back()) else {
        return Ok(Vec::new());
    };
    let slot_count = usize::try_from(last.abs_diff(first))
        .ok()
        .and_then(|span| span.checked_add(1))
        .filter(|n| *n <= MAX_FRAME_SLOTS)
        .ok_or_else(|| {
            RadarError::config(format!(
                "frames {first} to {last} span more than {MAX_FRAME_SLOTS} frame slots"
            ))
        })?;
    let mut slots = Vec::with_capacity(slot_count);
    for frame in first..=last {
        slots.push(buckets.remove(&frame).unwrap_or_default());
    }
    tracing::debug!(first, last, slots = slots.len(), "frames ordered");
    Ok(slots)
}

#[cfg(test)]
#[path = "../../tests/unit/resolve/order.rs"]
mod tests;

use crate::color::palette::ColorPalette;
use crate::color::spec::ColorSlot;
use crate::config::model::{Config, Group};
use crate::foundation::core::{ColorKey, Rgb};
use crate::foundation::error::{RadarError, RadarResult};
use std::collections::{HashMap, HashSet};

/// Resolves a concrete color for every group of one config.
///
/// Explicit colors are registered first so palette picks route around them; unset colors then
/// reuse their name's color or take the first palette entry nobody uses yet. Throughout, a
/// name keeps one color, a `(name, frame)` pair appears once, and a color appears at most once
/// per frame.
#[derive(Debug)]
pub struct ColorAssigner {
    palette: ColorPalette,
    distinct_names: usize,
    frame_color: HashMap<(i64, ColorKey), String>,
    name_color: HashMap<String, Rgb>,
    name_frame: HashMap<(String, i64), String>,
    used: HashSet<ColorKey>,
}

impl ColorAssigner {
    /// Build an assigner whose palette has one sample per distinct group name.
    pub fn new(cfg: &Config) -> RadarResult<Self> {
        let distinct_names = cfg.distinct_names();
        let palette = ColorPalette::from_name(&cfg.colormap, distinct_names)?;
        Ok(Self {
            palette,
            distinct_names,
            frame_color: HashMap::new(),
            name_color: HashMap::new(),
            name_frame: HashMap::new(),
            used: HashSet::new(),
        })
    }

    /// Resolve every group's color in place.
    #[tracing::instrument(skip_all, fields(colormap = self.palette.colormap()))]
    pub fn assign(mut self, cfg: &mut Config) -> RadarResult<()> {
        for g in cfg.groups.iter().filter(|g| !g.color.is_unset()) {
            if let ColorSlot::Explicit(c) = g.color {
                self.claim_explicit(g, c)?;
            }
        }
        for g in cfg.groups.iter_mut().filter(|g| g.color.is_unset()) {
            let c = self.claim_default(g)?;
            g.color = ColorSlot::Explicit(c);
        }
        Ok(())
    }

    fn claim_explicit(&mut self, g: &Group, c: Rgb) -> RadarResult<()> {
        let frame = g.frame_or_zero();
        self.claim_frame_color(g, frame, c)?;
        match self.name_color.get(&g.name) {
            Some(prev) if *prev != c => {
                return Err(RadarError::config(format!(
                    "group \"{}\": name \"{}\" already has color {} but this group sets {}; \
                     groups sharing a name must share a color",
                    g.key,
                    g.name,
                    prev.to_hex(),
                    c.to_hex()
                )));
            }
            Some(_) => {}
            None => {
                self.name_color.insert(g.name.clone(), c);
            }
        }
        self.claim_name_frame(g, frame)?;
        self.used.insert(c.key());
        Ok(())
    }

    fn claim_default(&mut self, g: &Group) -> RadarResult<Rgb> {
        let frame = g.frame_or_zero();
        self.claim_name_frame(g, frame)?;

        let c = match self.name_color.get(&g.name) {
            Some(c) => *c,
            None => {
                let c = self
                    .palette
                    .colors()
                    .iter()
                    .copied()
                    .find(|c| !self.used.contains(&c.key()))
                    .ok_or_else(|| {
                        RadarError::config(format!(
                            "insufficient colors in colormap \"{}\" for {} distinct group \
                             names: no unused color left for group \"{}\"; pick a colormap \
                             with more colors or set explicit colors",
                            self.palette.colormap(),
                            self.distinct_names,
                            g.key
                        ))
                    })?;
                tracing::debug!(
                    group = g.key.as_str(),
                    name = g.name.as_str(),
                    color = c.to_hex().as_str(),
                    "palette color assigned"
                );
                self.name_color.insert(g.name.clone(), c);
                c
            }
        };
        self.claim_frame_color(g, frame, c)?;
        self.used.insert(c.key());
        Ok(c)
    }

    fn claim_frame_color(&mut self, g: &Group, frame: i64, c: Rgb) -> RadarResult<()> {
        if let Some(other) = self.frame_color.get(&(frame, c.key())) {
            return Err(RadarError::config(format!(
                "groups \"{other}\" and \"{}\" both use color {} on frame {frame}",
                g.key,
                c.to_hex()
            )));
        }
        self.frame_color.insert((frame, c.key()), g.key.clone());
        Ok(())
    }

    fn claim_name_frame(&mut self, g: &Group, frame: i64) -> RadarResult<()> {
        let slot = (g.name.clone(), frame);
        if let Some(other) = self.name_frame.get(&slot) {
            return Err(RadarError::config(format!(
                "groups \"{other}\" and \"{}\" share name \"{}\" on frame {frame}",
                g.key, g.name
            )));
        }
        self.name_frame.insert(slot, g.key.clone());
        Ok(())
    }
}

/// Resolve every group's color (see [`ColorAssigner`]).
pub fn resolve_colors(cfg: &mut Config) -> RadarResult<()> {
    ColorAssigner::new(cfg)?.assign(cfg)
}

#[cfg(test)]
#[path = "../../tests/unit/resolve/colors.rs"]
mod tests;

use crate::color::colormap::Colormap;
use crate::foundation::core::Rgb;
use crate::foundation::error::{RadarError, RadarResult};

/// Ordered, deterministic color sequence sampled from a colormap.
///
/// Entries are not deduplicated: a listed map sampled at more points than it has colors yields
/// repeats, which the color assigner treats as already taken.
#[derive(Clone, Debug)]
pub struct ColorPalette {
    colormap: String,
    colors: Vec<Rgb>,
}

impl ColorPalette {
    /// Sample `cmap` at `n` evenly spaced points over `[0, 1]`, both ends included.
    pub fn sample(cmap: &Colormap, n: usize) -> Self {
        let colors = linspace_unit(n).map(|t| cmap.rgb(t)).collect();
        Self {
            colormap: cmap.name().to_owned(),
            colors,
        }
    }

    /// Look up `colormap` by name and sample it at `n` points.
    pub fn from_name(colormap: &str, n: usize) -> RadarResult<Self> {
        let cmap = Colormap::lookup(colormap)
            .ok_or_else(|| RadarError::config(format!("unknown colormap \"{colormap}\"")))?;
        Ok(Self::sample(&cmap, n))
    }

    /// Name of the source colormap.
    pub fn colormap(&self) -> &str {
        &self.colormap
    }

    /// Palette entries in order.
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Number of entries (including repeats).
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Return `true` when the palette has no entries.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// `n` evenly spaced values from 0 to 1 inclusive; a single point is `0`.
fn linspace_unit(n: usize) -> impl Iterator<Item = f64> {
    let step = if n > 1 { 1.0 / (n - 1) as f64 } else { 0.0 };
    (0..n).map(move |i| if n > 1 && i == n - 1 { 1.0 } else { i as f64 * step })
}

#[cfg(test)]
#[path = "../../tests/unit/color/palette.rs"]
mod tests;

//! CPU rasterization of render plans and PNG output.

pub(crate) mod cpu;
pub(crate) mod geometry;

use crate::foundation::core::Rgb;
use crate::foundation::error::{RadarError, RadarResult};
use crate::resolve::RenderPlan;
use std::path::{Path, PathBuf};

/// A rendered frame as RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// RGBA8 value of the pixel at `(x, y)`, if inside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Canvas settings for [`render_frame`] and [`save_plan`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOpts {
    /// Side of the square canvas in pixels.
    pub size_px: u32,
    /// Opaque canvas background.
    pub background: Rgb,
    /// Opacity of polygon fills; outlines are always opaque.
    pub fill_alpha: f64,
}

impl Default for RenderOpts {
    fn default() -> Self {
        Self {
            size_px: 640,
            background: Rgb::new(1.0, 1.0, 1.0),
            fill_alpha: 0.25,
        }
    }
}

/// Render frame slot `slot` of `plan`.
pub fn render_frame(
    plan: &RenderPlan,
    slot: usize,
    opts: &RenderOpts,
) -> RadarResult<FrameRGBA> {
    cpu::CpuRenderer::new().render(plan, slot, opts)
}

/// Write `frame` to `path` as a PNG.
pub fn save_png(frame: &FrameRGBA, path: impl AsRef<Path>) -> RadarResult<()> {
    let path = path.as_ref();
    let data = if frame.premultiplied {
        unpremultiply_rgba8(&frame.data)
    } else {
        frame.data.clone()
    };
    image::save_buffer_with_format(
        path,
        &data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| RadarError::render(format!("write png '{}': {e}", path.display())))
}

/// Render every frame slot of `plan` and write them as PNG files.
///
/// A single-slot plan is written to `path` itself; otherwise slot `i` goes to
/// `<stem>_<iiii>.<ext>` next to `path`. Missing parent directories are created. Returns the
/// written paths in slot order.
#[tracing::instrument(skip(plan, opts), fields(frames = plan.frame_count()))]
pub fn save_plan(plan: &RenderPlan, path: &Path, opts: &RenderOpts) -> RadarResult<Vec<PathBuf>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            RadarError::render(format!("create output dir '{}': {e}", parent.display()))
        })?;
    }

    let mut renderer = cpu::CpuRenderer::new();
    let mut written = Vec::with_capacity(plan.frame_count());
    for slot in 0..plan.frame_count() {
        let out = if plan.frame_count() == 1 {
            path.to_path_buf()
        } else {
            frame_path(path, slot)
        };
        let frame = renderer.render(plan, slot, opts)?;
        save_png(&frame, &out)?;
        tracing::debug!(path = %out.display(), "frame written");
        written.push(out);
    }
    tracing::info!(
        files = written.len(),
        frame_length_ms = plan.config().frame_length,
        "plan saved"
    );
    Ok(written)
}

/// Path of frame `slot` in a multi-frame sequence based on `path`.
pub fn frame_path(path: &Path, slot: usize) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "frame".to_owned());
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| "png".to_owned());
    path.with_file_name(format!("{stem}_{slot:04}.{ext}"))
}

fn unpremultiply_rgba8(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len());
    for px in data.chunks_exact(4) {
        let a = px[3];
        match a {
            0 => out.extend_from_slice(&[0, 0, 0, 0]),
            255 => out.extend_from_slice(px),
            _ => {
                let a32 = u32::from(a);
                let un = |c: u8| ((u32::from(c) * 255 + a32 / 2) / a32).min(255) as u8;
                out.extend_from_slice(&[un(px[0]), un(px[1]), un(px[2]), a]);
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/output.rs"]
mod tests;

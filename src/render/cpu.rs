use super::geometry::{RadarGeometry, outline};
use super::{FrameRGBA, RenderOpts};
use crate::foundation::core::Rgb;
use crate::foundation::error::{RadarError, RadarResult};
use crate::resolve::RenderPlan;
use kurbo::{BezPath, PathEl};

const SPOKE_WIDTH: f64 = 1.0;
const EDGE_WIDTH: f64 = 2.0;
const GRID_GRAY: Rgb = Rgb {
    r: 0.8,
    g: 0.8,
    b: 0.8,
};

/// Rasterizes plan frames with `vello_cpu`, reusing one render context across frames.
#[derive(Default)]
pub(crate) struct CpuRenderer {
    ctx: Option<vello_cpu::RenderContext>,
}

impl CpuRenderer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn with_ctx_mut<R>(
        &mut self,
        width: u16,
        height: u16,
        f: impl FnOnce(&mut vello_cpu::RenderContext) -> RadarResult<R>,
    ) -> RadarResult<R> {
        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            _ => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        let out = f(&mut ctx)?;
        self.ctx = Some(ctx);
        Ok(out)
    }

    #[tracing::instrument(skip(self, plan, opts), fields(size = opts.size_px))]
    pub(crate) fn render(
        &mut self,
        plan: &RenderPlan,
        slot: usize,
        opts: &RenderOpts,
    ) -> RadarResult<FrameRGBA> {
        if slot >= plan.frame_count() {
            return Err(RadarError::render(format!(
                "frame slot {slot} out of range (plan has {} frames)",
                plan.frame_count()
            )));
        }
        let side = u16::try_from(opts.size_px)
            .ok()
            .filter(|s| *s > 0)
            .ok_or_else(|| {
                RadarError::render(format!(
                    "canvas size must be between 1 and {} pixels, got {}",
                    u16::MAX,
                    opts.size_px
                ))
            })?;

        let cfg = plan.config();
        let geom = RadarGeometry::for_canvas(opts.size_px, cfg.axes.len());
        let mut pixmap = vello_cpu::Pixmap::new(side, side);

        self.with_ctx_mut(side, side, |ctx| {
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            ctx.set_paint(paint(opts.background, 1.0));
            let extent = f64::from(side);
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, extent, extent));

            ctx.set_paint(paint(GRID_GRAY, 1.0));
            ctx.fill_path(&bezpath_to_cpu(&outline(&geom.spokes(), SPOKE_WIDTH)));
            ctx.fill_path(&bezpath_to_cpu(&outline(&geom.rim(), SPOKE_WIDTH)));

            for g in plan.frame(slot) {
                let Some(color) = g.color.rgb() else {
                    return Err(RadarError::render(format!(
                        "group \"{}\" has no resolved color",
                        g.key
                    )));
                };
                let shape = geom.polygon(&g.data, cfg.min, cfg.max);
                ctx.set_paint(paint(color, opts.fill_alpha));
                ctx.fill_path(&bezpath_to_cpu(&shape));
                ctx.set_paint(paint(color, 1.0));
                ctx.fill_path(&bezpath_to_cpu(&outline(&shape, EDGE_WIDTH)));
            }

            ctx.flush();
            ctx.render_to_pixmap(&mut pixmap);
            Ok(())
        })?;

        tracing::debug!(slot, groups = plan.frame(slot).count(), "frame rendered");
        Ok(FrameRGBA {
            width: u32::from(side),
            height: u32::from(side),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

fn paint(c: Rgb, alpha: f64) -> vello_cpu::peniko::Color {
    let [r, g, b] = c.to_rgb8();
    let a = if alpha.is_nan() {
        0
    } else {
        (alpha.clamp(0.0, 1.0) * 255.0).round() as u8
    };
    vello_cpu::peniko::Color::from_rgba8(r, g, b, a)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;

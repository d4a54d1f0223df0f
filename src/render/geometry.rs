use kurbo::{BezPath, Point, Stroke, StrokeOpts, Vec2};
use std::f64::consts::TAU;

const STROKE_TOLERANCE: f64 = 0.1;

/// Square radar layout: `n` spokes around a center, axis 0 pointing up, counter-clockwise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct RadarGeometry {
    pub(crate) center: Point,
    pub(crate) radius: f64,
    pub(crate) axes: usize,
}

impl RadarGeometry {
    /// Layout for a `size_px` square canvas with a fixed margin.
    pub(crate) fn for_canvas(size_px: u32, axes: usize) -> Self {
        let half = f64::from(size_px) / 2.0;
        Self {
            center: Point::new(half, half),
            radius: half * 0.85,
            axes,
        }
    }

    /// Angle of axis `k`, measured counter-clockwise from "up".
    pub(crate) fn axis_angle(&self, k: usize) -> f64 {
        if self.axes == 0 {
            return 0.0;
        }
        TAU * k as f64 / self.axes as f64
    }

    /// Canvas point at `angle` and `frac` of the full radius.
    pub(crate) fn point_at(&self, angle: f64, frac: f64) -> Point {
        let r = self.radius * frac;
        self.center + Vec2::new(-angle.sin() * r, -angle.cos() * r)
    }

    /// Closed polygon through one value per axis, scaled to `[min, max]`.
    pub(crate) fn polygon(&self, values: &[f64], min: f64, max: f64) -> BezPath {
        let mut path = BezPath::new();
        for (k, v) in values.iter().enumerate() {
            let p = self.point_at(self.axis_angle(k), radial_fraction(*v, min, max));
            if k == 0 {
                path.move_to(p);
            } else {
                path.line_to(p);
            }
        }
        if !values.is_empty() {
            path.close_path();
        }
        path
    }

    /// One open segment per axis from the center to the rim.
    pub(crate) fn spokes(&self) -> BezPath {
        let mut path = BezPath::new();
        for k in 0..self.axes {
            path.move_to(self.center);
            path.line_to(self.point_at(self.axis_angle(k), 1.0));
        }
        path
    }

    /// Outer boundary joining the spoke tips.
    pub(crate) fn rim(&self) -> BezPath {
        self.polygon(&vec![1.0; self.axes], 0.0, 1.0)
    }
}

/// Position of `v` between `min` and `max`, clamped to `[0, 1]`.
pub(crate) fn radial_fraction(v: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    if span.is_nan() || span <= 0.0 || !v.is_finite() {
        return 0.0;
    }
    ((v - min) / span).clamp(0.0, 1.0)
}

/// Fillable outline of `path` drawn with a `width` pixel pen.
pub(crate) fn outline(path: &BezPath, width: f64) -> BezPath {
    kurbo::stroke(
        path.elements().iter().copied(),
        &Stroke::new(width),
        &StrokeOpts::default(),
        STROKE_TOLERANCE,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/render/geometry.rs"]
mod tests;

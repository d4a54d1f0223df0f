use super::*;
use crate::resolve::resolve_value;
use serde_json::json;
use std::f64::consts::FRAC_PI_4;

fn plan() -> RenderPlan {
    resolve_value(&json!({
        "axes": ["n", "w", "s", "e"],
        "animated": true,
        "min": 0,
        "max": 10,
        "groups": {
            "full": { "data": [10, 10, 10, 10], "color": "#ff0000", "frame": 0 },
            "later": { "data": [10, 10, 10, 10], "color": "#0000ff", "frame": 2 }
        }
    }))
    .unwrap()
}

fn probe(frame: &FrameRGBA, size: u32) -> [u8; 4] {
    // Between the first two spokes, well inside a full-radius polygon.
    let geom = RadarGeometry::for_canvas(size, 4);
    let p = geom.point_at(FRAC_PI_4, 0.45);
    frame.pixel(p.x as u32, p.y as u32).unwrap()
}

fn opts(size_px: u32) -> RenderOpts {
    RenderOpts {
        size_px,
        ..RenderOpts::default()
    }
}

#[test]
fn background_fills_the_corners() {
    let frame = CpuRenderer::new().render(&plan(), 0, &opts(100)).unwrap();
    assert_eq!((frame.width, frame.height), (100, 100));
    assert_eq!(frame.data.len(), 100 * 100 * 4);
    assert!(frame.premultiplied);
    assert_eq!(frame.pixel(1, 1), Some([255, 255, 255, 255]));
    assert_eq!(frame.pixel(98, 98), Some([255, 255, 255, 255]));
}

#[test]
fn polygon_is_tinted_with_the_group_color() {
    let frame = CpuRenderer::new().render(&plan(), 0, &opts(100)).unwrap();
    let [r, g, b, a] = probe(&frame, 100);
    assert_eq!(a, 255);
    assert!(r > 240, "{r} {g} {b}");
    assert!(g < 230 && b < 230, "{r} {g} {b}");
    assert!(g.abs_diff(b) <= 1, "{r} {g} {b}");
}

#[test]
fn empty_slots_only_show_the_grid() {
    let mut renderer = CpuRenderer::new();
    let plan = plan();
    let gap = renderer.render(&plan, 1, &opts(100)).unwrap();
    assert_eq!(probe(&gap, 100), [255, 255, 255, 255]);

    // The context is reused across frames of the same size.
    let last = renderer.render(&plan, 2, &opts(100)).unwrap();
    let [r, _, b, _] = probe(&last, 100);
    assert!(b > r + 40, "{r} {b}");
}

#[test]
fn bad_slot_and_size_are_render_errors() {
    let plan = plan();
    let mut renderer = CpuRenderer::new();
    let err = renderer.render(&plan, 3, &opts(100)).unwrap_err();
    assert!(err.to_string().starts_with("render error: frame slot 3"), "{err}");

    for size in [0, 70_000] {
        let err = renderer.render(&plan, 0, &opts(size)).unwrap_err();
        assert!(err.to_string().contains("canvas size"), "{err}");
    }
}

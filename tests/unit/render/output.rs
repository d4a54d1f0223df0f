use super::*;
use crate::resolve::resolve_value;
use serde_json::json;

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "radar_anim_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

fn small() -> RenderOpts {
    RenderOpts {
        size_px: 48,
        ..RenderOpts::default()
    }
}

#[test]
fn frame_paths_are_numbered_next_to_the_target() {
    assert_eq!(
        frame_path(Path::new("out/radar.png"), 3),
        PathBuf::from("out/radar_0003.png")
    );
    assert_eq!(frame_path(Path::new("radar"), 12), PathBuf::from("radar_0012.png"));
}

#[test]
fn unpremultiply_restores_straight_alpha() {
    let px = unpremultiply_rgba8(&[64, 0, 32, 128, 9, 9, 9, 0, 10, 20, 30, 255]);
    assert_eq!(px, vec![128, 0, 64, 128, 0, 0, 0, 0, 10, 20, 30, 255]);
}

#[test]
fn pixel_lookup_is_bounds_checked() {
    let frame = FrameRGBA {
        width: 2,
        height: 1,
        data: vec![1, 2, 3, 4, 5, 6, 7, 8],
        premultiplied: false,
    };
    assert_eq!(frame.pixel(1, 0), Some([5, 6, 7, 8]));
    assert_eq!(frame.pixel(2, 0), None);
    assert_eq!(frame.pixel(0, 1), None);
}

#[test]
fn static_plan_is_saved_to_the_given_path() {
    let plan = resolve_value(&json!({
        "axes": ["a", "b", "c"],
        "groups": { "g": { "data": [1, 2, 3] } }
    }))
    .unwrap();
    let dir = temp_dir("static");
    let out = dir.join("nested").join("chart.png");

    let written = save_plan(&plan, &out, &small()).unwrap();
    assert_eq!(written, vec![out.clone()]);
    assert_eq!(image::image_dimensions(&out).unwrap(), (48, 48));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn animated_plan_is_saved_as_a_sequence() {
    let plan = resolve_value(&json!({
        "axes": ["a", "b", "c"],
        "animated": true,
        "groups": {
            "g0": { "name": "g", "data": [1, 2, 3], "frame": 0 },
            "g2": { "name": "g", "data": [3, 2, 1], "frame": 2 }
        }
    }))
    .unwrap();
    let dir = temp_dir("sequence");
    let out = dir.join("anim.png");

    let written = save_plan(&plan, &out, &small()).unwrap();
    let names: Vec<String> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["anim_0000.png", "anim_0001.png", "anim_0002.png"]);
    assert!(written.iter().all(|p| p.exists()));
    assert!(!out.exists());
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn render_frame_uses_a_fresh_renderer() {
    let plan = resolve_value(&json!({
        "axes": ["a"],
        "groups": { "g": { "data": [1] } }
    }))
    .unwrap();
    let frame = render_frame(&plan, 0, &small()).unwrap();
    assert_eq!(frame.pixel(0, 0), Some([255, 255, 255, 255]));
}

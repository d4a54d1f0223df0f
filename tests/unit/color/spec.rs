use super::*;
use serde_json::json;

#[test]
fn parses_hex_forms() {
    assert_eq!(parse_color_str("#ff0000").unwrap(), Rgb::new(1.0, 0.0, 0.0));
    assert_eq!(parse_color_str("#F00").unwrap(), Rgb::new(1.0, 0.0, 0.0));
    // Alpha is validated but dropped.
    assert_eq!(
        parse_color_str("#0000ff80").unwrap(),
        Rgb::new(0.0, 0.0, 1.0)
    );
    assert!(parse_color_str("#12345").is_err());
    assert!(parse_color_str("#gg0000").is_err());
    assert!(parse_color_str("#0000ffzz").is_err());
}

#[test]
fn parses_named_colors() {
    assert_eq!(parse_color_str("r").unwrap(), Rgb::new(1.0, 0.0, 0.0));
    assert_eq!(parse_color_str("Red").unwrap(), Rgb::new(1.0, 0.0, 0.0));
    assert_eq!(parse_color_str("tab:orange").unwrap().to_hex(), "#ff7f0e");
    assert_eq!(parse_color_str("C0").unwrap().to_hex(), "#1f77b4");
    assert_eq!(parse_color_str("coral").unwrap().to_hex(), "#ff7f50");
}

#[test]
fn parses_grayscale_levels() {
    assert_eq!(parse_color_str("0.5").unwrap(), Rgb::new(0.5, 0.5, 0.5));
    assert!(parse_color_str("1.5").is_err());
}

#[test]
fn rejects_unknown_names() {
    let err = parse_color_str("blurple").unwrap_err();
    assert!(err.contains("blurple"));
    assert!(parse_color_str("  ").is_err());
}

#[test]
fn color_value_shapes() {
    assert_eq!(parse_color_value(&json!(null)).unwrap(), ColorSlot::Unset);
    assert_eq!(parse_color_value(&json!("default")).unwrap(), ColorSlot::Unset);
    assert_eq!(
        parse_color_value(&json!([0.25, 0.5, 0.75])).unwrap(),
        ColorSlot::Explicit(Rgb::new(0.25, 0.5, 0.75))
    );
    assert_eq!(
        parse_color_value(&json!([0, 1, 0, 0.5])).unwrap(),
        ColorSlot::Explicit(Rgb::new(0.0, 1.0, 0.0))
    );
    assert!(parse_color_value(&json!([0.1, 0.2])).is_err());
    assert!(parse_color_value(&json!([0.1, 2.0, 0.3])).is_err());
    assert!(parse_color_value(&json!([0.1, "x", 0.3])).is_err());
    let err = parse_color_value(&json!(42)).unwrap_err();
    assert!(err.contains("integer"));
}

#[test]
fn slot_serializes_as_input_shape() {
    assert_eq!(serde_json::to_value(ColorSlot::Unset).unwrap(), json!("default"));
    let c = ColorSlot::Explicit(Rgb::new(0.0, 0.5, 1.0));
    let v = serde_json::to_value(c).unwrap();
    assert_eq!(v, json!([0.0, 0.5, 1.0]));
    let back: ColorSlot = serde_json::from_value(v).unwrap();
    assert_eq!(back, c);
    assert!(back.rgb().is_some());
    assert!(ColorSlot::Unset.is_unset());
}

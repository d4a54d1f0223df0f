use super::*;
use serde_json::json;

#[test]
fn number_keeps_integer_distinction() {
    assert_eq!(Number::from_json(&json!(3)), Some(Number::Int(3)));
    assert_eq!(Number::from_json(&json!(2.5)), Some(Number::Float(2.5)));
    assert_eq!(Number::from_json(&json!(-4)).and_then(Number::as_i64), Some(-4));
    assert_eq!(Number::from_json(&json!(2.5)).and_then(Number::as_i64), None);
}

#[test]
fn number_rejects_non_numeric_shapes() {
    for v in [json!(true), json!("3"), json!(null), json!([1]), json!({"x": 1})] {
        assert_eq!(Number::from_json(&v), None, "{v}");
    }
}

#[test]
fn type_names_are_readable() {
    assert_eq!(json_type_name(&json!(1)), "integer");
    assert_eq!(json_type_name(&json!(1.5)), "float");
    assert_eq!(json_type_name(&json!("a")), "string");
    assert_eq!(json_type_name(&json!(false)), "bool");
    assert_eq!(json_type_name(&json!(null)), "null");
    assert_eq!(json_type_name(&json!([])), "array");
    assert_eq!(json_type_name(&json!({})), "object");
}

#[test]
fn rgb_hex_and_rgb8_agree() {
    let c = Rgb::from_rgb8(255, 127, 14);
    assert_eq!(c.to_rgb8(), [255, 127, 14]);
    assert_eq!(c.to_hex(), "#ff7f0e");
}

#[test]
fn rgb_clamps_components() {
    let c = Rgb::new(1.5, -0.2, 0.5);
    assert_eq!(c, Rgb::new(1.0, 0.0, 0.5));
}

#[test]
fn rgb_key_folds_negative_zero() {
    assert_eq!(Rgb::new(-0.0, 0.0, 0.0).key(), Rgb::new(0.0, 0.0, 0.0).key());
    assert_ne!(Rgb::new(0.0, 0.0, 0.1).key(), Rgb::new(0.0, 0.0, 0.0).key());
}

#[test]
fn rgb_json_is_an_exact_triple() {
    let c = Rgb::new(0.1, 0.2, 0.30000000000000004);
    let s = serde_json::to_string(&c).unwrap();
    let back: Rgb = serde_json::from_str(&s).unwrap();
    assert_eq!(back, c);
    assert_eq!(back.key(), c.key());
}

use super::*;
use crate::config::validate::validate_config;
use serde_json::{Value, json};

fn resolved(v: Value) -> RadarResult<Config> {
    let mut cfg = validate_config(&v)?;
    resolve_frames(&mut cfg)?;
    Ok(cfg)
}

fn frames(cfg: &Config) -> Vec<(&str, i64)> {
    cfg.groups
        .iter()
        .map(|g| (g.key.as_str(), g.frame.unwrap()))
        .collect()
}

#[test]
fn dates_become_chronological_frames() {
    let cfg = resolved(json!({
        "axes": ["x"],
        "animated": true,
        "groups": {
            "C": { "data": [1], "date": "02/01/2020" },
            "A": { "data": [1], "date": "01/01/2020" },
            "B": { "data": [1], "date": "01/01/2020" }
        }
    }))
    .unwrap();
    assert_eq!(frames(&cfg), vec![("C", 1), ("A", 0), ("B", 0)]);
}

#[test]
fn date_order_is_chronological_not_lexical() {
    // Lexically "15/01/2019" > "02/06/2019" but it is earlier in time.
    let cfg = resolved(json!({
        "axes": ["x"],
        "animated": true,
        "groups": {
            "late": { "data": [1], "date": "02/06/2019" },
            "early": { "data": [1], "date": "15/01/2019" },
            "next_year": { "data": [1], "date": "01/01/2020" }
        }
    }))
    .unwrap();
    assert_eq!(
        frames(&cfg),
        vec![("late", 1), ("early", 0), ("next_year", 2)]
    );
}

#[test]
fn explicit_frames_are_kept_as_is() {
    let cfg = resolved(json!({
        "axes": ["x"],
        "animated": true,
        "groups": {
            "a": { "data": [1], "frame": 5 },
            "b": { "data": [1], "frame": -2 },
            "c": { "data": [1], "frame": 5, "date": "01/01/2000" }
        }
    }))
    .unwrap();
    assert_eq!(frames(&cfg), vec![("a", 5), ("b", -2), ("c", 5)]);
}

#[test]
fn mixed_frames_and_dates_are_rejected() {
    let err = resolved(json!({
        "axes": ["x"],
        "animated": true,
        "groups": {
            "framed": { "data": [1], "frame": 2 },
            "dated": { "data": [1], "date": "01/01/2020" }
        }
    }))
    .unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("incomplete frame data"), "{msg}");
    assert!(msg.contains("\"framed\"") && msg.contains("\"dated\""), "{msg}");
}

#[test]
fn malformed_dates_are_fatal() {
    for bad in ["2020-01-01", "32/01/2020", "01/13/2020", "yesterday"] {
        let err = resolved(json!({
            "axes": ["x"],
            "animated": true,
            "groups": { "g": { "data": [1], "date": bad } }
        }))
        .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("$.groups.g.date"), "{msg}");
        assert!(msg.contains(bad), "{msg}");
    }
}

#[test]
fn static_configs_are_untouched() {
    let cfg = resolved(json!({
        "axes": ["x"],
        "groups": { "g": { "data": [1], "date": "not a date" } }
    }))
    .unwrap();
    assert_eq!(frames(&cfg), vec![("g", 0)]);
}

#[test]
fn parse_date_accepts_surrounding_whitespace() {
    assert_eq!(
        parse_date(" 03/04/2021 "),
        NaiveDate::from_ymd_opt(2021, 4, 3)
    );
    assert_eq!(parse_date("2021/04/03"), None);
}

use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        RadarError::config("x")
            .to_string()
            .contains("config error:")
    );
    assert!(
        RadarError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        RadarError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = RadarError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
    assert!(!err.is_config());
}

#[test]
fn config_errors_are_classified() {
    assert!(RadarError::config("axes missing").is_config());
    assert!(!RadarError::render("x").is_config());
}

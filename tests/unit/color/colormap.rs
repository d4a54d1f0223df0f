use super::*;

#[test]
fn every_builtin_name_resolves() {
    for name in builtin_names() {
        let cm = Colormap::lookup(name).unwrap_or_else(|| panic!("missing {name}"));
        assert!(cm.len() >= 2, "{name}");
        assert_eq!(cm.name(), *name);
    }
    assert!(Colormap::lookup("not-a-map").is_none());
}

#[test]
fn listed_maps_index_by_floor() {
    let cm = Colormap::lookup("Accent").unwrap();
    assert_eq!(cm.len(), 8);
    assert_eq!(cm.rgb(0.0).to_hex(), "#7fc97f");
    // 0.124 * 8 = 0.99 -> first entry; 0.125 * 8 = 1.0 -> second entry.
    assert_eq!(cm.rgb(0.124).to_hex(), "#7fc97f");
    assert_eq!(cm.rgb(0.125).to_hex(), "#beaed4");
    assert_eq!(cm.rgb(1.0).to_hex(), "#666666");
}

#[test]
fn tab20_starts_with_the_tableau_blue_pair() {
    let cm = Colormap::lookup("tab20").unwrap();
    assert_eq!(cm.len(), 20);
    assert_eq!(cm.rgb(0.0).to_hex(), "#1f77b4");
    assert_eq!(cm.rgb(0.05).to_hex(), "#aec7e8");
    assert_eq!(cm.rgb(1.0).to_hex(), "#9edae5");
}

#[test]
fn jet_lut_has_expected_endpoints() {
    let cm = Colormap::lookup("jet").unwrap();
    assert_eq!(cm.len(), SEGMENTED_LUT_SIZE);
    let lo = cm.rgb(0.0);
    assert_eq!((lo.r, lo.g), (0.0, 0.0));
    assert!((lo.b - 0.5).abs() < 1e-12);
    let hi = cm.rgb(1.0);
    assert!((hi.r - 0.5).abs() < 1e-12);
    assert_eq!((hi.g, hi.b), (0.0, 0.0));
    // Middle of jet is green-dominant.
    let mid = cm.rgb(0.5);
    assert!(mid.g > 0.9);
}

#[test]
fn reversed_suffix_flips_the_table() {
    let fwd = Colormap::lookup("tab10").unwrap();
    let rev = Colormap::lookup("tab10_r").unwrap();
    assert_eq!(rev.rgb(0.0), fwd.rgb(1.0));
    assert_eq!(rev.rgb(1.0), fwd.rgb(0.0));
    assert_eq!(rev.name(), "tab10_r");
}

#[test]
fn out_of_range_inputs_clamp() {
    let cm = Colormap::lookup("gray").unwrap();
    assert_eq!(cm.rgb(-3.0), cm.rgb(0.0));
    assert_eq!(cm.rgb(7.0), cm.rgb(1.0));
    assert_eq!(cm.rgb(f64::NAN), cm.rgb(0.0));
}

#[test]
fn interp_hits_anchor_values() {
    let anchors: &[(f64, f64)] = &[(0.0, 0.0), (0.5, 1.0), (1.0, 0.0)];
    assert_eq!(interp(anchors, 0.0), 0.0);
    assert_eq!(interp(anchors, 0.5), 1.0);
    assert!((interp(anchors, 0.25) - 0.5).abs() < 1e-12);
    assert_eq!(interp(anchors, 1.0), 0.0);
}

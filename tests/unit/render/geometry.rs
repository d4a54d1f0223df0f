use super::*;

fn close(a: Point, b: Point) -> bool {
    (a - b).hypot() < 1e-9
}

#[test]
fn first_axis_points_up_and_axes_turn_counter_clockwise() {
    let g = RadarGeometry::for_canvas(200, 4);
    let r = g.radius;
    assert!(close(g.point_at(g.axis_angle(0), 1.0), Point::new(100.0, 100.0 - r)));
    assert!(close(g.point_at(g.axis_angle(1), 1.0), Point::new(100.0 - r, 100.0)));
    assert!(close(g.point_at(g.axis_angle(2), 1.0), Point::new(100.0, 100.0 + r)));
    assert!(close(g.point_at(g.axis_angle(3), 1.0), Point::new(100.0 + r, 100.0)));
}

#[test]
fn radial_fraction_clamps_to_the_bounds() {
    assert_eq!(radial_fraction(5.0, 0.0, 10.0), 0.5);
    assert_eq!(radial_fraction(-3.0, 0.0, 10.0), 0.0);
    assert_eq!(radial_fraction(30.0, 0.0, 10.0), 1.0);
    assert_eq!(radial_fraction(f64::NAN, 0.0, 10.0), 0.0);
    assert_eq!(radial_fraction(1.0, 2.0, 2.0), 0.0);
}

#[test]
fn polygon_has_one_vertex_per_value() {
    let g = RadarGeometry::for_canvas(100, 3);
    let path = g.polygon(&[1.0, 2.0, 3.0], 0.0, 3.0);
    // move_to, two line_to, close_path
    assert_eq!(path.elements().len(), 4);
    assert!(g.polygon(&[], 0.0, 1.0).elements().is_empty());
}

#[test]
fn spokes_and_outline_cover_the_canvas_center() {
    let g = RadarGeometry::for_canvas(100, 5);
    assert_eq!(g.spokes().elements().len(), 10);
    let bounds = kurbo::Shape::bounding_box(&outline(&g.rim(), 2.0));
    assert!(bounds.contains(g.center));
    assert!(bounds.width() > 2.0 * g.radius * 0.9);
}

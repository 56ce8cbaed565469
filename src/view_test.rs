#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

// --- View defaults ---

#[test]
fn view_default_is_identity() {
    let view = View::default();
    assert_eq!(view.origin_x, 0.0);
    assert_eq!(view.origin_y, 0.0);
    assert_eq!(view.scale, 1.0);
    let p = view.screen_to_room(Point::new(50.0, 75.0));
    assert!(point_approx_eq(p, Point::new(50.0, 75.0)));
}

// --- screen_to_room ---

#[test]
fn screen_to_room_removes_origin_offset() {
    let view = View { origin_x: 40.0, origin_y: 60.0, scale: 1.0 };
    let p = view.screen_to_room(Point::new(140.0, 160.0));
    assert!(point_approx_eq(p, Point::new(100.0, 100.0)));
}

#[test]
fn screen_to_room_divides_by_scale() {
    let view = View { origin_x: 0.0, origin_y: 0.0, scale: 0.5 };
    let p = view.screen_to_room(Point::new(200.0, 150.0));
    assert!(point_approx_eq(p, Point::new(400.0, 300.0)));
}

#[test]
fn screen_and_room_conversions_are_inverse() {
    let view = View { origin_x: 12.5, origin_y: -7.0, scale: 1.75 };
    let room = Point::new(321.0, 123.0);
    let back = view.screen_to_room(view.room_to_screen(room));
    assert!(point_approx_eq(room, back));
}

// --- screen_dist_to_room ---

#[test]
fn screen_dist_scales_inverse_to_zoom() {
    let view = View { origin_x: 0.0, origin_y: 0.0, scale: 2.0 };
    assert!(approx_eq(view.screen_dist_to_room(8.0), 4.0));
}

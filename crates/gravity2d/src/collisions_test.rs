use nalgebra::{Point2, Vector2};

use crate::body::{Body, BodyId};
use crate::collisions::{first_collision, has_collision, COLLISION_THRESHOLD_FACTOR};

fn body_at(id: u32, x: f64, y: f64, radius: f64) -> Body {
    Body::new(
        BodyId(id),
        Point2::new(x, y),
        radius,
        "red",
        Vector2::zeros(),
    )
}

#[test]
fn test_no_collision_when_separated() {
    let bodies = vec![body_at(0, 0.0, 0.0, 1.0), body_at(1, 2.0, 0.0, 1.0)];
    assert!(first_collision(&bodies).is_none());
    assert!(!has_collision(&bodies));
}

#[test]
fn test_collision_inside_threshold() {
    // Radii 1 and 1: threshold is 2 · 0.045 = 0.09
    let bodies = vec![body_at(0, 0.0, 0.0, 1.0), body_at(1, 0.0899, 0.0, 1.0)];

    let pair = first_collision(&bodies).expect("should collide");
    assert_eq!(pair.a, BodyId(0));
    assert_eq!(pair.b, BodyId(1));
    assert!(pair.separation < pair.threshold);
    assert_eq!(pair.threshold, 2.0 * COLLISION_THRESHOLD_FACTOR);
}

#[test]
fn test_boundary_distance_is_not_a_collision() {
    // Strict `<`: centers exactly at the threshold distance do not collide
    let threshold = (1.0 + 1.0) * COLLISION_THRESHOLD_FACTOR;
    let bodies = vec![body_at(0, 0.0, 0.0, 1.0), body_at(1, threshold, 0.0, 1.0)];

    assert!(first_collision(&bodies).is_none());
}

#[test]
fn test_threshold_scales_with_radius_sum() {
    // Radii 3 and 7: threshold is 10 · 0.045 = 0.45
    let colliding = vec![body_at(0, 0.0, 0.0, 3.0), body_at(1, 0.44, 0.0, 7.0)];
    let separated = vec![body_at(0, 0.0, 0.0, 3.0), body_at(1, 0.46, 0.0, 7.0)];

    assert!(has_collision(&colliding));
    assert!(!has_collision(&separated));
}

#[test]
fn test_first_pair_in_enumeration_order() {
    // Pairs scan i < j ascending: (0,1), (0,2), (1,2). Both (0,2) and
    // (1,2) collide here, but (0,2) is reported.
    let bodies = vec![
        body_at(0, 0.0, 0.0, 1.0),
        body_at(1, 0.01, 5.0, 1.0),
        body_at(2, 0.01, 0.0, 1.0),
    ];

    let pair = first_collision(&bodies).expect("should collide");
    assert_eq!(pair.a, BodyId(0));
    assert_eq!(pair.b, BodyId(2));
}

#[test]
fn test_empty_and_single_body_never_collide() {
    assert!(!has_collision(&[]));
    assert!(!has_collision(&[body_at(0, 0.0, 0.0, 1.0)]));
}

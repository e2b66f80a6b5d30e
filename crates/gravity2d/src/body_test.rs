use nalgebra::{Point2, Vector2};
use std::f64::consts::PI;

use crate::body::{mass_for_radius, Body, BodyId};

#[test]
fn test_mass_for_radius_formula() {
    // mass = π · r² / 50000, exactly reproducible from r alone
    assert_eq!(mass_for_radius(1.0), PI / 50_000.0);
    assert_eq!(mass_for_radius(2.0), PI * 4.0 / 50_000.0);
    assert_eq!(mass_for_radius(50.0), PI * 2500.0 / 50_000.0);
}

#[test]
fn test_mass_positive_for_positive_radius() {
    for r in [0.001, 0.5, 1.0, 10.0, 300.0] {
        assert!(mass_for_radius(r) > 0.0);
    }
}

#[test]
fn test_new_derives_mass() {
    let body = Body::new(
        BodyId(0),
        Point2::new(1.0, -2.0),
        3.0,
        "red",
        Vector2::new(0.5, 0.0),
    );

    assert_eq!(body.mass, mass_for_radius(3.0));
    assert_eq!(body.position, Point2::new(1.0, -2.0));
    assert_eq!(body.velocity, Vector2::new(0.5, 0.0));
    assert_eq!(body.color, "red");
}

#[test]
fn test_set_radius_recomputes_mass() {
    let mut body = Body::new(BodyId(0), Point2::origin(), 1.0, "red", Vector2::zeros());
    assert_eq!(body.mass, mass_for_radius(1.0));

    body.set_radius(4.0);

    assert_eq!(body.radius, 4.0);
    assert_eq!(body.mass, mass_for_radius(4.0));
}

#[test]
fn test_momentum() {
    let body = Body::new(
        BodyId(0),
        Point2::origin(),
        2.0,
        "green",
        Vector2::new(3.0, 4.0),
    );

    let expected = Vector2::new(3.0, 4.0) * mass_for_radius(2.0);
    assert_eq!(body.momentum(), expected);
}

#[test]
fn test_kinetic_energy() {
    let body = Body::new(
        BodyId(0),
        Point2::origin(),
        2.0,
        "green",
        Vector2::new(3.0, 4.0),
    );

    // KE = 0.5 · m · v², v² = 25
    assert_eq!(body.kinetic_energy(), 0.5 * mass_for_radius(2.0) * 25.0);
}

#[test]
fn test_distance_to() {
    let a = Body::new(BodyId(0), Point2::new(0.0, 0.0), 1.0, "red", Vector2::zeros());
    let b = Body::new(BodyId(1), Point2::new(3.0, 4.0), 1.0, "blue", Vector2::zeros());

    assert_eq!(a.distance_to(&b), 5.0);
    assert_eq!(b.distance_to(&a), 5.0);
}

#[test]
fn test_color_has_no_physical_effect() {
    let a = Body::new(BodyId(0), Point2::origin(), 2.0, "red", Vector2::zeros());
    let b = Body::new(BodyId(0), Point2::origin(), 2.0, "blue", Vector2::zeros());

    assert_eq!(a.mass, b.mass);
    assert_eq!(a.radius, b.radius);
}

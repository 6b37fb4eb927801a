use std::f64::consts::PI;

use eframe::egui;
use egui::{pos2, Pos2};

use crate::types::{Bullet, Ship, Vector2};

// Fixed view parameters - grouped via inherent associated consts on unit structs
pub struct Viewport;
impl Viewport {
    pub const WIDTH: f64 = 1600.0;
    pub const HEIGHT: f64 = 800.0;
    pub const ZOOM: f64 = 0.1;
    pub const TARGET_FPS: u32 = 60;
}

pub struct ShipShape;
impl ShipShape {
    /// Distance in world units from the ship position to every hull vertex.
    pub const SIZE: f64 = 100.0;
    /// Angle between the tail and each rear vertex, in radians.
    pub const WING_ANGLE: f64 = 0.5;
}

pub const BULLET_RADIUS: f32 = 1.0;

fn viewport_center() -> Vector2 {
    Vector2::new(Viewport::WIDTH * 0.5, Viewport::HEIGHT * 0.5)
}

pub fn world_to_screen(pos: Vector2) -> Vector2 {
    pos * Viewport::ZOOM + viewport_center()
}

#[allow(dead_code)]
pub fn screen_to_world(pos: Vector2) -> Vector2 {
    (pos - viewport_center()) / Viewport::ZOOM
}

pub fn to_pos2(v: Vector2) -> Pos2 {
    pos2(v.x as f32, v.y as f32)
}

/// Hull vertices in world space: nose, left rear, right rear.
pub fn ship_hull(ship: &Ship) -> [Vector2; 3] {
    let heading = ship.heading();
    [0.0, PI + ShipShape::WING_ANGLE, PI - ShipShape::WING_ANGLE]
        .map(|angle| ship.position + Vector2::from_angle(angle).rotate(heading) * ShipShape::SIZE)
}

/// Hull vertices in screen space.
pub fn ship_triangle(ship: &Ship) -> [Vector2; 3] {
    ship_hull(ship).map(world_to_screen)
}

pub fn bullet_point(bullet: &Bullet) -> Vector2 {
    world_to_screen(bullet.position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const EPS: f64 = 1e-9;

    fn sample_positions() -> Vec<Vector2> {
        let coords = [-12_345.5, -800.0, -1.0, 0.0, 0.25, 50.0, 4_000.0, 98_765.0];
        coords
            .iter()
            .flat_map(|&x| coords.iter().map(move |&y| Vector2::new(x, y)))
            .collect()
    }

    fn sample_headings() -> Vec<Vector2> {
        (0..72)
            .map(|i| f64::from(i) * 5.0_f64.to_radians())
            .flat_map(|a| {
                [0.001, 1.0, 37.5].map(move |len| Vector2::from_angle(a) * len)
            })
            .collect()
    }

    #[test]
    fn origin_maps_to_viewport_center() {
        assert_eq!(world_to_screen(Vector2::ZERO), Vector2::new(800.0, 400.0));
    }

    #[test]
    fn bullet_example() {
        let bullet = Bullet {
            position: Vector2::new(50.0, 50.0),
        };
        let p = bullet_point(&bullet);
        assert_abs_diff_eq!(p.x, 805.0, epsilon = EPS);
        assert_abs_diff_eq!(p.y, 405.0, epsilon = EPS);
    }

    #[test]
    fn nose_example() {
        let ship = Ship {
            position: Vector2::ZERO,
            rotation_vector: Vector2::new(1.0, 0.0),
        };
        let [nose, _, _] = ship_triangle(&ship);
        assert_abs_diff_eq!(nose.x, 810.0, epsilon = EPS);
        assert_abs_diff_eq!(nose.y, 400.0, epsilon = EPS);
    }

    #[test]
    fn transform_round_trips_through_inverse() {
        for p in sample_positions() {
            let screen = world_to_screen(p);
            let again = world_to_screen(screen_to_world(screen));
            assert_abs_diff_eq!(again.x, screen.x, epsilon = 1e-6);
            assert_abs_diff_eq!(again.y, screen.y, epsilon = 1e-6);
        }
    }

    #[test]
    fn hull_vertices_keep_fixed_distance() {
        for position in sample_positions() {
            for rotation_vector in sample_headings() {
                let ship = Ship {
                    position,
                    rotation_vector,
                };
                for vertex in ship_hull(&ship) {
                    assert_abs_diff_eq!(
                        vertex.distance(position),
                        ShipShape::SIZE,
                        epsilon = 1e-6
                    );
                }
            }
        }
    }

    #[test]
    fn rear_vertices_mirror_around_heading() {
        let ship = Ship {
            position: Vector2::new(10.0, -20.0),
            rotation_vector: Vector2::new(0.0, 2.0),
        };
        let [nose, left, right] = ship_hull(&ship);
        assert_abs_diff_eq!(nose.x, 10.0, epsilon = EPS);
        assert_abs_diff_eq!(nose.y, 80.0, epsilon = EPS);
        // Both rear vertices sit behind the ship, symmetric about its axis.
        assert!(left.y < ship.position.y && right.y < ship.position.y);
        assert_abs_diff_eq!(left.y, right.y, epsilon = EPS);
        assert_abs_diff_eq!(left.x - 10.0, -(right.x - 10.0), epsilon = EPS);
    }

    #[test]
    fn zero_heading_gives_finite_triangle() {
        let ship = Ship {
            position: Vector2::new(5.0, 5.0),
            rotation_vector: Vector2::ZERO,
        };
        let triangle = ship_triangle(&ship);
        assert!(triangle.iter().all(|v| v.is_finite()));
        let expected = ship_triangle(&Ship {
            position: ship.position,
            rotation_vector: crate::types::DEFAULT_HEADING,
        });
        assert_eq!(triangle, expected);
    }
}

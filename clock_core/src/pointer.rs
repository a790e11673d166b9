//! Pointer interaction - parallax offsets and click angles
//!
//! Every pointer event is handled on its own: no smoothing, no queue.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// How far the tick ring drifts, opposite the pointer
pub const TICK_RING_PARALLAX: f32 = 0.01;
/// How far the hand group drifts, toward the pointer
pub const HAND_GROUP_PARALLAX: f32 = 0.016;

/// Which pointer reactions are active
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionMode {
    /// Pointer moves shift the tick ring and hand group
    #[default]
    Parallax,
    /// Pointer clicks report an angle around the dial center
    ClickToAngle,
    Both,
}

impl InteractionMode {
    pub fn parallax(self) -> bool {
        matches!(self, InteractionMode::Parallax | InteractionMode::Both)
    }

    pub fn click_to_angle(self) -> bool {
        matches!(self, InteractionMode::ClickToAngle | InteractionMode::Both)
    }

    /// Next mode, for cycling from the keyboard
    pub fn next(self) -> Self {
        match self {
            InteractionMode::Parallax => InteractionMode::ClickToAngle,
            InteractionMode::ClickToAngle => InteractionMode::Both,
            InteractionMode::Both => InteractionMode::Parallax,
        }
    }
}

impl std::fmt::Display for InteractionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InteractionMode::Parallax => write!(f, "Parallax"),
            InteractionMode::ClickToAngle => write!(f, "Click to angle"),
            InteractionMode::Both => write!(f, "Both"),
        }
    }
}

/// Pointer position relative to the dial center
///
/// `device` is in backing-store pixels; dividing by `resolution` brings it
/// back to stage coordinates.
pub fn pointer_offset(device: Point, resolution: f32, center: Point) -> Point {
    device / resolution - center
}

/// Positions to write into the tick ring and hand group
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallax {
    pub tick_ring: Point,
    pub hand_group: Point,
}

pub fn parallax(offset: Point) -> Parallax {
    Parallax {
        tick_ring: -offset * TICK_RING_PARALLAX,
        hand_group: offset * HAND_GROUP_PARALLAX,
    }
}

/// Whole-degree angle of `offset` around the dial center
///
/// The arctangent of `y / x` is rounded, then shifted by quadrant:
/// `+0` for `x > 0, y >= 0`, `+180` for `x < 0`, `+360` for `x > 0, y < 0`.
/// The vertical axis is answered directly: straight up gives 360, straight
/// down gives 90, and the center itself gives 0.
pub fn click_angle(offset: Point) -> i32 {
    let (x, y) = (offset.x as f64, offset.y as f64);

    if x == 0.0 {
        return if y < 0.0 {
            360
        } else if y > 0.0 {
            90
        } else {
            0
        };
    }

    let raw = tan_degrees(y / x);
    let correction = if x < 0.0 {
        180
    } else if y < 0.0 {
        360
    } else {
        0
    };
    raw + correction
}

/// `atan` in whole degrees, rounding halves upward
fn tan_degrees(tan: f64) -> i32 {
    let degrees = tan.atan() / (std::f64::consts::PI / 180.0);
    (degrees + 0.5).floor() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point) -> bool {
        a.abs_diff_eq(b, 1e-4)
    }

    #[test]
    fn test_axis_angles() {
        assert_eq!(click_angle(Point::new(0.0, -10.0)), 360);
        assert_eq!(click_angle(Point::new(10.0, 0.0)), 0);
        assert_eq!(click_angle(Point::new(-10.0, 0.0)), 180);
        assert_eq!(click_angle(Point::new(0.0, 10.0)), 90);
        assert_eq!(click_angle(Point::ZERO), 0);
    }

    #[test]
    fn test_quadrant_angles() {
        assert_eq!(click_angle(Point::new(10.0, 10.0)), 45);
        assert_eq!(click_angle(Point::new(-10.0, 10.0)), 135);
        assert_eq!(click_angle(Point::new(-10.0, -10.0)), 225);
        assert_eq!(click_angle(Point::new(10.0, -10.0)), 315);
    }

    #[test]
    fn test_angles_are_rounded() {
        // atan(1/3) is about 18.43 degrees
        assert_eq!(click_angle(Point::new(30.0, 10.0)), 18);
        // atan(2) is about 63.43 degrees
        assert_eq!(click_angle(Point::new(-5.0, -10.0)), 243);
    }

    #[test]
    fn test_pointer_offset_divides_by_resolution() {
        let offset = pointer_offset(Point::new(900.0, 600.0), 2.0, Point::new(400.0, 300.0));
        assert!(close(offset, Point::new(50.0, 0.0)));
    }

    #[test]
    fn test_parallax_scales() {
        let p = parallax(Point::new(50.0, 0.0));
        assert!(close(p.tick_ring, Point::new(-0.5, 0.0)));
        assert!(close(p.hand_group, Point::new(0.8, 0.0)));

        let p = parallax(Point::new(-100.0, 25.0));
        assert!(close(p.tick_ring, Point::new(1.0, -0.25)));
        assert!(close(p.hand_group, Point::new(-1.6, 0.4)));
    }

    #[test]
    fn test_mode_flags() {
        assert!(InteractionMode::Parallax.parallax());
        assert!(!InteractionMode::Parallax.click_to_angle());
        assert!(InteractionMode::Both.parallax() && InteractionMode::Both.click_to_angle());
        assert_eq!(InteractionMode::Both.next(), InteractionMode::Parallax);
    }
}

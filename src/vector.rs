//! 2D vector arithmetic
//!
//! Plain `Copy` value type. Every operation returns a new vector.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

/// 2D vector with f64 coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Vec2 { x, y }
    }

    /// Zero vector
    pub const fn zero() -> Self {
        Vec2::new(0.0, 0.0)
    }

    /// Unit vector at `theta` radians, counter-clockwise from +X
    pub fn unit(theta: f64) -> Self {
        let (s, c) = theta.sin_cos();
        Vec2::new(c, s)
    }

    pub fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }

    /// Multiply both components by `k`
    pub fn scale(self, k: f64) -> Vec2 {
        Vec2::new(self.x * k, self.y * k)
    }

    /// Rotate counter-clockwise by `theta` radians
    pub fn rotate(self, theta: f64) -> Vec2 {
        let (st, ct) = theta.sin_cos();
        Vec2::new(ct * self.x - st * self.y, st * self.x + ct * self.y)
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, other: Vec2) -> Vec2 {
        Vec2::add(self, other)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, k: f64) -> Vec2 {
        self.scale(k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPS: f64 = 1e-9;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    #[test]
    fn test_unit_angles() {
        assert!(close(Vec2::unit(0.0), Vec2::new(1.0, 0.0)));
        assert!(close(Vec2::unit(PI / 2.0), Vec2::new(0.0, 1.0)));
        assert!(close(Vec2::unit(PI), Vec2::new(-1.0, 0.0)));
    }

    #[test]
    fn test_add_and_scale() {
        let v = Vec2::new(1.5, -2.0) + Vec2::new(0.5, 4.0);
        assert_eq!(v, Vec2::new(2.0, 2.0));
        assert_eq!(v * 0.5, Vec2::new(1.0, 1.0));
        assert_eq!(Vec2::new(3.0, 4.0).scale(-1.0), Vec2::new(-3.0, -4.0));
    }

    #[test]
    fn test_rotate_ccw() {
        let r = Vec2::new(1.0, 0.0).rotate(PI / 2.0);
        assert!(close(r, Vec2::new(0.0, 1.0)));

        let r = Vec2::new(0.0, 1.0).rotate(-PI / 2.0);
        assert!(close(r, Vec2::new(1.0, 0.0)));

        // Rotation preserves length
        let v = Vec2::new(3.0, 4.0);
        assert!((v.rotate(1.234).length() - 5.0).abs() < EPS);
    }
}

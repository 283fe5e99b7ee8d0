//! Turtle cursor for 2D turtle graphics
//!
//! A turtle is a position plus a unit heading. Moves and turns produce new
//! turtles and leave the receiver untouched, so saving one on a stack is a copy.

use serde::Serialize;

use crate::vector::Vec2;

/// Position and heading. `dir` always has unit length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Turtle {
    pub pos: Vec2,
    pub dir: Vec2,
}

impl Turtle {
    pub fn new(pos: Vec2, dir: Vec2) -> Self {
        Turtle { pos, dir }
    }

    /// Turtle at the origin, heading along +X
    pub fn init() -> Self {
        Turtle::new(Vec2::zero(), Vec2::unit(0.0))
    }

    /// Step one unit along the heading
    pub fn move_dir(self) -> Self {
        Turtle::new(self.pos + self.dir, self.dir)
    }

    /// Turn by `theta` radians (positive is counter-clockwise)
    pub fn turn(self, theta: f64) -> Self {
        Turtle::new(self.pos, self.dir.rotate(theta))
    }
}

impl Default for Turtle {
    fn default() -> Self {
        Turtle::init()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_init() {
        let t = Turtle::init();
        assert_eq!(t.pos, Vec2::zero());
        assert_eq!(t.dir, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_move_and_turn() {
        let t = Turtle::init().move_dir().move_dir();
        assert_eq!(t.pos, Vec2::new(2.0, 0.0));

        let t = t.turn(PI / 2.0);
        // Turning doesn't move
        assert_eq!(t.pos, Vec2::new(2.0, 0.0));

        let t = t.move_dir();
        assert!((t.pos.x - 2.0).abs() < 1e-9);
        assert!((t.pos.y - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_heading_stays_unit() {
        let mut t = Turtle::init();
        for i in 0..10_000 {
            let theta = if i % 3 == 0 { -0.7 } else { 2.0 * PI / 7.0 };
            t = t.turn(theta);
        }
        assert!((t.dir.length() - 1.0).abs() < 1e-9);
    }
}

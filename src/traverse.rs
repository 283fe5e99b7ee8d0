//! Turtle traversal of a rewritten string
//!
//! # Symbols
//! * `A`, `B`, `C`: draw one unit forward
//! * `+` / `-`: turn by +theta / -theta
//! * `[` / `]`: save / restore the turtle
//!
//! Every other symbol is ignored.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::turtle::Turtle;
use crate::vector::Vec2;

/// Axis-aligned bounding box. Starts at the origin, never at ±infinity.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    /// Grow to include `p`
    pub fn include(&mut self, p: Vec2) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// One drawn line
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub from: Vec2,
    pub to: Vec2,
}

/// Traversal output: points `2k` and `2k + 1` form segment `k`
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Geometry {
    pub points: Vec<Vec2>,
    pub bounds: Bounds,
}

impl Geometry {
    pub fn segment_count(&self) -> usize {
        self.points.len() / 2
    }

    /// Segments in drawing order
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.points.chunks_exact(2).map(|pair| Segment {
            from: pair[0],
            to: pair[1],
        })
    }
}

/// Walk `axiom` with a fresh turtle, turning by `theta` radians.
///
/// Fails on the first `]` that has no saved turtle to restore. Turtles still
/// saved when the string ends are dropped.
pub fn traverse(axiom: &str, theta: f64) -> Result<Geometry> {
    let mut turtle = Turtle::init();
    let mut saved: Vec<Turtle> = Vec::new();
    let mut geometry = Geometry::default();

    for (position, c) in axiom.chars().enumerate() {
        match c {
            'A' | 'B' | 'C' => {
                let from = turtle.pos;
                turtle = turtle.move_dir();
                let to = turtle.pos;

                geometry.bounds.include(to);
                geometry.points.push(from);
                geometry.points.push(to);
            }
            '+' => turtle = turtle.turn(theta),
            '-' => turtle = turtle.turn(-theta),
            '[' => saved.push(turtle),
            ']' => {
                turtle = saved.pop().ok_or_else(|| {
                    tracing::warn!(position, "']' with empty turtle stack");
                    Error::UnbalancedBracket { position }
                })?;
            }
            _ => {}
        }
    }

    if !saved.is_empty() {
        tracing::debug!(open = saved.len(), "traversal ended with unclosed '['");
    }

    Ok(geometry)
}

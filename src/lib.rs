//! L-system rewriting and 2D turtle traversal.
//!
//! An [`LSystem`] is rewritten generation by generation inside a
//! [`Simulation`]; traversing the current string yields a [`Geometry`] of
//! ordered points (paired into segments) and its bounding box, ready for an
//! external renderer.

pub mod config;
pub mod error;
pub mod export;
pub mod grammar;
pub mod logging;
pub mod lsystem;
pub mod presets;
pub mod simulation;
pub mod traverse;
pub mod turtle;
pub mod vector;

pub use error::{Error, Result};
pub use grammar::Grammar;
pub use lsystem::{rewrite, LSystem};
pub use presets::{preset, Preset, PRESETS};
pub use simulation::{Frame, Simulation};
pub use traverse::{traverse, Bounds, Geometry, Segment};
pub use turtle::Turtle;
pub use vector::Vec2;

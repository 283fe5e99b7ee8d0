//! Simulation - one L-system run
//!
//! Owns the current rewritten string and the geometry of the last successful
//! traversal. `iterate` and `traverse_axiom` can be interleaved freely, e.g.
//! to draw every intermediate generation.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::lsystem::{rewrite, LSystem};
use crate::traverse::{traverse, Bounds, Geometry};
use crate::vector::Vec2;

/// Geometry of a single generation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub generation: usize,
    pub geometry: Geometry,
}

#[derive(Debug, Clone)]
pub struct Simulation {
    lsystem: LSystem,
    current: String,
    symbols: usize,
    generation: usize,
    geometry: Geometry,
}

impl Simulation {
    /// Start at generation 0, where the current string is the axiom
    pub fn new(lsystem: LSystem) -> Self {
        let current = lsystem.axiom.clone();
        let symbols = current.chars().count();
        Self {
            lsystem,
            current,
            symbols,
            generation: 0,
            geometry: Geometry::default(),
        }
    }

    pub fn lsystem(&self) -> &LSystem {
        &self.lsystem
    }

    /// Current rewritten string
    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Geometry of the last successful traversal
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn points(&self) -> &[Vec2] {
        &self.geometry.points
    }

    pub fn bounds(&self) -> Bounds {
        self.geometry.bounds
    }

    /// Number of symbols (chars, not bytes) in the current string
    pub fn symbols(&self) -> usize {
        self.symbols
    }

    /// Advance one generation
    pub fn iterate(&mut self) {
        let next = rewrite(&self.current, &self.lsystem.grammar);
        let symbols = next.chars().count();
        self.commit(next, symbols);
    }

    /// Advance `n` generations
    pub fn iterate_n(&mut self, n: usize) {
        for _ in 0..n {
            self.iterate();
        }
    }

    /// Advance up to `n` generations, refusing any generation with more than
    /// `max_symbols` symbols. On error the run stays at the last generation
    /// that fit.
    pub fn iterate_capped(&mut self, n: usize, max_symbols: usize) -> Result<()> {
        for _ in 0..n {
            let next = rewrite(&self.current, &self.lsystem.grammar);
            let symbols = next.chars().count();
            if symbols > max_symbols {
                tracing::warn!(
                    generation = self.generation + 1,
                    symbols,
                    limit = max_symbols,
                    "Generation exceeds symbol limit"
                );
                return Err(Error::SymbolLimit {
                    generation: self.generation + 1,
                    len: symbols,
                    limit: max_symbols,
                });
            }
            self.commit(next, symbols);
        }
        Ok(())
    }

    fn commit(&mut self, next: String, symbols: usize) {
        self.current = next;
        self.symbols = symbols;
        self.generation += 1;
        tracing::debug!(
            generation = self.generation,
            symbols = self.symbols,
            "Rewrote axiom"
        );
    }

    /// Recompute points and bounds from the current string.
    ///
    /// On failure the previous geometry is kept.
    pub fn traverse_axiom(&mut self) -> Result<&Geometry> {
        let geometry = traverse(&self.current, self.lsystem.theta)?;
        tracing::debug!(
            generation = self.generation,
            segments = geometry.segment_count(),
            "Traversed axiom"
        );
        self.geometry = geometry;
        Ok(&self.geometry)
    }

    /// Traverse the current generation and each of the next `n`, one frame each
    pub fn trace(&mut self, n: usize) -> Result<Vec<Frame>> {
        let mut frames = Vec::with_capacity(n.saturating_add(1));
        for step in 0..=n {
            if step > 0 {
                self.iterate();
            }
            let geometry = self.traverse_axiom()?.clone();
            frames.push(Frame {
                generation: self.generation,
                geometry,
            });
        }
        Ok(frames)
    }
}

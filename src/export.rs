//! JSON export for external renderers

use serde::Serialize;
use std::path::Path;

use crate::simulation::{Frame, Simulation};
use crate::traverse::Bounds;
use crate::vector::Vec2;

/// Geometry of one generation, as written to disk
#[derive(Debug, Clone, Serialize)]
pub struct FrameDocument<'a> {
    pub generation: usize,
    pub segments: usize,
    pub bounds: Bounds,
    pub points: &'a [Vec2],
}

/// Single-generation export
#[derive(Debug, Clone, Serialize)]
pub struct GeometryDocument<'a> {
    pub system: &'a str,
    pub theta: f64,
    pub symbols: usize,
    #[serde(flatten)]
    pub frame: FrameDocument<'a>,
    pub generated: String,
}

/// Every generation of a traced run
#[derive(Debug, Clone, Serialize)]
pub struct TraceDocument<'a> {
    pub system: &'a str,
    pub theta: f64,
    pub frames: Vec<FrameDocument<'a>>,
    pub generated: String,
}

impl<'a> From<&'a Frame> for FrameDocument<'a> {
    fn from(frame: &'a Frame) -> Self {
        FrameDocument {
            generation: frame.generation,
            segments: frame.geometry.segment_count(),
            bounds: frame.geometry.bounds,
            points: &frame.geometry.points,
        }
    }
}

impl<'a> GeometryDocument<'a> {
    /// Snapshot of the simulation's last traversal
    pub fn new(system: &'a str, sim: &'a Simulation) -> Self {
        GeometryDocument {
            system,
            theta: sim.lsystem().theta,
            symbols: sim.symbols(),
            frame: FrameDocument {
                generation: sim.generation(),
                segments: sim.geometry().segment_count(),
                bounds: sim.bounds(),
                points: sim.points(),
            },
            generated: chrono::Local::now().to_rfc3339(),
        }
    }
}

impl<'a> TraceDocument<'a> {
    pub fn new(system: &'a str, theta: f64, frames: &'a [Frame]) -> Self {
        TraceDocument {
            system,
            theta,
            frames: frames.iter().map(FrameDocument::from).collect(),
            generated: chrono::Local::now().to_rfc3339(),
        }
    }
}

/// Write any document as pretty JSON, creating parent directories
pub fn write_json<T: Serialize>(path: &Path, doc: &T) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, serde_json::to_string_pretty(doc)?)?;
    tracing::info!("Wrote {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::preset;

    #[test]
    fn test_geometry_document_shape() {
        let mut sim = Simulation::new(preset("dragon").unwrap().lsystem());
        sim.iterate();
        sim.traverse_axiom().unwrap();

        let doc = GeometryDocument::new("dragon", &sim);
        let json = serde_json::to_value(&doc).unwrap();

        assert_eq!(json["system"], "dragon");
        assert_eq!(json["generation"], 1);
        assert_eq!(json["symbols"], 3);
        assert_eq!(json["segments"], 2);
        assert_eq!(json["points"].as_array().map(Vec::len), Some(4));
        assert_eq!(json["points"][1]["x"], 1.0);
        assert_eq!(json["bounds"]["min"]["x"], 0.0);
        assert!(json["generated"].is_string());
    }

    #[test]
    fn test_symbols_counts_chars() {
        let grammar = crate::grammar::Grammar::new().with_rule('é', "éA");
        let mut sim = Simulation::new(crate::lsystem::LSystem::new("é", grammar, 1.0));
        sim.iterate_n(2);
        sim.traverse_axiom().unwrap();

        // "éAA": 3 symbols, 4 bytes
        let json = serde_json::to_value(GeometryDocument::new("accent", &sim)).unwrap();
        assert_eq!(json["symbols"], 3);
        assert_eq!(json["segments"], 2);
    }

    #[test]
    fn test_trace_document_written() {
        let mut sim = Simulation::new(preset("tree").unwrap().lsystem());
        let frames = sim.trace(2).unwrap();
        let doc = TraceDocument::new("tree", sim.lsystem().theta, &frames);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("tree.json");
        write_json(&path, &doc).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&content).unwrap();
        let frames = json["frames"].as_array().unwrap();
        assert_eq!(frames.len(), 3);
        // Tree: 1 A -> "B[+A]-A" (3 drawn) -> 8 drawn
        let segments: Vec<u64> = frames.iter().filter_map(|f| f["segments"].as_u64()).collect();
        assert_eq!(segments, vec![1, 3, 8]);
    }
}

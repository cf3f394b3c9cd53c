//! Hatch entity
//!
//! Only solid fills with edge-defined boundary paths are modeled; that is
//! all the marker glyph needs.

use crate::entities::{Entity, EntityCommon};
use crate::types::{Vector2, Vector3};

/// A straight boundary edge.
#[derive(Debug, Clone, PartialEq)]
pub struct LineEdge {
    pub start: Vector2,
    pub end: Vector2,
}

/// A circular arc boundary edge. Angles are in degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct CircularArcEdge {
    pub center: Vector2,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub counter_clockwise: bool,
}

/// One edge of a boundary path.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryEdge {
    Line(LineEdge),
    Arc(CircularArcEdge),
}

/// A closed loop of boundary edges.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoundaryPath {
    pub edges: Vec<BoundaryEdge>,
}

impl BoundaryPath {
    pub fn new() -> Self {
        BoundaryPath { edges: Vec::new() }
    }

    pub fn add_edge(&mut self, edge: BoundaryEdge) -> &mut Self {
        self.edges.push(edge);
        self
    }

    pub fn add_line(&mut self, start: Vector2, end: Vector2) -> &mut Self {
        self.add_edge(BoundaryEdge::Line(LineEdge { start, end }))
    }

    pub fn add_arc(
        &mut self,
        center: Vector2,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> &mut Self {
        self.add_edge(BoundaryEdge::Arc(CircularArcEdge {
            center,
            radius,
            start_angle,
            end_angle,
            counter_clockwise: true,
        }))
    }
}

/// A hatch fill.
#[derive(Debug, Clone, PartialEq)]
pub struct Hatch {
    pub common: EntityCommon,
    pub elevation: f64,
    pub normal: Vector3,
    pub pattern_name: String,
    pub is_solid: bool,
    pub is_associative: bool,
    /// Hatch style (group 75): 0 = odd parity.
    pub style: i16,
    /// Pattern type (group 76): 1 = predefined.
    pub pattern_type: i16,
    pub paths: Vec<BoundaryPath>,
    pub seed_points: Vec<Vector2>,
}

impl Hatch {
    /// A solid fill with no boundary paths yet.
    pub fn solid() -> Self {
        Hatch {
            common: EntityCommon::new(),
            elevation: 0.0,
            normal: Vector3::UNIT_Z,
            pattern_name: "SOLID".to_string(),
            is_solid: true,
            is_associative: false,
            style: 0,
            pattern_type: 1,
            paths: Vec::new(),
            seed_points: Vec::new(),
        }
    }

    pub fn add_path(&mut self, path: BoundaryPath) -> &mut Self {
        self.paths.push(path);
        self
    }
}

impl Entity for Hatch {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type_name(&self) -> &'static str {
        "HATCH"
    }
}

//! Leader entity

use crate::entities::{Entity, EntityCommon};
use crate::types::{Vector3, Vector2};

/// Leader path shape (group code 72).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeaderPathType {
    #[default]
    StraightSegments = 0,
    Spline = 1,
}

/// What the leader annotates (group code 73).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeaderCreationType {
    WithTextAnnotation = 0,
    WithToleranceAnnotation = 1,
    WithBlockReferenceAnnotation = 2,
    #[default]
    WithoutAnnotation = 3,
}

/// A leader line annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct Leader {
    pub common: EntityCommon,
    /// Name of the dimension style driving arrowheads and text settings.
    pub dimension_style: String,
    pub arrow_enabled: bool,
    pub path_type: LeaderPathType,
    pub creation_type: LeaderCreationType,
    pub hookline_enabled: bool,
    pub text_height: f64,
    pub text_width: f64,
    pub vertices: Vec<Vector3>,
    pub normal: Vector3,
    pub horizontal_direction: Vector3,
}

impl Leader {
    pub fn new() -> Self {
        Leader {
            common: EntityCommon::new(),
            dimension_style: "Standard".to_string(),
            arrow_enabled: true,
            path_type: LeaderPathType::StraightSegments,
            creation_type: LeaderCreationType::WithoutAnnotation,
            hookline_enabled: false,
            text_height: 0.0,
            text_width: 0.0,
            vertices: Vec::new(),
            normal: Vector3::UNIT_Z,
            horizontal_direction: Vector3::new(1.0, 0.0, 0.0),
        }
    }

    pub fn with_style(dimension_style: impl Into<String>) -> Self {
        let mut leader = Leader::new();
        leader.dimension_style = dimension_style.into();
        leader
    }

    pub fn add_vertex(&mut self, vertex: Vector3) -> &mut Self {
        self.vertices.push(vertex);
        self
    }

    pub fn add_plane_vertex(&mut self, point: Vector2) -> &mut Self {
        self.add_vertex(Vector3::from_plane(point))
    }
}

impl Default for Leader {
    fn default() -> Self {
        Leader::new()
    }
}

impl Entity for Leader {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type_name(&self) -> &'static str {
        "LEADER"
    }
}

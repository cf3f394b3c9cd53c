//! Line entity

use crate::entities::{Entity, EntityCommon};
use crate::types::Vector3;

/// A straight line segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub common: EntityCommon,
    pub start: Vector3,
    pub end: Vector3,
    pub normal: Vector3,
    pub thickness: f64,
}

impl Line {
    pub fn new(start: Vector3, end: Vector3) -> Self {
        Line {
            common: EntityCommon::new(),
            start,
            end,
            normal: Vector3::UNIT_Z,
            thickness: 0.0,
        }
    }

    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Line::new(Vector3::new(x1, y1, 0.0), Vector3::new(x2, y2, 0.0))
    }
}

impl Entity for Line {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type_name(&self) -> &'static str {
        "LINE"
    }
}

//! Insert (block reference) entity

use crate::entities::{Entity, EntityCommon};
use crate::types::{Vector2, Vector3};

/// A reference to a block definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub common: EntityCommon,
    pub block_name: String,
    pub insert_point: Vector3,
    pub x_scale: f64,
    pub y_scale: f64,
    pub z_scale: f64,
    /// Rotation angle in degrees.
    pub rotation: f64,
    pub normal: Vector3,
}

impl Insert {
    pub fn new(block_name: impl Into<String>, insert_point: Vector3) -> Self {
        Insert {
            common: EntityCommon::new(),
            block_name: block_name.into(),
            insert_point,
            x_scale: 1.0,
            y_scale: 1.0,
            z_scale: 1.0,
            rotation: 0.0,
            normal: Vector3::UNIT_Z,
        }
    }

    pub fn at_plane_point(block_name: impl Into<String>, point: Vector2) -> Self {
        Insert::new(block_name, Vector3::from_plane(point))
    }
}

impl Entity for Insert {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type_name(&self) -> &'static str {
        "INSERT"
    }
}

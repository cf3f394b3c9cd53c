//! Circle entity

use crate::entities::{Entity, EntityCommon};
use crate::types::{Vector3, Vector2};

/// A full circle.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub common: EntityCommon,
    pub center: Vector3,
    pub radius: f64,
    pub normal: Vector3,
    pub thickness: f64,
}

impl Circle {
    pub fn new(center: Vector3, radius: f64) -> Self {
        Circle {
            common: EntityCommon::new(),
            center,
            radius,
            normal: Vector3::UNIT_Z,
            thickness: 0.0,
        }
    }

    pub fn from_plane(center: Vector2, radius: f64) -> Self {
        Circle::new(Vector3::from_plane(center), radius)
    }
}

impl Entity for Circle {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type_name(&self) -> &'static str {
        "CIRCLE"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_new() {
        let circle = Circle::new(Vector3::new(1.0, 2.0, 0.0), 4.0);
        assert_eq!(circle.radius, 4.0);
        assert_eq!(circle.normal, Vector3::UNIT_Z);
        assert_eq!(circle.common.layer, "0");
    }
}

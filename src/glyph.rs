//! The borehole marker block
//!
//! The marker is the usual geotechnical target symbol: a circle of radius
//! 4 with a crosshair reaching past the rim, and the upper-left and
//! lower-right quadrants filled solid. Everything is drawn on layer "0"
//! with ByLayer color, so each INSERT takes the color of its own layer.

use crate::entities::{BoundaryPath, Circle, EntityType, Hatch, Line};
use crate::tables::BlockRecord;
use crate::types::{Vector2, Vector3};

/// Name of the marker block definition.
pub const TARGET_BLOCK_NAME: &str = "SONDAGEM";

/// Radius of the marker circle.
pub const TARGET_RADIUS: f64 = 4.0;

/// Half-length of each crosshair line.
pub const CROSSHAIR_REACH: f64 = 5.0;

/// Build the marker block definition.
pub fn target_block() -> BlockRecord {
    let mut block = BlockRecord::new(TARGET_BLOCK_NAME);

    block.add_entity(EntityType::Circle(Circle::new(Vector3::ZERO, TARGET_RADIUS)));
    block.add_entity(EntityType::Line(Line::from_coords(
        -CROSSHAIR_REACH,
        0.0,
        CROSSHAIR_REACH,
        0.0,
    )));
    block.add_entity(EntityType::Line(Line::from_coords(
        0.0,
        -CROSSHAIR_REACH,
        0.0,
        CROSSHAIR_REACH,
    )));

    let mut hatch = Hatch::solid();
    hatch.add_path(quarter_path(90.0, 180.0));
    hatch.add_path(quarter_path(270.0, 360.0));
    block.add_entity(EntityType::Hatch(hatch));

    block
}

/// A quarter-disc boundary: the rim arc from `start_deg` to `end_deg`,
/// closed by two radial lines through the center.
fn quarter_path(start_deg: f64, end_deg: f64) -> BoundaryPath {
    let arc_start = Vector2::from_deg_angle(start_deg, TARGET_RADIUS);
    let arc_end = Vector2::from_deg_angle(end_deg, TARGET_RADIUS);

    let mut path = BoundaryPath::new();
    path.add_arc(Vector2::ZERO, TARGET_RADIUS, start_deg, end_deg)
        .add_line(arc_end, Vector2::ZERO)
        .add_line(Vector2::ZERO, arc_start);
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::BoundaryEdge;

    #[test]
    fn test_target_block_contents() {
        let block = target_block();
        assert_eq!(block.name, TARGET_BLOCK_NAME);
        assert_eq!(block.entities.len(), 4);

        let circles = block
            .entities
            .iter()
            .filter(|e| matches!(e, EntityType::Circle(_)))
            .count();
        let lines = block
            .entities
            .iter()
            .filter(|e| matches!(e, EntityType::Line(_)))
            .count();
        let hatches = block
            .entities
            .iter()
            .filter(|e| matches!(e, EntityType::Hatch(_)))
            .count();
        assert_eq!((circles, lines, hatches), (1, 2, 1));
    }

    #[test]
    fn test_hatch_has_two_quarter_paths() {
        let block = target_block();
        let hatch = block
            .entities
            .iter()
            .find_map(|e| match e {
                EntityType::Hatch(h) => Some(h),
                _ => None,
            })
            .unwrap();
        assert_eq!(hatch.paths.len(), 2);
        for path in &hatch.paths {
            assert_eq!(path.edges.len(), 3);
            assert!(matches!(path.edges[0], BoundaryEdge::Arc(_)));
        }
    }

    #[test]
    fn test_quarter_path_closes_through_center() {
        let path = quarter_path(90.0, 180.0);
        match (&path.edges[1], &path.edges[2]) {
            (BoundaryEdge::Line(first), BoundaryEdge::Line(second)) => {
                // (-4,0) -> (0,0) -> (0,4)
                assert!((first.start.x + TARGET_RADIUS).abs() < 1e-9);
                assert!(first.end.length() < 1e-9);
                assert!(second.start.length() < 1e-9);
                assert!((second.end.y - TARGET_RADIUS).abs() < 1e-9);
            }
            _ => panic!("expected radial line edges"),
        }
    }
}

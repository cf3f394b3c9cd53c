//! Site plan assembly
//!
//! Turns borehole groups into a finished drawing: one layer per group
//! with an allocated color, one shared marker block, and per borehole an
//! INSERT plus a leader-and-text label.

use crate::allocator::{assign_colors, LayerRequest};
use crate::document::CadDocument;
use crate::entities::{Entity, EntityType, Insert, Leader, LeaderCreationType, Text};
use crate::error::{DxfError, Result};
use crate::glyph::{target_block, TARGET_BLOCK_NAME};
use crate::io::dxf::DxfWriter;
use crate::model::BoreholeGroup;
use crate::palette::{Palette, AVAILABLE_COLORS};
use crate::tables::{DimStyle, Layer, TextStyle};
use crate::types::{Color, Vector2, Vector3};

/// Dimension style used by the label leaders.
pub const LEADER_STYLE_NAME: &str = "Sondagens";

/// Text style used by the labels.
pub const LABEL_TEXT_STYLE: &str = "Arial";

/// Default leader direction, degrees counter-clockwise from east.
pub const DEFAULT_LABEL_ANGLE: f64 = 45.0;

/// Default leader segment length.
pub const DEFAULT_LABEL_SEGMENT: f64 = 10.0;

/// Label text height.
pub const LABEL_TEXT_HEIGHT: f64 = 2.5;

/// Gap between the leader end and the label text.
pub const LANDING_GAP: f64 = 1.0;

/// Generate a site plan DXF from borehole groups, using the standard
/// palette for layers without an explicit color.
pub fn generate_boreholes_dxf(groups: &[BoreholeGroup]) -> Result<String> {
    generate_with_palette(groups, &AVAILABLE_COLORS)
}

/// Generate a site plan DXF with a caller-supplied palette.
pub fn generate_with_palette(groups: &[BoreholeGroup], palette: &Palette) -> Result<String> {
    let document = assemble_document(groups, palette)?;
    DxfWriter::new(document).write_to_string()
}

/// Build the drawing document without serializing it. Useful when the
/// caller wants to inspect notifications or add further entities.
pub fn assemble_document(groups: &[BoreholeGroup], palette: &Palette) -> Result<CadDocument> {
    validate_groups(groups)?;

    let requests: Vec<LayerRequest> = groups
        .iter()
        .map(|g| LayerRequest::new(g.layer.clone(), g.color))
        .collect();
    let resolved = assign_colors(requests, palette)?;

    let mut document = CadDocument::new();
    setup_label_styles(&mut document)?;

    for layer in &resolved {
        document.add_layer(Layer::with_color(layer.name.clone(), Color::Index(layer.color)))?;
    }

    document.add_block(target_block())?;

    for group in groups {
        if group.boreholes.is_empty() {
            document
                .notifications
                .warning(format!("group \"{}\" has no boreholes", group.layer));
        }
        for borehole in &group.boreholes {
            place_marker(&mut document, &group.layer, borehole);
        }
    }

    Ok(document)
}

/// Layer names must be non-empty and unique, case-insensitively.
fn validate_groups(groups: &[BoreholeGroup]) -> Result<()> {
    let mut seen: Vec<String> = Vec::with_capacity(groups.len());
    for group in groups {
        if group.layer.trim().is_empty() {
            return Err(DxfError::InvalidLayerName(group.layer.clone()));
        }
        let key = group.layer.to_uppercase();
        if seen.contains(&key) {
            return Err(DxfError::DuplicateLayer(group.layer.clone()));
        }
        seen.push(key);
    }
    Ok(())
}

/// Register the Arial text style and the arrowless leader dimension style.
fn setup_label_styles(document: &mut CadDocument) -> Result<()> {
    document.add_text_style(TextStyle::with_font(LABEL_TEXT_STYLE, "arial.ttf"))?;
    document.add_dim_style(DimStyle::label_leader(LEADER_STYLE_NAME, LABEL_TEXT_STYLE))?;
    Ok(())
}

/// Place one marker: block insert, leader line, label text.
fn place_marker(document: &mut CadDocument, layer: &str, borehole: &crate::model::Borehole) {
    let target = Vector2::new(borehole.x, borehole.y);
    let angle = borehole.label_angle.unwrap_or(DEFAULT_LABEL_ANGLE);
    let segment = borehole
        .label_segment_length
        .unwrap_or(DEFAULT_LABEL_SEGMENT);
    let elbow = target + Vector2::from_deg_angle(angle, segment);

    // Short horizontal landing on the side the leader points to; the
    // label anchors at its far end.
    let points_left = angle.to_radians().cos() < 0.0;
    let landing = if points_left {
        Vector2::new(-LANDING_GAP, 0.0)
    } else {
        Vector2::new(LANDING_GAP, 0.0)
    };
    let landing_end = elbow + landing;

    let mut insert = Insert::at_plane_point(TARGET_BLOCK_NAME, target);
    insert.set_layer(layer);
    document.add_entity(EntityType::Insert(insert));

    let mut leader = Leader::with_style(LEADER_STYLE_NAME);
    leader.arrow_enabled = false;
    leader.creation_type = LeaderCreationType::WithTextAnnotation;
    leader.text_height = LABEL_TEXT_HEIGHT;
    leader
        .add_plane_vertex(target)
        .add_plane_vertex(elbow)
        .add_plane_vertex(landing_end);
    leader.set_layer(layer);
    document.add_entity(EntityType::Leader(leader));

    let anchor = Vector3::from_plane(landing_end);

    let mut text =
        Text::new(borehole.id.as_str(), anchor, LABEL_TEXT_HEIGHT).with_style(LABEL_TEXT_STYLE);
    if points_left {
        text = text.align_right();
    }
    text.set_layer(layer);
    document.add_entity(EntityType::Text(text));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Borehole;

    fn one_group() -> Vec<BoreholeGroup> {
        let mut group = BoreholeGroup::new("SPT");
        group.add_borehole(Borehole::new("S-01", 100.0, 200.0));
        vec![group]
    }

    #[test]
    fn test_assemble_places_three_entities_per_borehole() {
        let document = assemble_document(&one_group(), &Palette::standard()).unwrap();
        assert_eq!(document.entity_count(), 3);
        let kinds: Vec<&str> = document
            .entities()
            .map(|e| e.as_entity().entity_type_name())
            .collect();
        assert_eq!(kinds, vec!["INSERT", "LEADER", "TEXT"]);
    }

    #[test]
    fn test_marker_entities_live_on_group_layer() {
        let document = assemble_document(&one_group(), &Palette::standard()).unwrap();
        for entity in document.entities() {
            assert_eq!(entity.as_entity().layer(), "SPT");
        }
    }

    #[test]
    fn test_layer_gets_palette_color() {
        let document = assemble_document(&one_group(), &Palette::standard()).unwrap();
        let layer = document.layers.get("SPT").unwrap();
        assert_eq!(layer.color, Color::Index(2));
    }

    #[test]
    fn test_block_registered_once() {
        let mut groups = one_group();
        let mut second = BoreholeGroup::new("CPT");
        second.add_borehole(Borehole::new("C-01", 0.0, 0.0));
        second.add_borehole(Borehole::new("C-02", 10.0, 0.0));
        groups.push(second);

        let document = assemble_document(&groups, &Palette::standard()).unwrap();
        assert!(document.block_records.contains(TARGET_BLOCK_NAME));
        // model space, paper space and the marker block
        assert_eq!(document.block_records.len(), 3);
    }

    #[test]
    fn test_duplicate_layer_rejected_before_drawing() {
        let groups = vec![BoreholeGroup::new("SPT"), BoreholeGroup::new("spt")];
        let err = assemble_document(&groups, &Palette::standard()).unwrap_err();
        assert!(matches!(err, DxfError::DuplicateLayer(_)));
    }

    #[test]
    fn test_blank_layer_name_rejected() {
        let groups = vec![BoreholeGroup::new("  ")];
        let err = assemble_document(&groups, &Palette::standard()).unwrap_err();
        assert!(matches!(err, DxfError::InvalidLayerName(_)));
    }

    #[test]
    fn test_empty_group_warns() {
        let groups = vec![BoreholeGroup::new("SPT")];
        let document = assemble_document(&groups, &Palette::standard()).unwrap();
        assert_eq!(document.notifications.len(), 1);
    }

    #[test]
    fn test_westward_label_right_aligned() {
        let mut group = BoreholeGroup::new("SPT");
        let mut hole = Borehole::new("S-01", 0.0, 0.0);
        hole.label_angle = Some(135.0);
        group.add_borehole(hole);

        let document = assemble_document(&[group], &Palette::standard()).unwrap();
        let text = document
            .entities()
            .find_map(|e| match e {
                EntityType::Text(t) => Some(t),
                _ => None,
            })
            .unwrap();
        assert!(text.alignment_point.is_some());
        assert!(text.insertion_point.x < 0.0);
    }

    #[test]
    fn test_generated_output_is_deterministic() {
        let groups = one_group();
        let first = generate_boreholes_dxf(&groups).unwrap();
        let second = generate_boreholes_dxf(&groups).unwrap();
        assert_eq!(first, second);
    }
}

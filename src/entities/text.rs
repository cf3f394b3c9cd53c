//! Text entity

use crate::entities::{Entity, EntityCommon};
use crate::types::Vector3;

/// Horizontal text justification (group code 72).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextHorizontalAlignment {
    #[default]
    Left = 0,
    Center = 1,
    Right = 2,
}

/// Vertical text justification (group code 73).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextVerticalAlignment {
    #[default]
    Baseline = 0,
    Bottom = 1,
    Middle = 2,
    Top = 3,
}

/// A single-line text entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub common: EntityCommon,
    pub value: String,
    pub insertion_point: Vector3,
    pub height: f64,
    /// Rotation angle in degrees.
    pub rotation: f64,
    pub style: String,
    pub width_factor: f64,
    pub oblique_angle: f64,
    pub horizontal_alignment: TextHorizontalAlignment,
    pub vertical_alignment: TextVerticalAlignment,
    /// Second alignment point; required for non-left/baseline alignment.
    pub alignment_point: Option<Vector3>,
    pub normal: Vector3,
}

impl Text {
    pub fn new(value: impl Into<String>, insertion_point: Vector3, height: f64) -> Self {
        Text {
            common: EntityCommon::new(),
            value: value.into(),
            insertion_point,
            height,
            rotation: 0.0,
            style: "Standard".to_string(),
            width_factor: 1.0,
            oblique_angle: 0.0,
            horizontal_alignment: TextHorizontalAlignment::Left,
            vertical_alignment: TextVerticalAlignment::Baseline,
            alignment_point: None,
            normal: Vector3::UNIT_Z,
        }
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    /// Right-justify against the insertion point.
    pub fn align_right(mut self) -> Self {
        self.horizontal_alignment = TextHorizontalAlignment::Right;
        self.alignment_point = Some(self.insertion_point);
        self
    }
}

impl Entity for Text {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn entity_type_name(&self) -> &'static str {
        "TEXT"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_defaults() {
        let text = Text::new("S-01", Vector3::new(5.0, 5.0, 0.0), 2.5);
        assert_eq!(text.style, "Standard");
        assert_eq!(text.horizontal_alignment, TextHorizontalAlignment::Left);
        assert!(text.alignment_point.is_none());
    }

    #[test]
    fn test_align_right_sets_alignment_point() {
        let text = Text::new("S-01", Vector3::new(5.0, 5.0, 0.0), 2.5).align_right();
        assert_eq!(text.horizontal_alignment, TextHorizontalAlignment::Right);
        assert_eq!(text.alignment_point, Some(Vector3::new(5.0, 5.0, 0.0)));
    }
}

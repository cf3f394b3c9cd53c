//! Drawing entities
//!
//! The generator emits a small, fixed set of entity kinds: circles, lines
//! and a solid hatch inside the marker block, plus inserts, leaders and
//! text in model space.

mod circle;
mod hatch;
mod insert;
mod leader;
mod line;
mod text;

pub use circle::Circle;
pub use hatch::{BoundaryEdge, BoundaryPath, CircularArcEdge, Hatch, LineEdge};
pub use insert::Insert;
pub use leader::{Leader, LeaderCreationType, LeaderPathType};
pub use line::Line;
pub use text::{Text, TextHorizontalAlignment, TextVerticalAlignment};

use crate::types::{Color, Handle};

/// State shared by every entity.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityCommon {
    pub handle: Handle,
    pub layer: String,
    pub color: Color,
}

impl EntityCommon {
    pub fn new() -> Self {
        EntityCommon {
            handle: Handle::NULL,
            layer: "0".to_string(),
            color: Color::ByLayer,
        }
    }

    pub fn with_layer(layer: impl Into<String>) -> Self {
        EntityCommon {
            handle: Handle::NULL,
            layer: layer.into(),
            color: Color::ByLayer,
        }
    }
}

impl Default for EntityCommon {
    fn default() -> Self {
        EntityCommon::new()
    }
}

/// Common behavior of drawing entities.
pub trait Entity {
    fn common(&self) -> &EntityCommon;
    fn common_mut(&mut self) -> &mut EntityCommon;

    fn handle(&self) -> Handle {
        self.common().handle
    }

    fn set_handle(&mut self, handle: Handle) {
        self.common_mut().handle = handle;
    }

    fn layer(&self) -> &str {
        &self.common().layer
    }

    fn set_layer(&mut self, layer: &str) {
        self.common_mut().layer = layer.to_string();
    }

    fn color(&self) -> Color {
        self.common().color
    }

    fn set_color(&mut self, color: Color) {
        self.common_mut().color = color;
    }

    /// The DXF entity name (group code 0).
    fn entity_type_name(&self) -> &'static str;
}

/// Closed set of entity kinds the generator can hold.
#[derive(Debug, Clone)]
pub enum EntityType {
    Circle(Circle),
    Line(Line),
    Hatch(Hatch),
    Insert(Insert),
    Text(Text),
    Leader(Leader),
}

impl EntityType {
    pub fn as_entity(&self) -> &dyn Entity {
        match self {
            EntityType::Circle(e) => e,
            EntityType::Line(e) => e,
            EntityType::Hatch(e) => e,
            EntityType::Insert(e) => e,
            EntityType::Text(e) => e,
            EntityType::Leader(e) => e,
        }
    }

    pub fn as_entity_mut(&mut self) -> &mut dyn Entity {
        match self {
            EntityType::Circle(e) => e,
            EntityType::Line(e) => e,
            EntityType::Hatch(e) => e,
            EntityType::Insert(e) => e,
            EntityType::Text(e) => e,
            EntityType::Leader(e) => e,
        }
    }
}

//! Color representation for drawing entities

use std::fmt;

/// Represents a color in a CAD drawing
///
/// Colors are either an AutoCAD Color Index (ACI) or one of the two
/// indirection modes: by-layer (index 256) and by-block (index 0).
/// Block geometry is drawn ByLayer so that instances inherit the color
/// of the layer they are inserted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// Color by layer (index 256)
    #[default]
    ByLayer,
    /// Color by block (index 0)
    ByBlock,
    /// AutoCAD Color Index (1-255)
    Index(u8),
}

impl Color {
    /// Create a color from an AutoCAD Color Index
    pub fn from_index(index: i16) -> Self {
        match index {
            0 => Color::ByBlock,
            256 => Color::ByLayer,
            1..=255 => Color::Index(index as u8),
            _ if index < 0 => Color::Index((-index).min(255) as u8), // Negative means layer is off
            _ => Color::Index(7), // Default to white
        }
    }

    /// Get the color index
    pub fn index(&self) -> u16 {
        match self {
            Color::ByBlock => 0,
            Color::Index(i) => *i as u16,
            Color::ByLayer => 256,
        }
    }

    /// Common color constants
    pub const RED: Color = Color::Index(1);
    pub const YELLOW: Color = Color::Index(2);
    pub const GREEN: Color = Color::Index(3);
    pub const CYAN: Color = Color::Index(4);
    pub const BLUE: Color = Color::Index(5);
    pub const MAGENTA: Color = Color::Index(6);
    pub const WHITE: Color = Color::Index(7);
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::ByLayer => write!(f, "ByLayer"),
            Color::ByBlock => write!(f, "ByBlock"),
            Color::Index(i) => write!(f, "Index({})", i),
        }
    }
}

//! Layer table entry

use crate::tables::TableEntry;
use crate::types::{Color, Handle, LineWeight};

/// A drawing layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub handle: Handle,
    pub name: String,
    pub color: Color,
    pub line_type: String,
    pub line_weight: LineWeight,
    pub is_plottable: bool,
    flags: LayerFlags,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct LayerFlags {
    frozen: bool,
    locked: bool,
    off: bool,
}

impl Layer {
    pub fn new(name: impl Into<String>) -> Self {
        Layer {
            handle: Handle::NULL,
            name: name.into(),
            color: Color::WHITE,
            line_type: "Continuous".to_string(),
            line_weight: LineWeight::Default,
            is_plottable: true,
            flags: LayerFlags::default(),
        }
    }

    /// Layer "0", present in every document.
    pub fn layer_0() -> Self {
        Layer::new("0")
    }

    pub fn with_color(name: impl Into<String>, color: Color) -> Self {
        let mut layer = Layer::new(name);
        layer.color = color;
        layer
    }

    pub fn is_frozen(&self) -> bool {
        self.flags.frozen
    }

    pub fn is_locked(&self) -> bool {
        self.flags.locked
    }

    pub fn is_off(&self) -> bool {
        self.flags.off
    }

    /// Group-code 70 standard flags.
    pub fn standard_flags(&self) -> i16 {
        let mut flags = 0;
        if self.flags.frozen {
            flags |= 1;
        }
        if self.flags.locked {
            flags |= 4;
        }
        flags
    }
}

impl TableEntry for Layer {
    fn name(&self) -> &str {
        &self.name
    }

    fn handle(&self) -> Handle {
        self.handle
    }

    fn set_handle(&mut self, handle: Handle) {
        self.handle = handle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_defaults() {
        let layer = Layer::layer_0();
        assert_eq!(layer.name, "0");
        assert_eq!(layer.color, Color::WHITE);
        assert_eq!(layer.line_type, "Continuous");
        assert!(layer.is_plottable);
        assert!(!layer.is_frozen());
        assert_eq!(layer.standard_flags(), 0);
    }

    #[test]
    fn test_layer_with_color() {
        let layer = Layer::with_color("SPT", Color::Index(3));
        assert_eq!(layer.color.index(), 3);
    }
}

//! Linetype table entry

use crate::tables::TableEntry;
use crate::types::Handle;

/// One dash/dot/space element of a linetype pattern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineTypeElement {
    /// Positive for a dash, negative for a space, zero for a dot.
    pub length: f64,
}

/// A linetype definition.
#[derive(Debug, Clone, PartialEq)]
pub struct LineType {
    pub handle: Handle,
    pub name: String,
    pub description: String,
    pub elements: Vec<LineTypeElement>,
    pub pattern_length: f64,
}

impl LineType {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        LineType {
            handle: Handle::NULL,
            name: name.into(),
            description: description.into(),
            elements: Vec::new(),
            pattern_length: 0.0,
        }
    }

    /// The solid "Continuous" linetype.
    pub fn continuous() -> Self {
        LineType::new("Continuous", "Solid line")
    }

    pub fn by_layer() -> Self {
        LineType::new("ByLayer", "")
    }

    pub fn by_block() -> Self {
        LineType::new("ByBlock", "")
    }
}

impl TableEntry for LineType {
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
    fn test_continuous() {
        let lt = LineType::continuous();
        assert_eq!(lt.name, "Continuous");
        assert!(lt.elements.is_empty());
        assert_eq!(lt.pattern_length, 0.0);
    }
}

//! Dimension style table entry
//!
//! Leader annotations reference a dimension style for their arrowhead and
//! text settings, so the generator keeps a minimal DIMSTYLE model.

use crate::tables::TableEntry;
use crate::types::Handle;

/// A dimension style definition.
#[derive(Debug, Clone, PartialEq)]
pub struct DimStyle {
    pub handle: Handle,
    pub name: String,
    /// Overall scale factor (DIMSCALE).
    pub dimscale: f64,
    /// Arrowhead size (DIMASZ); 0 suppresses arrowheads.
    pub dimasz: f64,
    /// Extension line offset (DIMEXO).
    pub dimexo: f64,
    /// Extension line extension (DIMEXE).
    pub dimexe: f64,
    /// Dimension text height (DIMTXT).
    pub dimtxt: f64,
    /// Dimension line color (DIMCLRD).
    pub dimclrd: i16,
    /// Extension line color (DIMCLRE).
    pub dimclre: i16,
    /// Dimension text color (DIMCLRT).
    pub dimclrt: i16,
    /// Name of the text style used for dimension text.
    pub text_style: String,
}

impl DimStyle {
    pub fn new(name: impl Into<String>) -> Self {
        DimStyle {
            handle: Handle::NULL,
            name: name.into(),
            dimscale: 1.0,
            dimasz: 2.5,
            dimexo: 0.625,
            dimexe: 1.25,
            dimtxt: 2.5,
            dimclrd: 0,
            dimclre: 0,
            dimclrt: 0,
            text_style: "Standard".to_string(),
        }
    }

    /// The "Standard" style, present in every document.
    pub fn standard() -> Self {
        DimStyle::new("Standard")
    }

    /// A style for plain label leaders: no arrowhead, given text style.
    pub fn label_leader(name: impl Into<String>, text_style: impl Into<String>) -> Self {
        let mut style = DimStyle::new(name);
        style.dimasz = 0.0;
        style.text_style = text_style.into();
        style
    }
}

impl TableEntry for DimStyle {
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
    fn test_label_leader_style() {
        let style = DimStyle::label_leader("Sondagens", "Arial");
        assert_eq!(style.dimasz, 0.0);
        assert_eq!(style.text_style, "Arial");
        assert_eq!(style.dimtxt, 2.5);
    }
}

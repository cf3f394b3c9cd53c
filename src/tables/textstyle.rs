//! Text style table entry

use crate::tables::TableEntry;
use crate::types::Handle;

/// A text style definition.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub handle: Handle,
    pub name: String,
    /// Fixed text height; 0 means not fixed.
    pub height: f64,
    pub width_factor: f64,
    pub oblique_angle: f64,
    pub font_file: String,
    pub big_font_file: String,
}

impl TextStyle {
    pub fn new(name: impl Into<String>) -> Self {
        TextStyle {
            handle: Handle::NULL,
            name: name.into(),
            height: 0.0,
            width_factor: 1.0,
            oblique_angle: 0.0,
            font_file: "txt".to_string(),
            big_font_file: String::new(),
        }
    }

    /// The "Standard" style, present in every document.
    pub fn standard() -> Self {
        TextStyle::new("Standard")
    }

    pub fn with_font(name: impl Into<String>, font_file: impl Into<String>) -> Self {
        let mut style = TextStyle::new(name);
        style.font_file = font_file.into();
        style
    }
}

impl TableEntry for TextStyle {
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

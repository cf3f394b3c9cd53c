//! Line weight values for layers and entities

/// Line weight in 1/100 mm, or one of the indirection modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineWeight {
    /// Use the layer's line weight (-1)
    ByLayer,
    /// Use the block's line weight (-2)
    ByBlock,
    /// Use the document default (-3)
    #[default]
    Default,
    /// Explicit weight in 1/100 mm
    Value(i16),
}

impl LineWeight {
    /// DXF group-code 370 value
    pub fn value(&self) -> i16 {
        match self {
            LineWeight::ByLayer => -1,
            LineWeight::ByBlock => -2,
            LineWeight::Default => -3,
            LineWeight::Value(v) => *v,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_weight_values() {
        assert_eq!(LineWeight::ByLayer.value(), -1);
        assert_eq!(LineWeight::ByBlock.value(), -2);
        assert_eq!(LineWeight::Default.value(), -3);
        assert_eq!(LineWeight::Value(25).value(), 25);
    }
}

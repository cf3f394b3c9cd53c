//! The fixed color palette layers are assigned from.
//!
//! A palette is a finite, non-empty, ascending set of ACI color codes.
//! The standard palette is `{2, 3, 4, 5, 6}` (yellow, green, cyan, blue,
//! magenta), codes that stay readable against both light and dark
//! drawing backgrounds.

use crate::error::{DxfError, Result};
use once_cell::sync::Lazy;

/// ACI codes of the standard palette, in assignment-priority order.
pub const STANDARD_ACI_CODES: [u8; 5] = [2, 3, 4, 5, 6];

/// Process-wide default palette.
pub static AVAILABLE_COLORS: Lazy<Palette> = Lazy::new(Palette::standard);

/// An ordered set of allowed ACI color codes.
///
/// Invariants: non-empty, sorted ascending, deduplicated, every code in
/// the valid ACI range 1-255.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<u8>,
}

impl Palette {
    /// The standard 5-color palette `{2, 3, 4, 5, 6}`.
    pub fn standard() -> Self {
        Palette {
            colors: STANDARD_ACI_CODES.to_vec(),
        }
    }

    /// Build a palette from arbitrary ACI codes.
    ///
    /// Codes are sorted and deduplicated. Fails on an empty set or on
    /// code 0 (reserved for ByBlock).
    pub fn new(codes: impl IntoIterator<Item = u8>) -> Result<Self> {
        let mut colors: Vec<u8> = codes.into_iter().collect();
        colors.sort_unstable();
        colors.dedup();
        if colors.is_empty() {
            return Err(DxfError::EmptyPalette);
        }
        if colors[0] == 0 {
            return Err(DxfError::InvalidColor(0));
        }
        Ok(Palette { colors })
    }

    /// Whether `code` belongs to this palette.
    pub fn contains(&self, code: u8) -> bool {
        self.colors.binary_search(&code).is_ok()
    }

    /// The smallest code in the palette.
    pub fn smallest(&self) -> u8 {
        self.colors[0]
    }

    /// Iterate over the codes in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.colors.iter().copied()
    }

    /// Number of colors in the palette.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// A palette is never empty; provided for API completeness.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_palette() {
        let palette = Palette::standard();
        assert_eq!(palette.len(), 5);
        assert_eq!(palette.smallest(), 2);
        assert!(palette.contains(6));
        assert!(!palette.contains(1));
        assert!(!palette.contains(7));
    }

    #[test]
    fn test_new_sorts_and_dedups() {
        let palette = Palette::new([6, 2, 4, 2, 6]).unwrap();
        assert_eq!(palette.iter().collect::<Vec<_>>(), vec![2, 4, 6]);
    }

    #[test]
    fn test_empty_palette_rejected() {
        assert!(matches!(Palette::new([]), Err(DxfError::EmptyPalette)));
    }

    #[test]
    fn test_zero_code_rejected() {
        assert!(matches!(
            Palette::new([0, 3]),
            Err(DxfError::InvalidColor(0))
        ));
    }

    #[test]
    fn test_static_default() {
        assert_eq!(*AVAILABLE_COLORS, Palette::standard());
    }
}

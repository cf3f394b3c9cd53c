//! DXF version identifiers

use std::fmt;

/// Supported output DXF versions
///
/// The generator targets R2000 (AC1015) by default: every entity it emits
/// (CIRCLE, LINE, HATCH, INSERT, TEXT, LEADER) is available there, and the
/// format is readable by effectively every CAD viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DxfVersion {
    /// AutoCAD 2000
    #[default]
    AC1015,
    /// AutoCAD 2004
    AC1018,
    /// AutoCAD 2007
    AC1021,
    /// AutoCAD 2010
    AC1024,
    /// AutoCAD 2013
    AC1027,
    /// AutoCAD 2018
    AC1032,
}

impl DxfVersion {
    /// The $ACADVER header string
    pub fn to_dxf_string(&self) -> &'static str {
        match self {
            DxfVersion::AC1015 => "AC1015",
            DxfVersion::AC1018 => "AC1018",
            DxfVersion::AC1021 => "AC1021",
            DxfVersion::AC1024 => "AC1024",
            DxfVersion::AC1027 => "AC1027",
            DxfVersion::AC1032 => "AC1032",
        }
    }
}

impl fmt::Display for DxfVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_dxf_string())
    }
}

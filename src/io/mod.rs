//! Input/output

pub mod dxf;

//! ASCII DXF serialization

pub mod writer;

pub use writer::{DxfTextWriter, DxfWriter, SectionWriter};
pub use writer::{DxfStreamWriter, DxfStreamWriterExt};

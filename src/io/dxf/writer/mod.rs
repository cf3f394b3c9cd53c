//! DXF writer module

mod section_writer;
mod stream_writer;
mod text_writer;

pub use section_writer::SectionWriter;
pub use stream_writer::{DxfStreamWriter, DxfStreamWriterExt};
pub use text_writer::DxfTextWriter;

use crate::document::CadDocument;
use crate::error::{DxfError, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// ASCII DXF file writer
pub struct DxfWriter {
    document: CadDocument,
}

impl DxfWriter {
    /// Create a new DXF writer
    pub fn new(document: CadDocument) -> Self {
        Self { document }
    }

    /// Write to a file
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        self.write_to_writer(writer)
    }

    /// Write to any writer
    pub fn write_to_writer<W: Write>(&self, writer: W) -> Result<()> {
        let mut stream_writer = DxfTextWriter::new(writer);
        self.write_dxf(&mut stream_writer)?;
        stream_writer.flush()?;
        Ok(())
    }

    /// Write to a byte vector (useful for testing)
    pub fn write_to_vec(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.write_to_writer(&mut buffer)?;
        Ok(buffer)
    }

    /// Write to a String
    pub fn write_to_string(&self) -> Result<String> {
        let buffer = self.write_to_vec()?;
        String::from_utf8(buffer).map_err(|e| DxfError::Encoding(e.to_string()))
    }

    /// Write DXF content to a stream writer
    fn write_dxf<W: DxfStreamWriter>(&self, writer: &mut W) -> Result<()> {
        let mut section_writer = SectionWriter::new(writer);

        section_writer.write_header(&self.document)?;
        section_writer.write_classes(&self.document)?;
        section_writer.write_tables(&self.document)?;
        section_writer.write_blocks(&self.document)?;
        section_writer.write_entities(&self.document)?;
        section_writer.write_objects(&self.document)?;

        writer.write_eof()?;

        Ok(())
    }

    /// Get a reference to the document
    pub fn document(&self) -> &CadDocument {
        &self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_structure() {
        let output = DxfWriter::new(CadDocument::new())
            .write_to_string()
            .unwrap();
        assert!(output.starts_with("  0\nSECTION\n  2\nHEADER\n"));
        assert!(output.contains("  2\nTABLES\n"));
        assert!(output.contains("  2\nBLOCKS\n"));
        assert!(output.contains("  2\nENTITIES\n"));
        assert!(output.contains("  2\nOBJECTS\n"));
        assert!(output.ends_with("  0\nEOF\n"));
    }

    #[test]
    fn test_acadver_written() {
        let output = DxfWriter::new(CadDocument::new())
            .write_to_string()
            .unwrap();
        assert!(output.contains("$ACADVER"));
        assert!(output.contains("AC1015"));
    }
}

//! DXF section writers
//!
//! Writers for each section of a DXF file: HEADER, CLASSES, TABLES,
//! BLOCKS, ENTITIES and OBJECTS.

use crate::document::CadDocument;
use crate::entities::{
    BoundaryEdge, BoundaryPath, Circle, Entity, EntityType, Hatch, Insert, Leader, Line, Text,
};
use crate::error::Result;
use crate::tables::{BlockRecord, DimStyle, Layer, LineType, TableEntry, TextStyle};
use crate::types::{Color, Handle, Vector3};

use super::stream_writer::{DxfStreamWriter, DxfStreamWriterExt};

/// Standard table handles (well-known values used by AutoCAD)
/// These are consistent across DXF files for interoperability
const HANDLE_LTYPE_TABLE: u64 = 0x5;
const HANDLE_LAYER_TABLE: u64 = 0x2;
const HANDLE_STYLE_TABLE: u64 = 0x3;
const HANDLE_DIMSTYLE_TABLE: u64 = 0xA;
const HANDLE_BLOCK_RECORD_TABLE: u64 = 0x1;
const HANDLE_ROOT_DICTIONARY: u64 = 0xC;

/// Writes all DXF sections
pub struct SectionWriter<'a, W: DxfStreamWriter> {
    writer: &'a mut W,
}

impl<'a, W: DxfStreamWriter> SectionWriter<'a, W> {
    /// Create a new section writer
    pub fn new(writer: &'a mut W) -> Self {
        Self { writer }
    }

    /// Write the HEADER section
    pub fn write_header(&mut self, document: &CadDocument) -> Result<()> {
        self.writer.write_section_start("HEADER")?;

        self.write_header_variable("$ACADVER", |w| {
            w.write_string(1, document.version.to_dxf_string())
        })?;

        // Maintenance version (required by some readers)
        self.write_header_variable("$ACADMAINTVER", |w| w.write_i16(70, 0))?;

        // Code page - ANSI_1252 for Western European
        self.write_header_variable("$DWGCODEPAGE", |w| w.write_string(3, "ANSI_1252"))?;

        self.write_header_variable("$HANDSEED", |w| {
            w.write_handle(5, Handle::new(document.next_handle_value()))
        })?;

        // Drawing extents
        self.write_header_variable("$EXTMIN", |w| {
            w.write_double(10, 0.0)?;
            w.write_double(20, 0.0)?;
            w.write_double(30, 0.0)
        })?;

        self.write_header_variable("$EXTMAX", |w| {
            w.write_double(10, 0.0)?;
            w.write_double(20, 0.0)?;
            w.write_double(30, 0.0)
        })?;

        // Drawing limits
        self.write_header_variable("$LIMMIN", |w| {
            w.write_double(10, 0.0)?;
            w.write_double(20, 0.0)
        })?;

        self.write_header_variable("$LIMMAX", |w| {
            w.write_double(10, 12.0)?;
            w.write_double(20, 9.0)
        })?;

        // Insertion base point
        self.write_header_variable("$INSBASE", |w| {
            w.write_double(10, 0.0)?;
            w.write_double(20, 0.0)?;
            w.write_double(30, 0.0)
        })?;

        // Current layer
        self.write_header_variable("$CLAYER", |w| w.write_string(8, "0"))?;

        // Current color
        self.write_header_variable("$CECOLOR", |w| w.write_i16(62, 256))?;

        // Current linetype
        self.write_header_variable("$CELTYPE", |w| w.write_string(6, "ByLayer"))?;

        // Current lineweight
        self.write_header_variable("$CELWEIGHT", |w| w.write_i16(370, -1))?;

        // Measurement (0=English, 1=Metric)
        self.write_header_variable("$MEASUREMENT", |w| w.write_i16(70, 1))?;

        // Units
        self.write_header_variable("$INSUNITS", |w| w.write_i16(70, 0))?;

        self.writer.write_section_end()?;
        Ok(())
    }

    /// Write a header variable
    fn write_header_variable<F>(&mut self, name: &str, write_value: F) -> Result<()>
    where
        F: FnOnce(&mut W) -> Result<()>,
    {
        self.writer.write_string(9, name)?;
        write_value(self.writer)
    }

    /// Write the CLASSES section
    pub fn write_classes(&mut self, _document: &CadDocument) -> Result<()> {
        self.writer.write_section_start("CLASSES")?;
        self.writer.write_section_end()?;
        Ok(())
    }

    /// Write the TABLES section
    pub fn write_tables(&mut self, document: &CadDocument) -> Result<()> {
        self.writer.write_section_start("TABLES")?;

        // Write tables in the standard order
        self.write_ltype_table(document)?;
        self.write_layer_table(document)?;
        self.write_style_table(document)?;
        self.write_dimstyle_table(document)?;
        self.write_block_record_table(document)?;

        self.writer.write_section_end()?;
        Ok(())
    }

    /// Write LTYPE table
    fn write_ltype_table(&mut self, document: &CadDocument) -> Result<()> {
        self.write_table_header(
            "LTYPE",
            document.line_types.len(),
            Handle::new(HANDLE_LTYPE_TABLE),
        )?;

        for ltype in document.line_types.iter() {
            self.write_ltype_entry(ltype, Handle::new(HANDLE_LTYPE_TABLE))?;
        }

        self.write_table_end()?;
        Ok(())
    }

    fn write_ltype_entry(&mut self, ltype: &LineType, owner: Handle) -> Result<()> {
        self.writer.write_string(0, "LTYPE")?;
        self.write_common_table_data(ltype.handle(), owner)?;
        self.writer.write_subclass("AcDbSymbolTableRecord")?;
        self.writer.write_subclass("AcDbLinetypeTableRecord")?;
        self.writer.write_string(2, ltype.name())?;
        self.writer.write_i16(70, 0)?;
        self.writer.write_string(3, &ltype.description)?;
        self.writer.write_i16(72, 65)?; // Alignment code (always 65)
        self.writer.write_i16(73, ltype.elements.len() as i16)?;
        self.writer.write_double(40, ltype.pattern_length)?;

        for element in &ltype.elements {
            self.writer.write_double(49, element.length)?;
            self.writer.write_i16(74, 0)?;
        }

        Ok(())
    }

    /// Write LAYER table
    fn write_layer_table(&mut self, document: &CadDocument) -> Result<()> {
        self.write_table_header(
            "LAYER",
            document.layers.len(),
            Handle::new(HANDLE_LAYER_TABLE),
        )?;

        for layer in document.layers.iter() {
            self.write_layer_entry(layer, Handle::new(HANDLE_LAYER_TABLE))?;
        }

        self.write_table_end()?;
        Ok(())
    }

    fn write_layer_entry(&mut self, layer: &Layer, owner: Handle) -> Result<()> {
        self.writer.write_string(0, "LAYER")?;
        self.write_common_table_data(layer.handle(), owner)?;
        self.writer.write_subclass("AcDbSymbolTableRecord")?;
        self.writer.write_subclass("AcDbLayerTableRecord")?;
        self.writer.write_string(2, layer.name())?;
        self.writer.write_i16(70, layer.standard_flags())?;

        // Color (negative if layer is off)
        let color_index = match layer.color {
            Color::Index(i) => i as i16,
            Color::ByLayer => 7,
            Color::ByBlock => 0,
        };
        if !layer.is_off() {
            self.writer.write_i16(62, color_index)?;
        } else {
            self.writer.write_i16(62, -color_index)?;
        }

        // Linetype name
        self.writer.write_string(6, &layer.line_type)?;

        // Lineweight
        self.writer.write_i16(370, layer.line_weight.value())?;

        // Plot flag (code 290 is Bool type)
        self.writer.write_bool(290, layer.is_plottable)?;

        Ok(())
    }

    /// Write STYLE table (text styles)
    fn write_style_table(&mut self, document: &CadDocument) -> Result<()> {
        self.write_table_header(
            "STYLE",
            document.text_styles.len(),
            Handle::new(HANDLE_STYLE_TABLE),
        )?;

        for style in document.text_styles.iter() {
            self.write_style_entry(style, Handle::new(HANDLE_STYLE_TABLE))?;
        }

        self.write_table_end()?;
        Ok(())
    }

    fn write_style_entry(&mut self, style: &TextStyle, owner: Handle) -> Result<()> {
        self.writer.write_string(0, "STYLE")?;
        self.write_common_table_data(style.handle(), owner)?;
        self.writer.write_subclass("AcDbSymbolTableRecord")?;
        self.writer.write_subclass("AcDbTextStyleTableRecord")?;
        self.writer.write_string(2, style.name())?;
        self.writer.write_i16(70, 0)?;
        self.writer.write_double(40, style.height)?;
        self.writer.write_double(41, style.width_factor)?;
        self.writer.write_double(50, style.oblique_angle)?;
        self.writer.write_i16(71, 0)?; // Text generation flags
        self.writer.write_double(42, style.height)?; // Last height used
        self.writer.write_string(3, &style.font_file)?;
        self.writer.write_string(4, &style.big_font_file)?;

        Ok(())
    }

    /// Write DIMSTYLE table
    fn write_dimstyle_table(&mut self, document: &CadDocument) -> Result<()> {
        self.write_table_header(
            "DIMSTYLE",
            document.dim_styles.len(),
            Handle::new(HANDLE_DIMSTYLE_TABLE),
        )?;
        self.writer.write_subclass("AcDbDimStyleTable")?;

        for dimstyle in document.dim_styles.iter() {
            self.write_dimstyle_entry(dimstyle, Handle::new(HANDLE_DIMSTYLE_TABLE))?;
        }

        self.write_table_end()?;
        Ok(())
    }

    fn write_dimstyle_entry(&mut self, dimstyle: &DimStyle, owner: Handle) -> Result<()> {
        self.writer.write_string(0, "DIMSTYLE")?;
        // DIMSTYLE entries use code 105 for their handle
        self.writer.write_handle(105, dimstyle.handle())?;
        self.writer.write_handle(330, owner)?;
        self.writer.write_subclass("AcDbSymbolTableRecord")?;
        self.writer.write_subclass("AcDbDimStyleTableRecord")?;
        self.writer.write_string(2, dimstyle.name())?;
        self.writer.write_i16(70, 0)?;

        self.writer.write_double(40, dimstyle.dimscale)?; // Scale factor
        self.writer.write_double(41, dimstyle.dimasz)?; // Arrow size
        self.writer.write_double(42, dimstyle.dimexo)?; // Extension line offset
        self.writer.write_double(44, dimstyle.dimexe)?; // Extension line extension
        self.writer.write_double(140, dimstyle.dimtxt)?; // Text height

        self.writer.write_i16(176, dimstyle.dimclrd)?; // Dimension line color
        self.writer.write_i16(177, dimstyle.dimclre)?; // Extension line color
        self.writer.write_i16(178, dimstyle.dimclrt)?; // Dimension text color

        Ok(())
    }

    /// Write BLOCK_RECORD table
    fn write_block_record_table(&mut self, document: &CadDocument) -> Result<()> {
        self.write_table_header(
            "BLOCK_RECORD",
            document.block_records.len(),
            Handle::new(HANDLE_BLOCK_RECORD_TABLE),
        )?;

        for block_record in document.block_records.iter() {
            self.write_block_record_entry(block_record, Handle::new(HANDLE_BLOCK_RECORD_TABLE))?;
        }

        self.write_table_end()?;
        Ok(())
    }

    fn write_block_record_entry(&mut self, block_record: &BlockRecord, owner: Handle) -> Result<()> {
        self.writer.write_string(0, "BLOCK_RECORD")?;
        self.write_common_table_data(block_record.handle(), owner)?;
        self.writer.write_subclass("AcDbSymbolTableRecord")?;
        self.writer.write_subclass("AcDbBlockTableRecord")?;
        self.writer.write_string(2, block_record.name())?;
        self.writer.write_i16(70, 0)?; // Insertion units
        self.writer
            .write_byte(280, if block_record.is_explodable { 1 } else { 0 })?;
        self.writer
            .write_i16(281, if block_record.scale_uniformly { 1 } else { 0 })?;

        Ok(())
    }

    /// Write table header
    fn write_table_header(&mut self, name: &str, count: usize, table_handle: Handle) -> Result<()> {
        self.writer.write_string(0, "TABLE")?;
        self.writer.write_string(2, name)?;
        self.writer.write_handle(5, table_handle)?;
        self.writer.write_handle(330, Handle::NULL)?; // Tables owned by document root
        self.writer.write_subclass("AcDbSymbolTable")?;
        self.writer.write_i16(70, count as i16)?;
        Ok(())
    }

    /// Write table end
    fn write_table_end(&mut self) -> Result<()> {
        self.writer.write_string(0, "ENDTAB")
    }

    /// Write common table entry data
    fn write_common_table_data(&mut self, handle: Handle, owner: Handle) -> Result<()> {
        self.writer.write_handle(5, handle)?;
        self.writer.write_handle(330, owner)?;
        Ok(())
    }

    /// Write the BLOCKS section
    pub fn write_blocks(&mut self, document: &CadDocument) -> Result<()> {
        self.writer.write_section_start("BLOCKS")?;

        for block_record in document.block_records.iter() {
            self.write_block_definition(block_record)?;
        }

        self.writer.write_section_end()?;
        Ok(())
    }

    /// Write a complete block definition (BLOCK...entities...ENDBLK)
    fn write_block_definition(&mut self, block_record: &BlockRecord) -> Result<()> {
        let owner = block_record.handle();

        let flags: i16 = if block_record.is_model_space() {
            2 // Model space flag
        } else {
            0
        };

        // Write BLOCK entity
        self.writer.write_string(0, "BLOCK")?;
        self.writer.write_handle(5, block_record.block_entity_handle)?;
        self.writer.write_handle(330, owner)?;
        self.writer.write_subclass("AcDbEntity")?;
        // Paper space flag (group code 67)
        if block_record.is_paper_space() {
            self.writer.write_i16(67, 1)?;
        }
        self.writer.write_string(8, "0")?;
        self.writer.write_subclass("AcDbBlockBegin")?;
        self.writer.write_string(2, block_record.name())?;
        self.writer.write_i16(70, flags)?;
        self.writer.write_double(10, block_record.base_point_x)?;
        self.writer.write_double(20, block_record.base_point_y)?;
        self.writer.write_double(30, 0.0)?;
        self.writer.write_string(3, block_record.name())?;
        // Group code 1 is XRef path (empty for normal blocks)
        self.writer.write_string(1, "")?;

        // Write entities in the block (only for named blocks; model and
        // paper space entities live in the ENTITIES section)
        if !block_record.is_model_space() && !block_record.is_paper_space() {
            for entity in &block_record.entities {
                self.write_entity_with_owner(entity, owner)?;
            }
        }

        // Write ENDBLK entity
        self.writer.write_string(0, "ENDBLK")?;
        self.writer.write_handle(5, block_record.block_end_handle)?;
        self.writer.write_handle(330, owner)?;
        self.writer.write_subclass("AcDbEntity")?;
        if block_record.is_paper_space() {
            self.writer.write_i16(67, 1)?;
        }
        self.writer.write_string(8, "0")?;
        self.writer.write_subclass("AcDbBlockEnd")?;

        Ok(())
    }

    /// Write the ENTITIES section
    pub fn write_entities(&mut self, document: &CadDocument) -> Result<()> {
        self.writer.write_section_start("ENTITIES")?;

        let model_space_handle = document
            .block_records
            .get("*Model_Space")
            .map(|b| b.handle())
            .unwrap_or(Handle::NULL);
        for entity in document.entities() {
            self.write_entity_with_owner(entity, model_space_handle)?;
        }

        self.writer.write_section_end()?;
        Ok(())
    }

    /// Write an entity with explicit owner
    fn write_entity_with_owner(&mut self, entity: &EntityType, owner: Handle) -> Result<()> {
        match entity {
            EntityType::Circle(e) => self.write_circle(e, owner),
            EntityType::Line(e) => self.write_line(e, owner),
            EntityType::Hatch(e) => self.write_hatch(e, owner),
            EntityType::Insert(e) => self.write_insert(e, owner),
            EntityType::Text(e) => self.write_text(e, owner),
            EntityType::Leader(e) => self.write_leader(e, owner),
        }
    }

    /// Write common entity data with owner
    fn write_common_entity_data(&mut self, entity: &dyn Entity, owner: Handle) -> Result<()> {
        self.writer.write_handle(5, entity.handle())?;
        self.writer.write_handle(330, owner)?;
        self.writer.write_subclass("AcDbEntity")?;
        self.writer.write_string(8, entity.layer())?;

        // Write color only if not ByLayer (default)
        let color = entity.color();
        if color != Color::ByLayer {
            self.writer.write_color(62, color)?;
        }

        Ok(())
    }

    /// Write LINE entity
    fn write_line(&mut self, line: &Line, owner: Handle) -> Result<()> {
        self.writer.write_entity_type("LINE")?;
        self.write_common_entity_data(line, owner)?;
        self.writer.write_subclass("AcDbLine")?;
        self.writer.write_point3d(10, line.start)?;
        self.writer.write_point3d(11, line.end)?;
        if line.thickness != 0.0 {
            self.writer.write_double(39, line.thickness)?;
        }
        Ok(())
    }

    /// Write CIRCLE entity
    fn write_circle(&mut self, circle: &Circle, owner: Handle) -> Result<()> {
        self.writer.write_entity_type("CIRCLE")?;
        self.write_common_entity_data(circle, owner)?;
        self.writer.write_subclass("AcDbCircle")?;
        self.writer.write_point3d(10, circle.center)?;
        self.writer.write_double(40, circle.radius)?;
        if circle.thickness != 0.0 {
            self.writer.write_double(39, circle.thickness)?;
        }
        Ok(())
    }

    /// Write TEXT entity
    fn write_text(&mut self, text: &Text, owner: Handle) -> Result<()> {
        self.writer.write_entity_type("TEXT")?;
        self.write_common_entity_data(text, owner)?;
        self.writer.write_subclass("AcDbText")?;
        self.writer.write_point3d(10, text.insertion_point)?;
        self.writer.write_double(40, text.height)?;
        self.writer.write_string(1, &text.value)?;
        if text.rotation != 0.0 {
            self.writer.write_double(50, text.rotation)?;
        }
        if text.width_factor != 1.0 {
            self.writer.write_double(41, text.width_factor)?;
        }
        if text.oblique_angle != 0.0 {
            self.writer.write_double(51, text.oblique_angle)?;
        }
        self.writer.write_string(7, &text.style)?;
        self.writer.write_i16(72, text.horizontal_alignment as i16)?;
        if let Some(align_pt) = text.alignment_point {
            self.writer.write_point3d(11, align_pt)?;
        }
        self.writer.write_subclass("AcDbText")?;
        self.writer.write_i16(73, text.vertical_alignment as i16)?;
        Ok(())
    }

    /// Write HATCH entity
    fn write_hatch(&mut self, hatch: &Hatch, owner: Handle) -> Result<()> {
        self.writer.write_entity_type("HATCH")?;
        self.write_common_entity_data(hatch, owner)?;
        self.writer.write_subclass("AcDbHatch")?;

        // Elevation point
        self.writer.write_double(10, 0.0)?;
        self.writer.write_double(20, 0.0)?;
        self.writer.write_double(30, hatch.elevation)?;

        // Normal vector
        self.writer.write_double(210, hatch.normal.x)?;
        self.writer.write_double(220, hatch.normal.y)?;
        self.writer.write_double(230, hatch.normal.z)?;

        // Pattern name
        self.writer.write_string(2, &hatch.pattern_name)?;

        // Solid fill flag
        self.writer.write_i16(70, if hatch.is_solid { 1 } else { 0 })?;

        // Associative flag
        self.writer
            .write_i16(71, if hatch.is_associative { 1 } else { 0 })?;

        // Number of boundary paths
        self.writer.write_i32(91, hatch.paths.len() as i32)?;

        for path in &hatch.paths {
            self.write_hatch_boundary_path(path)?;
        }

        // Pattern style and type
        self.writer.write_i16(75, hatch.style)?;
        self.writer.write_i16(76, hatch.pattern_type)?;

        // Seed points
        self.writer.write_i32(98, hatch.seed_points.len() as i32)?;
        for seed in &hatch.seed_points {
            self.writer.write_double(10, seed.x)?;
            self.writer.write_double(20, seed.y)?;
        }

        Ok(())
    }

    fn write_hatch_boundary_path(&mut self, path: &BoundaryPath) -> Result<()> {
        // External, edge-defined boundary
        self.writer.write_i32(92, 1)?;
        self.writer.write_i32(93, path.edges.len() as i32)?;

        for edge in &path.edges {
            self.write_hatch_edge(edge)?;
        }

        // Associated entities (boundary handles)
        self.writer.write_i32(97, 0)?;

        Ok(())
    }

    fn write_hatch_edge(&mut self, edge: &BoundaryEdge) -> Result<()> {
        match edge {
            BoundaryEdge::Line(line_edge) => {
                self.writer.write_i16(72, 1)?; // Line type
                self.writer.write_double(10, line_edge.start.x)?;
                self.writer.write_double(20, line_edge.start.y)?;
                self.writer.write_double(11, line_edge.end.x)?;
                self.writer.write_double(21, line_edge.end.y)?;
            }
            BoundaryEdge::Arc(arc) => {
                self.writer.write_i16(72, 2)?; // Arc type
                self.writer.write_double(10, arc.center.x)?;
                self.writer.write_double(20, arc.center.y)?;
                self.writer.write_double(40, arc.radius)?;
                self.writer.write_double(50, arc.start_angle)?;
                self.writer.write_double(51, arc.end_angle)?;
                self.writer
                    .write_i16(73, if arc.counter_clockwise { 1 } else { 0 })?;
            }
        }
        Ok(())
    }

    /// Write INSERT entity
    fn write_insert(&mut self, insert: &Insert, owner: Handle) -> Result<()> {
        self.writer.write_entity_type("INSERT")?;
        self.write_common_entity_data(insert, owner)?;
        self.writer.write_subclass("AcDbBlockReference")?;
        self.writer.write_string(2, &insert.block_name)?;
        self.writer.write_point3d(10, insert.insert_point)?;
        if insert.x_scale != 1.0 {
            self.writer.write_double(41, insert.x_scale)?;
        }
        if insert.y_scale != 1.0 {
            self.writer.write_double(42, insert.y_scale)?;
        }
        if insert.z_scale != 1.0 {
            self.writer.write_double(43, insert.z_scale)?;
        }
        if insert.rotation != 0.0 {
            self.writer.write_double(50, insert.rotation)?;
        }
        Ok(())
    }

    /// Write LEADER entity
    fn write_leader(&mut self, leader: &Leader, owner: Handle) -> Result<()> {
        self.writer.write_entity_type("LEADER")?;
        self.write_common_entity_data(leader, owner)?;
        self.writer.write_subclass("AcDbLeader")?;

        // Dimension style
        self.writer.write_string(3, &leader.dimension_style)?;

        // Arrow head flag
        self.writer
            .write_i16(71, if leader.arrow_enabled { 1 } else { 0 })?;

        // Path type
        self.writer.write_i16(72, leader.path_type as i16)?;

        // Creation type
        self.writer.write_i16(73, leader.creation_type as i16)?;

        // Hookline direction
        self.writer.write_i16(74, 0)?;

        // Hookline flag
        self.writer
            .write_i16(75, if leader.hookline_enabled { 1 } else { 0 })?;

        // Text height and width
        self.writer.write_double(40, leader.text_height)?;
        self.writer.write_double(41, leader.text_width)?;

        // Vertices
        self.writer.write_i16(76, leader.vertices.len() as i16)?;
        for vertex in &leader.vertices {
            self.writer.write_point3d(10, *vertex)?;
        }

        // Normal
        self.writer.write_point3d(230, leader.normal)?;

        // Horizontal direction
        self.writer.write_point3d(211, leader.horizontal_direction)?;

        // Block and annotation offsets
        self.writer.write_point3d(212, Vector3::ZERO)?;
        self.writer.write_point3d(213, Vector3::ZERO)?;

        Ok(())
    }

    /// Write the OBJECTS section
    pub fn write_objects(&mut self, _document: &CadDocument) -> Result<()> {
        self.writer.write_section_start("OBJECTS")?;

        // Root dictionary
        self.writer.write_string(0, "DICTIONARY")?;
        self.writer
            .write_handle(5, Handle::new(HANDLE_ROOT_DICTIONARY))?;
        self.writer.write_handle(330, Handle::NULL)?;
        self.writer.write_subclass("AcDbDictionary")?;
        self.writer.write_byte(280, 0)?;
        self.writer.write_byte(281, 1)?;

        self.writer.write_section_end()?;
        Ok(())
    }
}

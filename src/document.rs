//! In-memory drawing document

use indexmap::IndexMap;

use crate::entities::EntityType;
use crate::error::{DxfError, Result};
use crate::notification::NotificationCollection;
use crate::tables::{BlockRecord, DimStyle, Layer, LineType, Table, TextStyle};
use crate::types::{DxfVersion, Handle};

/// First handle available for allocation; lower values are reserved for
/// the fixed tables and defaults.
const FIRST_FREE_HANDLE: u64 = 0x10;

/// A complete drawing: tables, block definitions and model-space entities.
///
/// Entities iterate in insertion order and handles are allocated
/// sequentially, so serializing the same document twice yields identical
/// output.
#[derive(Debug)]
pub struct CadDocument {
    pub version: DxfVersion,
    pub layers: Table<Layer>,
    pub line_types: Table<LineType>,
    pub text_styles: Table<TextStyle>,
    pub dim_styles: Table<DimStyle>,
    pub block_records: Table<BlockRecord>,
    pub notifications: NotificationCollection,
    entities: IndexMap<Handle, EntityType>,
    next_handle: u64,
}

impl CadDocument {
    /// A new document with the mandatory defaults: layer "0", the three
    /// stock linetypes, the Standard text and dimension styles, and the
    /// model/paper space block records.
    pub fn new() -> Self {
        let mut document = CadDocument {
            version: DxfVersion::default(),
            layers: Table::new(),
            line_types: Table::new(),
            text_styles: Table::new(),
            dim_styles: Table::new(),
            block_records: Table::new(),
            notifications: NotificationCollection::new(),
            entities: IndexMap::new(),
            next_handle: FIRST_FREE_HANDLE,
        };
        document.initialize_defaults();
        document
    }

    fn initialize_defaults(&mut self) {
        // These inserts cannot collide; the tables are empty.
        let mut layer_0 = Layer::layer_0();
        layer_0.handle = Handle::new(0x10);
        let _ = self.layers.add(layer_0);

        let mut by_block = LineType::by_block();
        by_block.handle = Handle::new(0x14);
        let _ = self.line_types.add(by_block);
        let mut by_layer = LineType::by_layer();
        by_layer.handle = Handle::new(0x15);
        let _ = self.line_types.add(by_layer);
        let mut continuous = LineType::continuous();
        continuous.handle = Handle::new(0x16);
        let _ = self.line_types.add(continuous);

        let mut standard_text = TextStyle::standard();
        standard_text.handle = Handle::new(0x11);
        let _ = self.text_styles.add(standard_text);

        let mut standard_dim = DimStyle::standard();
        standard_dim.handle = Handle::new(0x12);
        let _ = self.dim_styles.add(standard_dim);

        let mut model_space = BlockRecord::model_space();
        model_space.handle = Handle::new(0x17);
        model_space.block_entity_handle = Handle::new(0x18);
        model_space.block_end_handle = Handle::new(0x19);
        let _ = self.block_records.add(model_space);
        let mut paper_space = BlockRecord::paper_space();
        paper_space.handle = Handle::new(0x1A);
        paper_space.block_entity_handle = Handle::new(0x1B);
        paper_space.block_end_handle = Handle::new(0x1C);
        let _ = self.block_records.add(paper_space);

        self.next_handle = 0x1D;
    }

    /// Allocate the next free handle.
    pub fn allocate_handle(&mut self) -> Handle {
        let handle = Handle::new(self.next_handle);
        self.next_handle += 1;
        handle
    }

    /// The next handle that would be allocated; written as $HANDSEED.
    pub fn next_handle_value(&self) -> u64 {
        self.next_handle
    }

    /// Add a model-space entity, allocating its handle.
    pub fn add_entity(&mut self, mut entity: EntityType) -> Handle {
        let handle = self.allocate_handle();
        entity.as_entity_mut().set_handle(handle);
        self.entities.insert(handle, entity);
        handle
    }

    /// Add a layer, allocating its handle.
    pub fn add_layer(&mut self, mut layer: Layer) -> Result<Handle> {
        let handle = self.allocate_handle();
        layer.handle = handle;
        self.layers.add(layer).map_err(DxfError::Table)?;
        Ok(handle)
    }

    /// Add a text style, allocating its handle.
    pub fn add_text_style(&mut self, mut style: TextStyle) -> Result<Handle> {
        let handle = self.allocate_handle();
        style.handle = handle;
        self.text_styles.add(style).map_err(DxfError::Table)?;
        Ok(handle)
    }

    /// Add a dimension style, allocating its handle.
    pub fn add_dim_style(&mut self, mut style: DimStyle) -> Result<Handle> {
        let handle = self.allocate_handle();
        style.handle = handle;
        self.dim_styles.add(style).map_err(DxfError::Table)?;
        Ok(handle)
    }

    /// Add a block definition, allocating handles for the record, its
    /// BLOCK/ENDBLK pair and every entity inside it.
    pub fn add_block(&mut self, mut block: BlockRecord) -> Result<Handle> {
        let handle = self.allocate_handle();
        block.handle = handle;
        block.block_entity_handle = self.allocate_handle();
        block.block_end_handle = self.allocate_handle();
        for entity in &mut block.entities {
            let entity_handle = self.allocate_handle();
            entity.as_entity_mut().set_handle(entity_handle);
        }
        self.block_records.add(block).map_err(DxfError::Table)?;
        Ok(handle)
    }

    /// Model-space entities in insertion order.
    pub fn entities(&self) -> impl Iterator<Item = &EntityType> {
        self.entities.values()
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }
}

impl Default for CadDocument {
    fn default() -> Self {
        CadDocument::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Circle, Entity};
    use crate::types::{Color, Vector3};

    #[test]
    fn test_new_document_defaults() {
        let document = CadDocument::new();
        assert!(document.layers.contains("0"));
        assert!(document.line_types.contains("Continuous"));
        assert!(document.line_types.contains("ByLayer"));
        assert!(document.line_types.contains("ByBlock"));
        assert!(document.text_styles.contains("Standard"));
        assert!(document.dim_styles.contains("Standard"));
        assert!(document.block_records.contains("*Model_Space"));
        assert!(document.block_records.contains("*Paper_Space"));
        assert_eq!(document.entity_count(), 0);
    }

    #[test]
    fn test_handles_are_sequential() {
        let mut document = CadDocument::new();
        let first = document.add_entity(EntityType::Circle(Circle::new(Vector3::ZERO, 4.0)));
        let second = document.add_entity(EntityType::Circle(Circle::new(Vector3::ZERO, 2.0)));
        assert_eq!(second.value(), first.value() + 1);
    }

    #[test]
    fn test_duplicate_layer_rejected() {
        let mut document = CadDocument::new();
        document
            .add_layer(Layer::with_color("SPT", Color::Index(3)))
            .unwrap();
        let err = document
            .add_layer(Layer::with_color("spt", Color::Index(4)))
            .unwrap_err();
        assert!(matches!(err, DxfError::Table(_)));
    }

    #[test]
    fn test_add_block_allocates_entity_handles() {
        let mut document = CadDocument::new();
        let mut block = BlockRecord::new("SONDAGEM");
        block.add_entity(EntityType::Circle(Circle::new(Vector3::ZERO, 4.0)));
        document.add_block(block).unwrap();
        let record = document.block_records.get("SONDAGEM").unwrap();
        assert!(record.handle.is_valid());
        assert!(record.block_entity_handle.is_valid());
        assert!(record.block_end_handle.is_valid());
        assert!(record.entities[0].as_entity().handle().is_valid());
    }
}

//! Block record table entry
//!
//! Block records own the block's entities. The two paper/model space
//! records exist in every document; named blocks (like the borehole
//! marker) are added on top.

use crate::entities::EntityType;
use crate::tables::TableEntry;
use crate::types::Handle;

pub const MODEL_SPACE_NAME: &str = "*Model_Space";
pub const PAPER_SPACE_NAME: &str = "*Paper_Space";

/// A block record and its entities.
#[derive(Debug, Clone)]
pub struct BlockRecord {
    pub handle: Handle,
    /// Handle of the BLOCK entity written in the BLOCKS section.
    pub block_entity_handle: Handle,
    /// Handle of the matching ENDBLK.
    pub block_end_handle: Handle,
    pub name: String,
    pub base_point_x: f64,
    pub base_point_y: f64,
    pub is_explodable: bool,
    pub scale_uniformly: bool,
    /// Entities belonging to the block definition. Model and paper space
    /// records keep this empty; their entities live on the document.
    pub entities: Vec<EntityType>,
}

impl BlockRecord {
    pub fn new(name: impl Into<String>) -> Self {
        BlockRecord {
            handle: Handle::NULL,
            block_entity_handle: Handle::NULL,
            block_end_handle: Handle::NULL,
            name: name.into(),
            base_point_x: 0.0,
            base_point_y: 0.0,
            is_explodable: true,
            scale_uniformly: false,
            entities: Vec::new(),
        }
    }

    pub fn model_space() -> Self {
        BlockRecord::new(MODEL_SPACE_NAME)
    }

    pub fn paper_space() -> Self {
        BlockRecord::new(PAPER_SPACE_NAME)
    }

    pub fn is_model_space(&self) -> bool {
        self.name.eq_ignore_ascii_case(MODEL_SPACE_NAME)
    }

    pub fn is_paper_space(&self) -> bool {
        self.name.eq_ignore_ascii_case(PAPER_SPACE_NAME)
    }

    pub fn add_entity(&mut self, entity: EntityType) {
        self.entities.push(entity);
    }
}

impl TableEntry for BlockRecord {
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

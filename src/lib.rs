//! # sondagens-dxf
//!
//! Generates borehole ("sondagem") site-plan drawings as ASCII DXF.
//!
//! Input is a list of borehole groups, each naming a layer and carrying
//! surveyed positions. The generator assigns each layer a color from a
//! small readable palette, balancing usage across layers, then places a
//! shared marker block at every borehole with a leader-and-text label.
//!
//! ```no_run
//! use sondagens_dxf::{generate_boreholes_dxf, Borehole, BoreholeGroup};
//!
//! let mut group = BoreholeGroup::new("SPT");
//! group.add_borehole(Borehole::new("S-01", 120.0, 340.0));
//! let dxf = generate_boreholes_dxf(&[group])?;
//! std::fs::write("site_plan.dxf", dxf)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod allocator;
pub mod assembler;
pub mod document;
pub mod entities;
pub mod error;
pub mod glyph;
pub mod io;
pub mod model;
pub mod notification;
pub mod palette;
pub mod tables;
pub mod types;

pub use allocator::{assign_colors, LayerRequest, ResolvedLayer};
pub use assembler::{assemble_document, generate_boreholes_dxf, generate_with_palette};
pub use document::CadDocument;
pub use error::{DxfError, Result};
pub use model::{Borehole, BoreholeGroup};
pub use palette::{Palette, AVAILABLE_COLORS};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

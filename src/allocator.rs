//! Layer color allocation
//!
//! Layers arriving from survey data may carry an explicit ACI color or
//! none at all. Missing colors are filled from the palette so that usage
//! stays as even as possible: unused palette colors are consumed first,
//! then the least-used color wins, smallest ACI code breaking ties.
//!
//! Assignment is order-sensitive and fully deterministic: the same request
//! sequence always resolves to the same colors. Explicit colors are never
//! rewritten, but they do count toward usage, including explicit colors on
//! requests that appear later in the sequence.

use std::collections::BTreeMap;

use crate::error::{DxfError, Result};
use crate::palette::Palette;

/// A layer waiting for color resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerRequest {
    /// Layer name, as it will appear in the LAYER table.
    pub name: String,
    /// Explicit ACI color, if the caller chose one.
    pub color: Option<u8>,
}

impl LayerRequest {
    pub fn new(name: impl Into<String>, color: Option<u8>) -> Self {
        LayerRequest {
            name: name.into(),
            color,
        }
    }
}

/// A layer after color resolution. Every layer has a concrete color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLayer {
    pub name: String,
    pub color: u8,
}

/// Tally how many requests currently hold each palette color.
///
/// Colors outside the palette are ignored; requests without a color
/// contribute nothing.
pub fn count_color_usage(requests: &[LayerRequest], palette: &Palette) -> BTreeMap<u8, usize> {
    let mut usage: BTreeMap<u8, usize> = palette.iter().map(|c| (c, 0)).collect();
    for request in requests {
        if let Some(color) = request.color {
            if let Some(count) = usage.get_mut(&color) {
                *count += 1;
            }
        }
    }
    usage
}

/// Pick the next color: an untouched palette color if one exists,
/// otherwise the least-used one. Ties go to the smallest ACI code.
pub fn select_least_used_color(palette: &Palette, usage: &BTreeMap<u8, usize>) -> u8 {
    for color in palette.iter() {
        if usage.get(&color).copied().unwrap_or(0) == 0 {
            return color;
        }
    }
    let mut best = palette.smallest();
    let mut best_count = usize::MAX;
    for color in palette.iter() {
        let count = usage.get(&color).copied().unwrap_or(0);
        if count < best_count {
            best = color;
            best_count = count;
        }
    }
    best
}

/// Resolve a request sequence into concretely colored layers.
///
/// Explicit colors are validated against the palette and kept as-is.
/// Missing colors are filled in request order; the usage tally is
/// recomputed from the whole sequence before each pick, so explicit
/// colors further down still influence earlier assignments.
pub fn assign_colors(requests: Vec<LayerRequest>, palette: &Palette) -> Result<Vec<ResolvedLayer>> {
    for request in &requests {
        if let Some(color) = request.color {
            if !palette.contains(color) {
                return Err(DxfError::ColorOutsidePalette {
                    layer: request.name.clone(),
                    color,
                });
            }
        }
    }

    let mut working = requests;
    let mut resolved = Vec::with_capacity(working.len());
    for index in 0..working.len() {
        let color = match working[index].color {
            Some(color) => color,
            None => {
                let usage = count_color_usage(&working, palette);
                let picked = select_least_used_color(palette, &usage);
                working[index].color = Some(picked);
                picked
            }
        };
        resolved.push(ResolvedLayer {
            name: working[index].name.clone(),
            color,
        });
    }
    Ok(resolved)
}

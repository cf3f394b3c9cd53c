//! Input data model for borehole site plans
//!
//! Groups arrive as JSON (or are built in code) and carry the layer name,
//! an optional explicit ACI color, and the surveyed borehole positions.

use serde::{Deserialize, Serialize};

/// A single surveyed borehole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Borehole {
    /// Identifier shown next to the marker, e.g. "S-01".
    pub id: String,
    /// Easting, in drawing units.
    pub x: f64,
    /// Northing, in drawing units.
    pub y: f64,
    /// Label leader direction in degrees counter-clockwise from east.
    /// Defaults to 45.
    #[serde(default)]
    pub label_angle: Option<f64>,
    /// Length of the leader segment from the marker to the label.
    /// Defaults to 10.
    #[serde(default)]
    pub label_segment_length: Option<f64>,
}

impl Borehole {
    pub fn new(id: impl Into<String>, x: f64, y: f64) -> Self {
        Borehole {
            id: id.into(),
            x,
            y,
            label_angle: None,
            label_segment_length: None,
        }
    }
}

/// A group of boreholes that share one layer (and so one color).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoreholeGroup {
    /// Layer the group's markers are placed on.
    pub layer: String,
    /// Explicit ACI color for the layer. Left out, the generator picks one
    /// from the palette.
    #[serde(default)]
    pub color: Option<u8>,
    /// The group's boreholes, drawn in order.
    #[serde(default)]
    pub boreholes: Vec<Borehole>,
}

impl BoreholeGroup {
    pub fn new(layer: impl Into<String>) -> Self {
        BoreholeGroup {
            layer: layer.into(),
            color: None,
            boreholes: Vec::new(),
        }
    }

    pub fn with_color(layer: impl Into<String>, color: u8) -> Self {
        BoreholeGroup {
            layer: layer.into(),
            color: Some(color),
            boreholes: Vec::new(),
        }
    }

    pub fn add_borehole(&mut self, borehole: Borehole) -> &mut Self {
        self.boreholes.push(borehole);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_json_roundtrip() {
        let json = r#"{
            "layer": "SPT",
            "color": 3,
            "boreholes": [
                { "id": "S-01", "x": 10.0, "y": 20.0 },
                { "id": "S-02", "x": 30.0, "y": 40.0, "label_angle": 135.0 }
            ]
        }"#;
        let group: BoreholeGroup = serde_json::from_str(json).unwrap();
        assert_eq!(group.layer, "SPT");
        assert_eq!(group.color, Some(3));
        assert_eq!(group.boreholes.len(), 2);
        assert_eq!(group.boreholes[0].label_angle, None);
        assert_eq!(group.boreholes[1].label_angle, Some(135.0));
    }

    #[test]
    fn test_group_defaults() {
        let group: BoreholeGroup = serde_json::from_str(r#"{ "layer": "CPT" }"#).unwrap();
        assert_eq!(group.color, None);
        assert!(group.boreholes.is_empty());
    }
}

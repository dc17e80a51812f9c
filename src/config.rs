//! Runtime configuration for rendering and export

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Serializable stroke color, components in 0.0..=1.0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl StrokeColor {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Convert to image crate RGBA format (0-255)
    pub fn to_rgba_u8(self) -> [u8; 4] {
        [
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
            255,
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Scale factor applied to every page render
    pub page_scale: f32,
    /// Stroke width for selection outlines, in surface pixels
    pub stroke_width: f32,
    /// Outline color for committed selections
    pub committed_color: StrokeColor,
    /// Outline color for the in-progress candidate rectangle
    pub candidate_color: StrokeColor,
    /// Extraction endpoint the selections are POSTed to
    pub endpoint: String,
    /// Filename the returned spreadsheet is saved under
    pub download_filename: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_scale: 1.5,
            stroke_width: 2.0,
            committed_color: StrokeColor::rgb(1.0, 0.0, 0.0),
            candidate_color: StrokeColor::rgb(0.0, 0.2, 1.0),
            endpoint: "http://localhost:5000/exportar-editor".to_string(),
            download_filename: "extracted_fields.xlsx".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file; missing fields fall back to
    /// their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let config = serde_json::from_reader(std::io::BufReader::new(file))?;
        Ok(config)
    }
}

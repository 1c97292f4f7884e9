use std::path::Path;

use egui::{Color32, Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable naming an optional JSON config file.
pub const CONFIG_ENV_VAR: &str = "SKETCHPAD_CONFIG";

/// Sketchpad settings. Every field has a default, so a config file only needs
/// to name the values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    /// Size of the on-screen canvas in points
    pub canvas_size: [f32; 2],
    /// Size of the exported PNG in pixels
    pub export_size: [u32; 2],
    /// Unmultiplied RGBA background of both the canvas and the export
    pub background: [u8; 4],
    pub thin_thickness: f32,
    pub thick_thickness: f32,
    /// Tool preview circles have radius `thickness / preview_divisor`
    pub preview_divisor: f32,
    pub sticker_size: f32,
    pub stickers: Vec<String>,
    pub export_file: String,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            canvas_size: [256.0, 256.0],
            export_size: [1024, 1024],
            background: [255, 255, 255, 255],
            thin_thickness: 2.0,
            thick_thickness: 6.0,
            preview_divisor: 1.5,
            sticker_size: 32.0,
            stickers: vec!["🎃".to_owned(), "👻".to_owned(), "🦇".to_owned()],
            export_file: "sketchpad.png".to_owned(),
        }
    }
}

impl SketchConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Loads the file named by [`CONFIG_ENV_VAR`], falling back to defaults.
    pub fn from_env() -> Self {
        let Ok(path) = std::env::var(CONFIG_ENV_VAR) else {
            return Self::default();
        };
        match Self::load(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path);
                config
            }
            Err(err) => {
                log::warn!("Ignoring config {}: {}", path, err);
                Self::default()
            }
        }
    }

    /// The canvas region in canvas-local coordinates
    pub fn canvas_rect(&self) -> Rect {
        Rect::from_min_size(Pos2::ZERO, Vec2::new(self.canvas_size[0], self.canvas_size[1]))
    }

    pub fn background_color(&self) -> Color32 {
        let [r, g, b, a] = self.background;
        Color32::from_rgba_unmultiplied(r, g, b, a)
    }

    /// Uniform scale from canvas coordinates to export pixels.
    ///
    /// Uses the horizontal ratio; a non-square ratio keeps the drawing
    /// undistorted and leaves the remainder as background.
    pub fn export_scale(&self) -> f32 {
        if self.canvas_size[0] <= 0.0 {
            return 1.0;
        }
        self.export_size[0] as f32 / self.canvas_size[0]
    }
}

use egui::{Color32, Pos2};

use super::sticker::{Glyph, Sticker};
use crate::surface::Surface;

/// Marker cursor: a dot showing the size of the next stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolPreview {
    center: Pos2,
    radius: f32,
    color: Color32,
}

impl ToolPreview {
    /// `divisor` turns the marker thickness into the dot radius
    pub fn new(center: Pos2, thickness: f32, divisor: f32, color: Color32) -> Self {
        Self {
            center,
            radius: thickness / divisor,
            color,
        }
    }

    pub fn center(&self) -> Pos2 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn display(&self, surface: &mut dyn Surface) {
        surface.fill_circle(self.center, self.radius, self.color);
    }
}

/// Sticker cursor: renders exactly like the sticker it would place.
#[derive(Debug, Clone, PartialEq)]
pub struct StickerPreview(Sticker);

impl StickerPreview {
    pub fn new(cursor: Pos2, glyph: Glyph, size: f32) -> Self {
        Self(Sticker::new(cursor, glyph, size))
    }

    pub fn glyph(&self) -> &Glyph {
        self.0.glyph()
    }

    pub fn display(&self, surface: &mut dyn Surface) {
        self.0.display(surface);
    }
}

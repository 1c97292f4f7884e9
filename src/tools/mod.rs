//! Tool selection: marker thickness and colour, or a selected sticker.

mod palette;

use egui::Color32;
use egui::Pos2;
use egui::ecolor::Hsva;

use crate::command::Command;
use crate::config::SketchConfig;
use crate::element::{Glyph, StickerPreview, ToolPreview};

pub use palette::StickerPalette;

/// The two marker buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerPreset {
    Thin,
    Thick,
}

impl MarkerPreset {
    pub const ALL: [MarkerPreset; 2] = [MarkerPreset::Thin, MarkerPreset::Thick];

    pub fn thickness(self, config: &SketchConfig) -> f32 {
        match self {
            MarkerPreset::Thin => config.thin_thickness,
            MarkerPreset::Thick => config.thick_thickness,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MarkerPreset::Thin => "Thin",
            MarkerPreset::Thick => "Thick",
        }
    }
}

/// Current tool settings.
///
/// At most one mode is active: a selected sticker wins over freehand drawing,
/// and choosing a marker deselects the sticker.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolState {
    thickness: f32,
    color: Color32,
    sticker: Option<Glyph>,
    can_draw: bool,
}

impl ToolState {
    /// No tool chosen yet: freehand drawing stays disabled until one is
    pub fn new(config: &SketchConfig) -> Self {
        Self {
            thickness: config.thin_thickness,
            color: Color32::BLACK,
            sticker: None,
            can_draw: false,
        }
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn sticker(&self) -> Option<&Glyph> {
        self.sticker.as_ref()
    }

    pub fn can_draw(&self) -> bool {
        self.can_draw
    }

    /// Selects freehand drawing at `thickness`
    pub fn set_thickness(&mut self, thickness: f32) {
        self.thickness = thickness;
        self.enable_freehand();
    }

    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    /// `None` leaves sticker mode without enabling freehand drawing
    pub fn select_sticker(&mut self, glyph: Option<Glyph>) {
        self.sticker = glyph;
    }

    pub fn enable_freehand(&mut self) {
        self.sticker = None;
        self.can_draw = true;
    }

    /// The cursor feedback for the current tool at `cursor`, if any
    pub fn preview_at(&self, cursor: Pos2, config: &SketchConfig) -> Option<Command> {
        if let Some(glyph) = &self.sticker {
            Some(Command::StickerPreview(StickerPreview::new(
                cursor,
                glyph.clone(),
                config.sticker_size,
            )))
        } else if self.can_draw {
            Some(Command::ToolPreview(ToolPreview::new(
                cursor,
                self.thickness,
                config.preview_divisor,
                self.color,
            )))
        } else {
            None
        }
    }
}

/// A fully saturated colour with a random hue
pub fn random_hue(rng: &mut fastrand::Rng) -> Color32 {
    Color32::from(Hsva::new(rng.f32(), 1.0, 1.0, 1.0))
}

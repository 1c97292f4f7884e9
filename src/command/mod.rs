mod history;

use egui::Pos2;

use crate::element::{Sticker, StickerPreview, Stroke, ToolPreview};
use crate::surface::Surface;

pub use history::{CommandHistory, Entry};

/// Identifies a committed command for the lifetime of its history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommandId(pub u64);

/// Everything that can be painted on the canvas.
///
/// `Stroke` and `Sticker` are committed to the history; the preview variants
/// are transient and always replaced wholesale.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Stroke(Stroke),
    Sticker(Sticker),
    ToolPreview(ToolPreview),
    StickerPreview(StickerPreview),
}

impl Command {
    /// Paints the command using only its own state
    pub fn display(&self, surface: &mut dyn Surface) {
        match self {
            Command::Stroke(stroke) => stroke.display(surface),
            Command::Sticker(sticker) => sticker.display(surface),
            Command::ToolPreview(preview) => preview.display(surface),
            Command::StickerPreview(preview) => preview.display(surface),
        }
    }

    /// Extends a stroke or moves a sticker. Previews ignore drags.
    pub fn drag(&mut self, point: Pos2) {
        match self {
            Command::Stroke(stroke) => stroke.drag(point),
            Command::Sticker(sticker) => sticker.drag(point),
            Command::ToolPreview(_) | Command::StickerPreview(_) => {}
        }
    }

    pub fn is_preview(&self) -> bool {
        matches!(self, Command::ToolPreview(_) | Command::StickerPreview(_))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Command::Stroke(_) => "Stroke",
            Command::Sticker(_) => "Sticker",
            Command::ToolPreview(_) => "Tool Preview",
            Command::StickerPreview(_) => "Sticker Preview",
        }
    }
}

impl From<Stroke> for Command {
    fn from(stroke: Stroke) -> Self {
        Command::Stroke(stroke)
    }
}

impl From<Sticker> for Command {
    fn from(sticker: Sticker) -> Self {
        Command::Sticker(sticker)
    }
}

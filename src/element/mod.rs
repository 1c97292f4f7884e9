//! The drawable pieces a sketch is made of.

mod preview;
mod sticker;
mod stroke;

pub use preview::{StickerPreview, ToolPreview};
pub use sticker::{CURSOR_OFFSET, Glyph, Sticker};
pub use stroke::Stroke;

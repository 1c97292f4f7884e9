use crate::config::SketchConfig;
use crate::element::Glyph;

/// The sticker buttons, built-in ones first, custom ones in creation order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StickerPalette {
    glyphs: Vec<Glyph>,
}

impl StickerPalette {
    pub fn new(config: &SketchConfig) -> Self {
        let mut palette = Self::default();
        for text in &config.stickers {
            if palette.add_custom(text).is_none() {
                log::warn!("Ignoring blank sticker in config");
            }
        }
        palette
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    /// Adds a sticker from user text. Blank text is rejected with `None`;
    /// text already in the palette returns the existing glyph.
    pub fn add_custom(&mut self, text: &str) -> Option<Glyph> {
        let glyph = Glyph::parse(text)?;
        if !self.glyphs.contains(&glyph) {
            log::info!("Added sticker {}", glyph);
            self.glyphs.push(glyph.clone());
        }
        Some(glyph)
    }
}

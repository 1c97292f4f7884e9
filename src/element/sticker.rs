use egui::{Pos2, Vec2, vec2};

use crate::surface::Surface;

/// Subtracted from the cursor so the glyph lands centred on it
pub const CURSOR_OFFSET: Vec2 = vec2(32.0, 3.0);

/// Validated sticker text: trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Glyph(String);

impl Glyph {
    /// Returns `None` for empty or whitespace-only text
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_owned()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Glyph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A placed sticker. The anchor is stored already offset from the cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct Sticker {
    anchor: Pos2,
    glyph: Glyph,
    size: f32,
}

impl Sticker {
    pub fn new(cursor: Pos2, glyph: Glyph, size: f32) -> Self {
        Self {
            anchor: cursor - CURSOR_OFFSET,
            glyph,
            size,
        }
    }

    pub fn anchor(&self) -> Pos2 {
        self.anchor
    }

    pub fn glyph(&self) -> &Glyph {
        &self.glyph
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    /// Moves the sticker so it stays centred on the cursor
    pub fn drag(&mut self, cursor: Pos2) {
        self.anchor = cursor - CURSOR_OFFSET;
    }

    pub fn display(&self, surface: &mut dyn Surface) {
        surface.fill_text(self.glyph.as_str(), self.anchor, self.size);
    }
}

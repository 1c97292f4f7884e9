//! Drawing targets that commands paint onto.
//!
//! Commands only ever talk to [`Surface`], using absolute canvas coordinates.
//! Scaling or translating to a concrete target is the surface's job, which is
//! what lets the exporter replay the same commands at a higher resolution.

use egui::{Color32, Pos2, Rect};

mod display_list;
mod painter;
mod raster;

pub use display_list::{DisplayList, DrawOp};
pub use painter::PainterSurface;
pub use raster::{GlyphFonts, RasterSurface};

/// Fill colour used for sticker glyphs
pub const TEXT_COLOR: Color32 = Color32::BLACK;

/// A 2D drawing target with a canvas-style path API.
pub trait Surface {
    /// Reset `region` to the background
    fn clear(&mut self, region: Rect);

    /// Start a new path at `point`
    fn move_to(&mut self, point: Pos2);

    /// Extend the current path with a straight segment ending at `point`
    fn line_to(&mut self, point: Pos2);

    /// Stroke the current path and discard it
    fn stroke(&mut self, thickness: f32, color: Color32);

    /// Draw `text` with its baseline starting at `origin`
    fn fill_text(&mut self, text: &str, origin: Pos2, size: f32);

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32);
}

/// Pen state shared by surfaces that buffer a path until it is stroked.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct PathBuffer {
    points: Vec<Pos2>,
}

impl PathBuffer {
    pub(crate) fn move_to(&mut self, point: Pos2) {
        self.points.clear();
        self.points.push(point);
    }

    /// A `line_to` with no current point behaves like `move_to`
    pub(crate) fn line_to(&mut self, point: Pos2) {
        self.points.push(point);
    }

    /// Takes the buffered points; a path needs at least two to have a segment
    pub(crate) fn take(&mut self) -> Vec<Pos2> {
        std::mem::take(&mut self.points)
    }
}

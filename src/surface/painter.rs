use egui::{Color32, FontId, Painter, Pos2, Rect, Shape, Stroke, Vec2, vec2};

use super::{PathBuffer, Surface, TEXT_COLOR};

/// Paints onto an egui [`Painter`], translating canvas-local coordinates to
/// screen coordinates by the canvas origin.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    origin: Vec2,
    background: Color32,
    path: PathBuffer,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, origin: Pos2, background: Color32) -> Self {
        Self {
            painter,
            origin: origin.to_vec2(),
            background,
            path: PathBuffer::default(),
        }
    }
}

impl Surface for PainterSurface<'_> {
    fn clear(&mut self, region: Rect) {
        self.painter
            .rect_filled(region.translate(self.origin), 0.0, self.background);
    }

    fn move_to(&mut self, point: Pos2) {
        self.path.move_to(point);
    }

    fn line_to(&mut self, point: Pos2) {
        self.path.line_to(point);
    }

    fn stroke(&mut self, thickness: f32, color: Color32) {
        let mut points = self.path.take();
        // The tessellator cannot orient zero-length segments.
        points.dedup();
        if points.len() < 2 {
            return;
        }
        let points = points.into_iter().map(|p| p + self.origin).collect();
        self.painter
            .add(Shape::line(points, Stroke::new(thickness, color)));
    }

    /// `origin` is the left end of the baseline, as on every other surface
    fn fill_text(&mut self, text: &str, origin: Pos2, size: f32) {
        let galley =
            self.painter
                .layout_no_wrap(text.to_owned(), FontId::proportional(size), TEXT_COLOR);
        let baseline = galley
            .rows
            .first()
            .and_then(|row| row.glyphs.first())
            .map_or(galley.size().y, |glyph| glyph.pos.y);
        self.painter.galley(
            origin + self.origin - vec2(0.0, baseline),
            galley,
            TEXT_COLOR,
        );
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.painter
            .circle_filled(center + self.origin, radius, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{LayerId, RawInput, pos2};

    fn painted(paint: impl FnOnce(&mut PainterSurface<'_>)) -> Vec<Shape> {
        let ctx = egui::Context::default();
        let mut paint = Some(paint);
        let output = ctx.run(RawInput::default(), |ctx| {
            let painter = ctx.layer_painter(LayerId::background());
            let mut surface = PainterSurface::new(&painter, pos2(10.0, 20.0), Color32::WHITE);
            if let Some(paint) = paint.take() {
                paint(&mut surface);
            }
        });
        output.shapes.into_iter().map(|clipped| clipped.shape).collect()
    }

    #[test]
    fn test_text_baseline_sits_on_origin() {
        let shapes = painted(|surface| surface.fill_text("🎃", pos2(0.0, 32.0), 32.0));
        let text = shapes
            .iter()
            .find_map(|shape| match shape {
                Shape::Text(text) => Some(text),
                _ => None,
            })
            .expect("a text shape");
        let glyph = &text.galley.rows[0].glyphs[0];

        assert_eq!(text.pos.x, 10.0);
        assert!((text.pos.y + glyph.pos.y - 52.0).abs() < 1e-3);
        // The baseline is below the top of the glyph box, so the galley
        // starts above it rather than a whole line height above it.
        assert!(text.pos.y > 52.0 - text.galley.size().y);
    }

    #[test]
    fn test_stroke_skips_single_point_paths() {
        let shapes = painted(|surface| {
            surface.move_to(pos2(1.0, 1.0));
            surface.line_to(pos2(1.0, 1.0));
            surface.stroke(2.0, Color32::RED);
        });
        assert!(shapes.is_empty());
    }
}

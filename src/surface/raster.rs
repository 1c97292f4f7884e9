use ab_glyph::{Font, FontArc, PxScale, ScaleFont};
use egui::{Color32, Pos2, Rect, pos2};
use image::{Rgba, RgbaImage};

use super::{PathBuffer, Surface, TEXT_COLOR};

/// Fonts used to rasterise sticker glyphs, tried in order per character.
#[derive(Clone, Default)]
pub struct GlyphFonts {
    fonts: Vec<FontArc>,
}

impl std::fmt::Debug for GlyphFonts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlyphFonts")
            .field("fonts", &format!("<{} fonts>", self.fonts.len()))
            .finish()
    }
}

impl GlyphFonts {
    /// No fonts: text is skipped when rasterising
    pub fn empty() -> Self {
        Self::default()
    }

    /// Loads the fonts egui bundles for its proportional family, which
    /// include an emoji font.
    pub fn from_egui_defaults() -> Self {
        let definitions = egui::FontDefinitions::default();
        let names = definitions
            .families
            .get(&egui::FontFamily::Proportional)
            .cloned()
            .unwrap_or_default();

        let fonts = names
            .iter()
            .filter_map(|name| {
                let data = definitions.font_data.get(name)?;
                match FontArc::try_from_vec(data.font.to_vec()) {
                    Ok(font) => Some(font),
                    Err(err) => {
                        log::warn!("Skipping font {}: {}", name, err);
                        None
                    }
                }
            })
            .collect::<Vec<_>>();

        log::debug!("Loaded {} fonts for export", fonts.len());
        Self { fonts }
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    fn font_for(&self, ch: char) -> Option<&FontArc> {
        self.fonts.iter().find(|font| font.glyph_id(ch).0 != 0)
    }
}

/// An offscreen RGBA surface. Canvas coordinates are multiplied by `scale`
/// to get pixel coordinates.
pub struct RasterSurface {
    image: RgbaImage,
    scale: f32,
    background: Color32,
    fonts: GlyphFonts,
    path: PathBuffer,
}

impl RasterSurface {
    pub fn new(width: u32, height: u32, scale: f32, background: Color32, fonts: &GlyphFonts) -> Self {
        Self {
            image: RgbaImage::new(width, height),
            scale,
            background,
            fonts: fonts.clone(),
            path: PathBuffer::default(),
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    fn to_pixels(&self, point: Pos2) -> Pos2 {
        pos2(point.x * self.scale, point.y * self.scale)
    }

    /// Blends `color` into every pixel of the box whose centre lies inside the
    /// shape described by `signed_distance` (positive inside), with a one
    /// pixel soft edge.
    fn cover(&mut self, min: Pos2, max: Pos2, color: Color32, signed_distance: impl Fn(Pos2) -> f32) {
        let (width, height) = self.image.dimensions();
        let x0 = min.x.floor().max(0.0) as u32;
        let y0 = min.y.floor().max(0.0) as u32;
        let x1 = (max.x.ceil().max(0.0) as u32).min(width);
        let y1 = (max.y.ceil().max(0.0) as u32).min(height);

        for y in y0..y1 {
            for x in x0..x1 {
                let center = pos2(x as f32 + 0.5, y as f32 + 0.5);
                let coverage = (signed_distance(center) + 0.5).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    blend(self.image.get_pixel_mut(x, y), color, coverage);
                }
            }
        }
    }

    fn stroke_segment(&mut self, from: Pos2, to: Pos2, thickness: f32, color: Color32) {
        let from = self.to_pixels(from);
        let to = self.to_pixels(to);
        if from == to {
            return;
        }
        let radius = (thickness * self.scale / 2.0).max(0.5);
        let min = from.min(to) - egui::Vec2::splat(radius + 1.0);
        let max = from.max(to) + egui::Vec2::splat(radius + 1.0);
        self.cover(min, max, color, |p| radius - distance_to_segment(p, from, to));
    }
}

impl Surface for RasterSurface {
    fn clear(&mut self, region: Rect) {
        let min = self.to_pixels(region.min);
        let max = self.to_pixels(region.max);
        let (width, height) = self.image.dimensions();
        let x0 = min.x.round().max(0.0) as u32;
        let y0 = min.y.round().max(0.0) as u32;
        let x1 = (max.x.round().max(0.0) as u32).min(width);
        let y1 = (max.y.round().max(0.0) as u32).min(height);
        let background = Rgba(self.background.to_srgba_unmultiplied());
        for y in y0..y1 {
            for x in x0..x1 {
                self.image.put_pixel(x, y, background);
            }
        }
    }

    fn move_to(&mut self, point: Pos2) {
        self.path.move_to(point);
    }

    fn line_to(&mut self, point: Pos2) {
        self.path.line_to(point);
    }

    fn stroke(&mut self, thickness: f32, color: Color32) {
        let points = self.path.take();
        for pair in points.windows(2) {
            self.stroke_segment(pair[0], pair[1], thickness, color);
        }
    }

    fn fill_text(&mut self, text: &str, origin: Pos2, size: f32) {
        let scale = PxScale::from(size * self.scale);
        let mut caret = ab_glyph::point(origin.x * self.scale, origin.y * self.scale);

        for ch in text.chars() {
            let Some(font) = self.fonts.font_for(ch) else {
                log::debug!("No export font has a glyph for {:?}", ch);
                continue;
            };
            let id = font.glyph_id(ch);
            let advance = font.as_scaled(scale).h_advance(id);

            if let Some(outlined) = font.outline_glyph(id.with_scale_and_position(scale, caret)) {
                let bounds = outlined.px_bounds();
                let image = &mut self.image;
                let (width, height) = image.dimensions();
                outlined.draw(|x, y, coverage| {
                    let px = bounds.min.x as i64 + x as i64;
                    let py = bounds.min.y as i64 + y as i64;
                    if px >= 0 && py >= 0 && (px as u32) < width && (py as u32) < height {
                        blend(image.get_pixel_mut(px as u32, py as u32), TEXT_COLOR, coverage);
                    }
                });
            }
            caret.x += advance;
        }
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        let center = self.to_pixels(center);
        let radius = radius * self.scale;
        let reach = egui::Vec2::splat(radius + 1.0);
        self.cover(center - reach, center + reach, color, |p| radius - p.distance(center));
    }
}

/// Source-over compositing of `color` at `coverage` onto `pixel`
fn blend(pixel: &mut Rgba<u8>, color: Color32, coverage: f32) {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    let alpha = (a as f32 / 255.0) * coverage.clamp(0.0, 1.0);
    if alpha <= 0.0 {
        return;
    }
    let dst_alpha = pixel.0[3] as f32 / 255.0;
    for (channel, src) in pixel.0.iter_mut().zip([r, g, b]) {
        *channel = (src as f32 * alpha + *channel as f32 * (1.0 - alpha)).round() as u8;
    }
    pixel.0[3] = ((alpha + dst_alpha * (1.0 - alpha)) * 255.0).round() as u8;
}

fn distance_to_segment(point: Pos2, start: Pos2, end: Pos2) -> f32 {
    let line = end - start;
    let length_sq = line.length_sq();
    if length_sq == 0.0 {
        return point.distance(start);
    }
    let t = ((point - start).dot(line) / length_sq).clamp(0.0, 1.0);
    point.distance(start + line * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface() -> RasterSurface {
        let mut surface = RasterSurface::new(40, 40, 4.0, Color32::WHITE, &GlyphFonts::empty());
        surface.clear(Rect::from_min_max(pos2(0.0, 0.0), pos2(10.0, 10.0)));
        surface
    }

    #[test]
    fn test_clear_fills_scaled_region() {
        let surface = surface();
        assert_eq!(surface.image().get_pixel(39, 39).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_segment_is_scaled() {
        let mut surface = surface();
        surface.move_to(pos2(1.0, 5.0));
        surface.line_to(pos2(9.0, 5.0));
        surface.stroke(2.0, Color32::RED);

        assert_eq!(surface.image().get_pixel(20, 20).0, [255, 0, 0, 255]);
        assert_eq!(surface.image().get_pixel(20, 2).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_degenerate_segment_paints_nothing() {
        let mut surface = surface();
        surface.move_to(pos2(5.0, 5.0));
        surface.line_to(pos2(5.0, 5.0));
        surface.stroke(4.0, Color32::RED);
        assert_eq!(surface.image().get_pixel(20, 20).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_circle_center_is_filled() {
        let mut surface = surface();
        surface.fill_circle(pos2(5.0, 5.0), 2.0, Color32::BLUE);
        assert_eq!(surface.image().get_pixel(20, 20).0, [0, 0, 255, 255]);
        assert_eq!(surface.image().get_pixel(0, 0).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_text_without_fonts_is_skipped() {
        let mut surface = surface();
        surface.fill_text("🎃", pos2(2.0, 8.0), 8.0);
        assert!(surface.image().pixels().all(|p| p.0 == [255, 255, 255, 255]));
    }
}

//! One-shot PNG export: replays committed commands onto an offscreen raster.

use std::io::Cursor;
#[cfg(not(target_arch = "wasm32"))]
use std::path::Path;

use image::{DynamicImage, ImageFormat};

use crate::command::Command;
use crate::config::SketchConfig;
use crate::error::ExportError;
use crate::surface::{GlyphFonts, RasterSurface, Surface};

/// Target size and scale for an export
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportOptions {
    pub width: u32,
    pub height: u32,
    /// Canvas units to pixels
    pub scale: f32,
    pub background: egui::Color32,
}

impl ExportOptions {
    pub fn from_config(config: &SketchConfig) -> Self {
        Self {
            width: config.export_size[0],
            height: config.export_size[1],
            scale: config.export_scale(),
            background: config.background_color(),
        }
    }
}

/// Paints `commands` at `options.scale`. Previews are skipped.
pub fn rasterize<'a>(
    commands: impl IntoIterator<Item = &'a Command>,
    options: &ExportOptions,
    fonts: &GlyphFonts,
) -> Result<RasterSurface, ExportError> {
    if options.width == 0 || options.height == 0 {
        return Err(ExportError::EmptyCanvas {
            width: options.width,
            height: options.height,
        });
    }

    let mut surface = RasterSurface::new(
        options.width,
        options.height,
        options.scale,
        options.background,
        fonts,
    );
    let full = egui::Rect::from_min_size(
        egui::Pos2::ZERO,
        egui::vec2(
            options.width as f32 / options.scale,
            options.height as f32 / options.scale,
        ),
    );
    surface.clear(full);

    let mut painted = 0;
    for command in commands.into_iter().filter(|command| !command.is_preview()) {
        command.display(&mut surface);
        painted += 1;
    }
    log::debug!("Rasterized {} commands at {}x", painted, options.scale);
    Ok(surface)
}

/// Renders `commands` and encodes the result as PNG bytes
pub fn render_png<'a>(
    commands: impl IntoIterator<Item = &'a Command>,
    options: &ExportOptions,
    fonts: &GlyphFonts,
) -> Result<Vec<u8>, ExportError> {
    let surface = rasterize(commands, options, fonts)?;
    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(surface.into_image())
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    log::info!(
        "Exported {}x{} PNG ({} bytes)",
        options.width,
        options.height,
        bytes.len()
    );
    Ok(bytes)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_png(path: impl AsRef<Path>, bytes: &[u8]) -> Result<(), ExportError> {
    std::fs::write(path.as_ref(), bytes)?;
    log::info!("Saved export to {}", path.as_ref().display());
    Ok(())
}

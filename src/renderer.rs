// src/renderer.rs
use egui::{Painter, Rect};

use crate::event::{EventHandler, SketchEvent};
use crate::state::SketchState;
use crate::surface::{DisplayList, PainterSurface, Surface};

/// Rebuilds the frame from the sketch state whenever it is notified.
///
/// The frame is retained as a [`DisplayList`] so egui can repaint it every
/// frame without touching the state.
#[derive(Debug, Default)]
pub struct RenderLoop {
    frame: DisplayList,
    renders: u64,
}

impl RenderLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the canvas, paints every committed command oldest first, then
    /// the preview on top unless the pointer is held.
    pub fn render(&mut self, state: &SketchState) {
        let mut frame = DisplayList::new();
        frame.clear(state.canvas_rect());

        for command in state.history().commands() {
            command.display(&mut frame);
        }

        if !state.is_drawing() {
            if let Some(preview) = state.preview() {
                preview.display(&mut frame);
            }
        }

        self.frame = frame;
        self.renders += 1;
    }

    /// The most recently rendered frame
    pub fn frame(&self) -> &DisplayList {
        &self.frame
    }

    /// How many times [`Self::render`] has run
    pub fn render_count(&self) -> u64 {
        self.renders
    }

    /// Paints the retained frame into `canvas`. A canvas with no area has
    /// nothing to paint on and is skipped.
    pub fn paint(&self, painter: &Painter, canvas: Rect, state: &SketchState) {
        if !canvas.is_positive() {
            return;
        }
        let mut surface = PainterSurface::new(
            painter,
            canvas.min,
            state.config().background_color(),
        );
        self.frame.replay(&mut surface);
    }
}

impl EventHandler for RenderLoop {
    fn handle_event(&mut self, event: SketchEvent, state: &SketchState) {
        log::trace!("Render on {:?}", event);
        self.render(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SketchConfig;
    use crate::surface::DrawOp;

    #[test]
    fn test_empty_state_renders_a_clear() {
        let state = SketchState::new(SketchConfig::default());
        let mut renderer = RenderLoop::new();
        renderer.render(&state);
        assert_eq!(renderer.frame().ops(), &[DrawOp::Clear(state.canvas_rect())]);
        assert_eq!(renderer.render_count(), 1);
    }

    fn painted_shapes(canvas: Rect) -> usize {
        let state = SketchState::new(SketchConfig::default());
        let mut renderer = RenderLoop::new();
        renderer.render(&state);

        let ctx = egui::Context::default();
        let output = ctx.run(egui::RawInput::default(), |ctx| {
            let painter = ctx.layer_painter(egui::LayerId::background());
            renderer.paint(&painter, canvas, &state);
        });
        output.shapes.len()
    }

    #[test]
    fn test_paint_skips_empty_canvas() {
        assert_eq!(painted_shapes(Rect::NOTHING), 0);
        assert_eq!(painted_shapes(Rect::from_min_size(egui::pos2(5.0, 5.0), egui::Vec2::ZERO)), 0);
    }

    #[test]
    fn test_paint_fills_the_canvas_background() {
        let canvas = Rect::from_min_size(egui::pos2(5.0, 5.0), egui::vec2(256.0, 256.0));
        assert_eq!(painted_shapes(canvas), 1);
    }
}

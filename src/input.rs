use egui::{Context, PointerButton, Pos2, Rect};

/// Pointer input in canvas-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed over the canvas
    Press { position: Pos2 },
    /// Pointer moved; `pressed` is whether the primary button is held
    Move { position: Pos2, pressed: bool },
    /// Primary button released, anywhere
    Release,
    /// Pointer left the canvas with no button held
    Leave,
}

/// Pointer state for one frame, as read from egui
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    pub hover: Option<Pos2>,
    /// The canvas is the topmost widget under the pointer
    pub over_canvas: bool,
    pub held: bool,
    pub pressed: bool,
    pub released: bool,
}

/// Handles converting raw egui input into [`InputEvent`]s for one canvas
#[derive(Debug)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    canvas_rect: Rect,
    pressing: bool,
    hovering: bool,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            canvas_rect,
            pressing: false,
            hovering: false,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    pub fn canvas_rect(&self) -> Rect {
        self.canvas_rect
    }

    fn to_canvas(&self, pos: Pos2) -> Pos2 {
        (pos - self.canvas_rect.min).to_pos2()
    }

    /// Process raw egui input and generate our InputEvents. `over_canvas`
    /// is false when another layer (a window, a popup) covers the pointer.
    pub fn process_input(&mut self, ctx: &Context, over_canvas: bool) -> Vec<InputEvent> {
        let sample = ctx.input(|input| PointerSample {
            hover: input.pointer.hover_pos(),
            over_canvas,
            held: input.pointer.button_down(PointerButton::Primary),
            pressed: input.pointer.button_pressed(PointerButton::Primary),
            released: input.pointer.button_released(PointerButton::Primary),
        });
        self.translate(sample)
    }

    /// The platform-independent half of [`Self::process_input`]
    pub fn translate(&mut self, sample: PointerSample) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let inside = sample
            .hover
            .is_some_and(|pos| sample.over_canvas && self.canvas_rect.contains(pos));

        if let Some(pos) = sample.hover {
            if sample.pressed && !self.pressing && inside {
                events.push(InputEvent::Press {
                    position: self.to_canvas(pos),
                });
                self.pressing = true;
            } else if (self.pressing || inside)
                && (Some(pos) != self.last_pointer_pos || !self.hovering)
            {
                events.push(InputEvent::Move {
                    position: self.to_canvas(pos),
                    pressed: self.pressing && sample.held,
                });
            }
        }

        if !self.pressing && self.hovering && !inside {
            events.push(InputEvent::Leave);
        }
        self.hovering = inside;
        self.last_pointer_pos = sample.hover;

        if self.pressing && (sample.released || !sample.held) {
            events.push(InputEvent::Release);
            self.pressing = false;
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn handler() -> InputHandler {
        InputHandler::new(Rect::from_min_max(pos2(100.0, 50.0), pos2(356.0, 306.0)))
    }

    fn hover(x: f32, y: f32) -> PointerSample {
        PointerSample {
            hover: Some(pos2(x, y)),
            over_canvas: true,
            ..Default::default()
        }
    }

    fn press(x: f32, y: f32) -> PointerSample {
        PointerSample {
            held: true,
            pressed: true,
            ..hover(x, y)
        }
    }

    fn drag(x: f32, y: f32) -> PointerSample {
        PointerSample {
            held: true,
            ..hover(x, y)
        }
    }

    #[test]
    fn test_press_move_release_in_canvas_coordinates() {
        let mut input = handler();
        assert_eq!(
            input.translate(press(110.0, 60.0)),
            vec![InputEvent::Press { position: pos2(10.0, 10.0) }]
        );
        assert_eq!(
            input.translate(drag(120.0, 60.0)),
            vec![InputEvent::Move { position: pos2(20.0, 10.0), pressed: true }]
        );
        assert_eq!(
            input.translate(PointerSample {
                released: true,
                ..hover(120.0, 60.0)
            }),
            vec![InputEvent::Release]
        );
    }

    #[test]
    fn test_press_outside_canvas_is_ignored() {
        let mut input = handler();
        assert!(input.translate(press(10.0, 10.0)).is_empty());
        assert!(input.translate(drag(20.0, 10.0)).is_empty());
    }

    #[test]
    fn test_press_on_covered_canvas_is_ignored() {
        let mut input = handler();
        let covered = PointerSample {
            over_canvas: false,
            ..press(200.0, 100.0)
        };
        assert!(input.translate(covered).is_empty());
    }

    #[test]
    fn test_hover_moves_are_unpressed() {
        let mut input = handler();
        assert_eq!(
            input.translate(hover(200.0, 100.0)),
            vec![InputEvent::Move { position: pos2(100.0, 50.0), pressed: false }]
        );
        assert!(input.translate(hover(200.0, 100.0)).is_empty());
    }

    #[test]
    fn test_leaving_the_canvas_is_reported_once() {
        let mut input = handler();
        input.translate(hover(200.0, 100.0));
        assert_eq!(input.translate(hover(10.0, 10.0)), vec![InputEvent::Leave]);
        assert!(input.translate(hover(20.0, 10.0)).is_empty());
        assert_eq!(
            input.translate(PointerSample::default()),
            Vec::<InputEvent>::new()
        );
    }

    #[test]
    fn test_pointer_gone_from_window_leaves_canvas() {
        let mut input = handler();
        input.translate(hover(200.0, 100.0));
        assert_eq!(input.translate(PointerSample::default()), vec![InputEvent::Leave]);
    }

    #[test]
    fn test_drag_outside_canvas_keeps_drawing() {
        let mut input = handler();
        input.translate(press(110.0, 60.0));
        assert_eq!(
            input.translate(drag(10.0, 10.0)),
            vec![InputEvent::Move { position: pos2(-90.0, -40.0), pressed: true }]
        );
    }
}

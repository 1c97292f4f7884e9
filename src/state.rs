//! Session state and the pointer state machine.
//!
//! ```text
//!            press              move (pressed)
//!   ┌──────┐ ─────────► ┌─────────┐ ───┐
//!   │ Idle │            │ Drawing │ ◄──┘
//!   └──────┘ ◄───────── └─────────┘
//!     ▲  │    release
//!     └──┘ move (released), leave
//! ```
//!
//! Every transition returns the events that describe it; the caller publishes
//! them. State never talks to the event bus itself.

use egui::{Color32, Pos2, Rect};

use crate::command::{Command, CommandHistory, CommandId};
use crate::config::SketchConfig;
use crate::element::{Glyph, Sticker, Stroke};
use crate::event::SketchEvent;
use crate::tools::ToolState;

const DRAWING_CHANGED: &[SketchEvent] = &[SketchEvent::DrawingChanged];
const TOOL_CHANGED: &[SketchEvent] = &[SketchEvent::ToolChanged];
const CURSOR_MOVED: &[SketchEvent] = &[SketchEvent::CursorMoved, SketchEvent::ToolChanged];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PointerState {
    #[default]
    Idle,
    /// The button is held. `active` is the command receiving drags, if the
    /// press created one.
    Drawing { active: Option<CommandId> },
}

/// Everything the render loop and the input handlers share
#[derive(Debug)]
pub struct SketchState {
    config: SketchConfig,
    history: CommandHistory,
    tools: ToolState,
    preview: Option<Command>,
    cursor: Option<Pos2>,
    pointer: PointerState,
}

impl SketchState {
    pub fn new(config: SketchConfig) -> Self {
        Self {
            tools: ToolState::new(&config),
            config,
            history: CommandHistory::new(),
            preview: None,
            cursor: None,
            pointer: PointerState::Idle,
        }
    }

    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn preview(&self) -> Option<&Command> {
        self.preview.as_ref()
    }

    pub fn cursor(&self) -> Option<Pos2> {
        self.cursor
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.pointer, PointerState::Drawing { .. })
    }

    pub fn canvas_rect(&self) -> Rect {
        self.config.canvas_rect()
    }

    /// Pointer pressed: places a sticker or starts a stroke, depending on the
    /// tool. The redo stack is dropped even when nothing is committed.
    pub fn press(&mut self, point: Pos2) -> &'static [SketchEvent] {
        self.history.clear_redo();
        self.cursor = Some(point);

        let command = if let Some(glyph) = self.tools.sticker() {
            Some(Command::Sticker(Sticker::new(
                point,
                glyph.clone(),
                self.config.sticker_size,
            )))
        } else if self.tools.can_draw() {
            Some(Command::Stroke(Stroke::new(
                point,
                self.tools.thickness(),
                self.tools.color(),
            )))
        } else {
            None
        };

        let active = command.and_then(|command| self.history.commit(command));
        log::debug!("Pointer down at {:?}, active {:?}", point, active);
        self.pointer = PointerState::Drawing { active };
        DRAWING_CHANGED
    }

    /// Pointer moved. While drawing the point is forwarded to the active
    /// command; otherwise the cursor and tool preview follow it.
    pub fn move_pointer(&mut self, point: Pos2, pressed: bool) -> &'static [SketchEvent] {
        if let PointerState::Drawing { active } = self.pointer {
            if pressed {
                if let Some(id) = active {
                    if let Some(command) = self.history.get_mut(id) {
                        command.drag(point);
                    }
                }
                self.cursor = Some(point);
                return DRAWING_CHANGED;
            }
            // The release happened somewhere we did not see it.
            self.release();
        }

        self.cursor = Some(point);
        self.preview = self.tools.preview_at(point, &self.config);
        CURSOR_MOVED
    }

    /// Pointer released: detaches the active command and drops the preview
    pub fn release(&mut self) -> &'static [SketchEvent] {
        if self.is_drawing() {
            log::debug!("Pointer up");
        }
        self.pointer = PointerState::Idle;
        self.preview = None;
        DRAWING_CHANGED
    }

    /// Pointer left the canvas: the cursor and preview go with it. Ignored
    /// while drawing, since the drag continues outside the canvas.
    pub fn leave(&mut self) -> &'static [SketchEvent] {
        if self.is_drawing() {
            return &[];
        }
        self.cursor = None;
        self.preview = None;
        CURSOR_MOVED
    }

    pub fn undo(&mut self) -> &'static [SketchEvent] {
        self.history.undo();
        DRAWING_CHANGED
    }

    pub fn redo(&mut self) -> &'static [SketchEvent] {
        self.history.redo();
        DRAWING_CHANGED
    }

    pub fn clear(&mut self) -> &'static [SketchEvent] {
        log::info!("Cleared canvas");
        self.history.clear();
        DRAWING_CHANGED
    }

    pub fn set_thickness(&mut self, thickness: f32) -> &'static [SketchEvent] {
        self.tools.set_thickness(thickness);
        self.refresh_preview()
    }

    pub fn set_color(&mut self, color: Color32) -> &'static [SketchEvent] {
        self.tools.set_color(color);
        self.refresh_preview()
    }

    pub fn select_sticker(&mut self, glyph: Option<Glyph>) -> &'static [SketchEvent] {
        self.tools.select_sticker(glyph);
        self.refresh_preview()
    }

    pub fn enable_freehand(&mut self) -> &'static [SketchEvent] {
        self.tools.enable_freehand();
        self.refresh_preview()
    }

    /// Rebuilds the preview for the current tool at the last cursor position
    fn refresh_preview(&mut self) -> &'static [SketchEvent] {
        self.preview = self
            .cursor
            .and_then(|cursor| self.tools.preview_at(cursor, &self.config));
        TOOL_CHANGED
    }
}

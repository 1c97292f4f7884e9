mod bus;

use crate::state::SketchState;

pub use bus::EventBus;

/// Notifications published after the sketch state changes.
///
/// Events carry no payload: handlers re-read whatever they need from the
/// [`SketchState`] they are given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SketchEvent {
    /// Committed commands changed (commit, drag, undo, redo, clear)
    DrawingChanged,
    /// The pointer moved while no button was held
    CursorMoved,
    /// The active tool or its preview changed
    ToolChanged,
}

impl SketchEvent {
    pub const ALL: [SketchEvent; 3] = [
        SketchEvent::DrawingChanged,
        SketchEvent::CursorMoved,
        SketchEvent::ToolChanged,
    ];
}

pub trait EventHandler {
    fn handle_event(&mut self, event: SketchEvent, state: &SketchState);
}

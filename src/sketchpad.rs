use std::cell::{Ref, RefCell};
use std::rc::Rc;

use egui::{Color32, Pos2};

use crate::config::SketchConfig;
use crate::element::Glyph;
use crate::error::ExportError;
use crate::event::{EventBus, EventHandler, SketchEvent};
use crate::export::{self, ExportOptions};
use crate::input::InputEvent;
use crate::renderer::RenderLoop;
use crate::state::SketchState;
use crate::surface::GlyphFonts;
use crate::tools::{self, MarkerPreset, StickerPalette};

/// One drawing session: the state, the render loop subscribed to it, and the
/// operations the UI calls.
///
/// Every mutation publishes its events, so the render loop's frame is
/// always current when a call returns.
pub struct Sketchpad {
    state: SketchState,
    bus: EventBus,
    renderer: Rc<RefCell<RenderLoop>>,
    palette: StickerPalette,
    rng: fastrand::Rng,
}

impl std::fmt::Debug for Sketchpad {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sketchpad")
            .field("state", &self.state)
            .field("bus", &self.bus)
            .field("palette", &self.palette)
            .finish()
    }
}

impl Default for Sketchpad {
    fn default() -> Self {
        Self::new(SketchConfig::default())
    }
}

impl Sketchpad {
    pub fn new(config: SketchConfig) -> Self {
        Self::with_rng(config, fastrand::Rng::new())
    }

    /// Like [`Self::new`] with a fixed source for random marker colours
    pub fn with_rng(config: SketchConfig, rng: fastrand::Rng) -> Self {
        let renderer = Rc::new(RefCell::new(RenderLoop::new()));
        let bus = EventBus::new();
        for event in SketchEvent::ALL {
            bus.subscribe(event, renderer.clone());
        }

        let sketchpad = Self {
            palette: StickerPalette::new(&config),
            state: SketchState::new(config),
            bus,
            renderer,
            rng,
        };
        sketchpad.publish(&[SketchEvent::DrawingChanged]);
        sketchpad
    }

    fn publish(&self, events: &[SketchEvent]) {
        for event in events {
            self.bus.publish(*event, &self.state);
        }
    }

    /// Registers an extra observer next to the render loop
    pub fn subscribe(&self, event: SketchEvent, handler: Rc<RefCell<dyn EventHandler>>) {
        self.bus.subscribe(event, handler);
    }

    pub fn state(&self) -> &SketchState {
        &self.state
    }

    pub fn palette(&self) -> &StickerPalette {
        &self.palette
    }

    pub fn renderer(&self) -> Ref<'_, RenderLoop> {
        self.renderer.borrow()
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::Press { position } => self.press(position),
            InputEvent::Move { position, pressed } => self.move_pointer(position, pressed),
            InputEvent::Release => self.release(),
            InputEvent::Leave => self.leave(),
        }
    }

    pub fn press(&mut self, point: Pos2) {
        let events = self.state.press(point);
        self.publish(events);
    }

    pub fn move_pointer(&mut self, point: Pos2, pressed: bool) {
        let events = self.state.move_pointer(point, pressed);
        self.publish(events);
    }

    pub fn release(&mut self) {
        let events = self.state.release();
        self.publish(events);
    }

    pub fn leave(&mut self) {
        let events = self.state.leave();
        self.publish(events);
    }

    pub fn undo(&mut self) {
        let events = self.state.undo();
        self.publish(events);
    }

    pub fn redo(&mut self) {
        let events = self.state.redo();
        self.publish(events);
    }

    pub fn clear(&mut self) {
        let events = self.state.clear();
        self.publish(events);
    }

    /// Chooses a marker preset with a freshly randomised colour
    pub fn select_marker(&mut self, preset: MarkerPreset) {
        let color = tools::random_hue(&mut self.rng);
        log::info!("Marker {} selected", preset.name());
        self.state.set_color(color);
        let events = self.state.set_thickness(preset.thickness(self.state.config()));
        self.publish(events);
    }

    pub fn set_thickness(&mut self, thickness: f32) {
        let events = self.state.set_thickness(thickness);
        self.publish(events);
    }

    pub fn set_color(&mut self, color: Color32) {
        let events = self.state.set_color(color);
        self.publish(events);
    }

    pub fn select_sticker(&mut self, glyph: Option<Glyph>) {
        if let Some(glyph) = &glyph {
            log::info!("Sticker {} selected", glyph);
        }
        let events = self.state.select_sticker(glyph);
        self.publish(events);
    }

    pub fn enable_freehand(&mut self) {
        let events = self.state.enable_freehand();
        self.publish(events);
    }

    /// Adds a user-made sticker to the palette. Blank text is rejected
    /// without touching any state.
    pub fn add_custom_sticker(&mut self, text: &str) -> Option<Glyph> {
        let glyph = self.palette.add_custom(text);
        if glyph.is_none() {
            log::warn!("Rejected blank custom sticker");
        }
        glyph
    }

    /// Encodes the committed drawing as a PNG at the configured export size
    pub fn export_png(&self, fonts: &GlyphFonts) -> Result<Vec<u8>, ExportError> {
        let options = ExportOptions::from_config(self.state.config());
        export::render_png(self.state.history().commands(), &options, fonts)
    }
}

use egui::{Key, KeyboardShortcut, Modifiers};

use crate::config::SketchConfig;
use crate::input::InputHandler;
use crate::panels;
use crate::sketchpad::Sketchpad;
use crate::surface::GlyphFonts;

const UNDO_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
const REDO_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);

pub struct SketchApp {
    sketchpad: Sketchpad,
    input: InputHandler,
    /// Fonts the PNG exporter rasterises stickers with
    fonts: GlyphFonts,
    /// Text of the custom sticker being typed, while the prompt is open
    custom_sticker: Option<String>,
    status: Option<String>,
}

impl Default for SketchApp {
    fn default() -> Self {
        Self::with_config(SketchConfig::default())
    }
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: SketchConfig) -> Self {
        Self::with_config(config)
    }

    pub fn with_config(config: SketchConfig) -> Self {
        let input = InputHandler::new(config.canvas_rect());
        Self {
            sketchpad: Sketchpad::new(config),
            input,
            fonts: GlyphFonts::from_egui_defaults(),
            custom_sticker: None,
            status: None,
        }
    }

    pub fn sketchpad(&self) -> &Sketchpad {
        &self.sketchpad
    }

    pub fn sketchpad_mut(&mut self) -> &mut Sketchpad {
        &mut self.sketchpad
    }

    pub fn input(&self) -> &InputHandler {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputHandler {
        &mut self.input
    }

    /// Forwards this frame's pointer input to the sketchpad. The canvas is
    /// inert while the custom sticker prompt is open; `over_canvas` is false
    /// when another window covers the pointer.
    pub fn handle_input(&mut self, ctx: &egui::Context, over_canvas: bool) {
        if self.custom_sticker.is_some() {
            return;
        }
        for event in self.input.process_input(ctx, over_canvas) {
            self.sketchpad.handle_input(event);
        }
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn open_custom_sticker_prompt(&mut self) {
        self.custom_sticker = Some(String::new());
    }

    pub fn custom_sticker_mut(&mut self) -> Option<&mut String> {
        self.custom_sticker.as_mut()
    }

    /// Closes the prompt, adding and selecting the sticker when `accept` is
    /// set and the text is not blank
    pub fn close_custom_sticker_prompt(&mut self, accept: bool) {
        let Some(text) = self.custom_sticker.take() else {
            return;
        };
        if !accept {
            return;
        }
        if let Some(glyph) = self.sketchpad.add_custom_sticker(&text) {
            self.sketchpad.select_sticker(Some(glyph));
        }
    }

    pub fn export(&mut self) {
        let bytes = match self.sketchpad.export_png(&self.fonts) {
            Ok(bytes) => bytes,
            Err(err) => {
                log::error!("Export failed: {}", err);
                self.status = Some(format!("Export failed: {}", err));
                return;
            }
        };

        #[cfg(not(target_arch = "wasm32"))]
        {
            let path = self.sketchpad.state().config().export_file.clone();
            self.status = Some(match crate::export::save_png(&path, &bytes) {
                Ok(()) => format!("Saved {}", path),
                Err(err) => {
                    log::error!("Export failed: {}", err);
                    format!("Export failed: {}", err)
                }
            });
        }

        #[cfg(target_arch = "wasm32")]
        {
            log::warn!("Saving files is not supported on the web ({} bytes discarded)", bytes.len());
            self.status = Some("Export is not available on the web".to_owned());
        }
    }
}

impl eframe::App for SketchApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.custom_sticker.is_none() {
            if ctx.input_mut(|i| i.consume_shortcut(&UNDO_SHORTCUT)) {
                self.sketchpad.undo();
            }
            if ctx.input_mut(|i| i.consume_shortcut(&REDO_SHORTCUT)) {
                self.sketchpad.redo();
            }
        }

        panels::tools_panel(self, ctx);
        panels::central_panel(self, ctx);
        panels::custom_sticker_window(self, ctx);
    }
}

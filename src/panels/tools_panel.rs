use crate::SketchApp;
use crate::tools::MarkerPreset;

pub fn tools_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            // Marker presets
            ui.horizontal(|ui| {
                for preset in MarkerPreset::ALL {
                    let tools = app.sketchpad().state().tools();
                    let thickness = preset.thickness(app.sketchpad().state().config());
                    let is_selected =
                        tools.can_draw() && tools.sticker().is_none() && tools.thickness() == thickness;
                    if ui.selectable_label(is_selected, preset.name()).clicked() {
                        log::info!("Tool selected from UI: {}", preset.name());
                        app.sketchpad_mut().select_marker(preset);
                    }
                }
            });

            ui.horizontal(|ui| {
                ui.label("Color:");
                let mut color = app.sketchpad().state().tools().color();
                if egui::color_picker::color_edit_button_srgba(
                    ui,
                    &mut color,
                    egui::color_picker::Alpha::Opaque,
                )
                .changed()
                {
                    app.sketchpad_mut().set_color(color);
                }
            });

            ui.separator();
            ui.label("Stickers");

            // Collect glyphs first to avoid borrowing issues
            let glyphs = app.sketchpad().palette().glyphs().to_vec();
            let selected = app.sketchpad().state().tools().sticker().cloned();
            ui.horizontal_wrapped(|ui| {
                for glyph in glyphs {
                    let is_selected = selected.as_ref() == Some(&glyph);
                    if ui.selectable_label(is_selected, glyph.as_str()).clicked() {
                        app.sketchpad_mut().select_sticker(Some(glyph));
                    }
                }
            });
            if ui.button("Custom sticker…").clicked() {
                app.open_custom_sticker_prompt();
            }

            ui.separator();

            // Undo/Redo section
            ui.horizontal(|ui| {
                let history = app.sketchpad().state().history();
                let can_undo = history.can_undo();
                let can_redo = history.can_redo();

                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.sketchpad_mut().undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.sketchpad_mut().redo();
                }
                if ui.button("Clear").clicked() {
                    app.sketchpad_mut().clear();
                }
            });

            if ui.button("Export PNG").clicked() {
                app.export();
            }

            ui.separator();

            let history = app.sketchpad().state().history();
            ui.horizontal(|ui| {
                ui.label(format!("Undo stack size: {}", history.undo_stack().len()));
                ui.label(format!("Redo stack size: {}", history.redo_stack().len()));
            });
        });
}

/// The prompt for creating a custom sticker
pub fn custom_sticker_window(app: &mut SketchApp, ctx: &egui::Context) {
    let mut outcome = None;
    let Some(text) = app.custom_sticker_mut() else {
        return;
    };

    egui::Window::new("Custom sticker")
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label("Enter a sticker:");
            let response = ui.text_edit_singleline(text);
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                outcome = Some(true);
            }
            ui.horizontal(|ui| {
                if ui.button("Add").clicked() {
                    outcome = Some(true);
                }
                if ui.button("Cancel").clicked() {
                    outcome = Some(false);
                }
            });
        });

    if let Some(accept) = outcome {
        app.close_custom_sticker_prompt(accept);
    }
}

use crate::SketchApp;

pub fn central_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Sketchpad");

        let [width, height] = app.sketchpad().state().config().canvas_size;
        let (response, painter) =
            ui.allocate_painter(egui::vec2(width, height), egui::Sense::drag());
        let canvas_rect = response.rect;

        // Handle input
        app.input_mut().set_canvas_rect(canvas_rect);
        app.handle_input(ctx, response.contains_pointer());

        // Render the canvas
        let sketchpad = app.sketchpad();
        sketchpad
            .renderer()
            .paint(&painter, canvas_rect, sketchpad.state());

        if response.hovered() && sketchpad.state().preview().is_some() {
            ctx.set_cursor_icon(egui::CursorIcon::None);
        }

        if let Some(status) = app.status() {
            ui.label(status);
        }
    });
}

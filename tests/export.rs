use egui::{Color32, pos2};
use sketchpad::export::{self, ExportOptions};
use sketchpad::surface::GlyphFonts;
use sketchpad::tools::MarkerPreset;
use sketchpad::{Command, ExportError, SketchConfig, Sketchpad, Stroke};

fn red_line() -> Command {
    let mut stroke = Stroke::new(pos2(10.0, 10.0), 2.0, Color32::RED);
    stroke.drag(pos2(50.0, 10.0));
    Command::Stroke(stroke)
}

#[test]
fn test_export_scales_commands() {
    let options = ExportOptions::from_config(&SketchConfig::default());
    let commands = [red_line()];
    let bytes = export::render_png(&commands, &options, &GlyphFonts::empty()).unwrap();

    let image = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(image.dimensions(), (1024, 1024));
    assert_eq!(image.get_pixel(120, 40).0, [255, 0, 0, 255]);
    assert_eq!(image.get_pixel(120, 60).0, [255, 255, 255, 255]);
}

#[test]
fn test_export_skips_previews() {
    let mut pad = Sketchpad::with_rng(SketchConfig::default(), fastrand::Rng::with_seed(3));
    pad.select_marker(MarkerPreset::Thick);
    pad.move_pointer(pos2(100.0, 100.0), false);
    assert!(pad.state().preview().is_some());

    let bytes = pad.export_png(&GlyphFonts::empty()).unwrap();
    let image = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert!(image.pixels().all(|p| p.0 == [255, 255, 255, 255]));
}

#[test]
fn test_zero_sized_export_is_an_error() {
    let options = ExportOptions {
        width: 0,
        height: 10,
        scale: 1.0,
        background: Color32::WHITE,
    };
    let commands = [red_line()];
    let result = export::render_png(&commands, &options, &GlyphFonts::empty());
    assert!(matches!(result, Err(ExportError::EmptyCanvas { width: 0, height: 10 })));
}

use egui::pos2;
use sketchpad::tools::MarkerPreset;
use sketchpad::{DrawOp, Glyph, RenderLoop, SketchConfig, Sketchpad};

fn sketchpad() -> Sketchpad {
    Sketchpad::with_rng(SketchConfig::default(), fastrand::Rng::with_seed(1))
}

fn kinds(ops: &[DrawOp]) -> Vec<&'static str> {
    ops.iter()
        .map(|op| match op {
            DrawOp::Clear(_) => "clear",
            DrawOp::Path { .. } => "path",
            DrawOp::Text { .. } => "text",
            DrawOp::Circle { .. } => "circle",
        })
        .collect()
}

#[test]
fn test_render_is_idempotent() {
    let mut pad = sketchpad();
    pad.select_marker(MarkerPreset::Thin);
    pad.press(pos2(1.0, 1.0));
    pad.move_pointer(pos2(9.0, 9.0), true);
    pad.release();
    pad.move_pointer(pos2(20.0, 20.0), false);

    let mut renderer = RenderLoop::new();
    renderer.render(pad.state());
    let first = renderer.frame().clone();
    renderer.render(pad.state());
    assert_eq!(renderer.frame(), &first);
    assert_eq!(&first, pad.renderer().frame());
}

#[test]
fn test_commands_paint_in_commit_order_with_preview_last() {
    let mut pad = sketchpad();
    pad.select_marker(MarkerPreset::Thick);
    pad.press(pos2(1.0, 1.0));
    pad.move_pointer(pos2(5.0, 5.0), true);
    pad.release();

    pad.select_sticker(Glyph::parse("🎃"));
    pad.press(pos2(50.0, 50.0));
    pad.release();
    pad.move_pointer(pos2(80.0, 80.0), false);

    assert_eq!(
        kinds(pad.renderer().frame().ops()),
        vec!["clear", "path", "text", "text"]
    );
    match pad.renderer().frame().ops().last() {
        Some(DrawOp::Text { origin, .. }) => assert_eq!(*origin, pos2(48.0, 77.0)),
        other => panic!("expected the sticker preview, got {:?}", other),
    }
}

#[test]
fn test_preview_hidden_while_pressed() {
    let mut pad = sketchpad();
    pad.select_marker(MarkerPreset::Thin);
    pad.move_pointer(pos2(5.0, 5.0), false);
    assert_eq!(kinds(pad.renderer().frame().ops()), vec!["clear", "circle"]);

    pad.press(pos2(5.0, 5.0));
    pad.move_pointer(pos2(6.0, 6.0), true);
    assert_eq!(kinds(pad.renderer().frame().ops()), vec!["clear", "path"]);
}

#[test]
fn test_every_notification_rerenders() {
    let mut pad = sketchpad();
    let start = pad.renderer().render_count();
    pad.undo();
    pad.redo();
    pad.clear();
    pad.move_pointer(pos2(1.0, 1.0), false);
    // The idle move publishes two events.
    assert_eq!(pad.renderer().render_count(), start + 5);
}

#[test]
fn test_undo_removes_from_frame() {
    let mut pad = sketchpad();
    pad.select_marker(MarkerPreset::Thin);
    pad.press(pos2(1.0, 1.0));
    pad.move_pointer(pos2(2.0, 2.0), true);
    pad.release();
    assert_eq!(pad.renderer().frame().segments().count(), 2);

    pad.undo();
    assert_eq!(kinds(pad.renderer().frame().ops()), vec!["clear"]);
    pad.redo();
    assert_eq!(pad.renderer().frame().segments().count(), 2);
}

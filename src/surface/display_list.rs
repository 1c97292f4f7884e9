use egui::{Color32, Pos2, Rect};

use super::{PathBuffer, Surface};

/// One recorded drawing operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear(Rect),
    /// A stroked polyline; `points[i]..points[i + 1]` is one segment
    Path {
        points: Vec<Pos2>,
        thickness: f32,
        color: Color32,
    },
    Text {
        text: String,
        origin: Pos2,
        size: f32,
    },
    Circle {
        center: Pos2,
        radius: f32,
        color: Color32,
    },
}

/// A surface that records operations instead of painting them.
///
/// The render loop keeps one of these as its retained frame and replays it
/// onto the real target.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    ops: Vec<DrawOp>,
    path: PathBuffer,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// All stroked line segments, in paint order
    pub fn segments(&self) -> impl Iterator<Item = (Pos2, Pos2)> + '_ {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Path { points, .. } => Some(points),
                _ => None,
            })
            .flat_map(|points| points.windows(2).map(|pair| (pair[0], pair[1])))
    }

    /// Replays every recorded operation onto `surface`
    pub fn replay(&self, surface: &mut dyn Surface) {
        for op in &self.ops {
            match op {
                DrawOp::Clear(region) => surface.clear(*region),
                DrawOp::Path {
                    points,
                    thickness,
                    color,
                } => {
                    let Some((first, rest)) = points.split_first() else {
                        continue;
                    };
                    surface.move_to(*first);
                    for point in rest {
                        surface.line_to(*point);
                    }
                    surface.stroke(*thickness, *color);
                }
                DrawOp::Text { text, origin, size } => surface.fill_text(text, *origin, *size),
                DrawOp::Circle {
                    center,
                    radius,
                    color,
                } => surface.fill_circle(*center, *radius, *color),
            }
        }
    }
}

impl Surface for DisplayList {
    fn clear(&mut self, region: Rect) {
        self.ops.push(DrawOp::Clear(region));
    }

    fn move_to(&mut self, point: Pos2) {
        self.path.move_to(point);
    }

    fn line_to(&mut self, point: Pos2) {
        self.path.line_to(point);
    }

    fn stroke(&mut self, thickness: f32, color: Color32) {
        let points = self.path.take();
        if points.len() < 2 {
            return;
        }
        self.ops.push(DrawOp::Path {
            points,
            thickness,
            color,
        });
    }

    fn fill_text(&mut self, text: &str, origin: Pos2, size: f32) {
        self.ops.push(DrawOp::Text {
            text: text.to_owned(),
            origin,
            size,
        });
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_path_is_recorded_on_stroke() {
        let mut list = DisplayList::new();
        list.move_to(pos2(0.0, 0.0));
        list.line_to(pos2(4.0, 0.0));
        assert!(list.is_empty());

        list.stroke(2.0, Color32::RED);
        let segments: Vec<_> = list.segments().collect();
        assert_eq!(segments, vec![(pos2(0.0, 0.0), pos2(4.0, 0.0))]);
    }

    #[test]
    fn test_lone_point_strokes_nothing() {
        let mut list = DisplayList::new();
        list.move_to(pos2(1.0, 1.0));
        list.stroke(2.0, Color32::RED);
        assert!(list.is_empty());
    }

    #[test]
    fn test_replay_reproduces_ops() {
        let mut list = DisplayList::new();
        list.clear(Rect::from_min_max(pos2(0.0, 0.0), pos2(10.0, 10.0)));
        list.move_to(pos2(1.0, 1.0));
        list.line_to(pos2(1.0, 1.0));
        list.line_to(pos2(3.0, 3.0));
        list.stroke(1.0, Color32::BLUE);
        list.fill_text("⭐", pos2(2.0, 2.0), 32.0);
        list.fill_circle(pos2(5.0, 5.0), 2.0, Color32::BLACK);

        let mut copy = DisplayList::new();
        list.replay(&mut copy);
        assert_eq!(copy, list);
    }
}

use egui::{Color32, Pos2};

use crate::surface::Surface;

/// A freehand line: the points recorded while the pointer was dragged.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Pos2>,
    thickness: f32,
    color: Color32,
}

impl Stroke {
    /// Starts a stroke at the pointer-down position
    pub fn new(start: Pos2, thickness: f32, color: Color32) -> Self {
        Self {
            points: vec![start],
            thickness,
            color,
        }
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn drag(&mut self, point: Pos2) {
        self.points.push(point);
    }

    /// Paints the stroke as one path. Every recorded point, the first one
    /// included, gets a `line_to`, so the path opens with a zero-length segment.
    pub fn display(&self, surface: &mut dyn Surface) {
        let Some(first) = self.points.first() else {
            return;
        };
        surface.move_to(*first);
        for point in &self.points {
            surface.line_to(*point);
        }
        surface.stroke(self.thickness, self.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::DisplayList;
    use egui::pos2;

    #[test]
    fn test_display_opens_with_degenerate_segment() {
        let mut stroke = Stroke::new(pos2(0.0, 0.0), 2.0, Color32::BLACK);
        stroke.drag(pos2(1.0, 1.0));
        stroke.drag(pos2(2.0, 2.0));

        let mut list = DisplayList::new();
        stroke.display(&mut list);

        let segments: Vec<_> = list.segments().collect();
        assert_eq!(
            segments,
            vec![
                (pos2(0.0, 0.0), pos2(0.0, 0.0)),
                (pos2(0.0, 0.0), pos2(1.0, 1.0)),
                (pos2(1.0, 1.0), pos2(2.0, 2.0)),
            ]
        );
    }

    #[test]
    fn test_drag_appends_points() {
        let mut stroke = Stroke::new(pos2(3.0, 4.0), 5.0, Color32::RED);
        stroke.drag(pos2(6.0, 8.0));
        assert_eq!(stroke.points(), &[pos2(3.0, 4.0), pos2(6.0, 8.0)]);
        assert_eq!(stroke.thickness(), 5.0);
    }
}

//! Paints the egg outline, scaled to the space left above the controls.

use egg_core::egg::{fill_color, EggBounds, EggShape};
use egui::{Color32, Pos2, Rect, Sense, Shape, Stroke, Ui};

/// Fraction of the available area the egg may fill when it has to shrink.
const FIT_MARGIN: f32 = 0.9;

pub struct EggPainter {
    outline: Vec<[f32; 2]>,
    bounds: EggBounds,
}

impl EggPainter {
    pub fn new(shape: EggShape) -> Self {
        let mut outline = shape.outline(1.0);
        // The polygon closes itself; the repeated 360° sample is not needed.
        outline.pop();
        Self {
            outline,
            bounds: shape.bounds(),
        }
    }

    pub fn paint(&self, ui: &mut Ui, progress: f32) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
        let points = layout_points(&self.outline, self.bounds, response.rect);
        let [r, g, b] = fill_color(progress);
        painter.add(Shape::convex_polygon(
            points,
            Color32::from_rgb(r, g, b),
            Stroke::NONE,
        ));
    }
}

/// Maps outline coordinates into `rect`: centered, never enlarged past 1:1.
fn layout_points(outline: &[[f32; 2]], bounds: EggBounds, rect: Rect) -> Vec<Pos2> {
    let scale = (FIT_MARGIN * rect.width() / bounds.width())
        .min(FIT_MARGIN * rect.height() / bounds.height())
        .clamp(0.0, 1.0);
    let mid_x = (bounds.min_x + bounds.max_x) / 2.0;
    let mid_y = (bounds.min_y + bounds.max_y) / 2.0;
    let center = rect.center();

    outline
        .iter()
        .map(|[x, y]| Pos2::new(center.x + (x - mid_x) * scale, center.y + (y - mid_y) * scale))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extent(points: &[Pos2]) -> Rect {
        let mut rect = Rect::NOTHING;
        for p in points {
            rect.extend_with(*p);
        }
        rect
    }

    #[test]
    fn keeps_natural_size_when_there_is_room() {
        let painter = EggPainter::new(EggShape::default());
        assert_eq!(painter.outline.len(), 360);

        let area = Rect::from_min_size(Pos2::ZERO, egui::vec2(400.0, 400.0));
        let egg = extent(&layout_points(&painter.outline, painter.bounds, area));
        assert!((egg.width() - 220.0).abs() < 0.5);
        assert!((egg.center().x - 200.0).abs() < 0.5);
        assert!((egg.center().y - 200.0).abs() < 0.5);
    }

    #[test]
    fn shrinks_to_fit_small_areas() {
        let painter = EggPainter::new(EggShape::default());
        let area = Rect::from_min_size(Pos2::new(10.0, 20.0), egui::vec2(300.0, 150.0));
        let egg = extent(&layout_points(&painter.outline, painter.bounds, area));
        assert!(area.contains_rect(egg));
        assert!((egg.height() - 135.0).abs() < 1.0);
    }
}

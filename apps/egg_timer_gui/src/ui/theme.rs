//! Light theme with the bordered, rounded duration field.

use egui::{Color32, CornerRadius, Stroke};

const FIELD_BORDER: Color32 = Color32::from_rgb(204, 204, 204);
const FIELD_ROUNDING: u8 = 5;

pub fn configure_theme(ctx: &egui::Context) {
    ctx.set_visuals(visuals());
}

fn visuals() -> egui::Visuals {
    let mut visuals = egui::Visuals::light();
    visuals.widgets.inactive.bg_stroke = Stroke::new(2.0, FIELD_BORDER);
    visuals.widgets.inactive.corner_radius = CornerRadius::same(FIELD_ROUNDING);
    visuals.widgets.hovered.corner_radius = CornerRadius::same(FIELD_ROUNDING);
    visuals.widgets.active.corner_radius = CornerRadius::same(FIELD_ROUNDING);
    visuals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inputs_get_a_grey_two_point_border() {
        let visuals = visuals();
        assert!(!visuals.dark_mode);
        assert_eq!(visuals.widgets.inactive.bg_stroke, Stroke::new(2.0, FIELD_BORDER));
    }
}

//! Top bar with the brand on the left and the signed-in user on the right.

use egui::{Align, Layout, Response, RichText, Ui};

use crate::utils::colors::BRAND_PURPLE;

pub const BRAND: &str = "PEOPLE.CO";

pub fn navbar(ui: &mut Ui) -> Response {
    ui.horizontal(|ui| {
        ui.add_space(8.0);
        ui.label(RichText::new(BRAND).size(28.0).strong().color(BRAND_PURPLE));

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("USER").strong());
        });
    })
    .response
}

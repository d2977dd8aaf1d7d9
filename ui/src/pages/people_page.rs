//! People directory page.

use egui::{Response, Ui};
use peopleco_states::StateCtx;

use crate::widgets;

pub fn people_page(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    ui.vertical(|ui| {
        ui.add_space(8.0);
        widgets::people_panel(state_ctx, ui);
    })
    .response
}

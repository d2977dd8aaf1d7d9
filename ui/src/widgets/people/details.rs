//! Read-only panel with the selected person's details.

use egui::{Align2, RichText, Ui, Window};
use peopleco_business::{ClosePersonDetailsCommand, Person};
use peopleco_states::StateCtx;

/// Shows the details window anchored to the right edge.
pub fn show_person_details(state_ctx: &mut StateCtx, person: &Person, ui: &mut Ui) {
    let mut close_clicked = false;

    Window::new("Member Details")
        .anchor(Align2::RIGHT_TOP, [-16.0, 72.0])
        .collapsible(false)
        .resizable(false)
        .default_width(280.0)
        .show(ui.ctx(), |ui| {
            egui::Grid::new("person_details")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    for (label, value) in [
                        ("Name:", &person.name),
                        ("Role:", &person.role),
                        ("Email:", &person.email),
                        ("Team:", &person.team),
                        ("Status:", &person.status),
                    ] {
                        ui.label(RichText::new(label).strong());
                        ui.label(value);
                        ui.end_row();
                    }
                });

            ui.add_space(12.0);
            if ui.button("Close").clicked() {
                close_clicked = true;
            }
        });

    if close_clicked {
        state_ctx.enqueue_command::<ClosePersonDetailsCommand>();
    }
}

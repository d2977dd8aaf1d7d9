//! Cell rendering functions for the people table.

use egui::{RichText, Ui};

use crate::utils::colors::status_color;

use super::row::RowAction;

#[inline]
pub fn render_text_cell(ui: &mut Ui, text: &str) {
    ui.label(text);
}

/// Renders the status colored by its meaning.
#[inline]
pub fn render_status_cell(ui: &mut Ui, status: &str) {
    ui.label(RichText::new(status).color(status_color(status)).strong());
}

/// Renders the edit and delete buttons.
///
/// Returns the action whose button was clicked.
#[inline]
pub fn render_action_buttons(ui: &mut Ui) -> Option<RowAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        if ui.button("✏️").on_hover_text("Edit").clicked() {
            action = Some(RowAction::Edit);
        }
        if ui.button("🗑️").on_hover_text("Delete").clicked() {
            action = Some(RowAction::Delete);
        }
    });

    action
}

//! Row rendering for the people table.

use egui_extras::TableRow;
use peopleco_business::Person;

use super::cells::{render_action_buttons, render_status_cell, render_text_cell};

/// Per-row button that was clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit,
    Delete,
}

/// Renders a single person row with all cells.
#[inline]
pub fn render_person_row(row: &mut TableRow<'_, '_>, person: &Person) -> Option<RowAction> {
    let mut action = None;

    row.col(|ui| render_text_cell(ui, &person.name));
    row.col(|ui| render_status_cell(ui, &person.status));
    row.col(|ui| render_text_cell(ui, &person.role));
    row.col(|ui| render_text_cell(ui, &person.email));
    row.col(|ui| render_text_cell(ui, &person.team));
    row.col(|ui| {
        action = render_action_buttons(ui);
    });

    action
}

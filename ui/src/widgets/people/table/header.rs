//! Sortable header of the people table.

use egui::{Button, RichText};
use egui_extras::TableRow;
use peopleco_business::{SortColumn, SortDirection, SortState};

/// Renders one clickable header per sortable column plus the Actions header.
///
/// Returns the column whose header was clicked.
#[inline]
pub fn render_table_header(header: &mut TableRow<'_, '_>, sort: &SortState) -> Option<SortColumn> {
    let mut clicked = None;

    for column in SortColumn::ALL {
        header.col(|ui| {
            let text = format!("{} {}", column.label(), sort_icon(sort.direction_of(column)));
            if ui.add(Button::new(RichText::new(text).strong()).frame(false)).clicked() {
                clicked = Some(column);
            }
        });
    }
    header.col(|ui| {
        ui.strong("Actions");
    });

    clicked
}

/// Icon shown after a header label.
pub fn sort_icon(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Ascending) => "⬆",
        Some(SortDirection::Descending) => "⬇",
        None => "↕",
    }
}

//! Table components for the people directory.
//!
//! - `columns`: Column definitions and widths
//! - `header`: Sortable header rendering
//! - `row`: Individual row rendering with cells
//! - `cells`: Cell rendering functions for each column type

mod cells;
pub mod columns;
pub mod header;
pub mod row;

use egui::{Align, Layout, Sense, Ui};
use egui_extras::TableBuilder;
use peopleco_business::{Person, PersonId, RowSelection, SortColumn, SortState};

use self::columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use self::header::render_table_header;
use self::row::{RowAction, render_person_row};

/// What the user did in the table this frame; applied by the panel once the
/// table is done borrowing the rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableEvent {
    Sort(SortColumn),
    Select(PersonId),
    Edit(PersonId),
    Delete(PersonId),
}

/// Renders `rows` and reports at most one interaction.
pub fn people_table(
    ui: &mut Ui,
    rows: &[Person],
    sort: &SortState,
    selection: RowSelection,
) -> Option<TableEvent> {
    let mut event = None;
    let highlighted = selection.person();

    let mut builder = TableBuilder::new(ui)
        .id_salt("people_table")
        .striped(true)
        .resizable(false)
        .cell_layout(Layout::left_to_right(Align::Center))
        .sense(Sense::click());
    for column in table_columns() {
        builder = builder.column(column);
    }

    builder
        .header(HEADER_HEIGHT, |mut header| {
            if let Some(column) = render_table_header(&mut header, sort) {
                event = Some(TableEvent::Sort(column));
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                let Some(person) = rows.get(row.index()) else {
                    return;
                };
                row.set_selected(highlighted == Some(person.id));

                let action = render_person_row(&mut row, person);
                event = match action {
                    Some(RowAction::Edit) => Some(TableEvent::Edit(person.id)),
                    Some(RowAction::Delete) => Some(TableEvent::Delete(person.id)),
                    None if row.response().clicked() => Some(TableEvent::Select(person.id)),
                    None => event,
                };
            });
        });

    event
}

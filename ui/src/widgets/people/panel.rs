//! Main panel of the people directory: toolbar, table and dialogs.

use egui::{Color32, Frame, Margin, Response, RichText, ScrollArea, Stroke, Ui};
use peopleco_business::{
    DirectoryInput, DirectoryUiState, PeopleStore, PeopleView, RequestDeletePersonCommand,
    SelectPersonCommand, SortState, StartEditPersonCommand, ToggleSortCommand,
};
use peopleco_states::StateCtx;

use super::details::show_person_details;
use super::modals::{show_add_person_modal, show_delete_person_modal, show_edit_person_modal};
use super::table::{TableEvent, people_table};
use super::toolbar::render_toolbar;

/// Border color of the table frame (subtle gray)
const TABLE_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);

pub const EMPTY_HINT: &str = "No members match the current search and filters.";

/// Displays the people directory panel.
///
/// Widgets only enqueue commands; the app loop flushes them at end of frame.
pub fn people_panel(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let response = ui.vertical(|ui| {
        render_toolbar(state_ctx, ui);
        ui.add_space(8.0);

        let event = Frame::NONE
            .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
            .corner_radius(6.0)
            .inner_margin(Margin::same(4))
            .show(ui, |ui| {
                let rows = state_ctx
                    .cached::<PeopleView>()
                    .map(PeopleView::rows)
                    .unwrap_or_default();
                let sort = state_ctx.state::<SortState>();
                let selection = state_ctx.state::<DirectoryUiState>().selection;

                let event = ScrollArea::horizontal()
                    .show(ui, |ui| people_table(ui, rows, sort, selection))
                    .inner;

                if rows.is_empty() {
                    ui.add_space(12.0);
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new(EMPTY_HINT).weak());
                    });
                    ui.add_space(12.0);
                }
                event
            })
            .inner;

        if let Some(event) = event {
            apply_table_event(state_ctx, event);
        }
    });

    show_dialogs(state_ctx, ui);

    response.response
}

fn apply_table_event(state_ctx: &mut StateCtx, event: TableEvent) {
    log::debug!("Table event {event:?}");
    match event {
        TableEvent::Sort(column) => {
            state_ctx.update::<DirectoryInput>(|input| input.sort_column = Some(column));
            state_ctx.enqueue_command::<ToggleSortCommand>();
        }
        TableEvent::Select(id) => {
            state_ctx.update::<DirectoryInput>(|input| input.target = Some(id));
            state_ctx.enqueue_command::<SelectPersonCommand>();
        }
        TableEvent::Edit(id) => {
            state_ctx.update::<DirectoryInput>(|input| input.target = Some(id));
            state_ctx.enqueue_command::<StartEditPersonCommand>();
        }
        TableEvent::Delete(id) => {
            state_ctx.update::<DirectoryInput>(|input| input.target = Some(id));
            state_ctx.enqueue_command::<RequestDeletePersonCommand>();
        }
    }
}

fn show_dialogs(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let state = state_ctx.state::<DirectoryUiState>();
    let store = state_ctx.state::<PeopleStore>();
    let selected = state.selection.selected().and_then(|id| store.get(id)).cloned();
    let pending_delete = state.pending_delete.and_then(|id| store.get(id)).cloned();

    if let Some(person) = selected {
        show_person_details(state_ctx, &person, ui);
    }
    show_edit_person_modal(state_ctx, ui);
    show_add_person_modal(state_ctx, ui);
    if let Some(person) = pending_delete {
        show_delete_person_modal(state_ctx, &person, ui);
    }
}

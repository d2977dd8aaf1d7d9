//! Modal dialogs for adding, editing and deleting members.

use egui::{Color32, RichText, TextEdit, Ui, Window};
use peopleco_business::{
    CancelDeletePersonCommand, CancelPersonEditCommand, CloseAddPersonCommand,
    ConfirmDeletePersonCommand, DirectoryUiState, Field, Person, PersonForm,
    SavePersonEditCommand, SubmitAddPersonCommand,
};
use peopleco_states::StateCtx;

use crate::utils::colors::{BRAND_PURPLE, COLOR_RED};

/// Shows the add member modal while `DirectoryUiState.add_form` is open.
pub fn show_add_person_modal(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let Some(mut form) = state_ctx.state::<DirectoryUiState>().add_form.clone() else {
        return;
    };
    let mut open = true;
    let mut changed = false;
    let mut submit = false;
    let mut cancel = false;

    Window::new("Add New Member")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            ui.label("Fill in the details of the new team member.");
            ui.add_space(8.0);

            changed = person_form_fields(ui, &mut form);

            ui.add_space(16.0);
            ui.horizontal(|ui| {
                submit = ui.add(primary_button("Add User")).clicked();
                cancel = ui.button("Cancel").clicked();
            });
        });

    if changed {
        state_ctx.update::<DirectoryUiState>(|state| {
            if let Some(current) = state.add_form.as_mut() {
                current.draft = form.draft;
            }
        });
    }
    if submit {
        state_ctx.enqueue_command::<SubmitAddPersonCommand>();
    } else if cancel || !open {
        state_ctx.enqueue_command::<CloseAddPersonCommand>();
    }
}

/// Shows the edit member modal while a person is being edited.
pub fn show_edit_person_modal(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let state = state_ctx.state::<DirectoryUiState>();
    if state.selection.editing().is_none() {
        return;
    }
    let mut form = state.edit_form.clone();
    let mut open = true;
    let mut changed = false;
    let mut save = false;
    let mut cancel = false;

    Window::new("Edit Member")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            ui.label("Update the details of the team member.");
            ui.add_space(8.0);

            changed = person_form_fields(ui, &mut form);

            ui.add_space(16.0);
            ui.horizontal(|ui| {
                cancel = ui.button("Cancel").clicked();
                save = ui.add(primary_button("Save")).clicked();
            });
        });

    if changed {
        state_ctx.update::<DirectoryUiState>(|state| state.edit_form.draft = form.draft);
    }
    if save {
        state_ctx.enqueue_command::<SavePersonEditCommand>();
    } else if cancel || !open {
        state_ctx.enqueue_command::<CancelPersonEditCommand>();
    }
}

/// Shows the delete confirmation for `person`.
pub fn show_delete_person_modal(state_ctx: &mut StateCtx, person: &Person, ui: &mut Ui) {
    let mut open = true;
    let mut confirm = false;
    let mut cancel = false;

    Window::new("Delete Member")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            ui.label(format!("Are you sure you want to delete \"{}\"?", person.name));
            ui.add_space(8.0);
            ui.colored_label(COLOR_RED, "This action cannot be undone.");
            ui.add_space(16.0);

            ui.horizontal(|ui| {
                confirm = ui
                    .add(egui::Button::new(RichText::new("Confirm").color(Color32::WHITE)).fill(COLOR_RED))
                    .clicked();
                cancel = ui.button("Cancel").clicked();
            });
        });

    if confirm {
        state_ctx.enqueue_command::<ConfirmDeletePersonCommand>();
    } else if cancel || !open {
        state_ctx.enqueue_command::<CancelDeletePersonCommand>();
    }
}

fn primary_button(text: &str) -> egui::Button<'_> {
    egui::Button::new(RichText::new(text).color(Color32::WHITE)).fill(BRAND_PURPLE)
}

/// Renders the editable fields of `form` with the message of each rejected
/// field underneath it. Returns `true` if any value changed.
fn person_form_fields(ui: &mut Ui, form: &mut PersonForm) -> bool {
    let PersonForm { draft, errors } = form;
    let mut changed = false;

    let fields: [(&str, &str, &mut String, Option<Field>); 5] = [
        ("Name", "Enter name", &mut draft.name, Some(Field::Name)),
        ("Status", "Enter status", &mut draft.status, None),
        ("Role", "Enter role", &mut draft.role, Some(Field::Role)),
        ("Email", "Enter email", &mut draft.email, Some(Field::Email)),
        ("Team", "Enter team", &mut draft.team, Some(Field::Team)),
    ];

    for (label, hint, value, field) in fields {
        ui.label(label);
        changed |= ui
            .add(TextEdit::singleline(value).hint_text(hint).desired_width(280.0))
            .changed();
        if let Some(message) = field.and_then(|field| errors.get(field)) {
            ui.label(RichText::new(message).color(COLOR_RED).small());
        }
        ui.add_space(4.0);
    }

    changed
}

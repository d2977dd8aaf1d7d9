//! Directory workflow commands.
//!
//! Widgets never mutate the store or the dialog state themselves:
//! - set the target in [`DirectoryInput`] via `ctx.update::<DirectoryInput>(...)`
//! - enqueue the command via `ctx.enqueue_command::<Command>()`
//! - read results via `ctx.cached::<PeopleView>()` or `ctx.state::<DirectoryUiState>()`

use std::any::Any;

use peopleco_states::{Command, Dep, State, Updater};

use crate::{DirectoryUiState, PeopleStore, PersonId, SortColumn, SortState, validate};

/// Arguments for the commands below, written by the UI before enqueueing.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectoryInput {
    /// Row a per-row command acts on.
    pub target: Option<PersonId>,

    /// Column for [`ToggleSortCommand`].
    pub sort_column: Option<SortColumn>,
}

impl State for DirectoryInput {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Opens the details panel for `DirectoryInput.target`.
#[derive(Debug, Default)]
pub struct SelectPersonCommand;

impl Command for SelectPersonCommand {
    fn run(&self, mut deps: Dep<'_>, _updater: Updater) {
        let Some(id) = deps.get_state_ref::<DirectoryInput>().target else {
            return;
        };
        if !deps.get_state_ref::<PeopleStore>().contains(id) {
            log::debug!("Select ignored, person {id} not found");
            return;
        }

        deps.state_mut::<DirectoryUiState>().select(id);
    }
}

#[derive(Debug, Default)]
pub struct ClosePersonDetailsCommand;

impl Command for ClosePersonDetailsCommand {
    fn run(&self, mut deps: Dep<'_>, _updater: Updater) {
        deps.state_mut::<DirectoryUiState>().close_details();
    }
}

/// Opens the edit dialog for `DirectoryInput.target`, pre-filled with its
/// current values.
#[derive(Debug, Default)]
pub struct StartEditPersonCommand;

impl Command for StartEditPersonCommand {
    fn run(&self, mut deps: Dep<'_>, _updater: Updater) {
        let Some(id) = deps.get_state_ref::<DirectoryInput>().target else {
            return;
        };
        let Some(person) = deps.get_state_ref::<PeopleStore>().get(id).cloned() else {
            log::debug!("Edit ignored, person {id} not found");
            return;
        };

        deps.state_mut::<DirectoryUiState>().start_edit(&person);
    }
}

/// Validates the edit form and writes it back, or leaves the dialog open with
/// the field messages.
#[derive(Debug, Default)]
pub struct SavePersonEditCommand;

impl Command for SavePersonEditCommand {
    fn run(&self, mut deps: Dep<'_>, _updater: Updater) {
        let ui = deps.get_state_ref::<DirectoryUiState>();
        let Some(id) = ui.selection.editing() else {
            return;
        };
        let draft = ui.edit_form.draft.clone();

        match validate(&draft) {
            Ok(valid) => {
                if deps.state_mut::<PeopleStore>().update(id, valid) {
                    log::info!("Saved edits to person {id}");
                } else {
                    log::warn!("Person {id} vanished while being edited");
                }
                deps.state_mut::<DirectoryUiState>().close_edit();
            }
            Err(errors) => {
                deps.state_mut::<DirectoryUiState>().edit_form.errors = errors;
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct CancelPersonEditCommand;

impl Command for CancelPersonEditCommand {
    fn run(&self, mut deps: Dep<'_>, _updater: Updater) {
        deps.state_mut::<DirectoryUiState>().close_edit();
    }
}

#[derive(Debug, Default)]
pub struct OpenAddPersonCommand;

impl Command for OpenAddPersonCommand {
    fn run(&self, mut deps: Dep<'_>, _updater: Updater) {
        deps.state_mut::<DirectoryUiState>().open_add();
    }
}

#[derive(Debug, Default)]
pub struct CloseAddPersonCommand;

impl Command for CloseAddPersonCommand {
    fn run(&self, mut deps: Dep<'_>, _updater: Updater) {
        deps.state_mut::<DirectoryUiState>().close_add();
    }
}

/// Validates the add form and appends a new person on success.
#[derive(Debug, Default)]
pub struct SubmitAddPersonCommand;

impl Command for SubmitAddPersonCommand {
    fn run(&self, mut deps: Dep<'_>, _updater: Updater) {
        let Some(draft) = deps
            .get_state_ref::<DirectoryUiState>()
            .add_form
            .as_ref()
            .map(|form| form.draft.clone())
        else {
            return;
        };

        match validate(&draft) {
            Ok(valid) => {
                let id = deps.state_mut::<PeopleStore>().insert(valid);
                log::info!("Added person {id}");
                deps.state_mut::<DirectoryUiState>().close_add();
            }
            Err(errors) => {
                if let Some(form) = deps.state_mut::<DirectoryUiState>().add_form.as_mut() {
                    form.errors = errors;
                }
            }
        }
    }
}

/// Asks for confirmation before deleting `DirectoryInput.target`.
#[derive(Debug, Default)]
pub struct RequestDeletePersonCommand;

impl Command for RequestDeletePersonCommand {
    fn run(&self, mut deps: Dep<'_>, _updater: Updater) {
        let Some(id) = deps.get_state_ref::<DirectoryInput>().target else {
            return;
        };
        if !deps.get_state_ref::<PeopleStore>().contains(id) {
            return;
        }

        deps.state_mut::<DirectoryUiState>().request_delete(id);
    }
}

#[derive(Debug, Default)]
pub struct CancelDeletePersonCommand;

impl Command for CancelDeletePersonCommand {
    fn run(&self, mut deps: Dep<'_>, _updater: Updater) {
        deps.state_mut::<DirectoryUiState>().cancel_delete();
    }
}

/// Deletes the person awaiting confirmation and drops any dialog that still
/// refers to them.
#[derive(Debug, Default)]
pub struct ConfirmDeletePersonCommand;

impl Command for ConfirmDeletePersonCommand {
    fn run(&self, mut deps: Dep<'_>, _updater: Updater) {
        let Some(id) = deps.get_state_ref::<DirectoryUiState>().pending_delete else {
            return;
        };

        if deps.state_mut::<PeopleStore>().delete(id).is_some() {
            log::info!("Deleted person {id}");
        }
        deps.state_mut::<DirectoryUiState>().forget(id);
    }
}

/// Cycles the sort of `DirectoryInput.sort_column`: ascending, descending, off.
#[derive(Debug, Default)]
pub struct ToggleSortCommand;

impl Command for ToggleSortCommand {
    fn run(&self, mut deps: Dep<'_>, _updater: Updater) {
        let Some(column) = deps.get_state_ref::<DirectoryInput>().sort_column else {
            return;
        };

        deps.state_mut::<SortState>().toggle(column);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Field, Person, RowSelection};
    use peopleco_states::StateCtx;

    fn alice() -> Person {
        Person {
            id: PersonId::from("p-alice"),
            name: "Alice".to_owned(),
            status: "Active".to_owned(),
            role: "Developer".to_owned(),
            email: "alice@example.com".to_owned(),
            team: "Alpha".to_owned(),
        }
    }

    fn setup_ctx() -> StateCtx {
        let mut ctx = StateCtx::new();
        ctx.add_state(PeopleStore::from_people([alice()]));
        ctx.add_state(DirectoryUiState::default());
        ctx.add_state(DirectoryInput::default());
        ctx.add_state(SortState::default());
        ctx.record_command(SelectPersonCommand);
        ctx.record_command(StartEditPersonCommand);
        ctx.record_command(SavePersonEditCommand);
        ctx.record_command(OpenAddPersonCommand);
        ctx.record_command(SubmitAddPersonCommand);
        ctx.record_command(RequestDeletePersonCommand);
        ctx.record_command(ConfirmDeletePersonCommand);
        ctx.record_command(ToggleSortCommand);
        ctx
    }

    fn target(ctx: &mut StateCtx, id: &str) {
        ctx.update::<DirectoryInput>(|input| input.target = Some(PersonId::from(id)));
    }

    #[test]
    fn test_select_unknown_person_is_ignored() {
        let mut ctx = setup_ctx();

        target(&mut ctx, "nobody");
        ctx.dispatch::<SelectPersonCommand>();

        assert_eq!(ctx.state::<DirectoryUiState>().selection, RowSelection::Idle);
    }

    #[test]
    fn test_save_edit_with_invalid_email_keeps_dialog_open() {
        let mut ctx = setup_ctx();
        target(&mut ctx, "p-alice");
        ctx.dispatch::<StartEditPersonCommand>();

        ctx.update::<DirectoryUiState>(|ui| ui.edit_form.draft.email = "nope".to_owned());
        ctx.dispatch::<SavePersonEditCommand>();

        let ui = ctx.state::<DirectoryUiState>();
        assert_eq!(ui.selection.editing(), Some(PersonId::from("p-alice")));
        assert_eq!(ui.edit_form.errors.get(Field::Email), Some("Invalid email format"));
        let stored = ctx.state::<PeopleStore>().get(PersonId::from("p-alice"));
        assert_eq!(stored.map(|p| p.email.as_str()), Some("alice@example.com"));
    }

    #[test]
    fn test_save_edit_writes_trimmed_values() {
        let mut ctx = setup_ctx();
        target(&mut ctx, "p-alice");
        ctx.dispatch::<StartEditPersonCommand>();

        ctx.update::<DirectoryUiState>(|ui| ui.edit_form.draft.team = "  Beta ".to_owned());
        ctx.dispatch::<SavePersonEditCommand>();

        assert_eq!(ctx.state::<DirectoryUiState>().selection, RowSelection::Idle);
        let stored = ctx.state::<PeopleStore>().get(PersonId::from("p-alice"));
        assert_eq!(stored.map(|p| p.team.as_str()), Some("Beta"));
    }

    #[test]
    fn test_submit_empty_add_form_reports_every_field() {
        let mut ctx = setup_ctx();
        ctx.dispatch::<OpenAddPersonCommand>();
        ctx.dispatch::<SubmitAddPersonCommand>();

        let ui = ctx.state::<DirectoryUiState>();
        let errors = ui.add_form.as_ref().map(|form| form.errors.len());
        assert_eq!(errors, Some(4));
        assert_eq!(ctx.state::<PeopleStore>().len(), 1);
    }

    #[test]
    fn test_confirm_delete_removes_person_and_closes_details() {
        let mut ctx = setup_ctx();
        target(&mut ctx, "p-alice");
        ctx.dispatch::<SelectPersonCommand>();
        ctx.dispatch::<RequestDeletePersonCommand>();
        ctx.dispatch::<ConfirmDeletePersonCommand>();

        assert!(ctx.state::<PeopleStore>().is_empty());
        let ui = ctx.state::<DirectoryUiState>();
        assert_eq!(ui.selection, RowSelection::Idle);
        assert_eq!(ui.pending_delete, None);
    }

    #[test]
    fn test_toggle_sort_cycles_through_three_states() {
        let mut ctx = setup_ctx();
        ctx.update::<DirectoryInput>(|input| input.sort_column = Some(SortColumn::Team));

        ctx.dispatch::<ToggleSortCommand>();
        assert!(ctx.state::<SortState>().active().is_some());
        ctx.dispatch::<ToggleSortCommand>();
        assert!(ctx.state::<SortState>().active().is_some());
        ctx.dispatch::<ToggleSortCommand>();
        assert_eq!(ctx.state::<SortState>().active(), None);
    }
}

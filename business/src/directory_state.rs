//! UI state of the people table: selection, dialogs and their forms.

use std::any::Any;

use peopleco_states::State;

use crate::{Person, PersonDraft, PersonId, RowSelection, ValidationErrors};

/// A form's field values plus the messages of its last rejected submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonForm {
    pub draft: PersonDraft,
    pub errors: ValidationErrors,
}

impl PersonForm {
    pub fn new(draft: PersonDraft) -> Self {
        Self {
            draft,
            errors: ValidationErrors::default(),
        }
    }
}

/// Stored in `StateCtx`; widgets read it and commands change it.
#[derive(Debug, Clone, Default)]
pub struct DirectoryUiState {
    pub selection: RowSelection,

    /// Edit dialog form, meaningful while `selection` is `Editing`.
    pub edit_form: PersonForm,

    /// `Some` while the add dialog is open.
    pub add_form: Option<PersonForm>,

    /// Person awaiting delete confirmation.
    pub pending_delete: Option<PersonId>,
}

impl DirectoryUiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, id: PersonId) {
        self.selection = self.selection.select(id);
    }

    pub fn close_details(&mut self) {
        if self.selection.selected().is_some() {
            self.selection = self.selection.close();
        }
    }

    pub fn start_edit(&mut self, person: &Person) {
        self.selection = self.selection.edit(person.id);
        self.edit_form = PersonForm::new(person.to_draft());
    }

    pub fn close_edit(&mut self) {
        self.selection = self.selection.close();
        self.edit_form = PersonForm::default();
    }

    pub fn open_add(&mut self) {
        self.add_form = Some(PersonForm::new(PersonDraft::for_new_member()));
    }

    pub fn close_add(&mut self) {
        self.add_form = None;
    }

    pub fn request_delete(&mut self, id: PersonId) {
        self.pending_delete = Some(id);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Clears every reference to a person that no longer exists.
    pub fn forget(&mut self, id: PersonId) {
        if self.selection.editing() == Some(id) {
            self.edit_form = PersonForm::default();
        }
        self.selection = self.selection.forget(id);
        if self.pending_delete == Some(id) {
            self.pending_delete = None;
        }
    }
}

impl State for DirectoryUiState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

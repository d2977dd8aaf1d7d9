//! Row-level interaction state of the table.

use crate::PersonId;

/// `Idle → Selected` on row click, `→ Editing` on the edit action,
/// back to `Idle` on save, cancel or close.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowSelection {
    #[default]
    Idle,
    /// Detail panel is open for this person.
    Selected(PersonId),
    /// Edit dialog is open for this person.
    Editing(PersonId),
}

impl RowSelection {
    /// Row click. Ignored while a person is being edited.
    #[must_use]
    pub fn select(self, id: PersonId) -> Self {
        match self {
            Self::Editing(_) => self,
            Self::Idle | Self::Selected(_) => Self::Selected(id),
        }
    }

    #[must_use]
    pub fn edit(self, id: PersonId) -> Self {
        Self::Editing(id)
    }

    /// Save, cancel and close all return to idle.
    #[must_use]
    pub fn close(self) -> Self {
        Self::Idle
    }

    /// Drops the selection if it refers to `id`, e.g. after `id` was deleted.
    #[must_use]
    pub fn forget(self, id: PersonId) -> Self {
        if self.person() == Some(id) {
            Self::Idle
        } else {
            self
        }
    }

    pub fn person(self) -> Option<PersonId> {
        match self {
            Self::Idle => None,
            Self::Selected(id) | Self::Editing(id) => Some(id),
        }
    }

    pub fn selected(self) -> Option<PersonId> {
        match self {
            Self::Selected(id) => Some(id),
            _ => None,
        }
    }

    pub fn editing(self) -> Option<PersonId> {
        match self {
            Self::Editing(id) => Some(id),
            _ => None,
        }
    }
}

//! The user record shown in the directory and its editable form.

use std::fmt::{Display, Formatter};

use ustr::Ustr;
use uuid::Uuid;

/// Opaque identity of a [`Person`].
///
/// Interned so it is `Copy` and cheap to compare inside per-row UI actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PersonId(Ustr);

impl PersonId {
    /// A fresh random (UUID v4) id.
    pub fn generate() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(Ustr::from(&uuid.hyphenated().to_string()))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for PersonId {
    fn from(value: &str) -> Self {
        Self(Ustr::from(value))
    }
}

impl Display for PersonId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A member of the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub status: String,
    pub role: String,
    pub email: String,
    pub team: String,
}

impl Person {
    /// Copies the editable fields into a draft, e.g. to pre-fill the edit form.
    pub fn to_draft(&self) -> PersonDraft {
        PersonDraft {
            name: self.name.clone(),
            status: self.status.clone(),
            role: self.role.clone(),
            email: self.email.clone(),
            team: self.team.clone(),
        }
    }
}

/// Field values typed into the add/edit forms, not yet validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonDraft {
    pub name: String,
    pub status: String,
    pub role: String,
    pub email: String,
    pub team: String,
}

impl PersonDraft {
    /// Empty draft for the add form. New members start out `Active`.
    pub fn for_new_member() -> Self {
        Self {
            status: "Active".to_owned(),
            ..Self::default()
        }
    }
}

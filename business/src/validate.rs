//! Validation of add/edit form submissions.
//!
//! [`validate`] is the only way to obtain a [`ValidPerson`], and the row store
//! only accepts `ValidPerson`s, so nothing unchecked reaches the store.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::{Person, PersonDraft, PersonId};

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@(?:[A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern compiles")
});

/// Form fields that carry validation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Role,
    Email,
    Team,
}

impl Field {
    pub const ALL: [Self; 4] = [Self::Name, Self::Role, Self::Email, Self::Team];

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Role => "Role",
            Self::Email => "Email",
            Self::Team => "Team",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One message per failing field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .messages.len())]
pub struct ValidationErrors {
    messages: BTreeMap<Field, &'static str>,
}

impl ValidationErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.messages.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.messages.iter().map(|(field, message)| (*field, *message))
    }

    fn insert(&mut self, field: Field, message: &'static str) {
        self.messages.insert(field, message);
    }
}

/// A draft that passed [`validate`], with surrounding whitespace trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidPerson {
    draft: PersonDraft,
}

impl ValidPerson {
    pub fn draft(&self) -> &PersonDraft {
        &self.draft
    }

    pub(crate) fn into_person(self, id: PersonId) -> Person {
        let PersonDraft {
            name,
            status,
            role,
            email,
            team,
        } = self.draft;
        Person {
            id,
            name,
            status,
            role,
            email,
            team,
        }
    }
}

/// Checks every rule and collects all failures at once.
pub fn validate(draft: &PersonDraft) -> Result<ValidPerson, ValidationErrors> {
    let trimmed = PersonDraft {
        name: draft.name.trim().to_owned(),
        status: draft.status.trim().to_owned(),
        role: draft.role.trim().to_owned(),
        email: draft.email.trim().to_owned(),
        team: draft.team.trim().to_owned(),
    };

    let mut errors = ValidationErrors::default();
    if trimmed.name.is_empty() {
        errors.insert(Field::Name, "Name is required");
    }
    if trimmed.role.is_empty() {
        errors.insert(Field::Role, "Role is required");
    }
    if !is_valid_email(&trimmed.email) {
        errors.insert(Field::Email, "Invalid email format");
    }
    if trimmed.team.is_empty() {
        errors.insert(Field::Team, "Team is required");
    }

    if errors.is_empty() {
        Ok(ValidPerson { draft: trimmed })
    } else {
        log::debug!("Rejected form submission: {errors}");
        Err(errors)
    }
}

pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && EMAIL.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> PersonDraft {
        PersonDraft {
            name: "Ann Lee".to_owned(),
            status: "Active".to_owned(),
            role: "Developer".to_owned(),
            email: "ann.lee@example.com".to_owned(),
            team: "Alpha".to_owned(),
        }
    }

    #[test]
    fn test_valid_draft_passes() {
        let valid = validate(&draft()).expect("draft is valid");
        assert_eq!(valid.draft(), &draft());
    }

    #[test]
    fn test_empty_name_is_reported_on_name() {
        let errors = validate(&PersonDraft {
            name: String::new(),
            ..draft()
        })
        .expect_err("name is required");

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Name), Some("Name is required"));
    }

    #[test]
    fn test_every_failing_field_is_collected() {
        let errors = validate(&PersonDraft::default()).expect_err("everything is missing");

        assert_eq!(errors.get(Field::Name), Some("Name is required"));
        assert_eq!(errors.get(Field::Role), Some("Role is required"));
        assert_eq!(errors.get(Field::Email), Some("Invalid email format"));
        assert_eq!(errors.get(Field::Team), Some("Team is required"));
        assert_eq!(errors.to_string(), "4 field(s) failed validation");
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let errors = validate(&PersonDraft {
            team: "   ".to_owned(),
            ..draft()
        })
        .expect_err("blank team");
        assert_eq!(errors.get(Field::Team), Some("Team is required"));
    }

    #[test]
    fn test_fields_are_trimmed() {
        let valid = validate(&PersonDraft {
            name: "  Ann Lee ".to_owned(),
            email: " ann.lee@example.com ".to_owned(),
            ..draft()
        })
        .expect("valid after trimming");
        assert_eq!(valid.draft().name, "Ann Lee");
        assert_eq!(valid.draft().email, "ann.lee@example.com");
    }

    #[test]
    fn test_status_is_not_validated() {
        assert!(validate(&PersonDraft {
            status: String::new(),
            ..draft()
        })
        .is_ok());
    }

    #[test]
    fn test_email_grammar() {
        for ok in [
            "a@b.co",
            "first.last@example.com",
            "o'neil+tag@mail.example.org",
            "dev_ops-1@sub-domain.example.io",
        ] {
            assert!(is_valid_email(ok), "{ok} should be accepted");
        }

        for bad in [
            "",
            "plainaddress",
            "@example.com",
            "ann@",
            "ann@example",
            "ann@example.c",
            ".ann@example.com",
            "ann.@example.com",
            "an..n@example.com",
            "ann@-example.com",
            "ann@example..com",
            "ann lee@example.com",
            "ann@example.com1",
        ] {
            assert!(!is_valid_email(bad), "{bad} should be rejected");
        }
    }
}

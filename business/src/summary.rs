//! Headline numbers for the overview page.

use std::any::{Any, TypeId};

use peopleco_states::{Compute, ComputeDeps, Dep, State, Updater, assign_impl};

use crate::{PeopleStore, Person};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectorySummary {
    pub total: usize,
    /// `(status, count)` in first-seen order.
    pub by_status: Vec<(String, usize)>,
    /// `(team, count)` in first-seen order.
    pub by_team: Vec<(String, usize)>,
}

impl DirectorySummary {
    pub fn from_people<'a>(people: impl IntoIterator<Item = &'a Person>) -> Self {
        let mut summary = Self::default();
        for person in people {
            summary.total += 1;
            bump(&mut summary.by_status, &person.status);
            bump(&mut summary.by_team, &person.team);
        }
        summary
    }
}

fn bump(counts: &mut Vec<(String, usize)>, key: &str) {
    match counts.iter_mut().find(|(k, _)| k == key) {
        Some((_, count)) => *count += 1,
        None => counts.push((key.to_owned(), 1)),
    }
}

impl Compute for DirectorySummary {
    fn deps(&self) -> ComputeDeps {
        vec![TypeId::of::<PeopleStore>()]
    }

    fn compute(&self, deps: Dep<'_>, updater: Updater) {
        let store = deps.get_state_ref::<PeopleStore>();
        updater.set(Self::from_people(store));
    }

    fn assign_box(&mut self, new_self: Box<dyn Any>) {
        assign_impl(self, new_self);
    }
}

impl State for DirectorySummary {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

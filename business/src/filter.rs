//! Name search and role/team facet filters.

use std::any::Any;
use std::collections::BTreeSet;

use peopleco_states::State;

use crate::Person;

/// Current search text and facet selections.
///
/// An empty selection set leaves that facet unrestricted. Values selected
/// within one facet are alternatives (OR); search and the two facets must all
/// match (AND).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub roles: BTreeSet<String>,
    pub teams: BTreeSet<String>,
    pub search: String,
}

impl FilterState {
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn toggle_role(&mut self, role: &str) {
        toggle(&mut self.roles, role);
    }

    pub fn toggle_team(&mut self, team: &str) {
        toggle(&mut self.teams, team);
    }

    /// Unchecks every role and team, keeping the search text.
    pub fn clear_facets(&mut self) {
        self.roles.clear();
        self.teams.clear();
    }

    pub fn clear(&mut self) {
        self.clear_facets();
        self.search.clear();
    }

    /// Whether any facet value is selected.
    pub fn has_facets(&self) -> bool {
        !self.roles.is_empty() || !self.teams.is_empty()
    }

    pub fn is_active(&self) -> bool {
        self.has_facets() || !self.search.is_empty()
    }

    pub fn matches(&self, person: &Person) -> bool {
        let name_matches = person
            .name
            .to_lowercase()
            .contains(&self.search.to_lowercase());
        let role_matches = self.roles.is_empty() || self.roles.contains(&person.role);
        let team_matches = self.teams.is_empty() || self.teams.contains(&person.team);
        name_matches && role_matches && team_matches
    }

    /// Keeps matching people in their original order.
    pub fn apply<'a>(&self, people: impl IntoIterator<Item = &'a Person>) -> Vec<&'a Person> {
        people.into_iter().filter(|person| self.matches(person)).collect()
    }
}

fn toggle(set: &mut BTreeSet<String>, value: &str) {
    if !set.remove(value) {
        set.insert(value.to_owned());
    }
}

impl State for FilterState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Values offered in the filter popup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetOptions {
    pub roles: Vec<String>,
    pub teams: Vec<String>,
}

impl FacetOptions {
    /// Distinct roles and teams in first-seen order.
    ///
    /// Selected values that no longer occur in `people` are appended so they
    /// can still be unchecked.
    pub fn collect<'a>(people: impl IntoIterator<Item = &'a Person>, filter: &FilterState) -> Self {
        let mut options = Self::default();
        for person in people {
            push_unique(&mut options.roles, &person.role);
            push_unique(&mut options.teams, &person.team);
        }
        for role in &filter.roles {
            push_unique(&mut options.roles, role);
        }
        for team in &filter.teams {
            push_unique(&mut options.teams, team);
        }
        options
    }
}

fn push_unique(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|v| v == value) {
        values.push(value.to_owned());
    }
}

//! Derived table view: the store filtered, then sorted.

use std::any::{Any, TypeId};

use peopleco_states::{Compute, ComputeDeps, Dep, State, Updater, assign_impl};

use crate::{FacetOptions, FilterState, PeopleStore, Person, SortState};

/// Rows the table displays, recomputed whenever the store, the filter or the
/// sort changes. Never writes back to the store.
#[derive(Debug, Clone, Default)]
pub struct PeopleView {
    rows: Vec<Person>,
    total: usize,
    facets: FacetOptions,
}

impl PeopleView {
    pub fn rows(&self) -> &[Person] {
        &self.rows
    }

    /// Size of the whole store, not of the filtered view.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn facets(&self) -> &FacetOptions {
        &self.facets
    }
}

/// Filters then sorts `people`; pure.
pub fn derive_rows(people: &[Person], filter: &FilterState, sort: &SortState) -> Vec<Person> {
    let mut rows = filter.apply(people);
    sort.apply(&mut rows);
    rows.into_iter().cloned().collect()
}

impl Compute for PeopleView {
    fn deps(&self) -> ComputeDeps {
        vec![
            TypeId::of::<PeopleStore>(),
            TypeId::of::<FilterState>(),
            TypeId::of::<SortState>(),
        ]
    }

    fn compute(&self, deps: Dep<'_>, updater: Updater) {
        let store = deps.get_state_ref::<PeopleStore>();
        let filter = deps.get_state_ref::<FilterState>();
        let sort = deps.get_state_ref::<SortState>();

        updater.set(Self {
            rows: derive_rows(store.as_slice(), filter, sort),
            total: store.len(),
            facets: FacetOptions::collect(store, filter),
        });
    }

    fn assign_box(&mut self, new_self: Box<dyn Any>) {
        assign_impl(self, new_self);
    }
}

impl State for PeopleView {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PersonId, SortColumn, SortDirection};

    fn person(id: &str, name: &str, role: &str) -> Person {
        Person {
            id: PersonId::from(id),
            name: name.to_owned(),
            status: "Active".to_owned(),
            role: role.to_owned(),
            email: format!("{id}@example.com"),
            team: "Alpha".to_owned(),
        }
    }

    #[test]
    fn test_derive_rows_filters_before_sorting() {
        let people = [
            person("1", "Cora", "Dev"),
            person("2", "Abe", "QA"),
            person("3", "Bea", "Dev"),
        ];
        let mut filter = FilterState::default();
        filter.toggle_role("Dev");
        let sort = SortState::new(SortColumn::Name, SortDirection::Ascending);

        let rows = derive_rows(&people, &filter, &sort);

        let names: Vec<_> = rows.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Bea", "Cora"]);
    }

    #[test]
    fn test_derive_rows_leaves_input_untouched() {
        let people = vec![person("1", "Cora", "Dev"), person("2", "Abe", "QA")];
        let before = people.clone();
        let sort = SortState::new(SortColumn::Name, SortDirection::Descending);

        let _rows = derive_rows(&people, &FilterState::default(), &sort);

        assert_eq!(people, before);
    }
}

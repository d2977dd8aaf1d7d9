//! The authoritative in-memory collection of people.

use std::any::Any;
use std::collections::HashSet;

use peopleco_states::State;

use crate::{Person, PersonId, ValidPerson};

/// Row store of the directory.
///
/// Rows keep insertion order, which is the "unsorted" order of the table.
/// Ids are unique at all times: new rows get a generated id and seed data
/// with duplicate ids is dropped on load.
#[derive(Debug, Clone, Default)]
pub struct PeopleStore {
    people: Vec<Person>,
}

impl PeopleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_people(people: impl IntoIterator<Item = Person>) -> Self {
        let mut seen = HashSet::new();
        let people = people
            .into_iter()
            .filter(|person| {
                let fresh = seen.insert(person.id);
                if !fresh {
                    log::warn!("Dropping seed row with duplicate id {}", person.id);
                }
                fresh
            })
            .collect();
        Self { people }
    }

    /// Appends a validated person under a newly generated id.
    pub fn insert(&mut self, person: ValidPerson) -> PersonId {
        let mut id = PersonId::generate();
        while self.contains(id) {
            id = PersonId::generate();
        }
        log::debug!("Inserting person {id}");
        self.people.push(person.into_person(id));
        id
    }

    /// Replaces every editable field of `id`. Returns `false` if `id` is absent.
    pub fn update(&mut self, id: PersonId, person: ValidPerson) -> bool {
        match self.people.iter_mut().find(|row| row.id == id) {
            Some(row) => {
                log::debug!("Updating person {id}");
                *row = person.into_person(id);
                true
            }
            None => {
                log::debug!("Update skipped, person {id} not found");
                false
            }
        }
    }

    /// Removes `id`, returning the removed row if it existed.
    pub fn delete(&mut self, id: PersonId) -> Option<Person> {
        let index = self.people.iter().position(|row| row.id == id)?;
        log::debug!("Deleting person {id}");
        Some(self.people.remove(index))
    }

    pub fn get(&self, id: PersonId) -> Option<&Person> {
        self.people.iter().find(|row| row.id == id)
    }

    pub fn contains(&self, id: PersonId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Person> {
        self.people.iter()
    }

    pub fn as_slice(&self) -> &[Person] {
        &self.people
    }
}

impl<'a> IntoIterator for &'a PeopleStore {
    type Item = &'a Person;
    type IntoIter = std::slice::Iter<'a, Person>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl State for PeopleStore {
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
    use crate::{PersonDraft, validate};

    fn person(id: &str, name: &str) -> Person {
        Person {
            id: PersonId::from(id),
            name: name.to_owned(),
            status: "Active".to_owned(),
            role: "Developer".to_owned(),
            email: format!("{}@example.com", name.to_lowercase()),
            team: "Alpha".to_owned(),
        }
    }

    fn valid(name: &str, role: &str) -> ValidPerson {
        validate(&PersonDraft {
            name: name.to_owned(),
            status: "Pending".to_owned(),
            role: role.to_owned(),
            email: "someone@example.com".to_owned(),
            team: "Beta".to_owned(),
        })
        .expect("draft should be valid")
    }

    #[test]
    fn test_insert_assigns_retrievable_id() {
        let mut store = PeopleStore::from_people([person("1", "Ann")]);

        let id = store.insert(valid("Bob", "Designer"));

        assert_eq!(store.len(), 2);
        let row = store.get(id).expect("inserted row");
        assert_eq!(row.name, "Bob");
        assert_eq!(row.id, id);
        assert_eq!(store.as_slice().last().map(|p| p.id), Some(id));
    }

    #[test]
    fn test_insert_then_delete_restores_store() {
        let mut store = PeopleStore::from_people([person("1", "Ann"), person("2", "Cid")]);
        let before = store.as_slice().to_vec();

        let id = store.insert(valid("Bob", "Designer"));
        let removed = store.delete(id).expect("row exists");

        assert_eq!(removed.name, "Bob");
        assert_eq!(store.as_slice(), before.as_slice());
    }

    #[test]
    fn test_update_replaces_fields_and_keeps_id() {
        let mut store = PeopleStore::from_people([person("1", "Ann"), person("2", "Cid")]);

        assert!(store.update(PersonId::from("1"), valid("Anne", "QA Engineer")));

        let row = store.get(PersonId::from("1")).expect("row exists");
        assert_eq!(row.id, PersonId::from("1"));
        assert_eq!(row.name, "Anne");
        assert_eq!(row.role, "QA Engineer");
        assert_eq!(row.team, "Beta");
        assert_eq!(row.status, "Pending");
        assert_eq!(store.as_slice()[0].id, PersonId::from("1"), "position is kept");
        assert_eq!(store.get(PersonId::from("2")), Some(&person("2", "Cid")));
    }

    #[test]
    fn test_update_missing_is_noop() {
        let mut store = PeopleStore::from_people([person("1", "Ann")]);
        let before = store.clone();

        assert!(!store.update(PersonId::from("nope"), valid("X", "Y")));
        assert_eq!(store.as_slice(), before.as_slice());
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut store = PeopleStore::from_people([person("1", "Ann")]);
        assert!(store.delete(PersonId::from("nope")).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_duplicate_seed_ids_are_dropped() {
        let store = PeopleStore::from_people([
            person("1", "Ann"),
            person("1", "Impostor"),
            person("2", "Cid"),
        ]);

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(PersonId::from("1")).map(|p| p.name.as_str()), Some("Ann"));
    }
}

//! Random seed data for the directory.

use rand::Rng;
use rand::seq::IndexedRandom;
use uuid::Builder;

use crate::{Person, PersonId};

pub const STATUSES: [&str; 4] = ["Active", "Inactive", "Pending", "Suspended"];

pub const ROLES: [&str; 5] = [
    "Developer",
    "Designer",
    "Product Manager",
    "QA Engineer",
    "DevOps Engineer",
];

pub const TEAMS: [&str; 5] = ["Alpha", "Beta", "Gamma", "Delta", "Omega"];

const FIRST_NAMES: [&str; 16] = [
    "Ada", "Ben", "Chloe", "Diego", "Elena", "Farah", "Gus", "Hana", "Ivan", "Jade", "Kofi",
    "Lena", "Mateo", "Nora", "Omar", "Priya",
];

const LAST_NAMES: [&str; 16] = [
    "Adler", "Baker", "Castillo", "Dubois", "Eriksen", "Fischer", "Garcia", "Haddad", "Ito",
    "Jensen", "Kowalski", "Larsen", "Moreau", "Nakamura", "Okafor", "Petrov",
];

const DOMAINS: [&str; 3] = ["example.com", "example.org", "example.net"];

/// Produces `n` people that all pass validation and have distinct ids.
///
/// Output depends only on the rng, so a seeded rng gives the same directory
/// every run.
pub fn generate_people<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<Person> {
    (0..n).map(|_| generate_person(rng)).collect()
}

fn generate_person<R: Rng + ?Sized>(rng: &mut R) -> Person {
    let id = PersonId::from_uuid(Builder::from_random_bytes(rng.random()).into_uuid());
    let first = pick(rng, &FIRST_NAMES);
    let last = pick(rng, &LAST_NAMES);

    let suffix = if rng.random_bool(0.5) {
        rng.random_range(1..100).to_string()
    } else {
        String::new()
    };
    let email = format!(
        "{}.{}{suffix}@{}",
        first.to_lowercase(),
        last.to_lowercase(),
        pick(rng, &DOMAINS)
    );

    Person {
        id,
        name: format!("{first} {last}"),
        status: pick(rng, &STATUSES).to_owned(),
        role: pick(rng, &ROLES).to_owned(),
        email,
        team: pick(rng, &TEAMS).to_owned(),
    }
}

fn pick<R: Rng + ?Sized>(rng: &mut R, pool: &[&'static str]) -> &'static str {
    pool.choose(rng).copied().unwrap_or_default()
}

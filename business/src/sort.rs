//! Single-column, three-state table sorting.

use std::any::Any;
use std::cmp::Ordering;

use peopleco_states::State;

use crate::Person;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SortColumn {
    Name,
    Status,
    Role,
    Email,
    Team,
}

impl SortColumn {
    /// Table column order.
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Status,
        Self::Role,
        Self::Email,
        Self::Team,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Status => "Status",
            Self::Role => "Role",
            Self::Email => "Email Address",
            Self::Team => "Team",
        }
    }

    pub fn value(self, person: &Person) -> &str {
        match self {
            Self::Name => &person.name,
            Self::Status => &person.status,
            Self::Role => &person.role,
            Self::Email => &person.email,
            Self::Team => &person.team,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// `None` means rows stay in store order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    active: Option<(SortColumn, SortDirection)>,
}

impl SortState {
    pub fn new(column: SortColumn, direction: SortDirection) -> Self {
        Self {
            active: Some((column, direction)),
        }
    }

    pub fn active(&self) -> Option<(SortColumn, SortDirection)> {
        self.active
    }

    pub fn direction_of(&self, column: SortColumn) -> Option<SortDirection> {
        self.active
            .filter(|(active, _)| *active == column)
            .map(|(_, direction)| direction)
    }

    /// Header activation: none → ascending → descending → none for the same
    /// column; a different column starts over at ascending.
    pub fn toggle(&mut self, column: SortColumn) {
        self.active = match self.active {
            Some((active, SortDirection::Ascending)) if active == column => {
                Some((column, SortDirection::Descending))
            }
            Some((active, SortDirection::Descending)) if active == column => None,
            _ => Some((column, SortDirection::Ascending)),
        };
    }

    /// Stable sort; rows with equal keys keep their relative order.
    pub fn apply(&self, rows: &mut [&Person]) {
        let Some((column, direction)) = self.active else {
            return;
        };
        rows.sort_by(|a, b| {
            let ordering = natural_cmp(column.value(a), column.value(b));
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }
}

impl State for SortState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Case-insensitive ordering where digit runs compare by numeric value,
/// so `"Room 9"` sorts before `"Room 10"`.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = chunks(a);
    let mut right = chunks(b);
    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => match compare_chunk(x, y) {
                Ordering::Equal => {}
                unequal => return unequal,
            },
        }
    }
}

/// Splits into maximal runs of ASCII digits and of everything else.
fn chunks(s: &str) -> impl Iterator<Item = &str> {
    let mut rest = s;
    std::iter::from_fn(move || {
        let digits = rest.chars().next()?.is_ascii_digit();
        let end = rest
            .find(|c: char| c.is_ascii_digit() != digits)
            .unwrap_or(rest.len());
        let (chunk, tail) = rest.split_at(end);
        rest = tail;
        Some(chunk)
    })
}

fn compare_chunk(x: &str, y: &str) -> Ordering {
    let numeric = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if numeric(x) && numeric(y) {
        // compare digit strings without parsing so long runs cannot overflow
        let x = x.trim_start_matches('0');
        let y = y.trim_start_matches('0');
        x.len().cmp(&y.len()).then_with(|| x.cmp(y))
    } else {
        x.chars()
            .flat_map(char::to_lowercase)
            .cmp(y.chars().flat_map(char::to_lowercase))
    }
}

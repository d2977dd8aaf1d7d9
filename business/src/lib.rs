//! Domain logic of the PEOPLE.CO directory, independent of any UI toolkit.

mod commands;
mod config;
mod directory_state;
mod filter;
mod generator;
mod person;
mod route;
mod selection;
mod sort;
mod store;
mod summary;
mod validate;
mod view;

use peopleco_states::StateCtx;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub use commands::{
    CancelDeletePersonCommand, CancelPersonEditCommand, CloseAddPersonCommand,
    ClosePersonDetailsCommand, ConfirmDeletePersonCommand, DirectoryInput, OpenAddPersonCommand,
    RequestDeletePersonCommand, SavePersonEditCommand, SelectPersonCommand,
    StartEditPersonCommand, SubmitAddPersonCommand, ToggleSortCommand,
};
pub use config::{DEFAULT_SEED_ROWS, DirectoryConfig, MAX_SEED_ROWS};
pub use directory_state::{DirectoryUiState, PersonForm};
pub use filter::{FacetOptions, FilterState};
pub use generator::{ROLES, STATUSES, TEAMS, generate_people};
pub use person::{Person, PersonDraft, PersonId};
pub use route::Route;
pub use selection::RowSelection;
pub use sort::{SortColumn, SortDirection, SortState, natural_cmp};
pub use store::PeopleStore;
pub use summary::DirectorySummary;
pub use validate::{Field, ValidPerson, ValidationErrors, is_valid_email, validate};
pub use view::{PeopleView, derive_rows};

/// Generates the people the store starts with, as configured.
pub fn seed_people(config: &DirectoryConfig) -> Vec<Person> {
    let mut rng = match config.rng_seed() {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    generate_people(&mut rng, config.seed_rows())
}

/// Registers every state, compute and command of the directory.
pub fn register_directory(ctx: &mut StateCtx, people: Vec<Person>, config: DirectoryConfig) {
    log::info!("Registering directory with {} people", people.len());

    ctx.add_state(config.start_page());
    ctx.add_state(config);
    ctx.add_state(PeopleStore::from_people(people));
    ctx.add_state(FilterState::default());
    ctx.add_state(SortState::default());
    ctx.add_state(DirectoryUiState::default());
    ctx.add_state(DirectoryInput::default());

    ctx.record_compute(PeopleView::default());
    ctx.record_compute(DirectorySummary::default());

    ctx.record_command(SelectPersonCommand);
    ctx.record_command(ClosePersonDetailsCommand);
    ctx.record_command(StartEditPersonCommand);
    ctx.record_command(SavePersonEditCommand);
    ctx.record_command(CancelPersonEditCommand);
    ctx.record_command(OpenAddPersonCommand);
    ctx.record_command(CloseAddPersonCommand);
    ctx.record_command(SubmitAddPersonCommand);
    ctx.record_command(RequestDeletePersonCommand);
    ctx.record_command(CancelDeletePersonCommand);
    ctx.record_command(ConfirmDeletePersonCommand);
    ctx.record_command(ToggleSortCommand);
}

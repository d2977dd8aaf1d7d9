use peopleco_business::{DirectoryConfig, Person, register_directory, seed_people};
use peopleco_states::StateCtx;

/// The main application state.
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
}

impl Default for State {
    fn default() -> Self {
        Self::new(DirectoryConfig::default())
    }
}

impl State {
    /// Seeds the directory with generated people, as configured.
    pub fn new(config: DirectoryConfig) -> Self {
        let people = seed_people(&config);
        Self::with_people(people, config)
    }

    pub fn with_people(people: Vec<Person>, config: DirectoryConfig) -> Self {
        let mut ctx = StateCtx::new();
        register_directory(&mut ctx, people, config);
        // First frame renders computed rows instead of an empty table.
        ctx.settle();

        Self { ctx }
    }

    pub fn test(people: Vec<Person>) -> Self {
        Self::with_people(people, DirectoryConfig::new_for_test())
    }
}

use egui_kittest::Harness;
use peopleco_business::{Person, PersonId};
use peopleco_ui::PeopleApp;
use peopleco_ui::state::State;

pub struct TestCtx<'a, T = State> {
    harness: Harness<'a, T>,
}

impl<'a, T> TestCtx<'a, T> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, T> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, T> {
        &self.harness
    }
}

impl<'a> TestCtx<'a, PeopleApp> {
    pub fn new_app() -> Self {
        Self::new_app_with(sample_people())
    }

    pub fn new_app_with(people: Vec<Person>) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let app = PeopleApp::new(State::test(people));
        let harness = Harness::new_eframe(|_| app);

        Self { harness }
    }
}

/// Four members over three roles and two teams.
pub fn sample_people() -> Vec<Person> {
    [
        ("1", "Ann Lee", "Active", "Developer", "Alpha"),
        ("2", "Bob Stone", "Pending", "Designer", "Beta"),
        ("3", "Cara Diaz", "Inactive", "Developer", "Beta"),
        ("4", "Dan Wu", "Suspended", "QA Engineer", "Alpha"),
    ]
    .into_iter()
    .map(|(id, name, status, role, team)| Person {
        id: PersonId::from(id),
        name: name.to_owned(),
        status: status.to_owned(),
        role: role.to_owned(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        team: team.to_owned(),
    })
    .collect()
}

//! Toolbar above the table: title, member count, search, filters and Add New.

use egui::{
    Align, Area, Button, Frame, Id, Layout, Margin, Order, RichText, TextEdit, Ui,
};
use peopleco_business::{FacetOptions, FilterState, OpenAddPersonCommand, PeopleView};
use peopleco_states::StateCtx;

use crate::utils::colors::{BADGE_BG, BADGE_TEXT, BRAND_PURPLE};

pub const SEARCH_HINT: &str = "Search by name...";

/// Renders the toolbar row.
pub fn render_toolbar(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let total = state_ctx
        .cached::<PeopleView>()
        .map(PeopleView::total)
        .unwrap_or_default();

    ui.horizontal(|ui| {
        ui.label(RichText::new("Team Members").size(18.0).strong());
        member_badge(ui, total);

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let add = Button::new(RichText::new("➕ Add New").color(egui::Color32::WHITE))
                .fill(BRAND_PURPLE);
            if ui.add(add).clicked() {
                state_ctx.enqueue_command::<OpenAddPersonCommand>();
            }

            filter_button(state_ctx, ui);
            search_field(state_ctx, ui);
        });
    });
}

/// Text of the member count badge.
pub fn badge_text(total: usize) -> String {
    format!("{total} users")
}

fn member_badge(ui: &mut Ui, total: usize) {
    Frame::NONE
        .fill(BADGE_BG)
        .corner_radius(10.0)
        .inner_margin(Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(badge_text(total)).color(BADGE_TEXT).size(13.0));
        });
}

fn search_field(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let mut search = state_ctx.state::<FilterState>().search.clone();

    let response = ui.add(
        TextEdit::singleline(&mut search)
            .hint_text(SEARCH_HINT)
            .desired_width(220.0),
    );
    if response.changed() {
        state_ctx.update::<FilterState>(|filter| filter.set_search(search));
    }
}

/// Filter button with its popup of role and team checkboxes.
///
/// The popup stays open while checkboxes are toggled and closes on a click
/// outside of it or on the button again.
fn filter_button(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let popup_id = Id::new("people_filter_popup");
    let mut open = ui.ctx().data(|d| d.get_temp::<bool>(popup_id).unwrap_or(false));

    let active = state_ctx.state::<FilterState>().has_facets();
    let label = if active { "⛭ Filter •" } else { "⛭ Filter" };
    let button = ui.button(label);
    if button.clicked() {
        open = !open;
    }

    if open {
        let facets = state_ctx
            .cached::<PeopleView>()
            .map(|view| view.facets().clone())
            .unwrap_or_default();

        let area = Area::new(popup_id.with("area"))
            .order(Order::Foreground)
            .fixed_pos(button.rect.left_bottom())
            .show(ui.ctx(), |ui| {
                Frame::popup(ui.style()).show(ui, |ui| {
                    ui.set_min_width(180.0);
                    filter_popup_contents(state_ctx, ui, &facets);
                });
            });

        if area.response.clicked_elsewhere() && !button.clicked() {
            open = false;
        }
    }

    ui.ctx().data_mut(|d| d.insert_temp(popup_id, open));
}

fn filter_popup_contents(state_ctx: &mut StateCtx, ui: &mut Ui, facets: &FacetOptions) {
    let filter = state_ctx.state::<FilterState>().clone();
    let mut toggled_role = None;
    let mut toggled_team = None;

    ui.label(RichText::new("Filter by Role").strong());
    for role in &facets.roles {
        let mut checked = filter.roles.contains(role);
        if ui.checkbox(&mut checked, role).changed() {
            toggled_role = Some(role.clone());
        }
    }

    ui.add_space(8.0);
    ui.label(RichText::new("Filter by Team").strong());
    for team in &facets.teams {
        let mut checked = filter.teams.contains(team);
        if ui.checkbox(&mut checked, team).changed() {
            toggled_team = Some(team.clone());
        }
    }

    ui.add_space(8.0);
    let clear = ui.add_enabled(filter.has_facets(), Button::new("Clear filters"));

    if let Some(role) = toggled_role {
        state_ctx.update::<FilterState>(|f| f.toggle_role(&role));
    }
    if let Some(team) = toggled_team {
        state_ctx.update::<FilterState>(|f| f.toggle_team(&team));
    }
    if clear.clicked() {
        state_ctx.update::<FilterState>(FilterState::clear_facets);
    }
}

#[cfg(test)]
mod toolbar_test {
    use egui_kittest::Harness;
    use kittest::Queryable;
    use peopleco_business::{DirectoryUiState, Person, PersonId};

    use super::*;
    use crate::state::State;

    fn person(id: &str, name: &str, role: &str, team: &str) -> Person {
        Person {
            id: PersonId::from(id),
            name: name.to_owned(),
            status: "Active".to_owned(),
            role: role.to_owned(),
            email: format!("{}@example.com", name.to_lowercase()),
            team: team.to_owned(),
        }
    }

    fn test_state() -> State {
        State::test(vec![
            person("1", "Ann", "Developer", "Alpha"),
            person("2", "Bob", "Designer", "Beta"),
        ])
    }

    #[test]
    fn test_badge_text() {
        assert_eq!(badge_text(0), "0 users");
        assert_eq!(badge_text(20), "20 users");
    }

    #[test]
    fn test_toolbar_shows_title_and_count() {
        let harness = Harness::new_ui_state(
            |ui, state: &mut State| {
                render_toolbar(&mut state.ctx, ui);
            },
            test_state(),
        );

        assert!(harness.query_by_label("Team Members").is_some());
        assert!(harness.query_by_label("2 users").is_some());
        assert!(harness.query_by_label_contains("Add New").is_some());
    }

    #[test]
    fn test_add_new_enqueues_open_command() {
        let mut harness = Harness::new_ui_state(
            |ui, state: &mut State| {
                render_toolbar(&mut state.ctx, ui);
                state.ctx.end_frame();
            },
            test_state(),
        );

        harness.get_by_label_contains("Add New").click();
        harness.step();

        assert!(
            harness.state().ctx.state::<DirectoryUiState>().add_form.is_some(),
            "Add dialog should be open after clicking Add New"
        );
    }

    #[test]
    fn test_filter_popup_lists_facets() {
        let mut harness = Harness::new_ui_state(
            |ui, state: &mut State| {
                render_toolbar(&mut state.ctx, ui);
                state.ctx.end_frame();
            },
            test_state(),
        );

        harness.get_by_label_contains("Filter").click();
        harness.step();
        harness.step();

        assert!(harness.query_by_label("Filter by Role").is_some());
        assert!(harness.query_by_label("Filter by Team").is_some());
        assert!(harness.query_by_label("Designer").is_some());
        assert!(harness.query_by_label("Beta").is_some());

        harness.get_by_label("Designer").click();
        harness.step();

        assert!(harness.state().ctx.state::<FilterState>().roles.contains("Designer"));
    }
}

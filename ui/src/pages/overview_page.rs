//! Overview page with headline counts of the directory.

use egui::{Grid, Response, RichText, Ui};
use peopleco_business::DirectorySummary;
use peopleco_states::StateCtx;

use crate::utils::colors::{BRAND_PURPLE, status_color};

/// Renders the total member count and its breakdown by status and by team.
pub fn overview_page(state_ctx: &StateCtx, ui: &mut Ui) -> Response {
    let summary = state_ctx
        .cached::<DirectorySummary>()
        .cloned()
        .unwrap_or_default();

    ui.vertical(|ui| {
        ui.add_space(8.0);
        ui.heading("Overview");
        ui.add_space(12.0);

        ui.label(
            RichText::new(format!("{} members", summary.total))
                .size(24.0)
                .strong()
                .color(BRAND_PURPLE),
        );
        ui.add_space(16.0);

        ui.columns(2, |columns| {
            columns[0].strong("By Status");
            count_grid(&mut columns[0], "overview_by_status", &summary.by_status, true);

            columns[1].strong("By Team");
            count_grid(&mut columns[1], "overview_by_team", &summary.by_team, false);
        });
    })
    .response
}

fn count_grid(ui: &mut Ui, id: &str, counts: &[(String, usize)], colored: bool) {
    Grid::new(id)
        .num_columns(2)
        .spacing([24.0, 6.0])
        .striped(true)
        .show(ui, |ui| {
            for (key, count) in counts {
                let mut text = RichText::new(key);
                if colored {
                    text = text.color(status_color(key));
                }
                ui.label(text);
                ui.label(count.to_string());
                ui.end_row();
            }
        });
}

#[cfg(test)]
mod overview_page_test {
    use egui_kittest::Harness;
    use kittest::Queryable;
    use peopleco_business::{Person, PersonId};

    use super::*;
    use crate::state::State;

    fn person(id: &str, status: &str, team: &str) -> Person {
        Person {
            id: PersonId::from(id),
            name: format!("Person {id}"),
            status: status.to_owned(),
            role: "Developer".to_owned(),
            email: format!("p{id}@example.com"),
            team: team.to_owned(),
        }
    }

    #[test]
    fn test_overview_shows_counts() {
        let state = State::test(vec![
            person("1", "Active", "Alpha"),
            person("2", "Pending", "Omega"),
            person("3", "Active", "Omega"),
        ]);

        let harness = Harness::new_ui_state(
            |ui, state: &mut State| {
                overview_page(&state.ctx, ui);
            },
            state,
        );

        assert!(harness.query_by_label("3 members").is_some());
        assert!(harness.query_by_label("By Status").is_some());
        assert!(harness.query_by_label("Pending").is_some());
        assert!(harness.query_by_label("Omega").is_some());
    }
}

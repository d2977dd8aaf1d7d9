//! Left navigation between the two pages.

use egui::{Response, RichText, Ui};
use peopleco_business::Route;
use peopleco_states::StateCtx;

use crate::utils::colors::BRAND_PURPLE;

/// Renders one link per [`Route`]; clicking a link switches the page.
pub fn sidebar(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let current = *state_ctx.state::<Route>();

    ui.vertical(|ui| {
        ui.add_space(12.0);
        for route in Route::ALL {
            let active = route == current;
            let mut text = RichText::new(format!("▣ {}", route.label())).size(16.0);
            if active {
                text = text.color(BRAND_PURPLE).strong();
            }

            if ui.selectable_label(active, text).clicked() && !active {
                log::debug!("Navigating to {route:?}");
                state_ctx.update::<Route>(|r| *r = route);
            }
            ui.add_space(4.0);
        }
    })
    .response
}

#[cfg(test)]
mod sidebar_test {
    use egui_kittest::Harness;
    use kittest::Queryable;

    use super::*;

    fn create_test_state_ctx(route: Route) -> StateCtx {
        let mut ctx = StateCtx::new();
        ctx.add_state(route);
        ctx
    }

    #[test]
    fn test_sidebar_shows_both_links() {
        let mut state_ctx = create_test_state_ctx(Route::PeopleDirectory);

        let harness = Harness::new_ui_state(
            |ui, state_ctx| {
                sidebar(state_ctx, ui);
            },
            &mut state_ctx,
        );

        assert!(harness.query_by_label_contains("Overview").is_some());
        assert!(harness.query_by_label_contains("People Directory").is_some());
    }

    #[test]
    fn test_clicking_overview_switches_route() {
        let mut state_ctx = create_test_state_ctx(Route::PeopleDirectory);

        let mut harness = Harness::new_ui_state(
            |ui, state_ctx| {
                sidebar(state_ctx, ui);
            },
            &mut state_ctx,
        );

        harness.get_by_label_contains("Overview").click();
        harness.step();

        assert_eq!(*harness.state().state::<Route>(), Route::Overview);
    }
}

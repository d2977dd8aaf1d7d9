use egui::{CentralPanel, SidePanel, TopBottomPanel};
use peopleco_business::Route;

use crate::{pages, state::State, widgets};

pub struct PeopleApp {
    state: State,
}

impl PeopleApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }
}

impl eframe::App for PeopleApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Sync Compute for render
        self.state.ctx.begin_frame();

        TopBottomPanel::top("navbar").show(ctx, |ui| {
            widgets::navbar(ui);
        });

        SidePanel::left("sidebar")
            .resizable(false)
            .default_width(200.0)
            .show(ctx, |ui| {
                widgets::sidebar(&mut self.state.ctx, ui);
            });

        CentralPanel::default().show(ctx, |ui| match *self.state.ctx.state::<Route>() {
            Route::Overview => {
                pages::overview_page(&self.state.ctx, ui);
            }
            Route::PeopleDirectory => {
                pages::people_page(&mut self.state.ctx, ui);
            }
        });

        // Apply what widgets enqueued this frame, then recompute derived views.
        if self.state.ctx.end_frame() {
            ctx.request_repaint();
        }
    }
}

#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use peopleco_business::DirectoryConfig;
use peopleco_ui::state::State;

mod alloc {
    #[global_allocator]
    static MALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;
}

fn main() -> eframe::Result {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_module("egui_winit::clipboard", log::LevelFilter::Off)
        .init();

    let config = DirectoryConfig::init().unwrap_or_else(|err| {
        log::warn!("Invalid configuration, falling back to defaults: {err:#}");
        DirectoryConfig::default()
    });

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("PEOPLE.CO")
            .with_inner_size([1200.0, 760.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "PEOPLE.CO",
        native_options,
        Box::new(move |_cc| {
            let state = State::new(config);
            let app = peopleco_ui::PeopleApp::new(state);
            Ok(Box::new(app))
        }),
    )
}

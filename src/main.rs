//! Matrix Panel - desktop control panel for the LED matrix
//! Built with iced, talking to the matrix over its HTTP API

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod api;
mod app;
mod features;
mod i18n;
mod ui;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    iced::application(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .window_size(app::WINDOW_SIZE)
        .antialiasing(true)
        .run()
}

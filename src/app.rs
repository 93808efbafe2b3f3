//! Main application module

pub mod helpers;
mod message;
mod state;
mod update;
mod view;

use std::time::Duration;

use iced::{Size, Task, Theme};

pub use message::Message;
pub use state::{App, CoreState, UiState};

use crate::features::{ControlBar, Gallery, Settings};
use crate::i18n::Key;

/// GIF previews advance at this rate (25 fps)
const PREVIEW_FRAME_INTERVAL: Duration = Duration::from_millis(40);

/// Initial window size
pub const WINDOW_SIZE: Size = Size::new(1024.0, 720.0);

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        let mode = settings.last_mode;

        let app = Self {
            core: CoreState::new(settings),
            gallery: Gallery::new(),
            control: ControlBar::new(),
            ui: UiState::new(mode),
        };

        // Both widgets start with a refresh
        let init_task = Task::batch([
            app.run_request(app.gallery.refresh()),
            app.run_request(app.control.refresh()),
        ]);

        (app, init_task)
    }

    pub fn theme(&self) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn title(&self) -> String {
        self.core.locale.get(Key::AppName).to_string()
    }

    /// Subscriptions for window resizes, running transitions and GIF playback
    pub fn subscription(&self) -> iced::Subscription<Message> {
        let resize_sub =
            iced::window::resize_events().map(|(_id, size)| Message::WindowResized(size));

        // Frames (~60fps) only while something is fading
        let animation_sub = if self.ui.has_active_animations() {
            iced::window::frames().map(|_| Message::AnimationTick)
        } else {
            iced::Subscription::none()
        };

        let preview_sub = if self.ui.has_playing_previews() {
            iced::time::every(PREVIEW_FRAME_INTERVAL).map(Message::PreviewTick)
        } else {
            iced::Subscription::none()
        };

        iced::Subscription::batch([resize_sub, animation_sub, preview_sub])
    }
}

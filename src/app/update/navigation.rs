//! Mode, appearance and window message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::i18n::Locale;

impl App {
    /// Handle navigation and window messages
    pub fn handle_navigation(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::SelectMode(mode) => {
                if self.ui.mode != *mode {
                    tracing::info!("Display mode: {:?}", mode);
                    self.ui.mode = *mode;
                    self.core.settings.last_mode = *mode;
                    self.core.save_settings();
                }
                Some(Task::none())
            }

            Message::ToggleDarkMode => {
                let display = &mut self.core.settings.display;
                display.dark_mode = !display.dark_mode;
                self.core.save_settings();
                Some(Task::none())
            }

            Message::CycleLanguage => {
                let language = self.core.settings.display.language.next();
                self.core.settings.display.language = language;
                self.core.locale = Locale::new(language);
                self.core.save_settings();
                Some(Task::none())
            }

            Message::WindowResized(size) => {
                self.ui.window_width = size.width;
                Some(Task::none())
            }

            Message::AnimationTick => {
                self.ui.tick_animations(iced::time::Instant::now());
                Some(Task::none())
            }

            Message::Noop => Some(Task::none()),

            _ => None,
        }
    }
}

//! Application view rendering

use iced::widget::{column, container, stack};
use iced::{Element, Fill};

use super::App;
use super::message::Message;
use crate::features::DisplayMode;
use crate::ui::{components, theme};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let locale = self.core.locale;
        let upload = self.gallery.upload();

        // Mode content (gallery with its upload button, or the music hint)
        let content: Element<'_, Message> = match self.ui.mode {
            DisplayMode::Animation => stack![
                column![
                    components::upload_status::progress(upload, locale),
                    components::animation_grid::view(
                        &self.gallery,
                        &self.ui.previews,
                        self.ui.preview_elapsed(),
                        &self.ui.tile_hover,
                        self.ui.window_width,
                        locale,
                    ),
                ],
                components::upload_status::upload_button(upload, locale),
            ]
            .into(),
            DisplayMode::Music => components::music_placeholder::view(locale),
        };

        let main_layout = column![
            components::header::view(
                self.ui.mode,
                self.core.settings.display.dark_mode,
                locale,
            ),
            container(content).width(Fill).height(Fill),
            components::control_bar::view(&self.control, locale),
        ];

        let base = container(main_layout)
            .width(Fill)
            .height(Fill)
            .style(theme::main_content);

        // Delete dialog fades over everything, control bar included
        stack![
            base,
            components::delete_animation_dialog::view(self.ui.delete_dialog.opacity(), locale),
        ]
        .into()
    }
}

//! Music mode view
//!
//! The matrix drives its music visuals by itself, so there is nothing to
//! control from here yet.

use iced::widget::{Space, column, container, svg, text};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::i18n::{Key, Locale};
use crate::ui::theme::{self, BOLD_WEIGHT};
use crate::ui::icons;

pub fn view(locale: Locale) -> Element<'static, Message> {
    let content = column![
        svg(svg::Handle::from_memory(icons::MUSIC.as_bytes()))
            .width(64)
            .height(64)
            .style(|_theme, _status| svg::Style {
                color: Some(theme::PRIMARY),
            }),
        Space::new().height(16),
        text(locale.get(Key::MusicModeTitle))
            .size(22)
            .font(iced::Font {
                weight: BOLD_WEIGHT,
                ..Default::default()
            }),
        Space::new().height(8),
        text(locale.get(Key::MusicModeHint))
            .size(14)
            .style(|theme| text::Style {
                color: Some(theme::text_muted(theme)),
            }),
    ]
    .align_x(Alignment::Center)
    .max_width(420);

    container(content)
        .width(Fill)
        .height(Fill)
        .center_x(Fill)
        .center_y(Fill)
        .into()
}

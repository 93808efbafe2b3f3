//! Header bar with the display mode tabs and appearance actions

use iced::widget::{Space, button, column, container, row, svg, text, tooltip};
use iced::{Alignment, Color, Element, Fill};

use crate::app::Message;
use crate::features::DisplayMode;
use crate::i18n::{Key, Locale};
use crate::ui::theme::{self, BOLD_WEIGHT};
use crate::ui::icons;

pub const HEADER_HEIGHT: f32 = 56.0;
const TAB_UNDERLINE: f32 = 3.0;

fn mode_label(mode: DisplayMode) -> Key {
    match mode {
        DisplayMode::Animation => Key::ModeAnimation,
        DisplayMode::Music => Key::ModeMusic,
    }
}

fn mode_tab(mode: DisplayMode, active: bool, locale: Locale) -> Element<'static, Message> {
    let label = text(locale.get(mode_label(mode)).to_uppercase())
        .size(14)
        .font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        });

    let underline = container(Space::new().width(Fill).height(TAB_UNDERLINE)).style(move |_theme| {
        container::Style {
            background: active.then_some(iced::Background::Color(theme::PRIMARY)),
            ..Default::default()
        }
    });

    let tab = column![
        container(label)
            .height(HEADER_HEIGHT - TAB_UNDERLINE)
            .center_y(HEADER_HEIGHT - TAB_UNDERLINE)
            .padding([0, 20]),
        underline,
    ]
    .width(iced::Shrink);

    button(tab)
        .padding(0)
        .style(theme::mode_tab(active))
        .on_press(Message::SelectMode(mode))
        .into()
}

fn action_button(
    icon: &'static str,
    label: &'static str,
    on_press: Message,
) -> Element<'static, Message> {
    tooltip(
        button(
            svg(svg::Handle::from_memory(icon.as_bytes()))
                .width(20)
                .height(20)
                .style(|_theme, _status| svg::Style {
                    color: Some(Color::WHITE),
                }),
        )
        .padding(8)
        .style(theme::header_icon_button)
        .on_press(on_press),
        label,
        tooltip::Position::Bottom,
    )
    .into()
}

/// Build the header bar
pub fn view(current: DisplayMode, dark_mode: bool, locale: Locale) -> Element<'static, Message> {
    let tabs = row(DisplayMode::all()
        .iter()
        .map(|mode| mode_tab(*mode, *mode == current, locale)));

    let theme_icon = if dark_mode { icons::SUN } else { icons::MOON };

    let content = row![
        tabs,
        Space::new().width(Fill),
        action_button(
            icons::LANGUAGE,
            locale.get(Key::SwitchLanguage),
            Message::CycleLanguage,
        ),
        Space::new().width(4),
        action_button(theme_icon, locale.get(Key::ToggleTheme), Message::ToggleDarkMode),
        Space::new().width(12),
    ]
    .align_y(Alignment::Center)
    .height(HEADER_HEIGHT);

    container(content)
        .width(Fill)
        .style(theme::header_bar)
        .into()
}

//! Delete animation confirmation dialog component

use iced::mouse::Interaction;
use iced::widget::{Space, button, column, container, mouse_area, opaque, row, text};
use iced::{Alignment, Color, Element, Fill};

use crate::app::Message;
use crate::i18n::{Key, Locale};
use crate::ui::theme::{self, BOLD_WEIGHT};

const DIALOG_WIDTH: f32 = 290.0;

/// Build the delete confirmation dialog, faded by `opacity`
pub fn view(opacity: f32, locale: Locale) -> Element<'static, Message> {
    if opacity < 0.01 {
        return Space::new().height(0).into();
    }

    let title = text(locale.get(Key::DeleteAnimationTitle))
        .size(20)
        .style(move |theme| text::Style {
            color: Some(Color {
                a: opacity,
                ..theme::text_primary(theme)
            }),
        })
        .font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        });

    let message = text(locale.get(Key::DeleteAnimationConfirm))
        .size(14)
        .style(move |theme| text::Style {
            color: Some(Color {
                a: opacity,
                ..theme::text_secondary(theme)
            }),
        });

    let cancel_btn = button(text(locale.get(Key::Cancel).to_uppercase()).size(14))
        .padding([8, 12])
        .style(theme::flat_primary_button)
        .on_press(Message::CancelDeleteAnimation);

    let remove_btn = button(text(locale.get(Key::Remove).to_uppercase()).size(14))
        .padding([8, 12])
        .style(theme::flat_danger_button)
        .on_press(Message::ConfirmDeleteAnimation);

    let buttons = row![
        Space::new().width(Fill),
        cancel_btn,
        Space::new().width(8),
        remove_btn,
    ]
    .align_y(Alignment::Center);

    let dialog_content = column![
        title,
        Space::new().height(12),
        message,
        Space::new().height(20),
        buttons,
    ]
    .width(DIALOG_WIDTH)
    .padding(20);

    let dialog_box = container(dialog_content).style(move |theme| container::Style {
        background: Some(iced::Background::Color(theme::dialog_bg(theme, opacity))),
        border: iced::Border {
            radius: 4.0.into(),
            ..Default::default()
        },
        shadow: iced::Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.3 * opacity),
            offset: iced::Vector::new(0.0, 8.0),
            blur_radius: 24.0,
        },
        ..Default::default()
    });

    // Clicks on the dialog itself must not reach the backdrop
    let dialog_box = mouse_area(dialog_box).on_press(Message::Noop);

    let backdrop = container(dialog_box)
        .width(Fill)
        .height(Fill)
        .center_x(Fill)
        .center_y(Fill)
        .style(move |theme| container::Style {
            background: Some(iced::Background::Color(theme::overlay_backdrop(theme, opacity))),
            ..Default::default()
        });

    // Clicking the backdrop cancels, like the close gesture of a modal
    let event_blocker = mouse_area(backdrop)
        .interaction(Interaction::Idle)
        .on_press(Message::CancelDeleteAnimation);

    opaque(event_blocker).into()
}

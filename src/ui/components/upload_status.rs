//! Upload progress bar and floating upload button

use iced::widget::{Space, button, column, container, progress_bar, svg, text, tooltip};
use iced::{Color, Element, Fill};

use crate::app::Message;
use crate::features::UploadState;
use crate::i18n::{Key, Locale};
use crate::ui::{icons, theme};

const FAB_SIZE: f32 = 56.0;
const FAB_MARGIN: f32 = 24.0;
const PROGRESS_HEIGHT: f32 = 4.0;

/// Thin accent progress bar shown above the grid while uploading
///
/// At 100 percent the bytes are out but the matrix has not answered yet; the
/// bar then stays full and the label switches to the finishing text.
pub fn progress(upload: UploadState, locale: Locale) -> Element<'static, Message> {
    if !upload.is_in_progress() {
        return Space::new().height(0).into();
    }

    let label = if upload.is_finishing() {
        locale.get(Key::UploadFinishing).to_string()
    } else {
        format!("{} {:.0}%", locale.get(Key::Uploading), upload.percent())
    };

    let bar = container(
        progress_bar(0.0..=100.0, upload.percent()).style(|theme| progress_bar::Style {
            background: iced::Background::Color(theme::hover_bg(theme)),
            bar: iced::Background::Color(theme::ACCENT),
            border: iced::Border::default(),
        }),
    )
    .height(PROGRESS_HEIGHT)
    .width(Fill);

    column![
        bar,
        container(text(label).size(12).style(|theme| text::Style {
            color: Some(theme::text_muted(theme)),
        }))
        .padding([4, 16]),
    ]
    .width(Fill)
    .into()
}

/// Floating "+" button anchored to the bottom right of the gallery
pub fn upload_button(upload: UploadState, locale: Locale) -> Element<'static, Message> {
    let btn = button(
        container(
            svg(svg::Handle::from_memory(icons::ADD.as_bytes()))
                .width(24)
                .height(24)
                .style(|_theme, _status| svg::Style {
                    color: Some(Color::WHITE),
                }),
        )
        .center_x(FAB_SIZE)
        .center_y(FAB_SIZE),
    )
    .padding(0)
    .width(FAB_SIZE)
    .height(FAB_SIZE)
    .style(theme::fab_button)
    // Only one upload at a time
    .on_press_maybe((!upload.is_in_progress()).then_some(Message::PickAnimationFile));

    let fab = tooltip(btn, locale.get(Key::UploadAnimation), tooltip::Position::Left);

    container(fab)
        .width(Fill)
        .height(Fill)
        .align_right(Fill)
        .align_bottom(Fill)
        .padding(FAB_MARGIN)
        .into()
}

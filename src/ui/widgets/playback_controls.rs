//! Playback control row (rewind, play/pause, fast-forward)
//!
//! Generic over the message type; the caller decides what each button sends.

use iced::widget::{Space, button, container, row, svg, tooltip};
use iced::{Alignment, Color, Element, Padding};

use crate::ui::{icons, theme};

const PLAY_BUTTON_SIZE: f32 = 44.0;
const PLAY_ICON_SIZE: f32 = 22.0;
const SKIP_ICON_SIZE: f32 = 24.0;
const SKIP_PADDING: f32 = 8.0;
const SPACING: f32 = 12.0;

/// Messages and labels for the three buttons
pub struct PlaybackControls<'a, Message> {
    pub is_playing: bool,
    /// A write is still in flight; the play button is drawn muted
    pub is_syncing: bool,
    pub on_prev: Message,
    pub on_toggle: Message,
    pub on_next: Message,
    pub prev_label: &'a str,
    pub toggle_label: &'a str,
    pub next_label: &'a str,
}

fn icon<'a>(data: &'static str, size: f32, color: Option<Color>) -> svg::Svg<'a> {
    svg(svg::Handle::from_memory(data.as_bytes()))
        .width(size)
        .height(size)
        .style(move |theme, _status| svg::Style {
            color: Some(color.unwrap_or_else(|| theme::text_secondary(theme))),
        })
}

fn with_tooltip<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    label: &'a str,
) -> Element<'a, Message> {
    tooltip(content, label, tooltip::Position::Top).into()
}

fn skip_button<'a, Message: Clone + 'a>(
    data: &'static str,
    on_press: Message,
    label: &'a str,
) -> Element<'a, Message> {
    let btn = button(icon(data, SKIP_ICON_SIZE, None))
        .padding(SKIP_PADDING)
        .style(theme::icon_button)
        .on_press(on_press);

    with_tooltip(btn, label)
}

fn play_button<'a, Message: Clone + 'a>(
    is_playing: bool,
    is_syncing: bool,
    on_press: Message,
    label: &'a str,
) -> Element<'a, Message> {
    let data = if is_playing { icons::PAUSE } else { icons::PLAY };
    let inner = (PLAY_BUTTON_SIZE - PLAY_ICON_SIZE) / 2.0;
    // The play triangle is not symmetric
    let offset = if is_playing { 0.0 } else { 2.0 };

    let btn = button(
        container(icon(data, PLAY_ICON_SIZE, Some(Color::WHITE))).padding(Padding {
            top: inner,
            bottom: inner,
            left: inner + offset,
            right: inner - offset,
        }),
    )
    .padding(0)
    .width(PLAY_BUTTON_SIZE)
    .height(PLAY_BUTTON_SIZE)
    .style(move |theme, status| {
        let bg = if is_syncing {
            theme::icon_muted(theme)
        } else {
            match status {
                button::Status::Hovered => theme::SECONDARY,
                _ => theme::PRIMARY,
            }
        };
        button::Style {
            background: Some(iced::Background::Color(bg)),
            border: iced::Border {
                radius: (PLAY_BUTTON_SIZE / 2.0).into(),
                ..Default::default()
            },
            ..Default::default()
        }
    })
    // Toggling stays possible while a write is pending
    .on_press(on_press);

    with_tooltip(btn, label)
}

/// Build the controls row
pub fn view<'a, Message: Clone + 'a>(controls: PlaybackControls<'a, Message>) -> Element<'a, Message> {
    row![
        skip_button(icons::FAST_REWIND, controls.on_prev, controls.prev_label),
        Space::new().width(SPACING),
        play_button(
            controls.is_playing,
            controls.is_syncing,
            controls.on_toggle,
            controls.toggle_label,
        ),
        Space::new().width(SPACING),
        skip_button(icons::FAST_FORWARD, controls.on_next, controls.next_label),
    ]
    .align_y(Alignment::Center)
    .into()
}

//! Control bar component
//!
//! Cycle delay field on the left, playback controls in the center. Always
//! visible at the bottom of the window.

use iced::widget::{Space, container, row, svg, text, text_input};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::features::ControlBar;
use crate::i18n::{Key, Locale};
use crate::ui::{icons, theme};
use crate::ui::widgets::{PlaybackControls, playback_controls};

/// Control bar height
const CONTROL_BAR_HEIGHT: f32 = 72.0;

const DELAY_FIELD_WIDTH: f32 = 200.0;

/// Accepted range, matches `features::control::clamp_cycle_delay`
const DELAY_PLACEHOLDER: &str = "1-600";

fn delay_field<'a>(control: &'a ControlBar, locale: Locale) -> Element<'a, Message> {
    let icon = svg(svg::Handle::from_memory(icons::SCHEDULE.as_bytes()))
        .width(20)
        .height(20)
        .style(|theme, _status| svg::Style {
            color: Some(theme::text_muted(theme)),
        });

    let input = text_input(DELAY_PLACEHOLDER, control.delay_input())
        .on_input(Message::CycleDelayInputChanged)
        .on_submit(Message::CycleDelaySubmitted)
        .padding([8, 10])
        .size(15)
        .width(Fill)
        .style(theme::delay_input);

    let suffix = text(locale.get(Key::CycleDelaySuffix))
        .size(14)
        .style(|theme| text::Style {
            color: Some(theme::text_muted(theme)),
        });

    row![icon, Space::new().width(8), input, Space::new().width(8), suffix]
        .align_y(Alignment::Center)
        .width(DELAY_FIELD_WIDTH)
        .into()
}

/// Build the control bar
pub fn view<'a>(control: &'a ControlBar, locale: Locale) -> Element<'a, Message> {
    let toggle_label = if control.is_syncing() {
        locale.get(Key::Syncing)
    } else if control.is_playing() {
        locale.get(Key::Pause)
    } else {
        locale.get(Key::Play)
    };

    let controls = playback_controls::view(PlaybackControls {
        is_playing: control.is_playing(),
        is_syncing: control.is_syncing(),
        on_prev: Message::PrevAnimation,
        on_toggle: Message::TogglePlayback,
        on_next: Message::NextAnimation,
        prev_label: locale.get(Key::Previous),
        toggle_label,
        next_label: locale.get(Key::Next),
    });

    let content = row![
        delay_field(control, locale),
        container(controls).center_x(Fill),
        // Balances the delay field so the controls stay centered
        Space::new().width(DELAY_FIELD_WIDTH),
    ]
    .align_y(Alignment::Center)
    .padding([0, 24]);

    container(content)
        .width(Fill)
        .height(CONTROL_BAR_HEIGHT)
        .center_y(CONTROL_BAR_HEIGHT)
        .style(theme::control_bar)
        .into()
}

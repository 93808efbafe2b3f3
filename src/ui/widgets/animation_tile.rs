//! Square animation preview with a remove button
//!
//! Reusable widget with generic Message type. Shows a spinner-like placeholder
//! until the preview image arrives and reveals the remove button on hover.

use iced::alignment::Horizontal;
use iced::widget::{button, container, image, mouse_area, stack, svg};
use iced::{Color, Element, Fill};

use crate::ui::{icons, theme};

/// Tile content while the GIF is still downloading
fn placeholder<'a, Message: 'a>(size: f32) -> Element<'a, Message> {
    container(
        svg(svg::Handle::from_memory(icons::SYNCING.as_bytes()))
            .width(size / 4.0)
            .height(size / 4.0)
            .style(|_theme, _status| svg::Style {
                color: Some(theme::PRIMARY),
            }),
    )
    .width(size)
    .height(size)
    .center_x(size)
    .center_y(size)
    .into()
}

/// Create an animation tile
///
/// # Arguments
/// * `preview` - Current GIF frame, `None` while loading
/// * `size` - Edge length of the square tile
/// * `hover_progress` - Hover animation progress (0.0 to 1.0)
/// * `on_remove` - Message sent by the remove button
/// * `on_hover` / `on_unhover` - Pointer enter and exit
pub fn view<'a, Message: Clone + 'a>(
    preview: Option<&'a image::Handle>,
    size: f32,
    hover_progress: f32,
    on_remove: Message,
    on_hover: Message,
    on_unhover: Message,
) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match preview {
        Some(handle) => image(handle.clone())
            .width(size)
            .height(size)
            // LED art must stay pixelated when scaled up
            .filter_method(image::FilterMethod::Nearest)
            .content_fit(iced::ContentFit::Contain)
            .into(),
        None => placeholder(size),
    };

    let tile = container(picture)
        .width(size)
        .height(size)
        .style(|theme| container::Style {
            background: Some(iced::Background::Color(theme::tile_bg(theme))),
            ..Default::default()
        });

    // Always present so the button stays clickable without hover (touch screens)
    let opacity = 0.35 + 0.65 * hover_progress;
    let remove_btn = button(
        svg(svg::Handle::from_memory(icons::CLOSE.as_bytes()))
            .width(20)
            .height(20)
            .style(move |theme, _status| svg::Style {
                color: Some(Color {
                    a: opacity,
                    ..theme::danger(theme)
                }),
            }),
    )
    .padding(6)
    .style(move |_theme, status| {
        let alpha = match status {
            button::Status::Hovered | button::Status::Pressed => 0.6,
            _ => 0.3 * hover_progress,
        };
        button::Style {
            background: Some(iced::Background::Color(Color::from_rgba(0.0, 0.0, 0.0, alpha))),
            border: iced::Border {
                radius: 50.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    })
    .on_press(on_remove);

    let overlay = container(remove_btn)
        .width(Fill)
        .align_x(Horizontal::Right)
        .padding(2);

    let content = stack![tile, overlay];

    mouse_area(content)
        .on_enter(on_hover)
        .on_exit(on_unhover)
        .into()
}

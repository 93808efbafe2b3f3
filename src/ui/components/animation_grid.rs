//! Animation gallery grid
//!
//! Square tiles in a responsive grid. The column count follows the usual
//! breakpoints: 3 on phones, 4 on small, 6 on medium and large, 12 on very
//! wide windows.

use std::collections::HashMap;
use std::time::Duration;

use iced::widget::{Space, column, container, row, scrollable, svg, text};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::app::helpers::AnimationPreview;
use crate::features::Gallery;
use crate::i18n::{Key, Locale};
use crate::ui::animation::HoverFade;
use crate::ui::widgets::animation_tile;
use crate::ui::{icons, theme};

const GRID_PADDING: f32 = 16.0;
const TILE_SPACING: f32 = 4.0;
/// Extra space kept clear below the last row for the upload button
const BOTTOM_CLEARANCE: f32 = 88.0;

/// Number of columns for a window of the given width
pub fn columns_for_width(width: f32) -> usize {
    match width {
        w if w < 600.0 => 3,
        w if w < 960.0 => 4,
        w if w < 1904.0 => 6,
        _ => 12,
    }
}

/// Edge length of one tile when `columns` tiles share `width`
pub fn tile_size(width: f32, columns: usize) -> f32 {
    let columns = columns.max(1) as f32;
    let usable = width - 2.0 * GRID_PADDING - TILE_SPACING * (columns - 1.0);
    (usable / columns).max(32.0)
}

fn centered_hint<'a>(content: Element<'a, Message>) -> Element<'a, Message> {
    container(content)
        .width(Fill)
        .height(Fill)
        .center_x(Fill)
        .center_y(Fill)
        .into()
}

fn loading(locale: Locale) -> Element<'static, Message> {
    centered_hint(
        column![
            svg(svg::Handle::from_memory(icons::SYNCING.as_bytes()))
                .width(32)
                .height(32)
                .style(|_theme, _status| svg::Style {
                    color: Some(theme::PRIMARY),
                }),
            Space::new().height(8),
            text(locale.get(Key::Loading)).size(14).style(|theme| text::Style {
                color: Some(theme::text_muted(theme)),
            }),
        ]
        .align_x(Alignment::Center)
        .into(),
    )
}

fn empty(locale: Locale) -> Element<'static, Message> {
    centered_hint(
        text(locale.get(Key::GalleryEmpty))
            .size(15)
            .style(|theme| text::Style {
                color: Some(theme::text_muted(theme)),
            })
            .into(),
    )
}

/// Build the gallery grid
pub fn view<'a>(
    gallery: &Gallery,
    previews: &'a HashMap<u32, AnimationPreview>,
    elapsed: Duration,
    hover: &HoverFade<u32>,
    width: f32,
    locale: Locale,
) -> Element<'a, Message> {
    if !gallery.is_loaded() {
        return loading(locale);
    }
    if gallery.count() == 0 {
        return empty(locale);
    }

    let columns = columns_for_width(width);
    let size = tile_size(width, columns);
    let indices: Vec<u32> = (0..gallery.listed_count()).collect();

    let rows = indices.chunks(columns).map(|chunk| {
        let mut tiles: Vec<Element<'a, Message>> = chunk
            .iter()
            .map(|&index| {
                animation_tile::view(
                    previews.get(&index).map(|preview| preview.frame_at(elapsed)),
                    size,
                    hover.progress(&index),
                    Message::RequestDeleteAnimation(index),
                    Message::HoverAnimation(Some(index)),
                    Message::HoverAnimation(None),
                )
            })
            .collect();

        // Keep the last row aligned with the ones above
        for _ in chunk.len()..columns {
            tiles.push(Space::new().width(size).height(size).into());
        }

        row(tiles).spacing(TILE_SPACING).into()
    });

    let grid = column(rows)
        .spacing(TILE_SPACING)
        .padding(iced::Padding {
            top: GRID_PADDING,
            right: GRID_PADDING,
            bottom: BOTTOM_CLEARANCE,
            left: GRID_PADDING,
        });

    scrollable(grid).width(Fill).height(Fill).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_for_width() {
        assert_eq!(columns_for_width(320.0), 3);
        assert_eq!(columns_for_width(600.0), 4);
        assert_eq!(columns_for_width(1024.0), 6);
        assert_eq!(columns_for_width(1500.0), 6);
        assert_eq!(columns_for_width(2560.0), 12);
    }

    #[test]
    fn test_tiles_fill_width() {
        let width = 1024.0;
        let columns = columns_for_width(width);
        let size = tile_size(width, columns);
        let used = size * columns as f32 + TILE_SPACING * (columns as f32 - 1.0) + 2.0 * GRID_PADDING;
        assert!((used - width).abs() < 0.01);
    }

    #[test]
    fn test_tile_size_has_floor() {
        assert_eq!(tile_size(10.0, 12), 32.0);
        assert!(tile_size(500.0, 0) > 0.0);
    }
}

//! Theme system for the matrix panel
//! Light mode by default with the matrix brand palette, dark mode optional

use iced::color;
use iced::font::Weight;
use iced::widget::{button, container, text_input};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

// ============================================================================
// Font weights
// ============================================================================

/// Bold font weight (SF Pro looks better with Semibold)
#[cfg(target_os = "macos")]
pub const BOLD_WEIGHT: Weight = Weight::Semibold;

#[cfg(not(target_os = "macos"))]
pub const BOLD_WEIGHT: Weight = Weight::Bold;

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Brand primary (progress spinners, active tab)
pub const PRIMARY: Color = color!(0x30c5ff);

/// Brand secondary (header bar)
pub const SECONDARY: Color = color!(0x2176ae);

/// Brand accent (upload button, upload progress)
pub const ACCENT: Color = color!(0xd81e5b);

/// Hover state for accent
pub const ACCENT_HOVER: Color = color!(0xe84a7d);

/// Check if theme is dark mode
pub fn is_dark(theme: &Theme) -> bool {
    matches!(
        theme,
        Theme::Dark
            | Theme::Dracula
            | Theme::Nord
            | Theme::SolarizedDark
            | Theme::GruvboxDark
            | Theme::CatppuccinMocha
            | Theme::TokyoNight
            | Theme::Moonfly
            | Theme::Nightfly
            | Theme::Oxocarbon
    )
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x121212);
    pub const SURFACE: Color = color!(0x1e1e1e);
    pub const BORDER: Color = color!(0x2c2c2c);
    pub const TEXT_MUTED: Color = color!(0x888888);
    pub const TEXT_SECONDARY: Color = color!(0xb3b3b3);
    pub const TEXT_PRIMARY: Color = color!(0xffffff);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xfafafa);
    pub const SURFACE: Color = color!(0xffffff);
    pub const BORDER: Color = color!(0xe0e0e0);
    pub const TEXT_MUTED: Color = color!(0x757575);
    pub const TEXT_SECONDARY: Color = color!(0x555555);
    pub const TEXT_PRIMARY: Color = color!(0x1a1a1a);
}

pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

pub fn surface(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE
    } else {
        light::SURFACE
    }
}

pub fn border_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BORDER
    } else {
        light::BORDER
    }
}

pub fn text_muted(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_MUTED
    } else {
        light::TEXT_MUTED
    }
}

pub fn text_secondary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_SECONDARY
    } else {
        light::TEXT_SECONDARY
    }
}

pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

/// Hover background color based on theme
pub fn hover_bg(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(1.0, 1.0, 1.0, 0.12)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.08)
    }
}

/// Danger/error color
pub fn danger(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgb(0.9, 0.3, 0.3)
    } else {
        Color::from_rgb(0.8, 0.2, 0.2)
    }
}

/// Tile background behind GIF previews (animations are drawn on black)
pub fn tile_bg(_theme: &Theme) -> Color {
    Color::BLACK
}

/// Overlay backdrop color
pub fn overlay_backdrop(theme: &Theme, opacity: f32) -> Color {
    if is_dark(theme) {
        Color::from_rgba(0.0, 0.0, 0.0, 0.6 * opacity)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.4 * opacity)
    }
}

/// Surface of the dialog, faded by `opacity`
pub fn dialog_bg(theme: &Theme, opacity: f32) -> Color {
    Color {
        a: opacity,
        ..surface(theme)
    }
}

/// Muted foreground for icons that show a pending state
pub fn icon_muted(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(1.0, 1.0, 1.0, 0.4)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.35)
    }
}

// ============================================================================
// Container Styles
// ============================================================================

/// Main content area background
pub fn main_content(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Header bar carrying the mode tabs
pub fn header_bar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(SECONDARY)),
        text_color: Some(Color::WHITE),
        ..Default::default()
    }
}

/// Bottom control bar
pub fn control_bar(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        text_color: Some(text_primary(theme)),
        border: Border {
            width: 1.0,
            color: border_color(theme),
            ..Default::default()
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.08),
            offset: Vector::new(0.0, -2.0),
            blur_radius: 8.0,
        },
        ..Default::default()
    }
}

// ============================================================================
// Button Styles
// ============================================================================

/// Floating action button in the accent color
pub fn fab_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(ACCENT)),
        text_color: Color::WHITE,
        border: Border {
            radius: 28.0.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 10.0,
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(ACCENT_HOVER)),
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color { a: 0.5, ..ACCENT })),
            ..base
        },
        _ => base,
    }
}

/// Icon button (circular, transparent until hovered)
pub fn icon_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: text_secondary(theme),
        border: Border {
            radius: 50.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(hover_bg(theme))),
            text_color: text_primary(theme),
            ..base
        },
        _ => base,
    }
}

/// Header icon button, drawn on the secondary brand color
pub fn header_icon_button(_theme: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Hovered => Color::from_rgba(1.0, 1.0, 1.0, 0.15),
        button::Status::Pressed => Color::from_rgba(1.0, 1.0, 1.0, 0.25),
        _ => Color::TRANSPARENT,
    };
    button::Style {
        background: Some(Background::Color(bg)),
        text_color: Color::WHITE,
        border: Border {
            radius: 50.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Mode tab in the header
pub fn mode_tab(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let text_color = if active {
            Color::WHITE
        } else {
            Color::from_rgba(1.0, 1.0, 1.0, 0.7)
        };
        let bg = match status {
            button::Status::Hovered if !active => Color::from_rgba(1.0, 1.0, 1.0, 0.1),
            _ => Color::TRANSPARENT,
        };
        button::Style {
            background: Some(Background::Color(bg)),
            text_color,
            border: Border::default(),
            ..Default::default()
        }
    }
}

/// Flat text button in the brand primary color (dialog cancel)
pub fn flat_primary_button(theme: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Hovered => hover_bg(theme),
        _ => Color::TRANSPARENT,
    };
    button::Style {
        background: Some(Background::Color(bg)),
        text_color: PRIMARY,
        border: Border {
            radius: 4.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Flat text button in the danger color (dialog confirm)
pub fn flat_danger_button(theme: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Hovered => hover_bg(theme),
        _ => Color::TRANSPARENT,
    };
    button::Style {
        background: Some(Background::Color(bg)),
        text_color: danger(theme),
        border: Border {
            radius: 4.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

// ============================================================================
// Input Styles
// ============================================================================

/// Cycle delay field, underlined like a form field
pub fn delay_input(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let underline = match status {
        text_input::Status::Focused { .. } => PRIMARY,
        text_input::Status::Hovered => text_secondary(theme),
        _ => border_color(theme),
    };
    text_input::Style {
        background: Background::Color(Color::TRANSPARENT),
        border: Border {
            width: 1.0,
            color: underline,
            radius: 4.0.into(),
        },
        icon: text_muted(theme),
        placeholder: text_muted(theme),
        value: text_primary(theme),
        selection: Color { a: 0.3, ..PRIMARY },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_detection() {
        assert!(is_dark(&Theme::Dark));
        assert!(!is_dark(&Theme::Light));
    }

    #[test]
    fn test_dialog_bg_fades() {
        let faded = dialog_bg(&Theme::Light, 0.25);
        assert_eq!(faded.a, 0.25);
        assert_eq!(faded.r, surface(&Theme::Light).r);
    }
}

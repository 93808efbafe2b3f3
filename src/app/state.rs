//! Application state definitions

use std::collections::HashMap;
use std::time::Duration;

use iced::time::Instant;

use super::helpers::AnimationPreview;
use crate::api::MatrixClient;
use crate::features::{ControlBar, DisplayMode, Gallery, Settings};
use crate::i18n::Locale;
use crate::ui::animation::{Fade, HoverFade};

/// Main application state
pub struct App {
    /// Settings, locale and the API client
    pub core: CoreState,
    /// Animation gallery view state
    pub gallery: Gallery,
    /// Playback control view state
    pub control: ControlBar,
    /// Rendering state (previews, layout, transitions)
    pub ui: UiState,
}

/// Core infrastructure
pub struct CoreState {
    pub settings: Settings,
    pub locale: Locale,
    /// `None` when the client could not be built from the settings
    pub client: Option<MatrixClient>,
}

impl CoreState {
    pub fn new(settings: Settings) -> Self {
        let locale = Locale::new(settings.display.language);
        let client = Self::create_client(&settings);
        Self {
            settings,
            locale,
            client,
        }
    }

    fn create_client(settings: &Settings) -> Option<MatrixClient> {
        let timeout = Duration::from_secs(settings.api.timeout_secs);
        match MatrixClient::new(&settings.api.base_url, timeout) {
            Ok(client) => {
                tracing::info!("Matrix API at {}", client.base_url());
                Some(client)
            }
            Err(e) => {
                tracing::error!("Failed to create matrix client: {:#}", e);
                None
            }
        }
    }

    /// Persist settings; failures are logged only
    pub fn save_settings(&self) {
        if let Err(e) = self.settings.save() {
            tracing::warn!("Failed to save settings: {}", e);
        }
    }
}

/// UI state
pub struct UiState {
    pub mode: DisplayMode,
    /// Current window width, drives the grid column count
    pub window_width: f32,
    /// Decoded GIF frames keyed by ordinal index
    pub previews: HashMap<u32, AnimationPreview>,
    /// Shared clock all previews play against
    pub preview_started: Instant,
    pub preview_now: Instant,
    pub tile_hover: HoverFade<u32>,
    pub delete_dialog: Fade,
}

impl UiState {
    pub fn new(mode: DisplayMode) -> Self {
        Self {
            mode,
            window_width: super::WINDOW_SIZE.width,
            previews: HashMap::new(),
            preview_started: Instant::now(),
            preview_now: Instant::now(),
            tile_hover: HoverFade::new(),
            delete_dialog: Fade::new(),
        }
    }

    /// Whether any transition still needs frames
    pub fn has_active_animations(&self) -> bool {
        self.tile_hover.is_animating() || self.delete_dialog.is_animating()
    }

    /// Whether the gallery shows a preview with more than one frame
    pub fn has_playing_previews(&self) -> bool {
        self.mode == DisplayMode::Animation && self.previews.values().any(|p| p.is_animated())
    }

    /// Playback position of the gallery previews
    pub fn preview_elapsed(&self) -> Duration {
        self.preview_now.saturating_duration_since(self.preview_started)
    }

    pub fn tick_animations(&mut self, now: Instant) {
        self.tile_hover.tick(now);
        self.delete_dialog.tick(now);
    }
}

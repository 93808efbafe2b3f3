//! Application messages

use std::path::PathBuf;

use super::helpers::AnimationPreview;

use crate::features::DisplayMode;

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // ============ Gallery ============
    /// GET /animations completed
    AnimationCountLoaded(Result<u32, String>),
    /// Preview for one tile decoded
    AnimationPreviewLoaded {
        index: u32,
        token: u64,
        result: Result<AnimationPreview, String>,
    },
    /// Advance the GIF previews
    PreviewTick(iced::time::Instant),
    /// Pointer entered (Some) or left (None) a tile
    HoverAnimation(Option<u32>),
    /// Upload button pressed
    PickAnimationFile,
    /// File dialog closed, `None` when cancelled
    AnimationFilePicked(Option<PathBuf>),
    /// Upload made progress
    UploadProgress { sent: u64, total: u64 },
    /// Upload completed
    UploadFinished(Result<(), String>),
    /// Remove button on a tile pressed
    RequestDeleteAnimation(u32),
    /// Delete dialog dismissed
    CancelDeleteAnimation,
    /// Delete dialog confirmed
    ConfirmDeleteAnimation,
    /// DELETE /animations/{index} completed
    AnimationDeleted(Result<(), String>),

    // ============ Control bar ============
    /// GET /control/cycle completed
    CycleDelayLoaded(Result<u32, String>),
    /// Play/pause pressed
    TogglePlayback,
    /// Delay field edited
    CycleDelayInputChanged(String),
    /// Delay field submitted
    CycleDelaySubmitted,
    /// POST /control/cycle completed
    CycleDelayWritten(Result<(), String>),
    NextAnimation,
    PrevAnimation,
    /// POST /control/next or /control/prev completed
    PlaybackActionFinished(Result<(), String>),

    // ============ Navigation ============
    /// Mode tab selected
    SelectMode(DisplayMode),
    ToggleDarkMode,
    /// Switch to the next available language
    CycleLanguage,
    /// Window resized
    WindowResized(iced::Size),
    /// Frame tick while transitions run
    AnimationTick,
    /// No-op message for event interception (modal dialog body clicks)
    Noop,
}

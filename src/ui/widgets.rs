//! Reusable UI widgets - composable pieces without business logic
//!
//! Widgets must not import `crate::app::Message`; callers pass the messages
//! each interaction should produce.

pub mod animation_tile;
pub mod playback_controls;

pub use playback_controls::PlaybackControls;

//! UI Components - panel-specific composite components
//!
//! Components combine widgets with application logic. They are the only UI
//! layer that imports from `crate::app`.

pub mod animation_grid;
pub mod control_bar;
pub mod delete_animation_dialog;
pub mod header;
pub mod music_placeholder;
pub mod upload_status;

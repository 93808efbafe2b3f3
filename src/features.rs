//! Feature modules - view state and operations separated from UI
//!
//! Each feature owns the local state of one widget and turns user actions into
//! [`Request`]s against the matrix API. Features do not depend on iced and do
//! not perform I/O themselves; the app layer executes the requests and feeds
//! the results back.

pub mod control;
pub mod gallery;
mod request;
pub mod settings;

pub use control::ControlBar;
pub use gallery::{Gallery, UploadState};
pub use request::Request;
pub use settings::{DisplayMode, Settings};

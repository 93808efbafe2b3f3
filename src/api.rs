//! Matrix device HTTP API module
//!
//! Provides the reqwest-based client for the matrix controller and the
//! streaming animation upload with progress reporting.

mod client;
pub mod upload;

pub use client::{DEFAULT_BASE_URL, MatrixClient};
pub use upload::{UploadEvent, upload_animation};

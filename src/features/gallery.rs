//! Animation gallery state
//!
//! Tracks the remote animation count, the cache-busting token used for image
//! URLs, the single in-flight upload and the pending deletion.
//!
//! Animations are addressed by their ordinal position only. A deletion relies
//! on the controller keeping the same ordering between the refresh that showed
//! the tile and the DELETE call; external changes in between can hit the wrong
//! animation.

use std::path::PathBuf;

use super::Request;
use crate::api::upload::progress_percent;

/// Progress shown as soon as an upload starts, before any bytes are sent
pub const UPLOAD_PLACEHOLDER_PERCENT: f32 = 1.0;

/// Tiles listed at most; a larger count from the controller is truncated
pub const MAX_LISTED_ANIMATIONS: u32 = 512;

/// Upload state machine - at most one upload per gallery
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum UploadState {
    #[default]
    Idle,
    /// Upload running, percent in 0-100
    InProgress(f32),
}

impl UploadState {
    pub fn is_in_progress(&self) -> bool {
        matches!(self, UploadState::InProgress(_))
    }

    /// Current percent, 0 when idle
    pub fn percent(&self) -> f32 {
        match self {
            UploadState::Idle => 0.0,
            UploadState::InProgress(percent) => *percent,
        }
    }

    /// All bytes are sent and the controller is still answering
    pub fn is_finishing(&self) -> bool {
        matches!(self, UploadState::InProgress(p) if *p >= 100.0)
    }
}

/// Animation selected for removal, waiting for confirmation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PendingDeletion {
    index: Option<u32>,
    dialog_open: bool,
}

impl PendingDeletion {
    pub fn index(&self) -> Option<u32> {
        self.index
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog_open
    }
}

#[derive(Debug, Default)]
pub struct Gallery {
    count: u32,
    /// Whether a count has been received at least once
    loaded: bool,
    reload_token: u64,
    upload: UploadState,
    pending_deletion: PendingDeletion,
}

impl Gallery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Number of tiles shown, the count capped at `MAX_LISTED_ANIMATIONS`
    pub fn listed_count(&self) -> u32 {
        self.count.min(MAX_LISTED_ANIMATIONS)
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn reload_token(&self) -> u64 {
        self.reload_token
    }

    pub fn upload(&self) -> UploadState {
        self.upload
    }

    pub fn pending_deletion(&self) -> PendingDeletion {
        self.pending_deletion
    }

    // ============ Refresh ============

    pub fn refresh(&self) -> Request {
        Request::FetchAnimationCount
    }

    /// Apply a GET /animations result
    ///
    /// On success the count is replaced, the token bumped and one image
    /// request per listed animation returned. Failures leave everything
    /// untouched.
    pub fn count_loaded(&mut self, result: Result<u32, String>) -> Vec<Request> {
        match result {
            Ok(count) => {
                tracing::info!("Matrix reports {} animations", count);
                self.count = count;
                self.loaded = true;
                self.reload_token += 1;
                if count > MAX_LISTED_ANIMATIONS {
                    tracing::warn!(
                        "Listing only the first {} of {} animations",
                        MAX_LISTED_ANIMATIONS,
                        count
                    );
                }
                let token = self.reload_token;
                (0..self.listed_count())
                    .map(|index| Request::FetchAnimationImage { index, token })
                    .collect()
            }
            Err(e) => {
                tracing::error!("Failed to fetch animations: {}", e);
                Vec::new()
            }
        }
    }

    /// Whether an image response still belongs to the current listing
    pub fn is_current_image(&self, index: u32, token: u64) -> bool {
        token == self.reload_token && index < self.listed_count()
    }

    // ============ Upload ============

    /// Start uploading `file`; ignored while another upload runs or without a file
    pub fn start_upload(&mut self, file: Option<PathBuf>) -> Option<Request> {
        if self.upload.is_in_progress() {
            tracing::debug!("Upload already in progress, ignoring");
            return None;
        }
        let file = file?;

        self.upload = UploadState::InProgress(UPLOAD_PLACEHOLDER_PERCENT);
        Some(Request::UploadAnimation(file))
    }

    pub fn upload_progress(&mut self, sent: u64, total: u64) {
        if !self.upload.is_in_progress() {
            return;
        }
        if let Some(percent) = progress_percent(sent, total) {
            self.upload = UploadState::InProgress(percent.max(UPLOAD_PLACEHOLDER_PERCENT));
        }
    }

    /// Finish the upload; refresh only when it succeeded
    pub fn upload_finished(&mut self, result: Result<(), String>) -> Option<Request> {
        self.upload = UploadState::Idle;
        match result {
            Ok(()) => {
                tracing::info!("Animation uploaded");
                Some(self.refresh())
            }
            Err(e) => {
                tracing::error!("Failed to upload animation: {}", e);
                None
            }
        }
    }

    // ============ Delete ============

    /// Remember `index` and open the confirmation dialog
    pub fn request_delete(&mut self, index: u32) {
        self.pending_deletion = PendingDeletion {
            index: Some(index),
            dialog_open: true,
        };
    }

    pub fn cancel_delete(&mut self) {
        self.pending_deletion = PendingDeletion::default();
    }

    /// Close the dialog and delete the remembered animation
    pub fn confirm_delete(&mut self) -> Option<Request> {
        let index = self.pending_deletion.index?;
        self.pending_deletion = PendingDeletion::default();
        tracing::info!("Removing animation {}", index);
        Some(Request::DeleteAnimation(index))
    }

    pub fn delete_finished(&mut self, result: Result<(), String>) -> Option<Request> {
        match result {
            Ok(()) => Some(self.refresh()),
            Err(e) => {
                tracing::error!("Failed to delete animation: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded_gallery(count: u32) -> Gallery {
        let mut gallery = Gallery::new();
        gallery.count_loaded(Ok(count));
        gallery
    }

    #[test]
    fn test_refresh_requests_count() {
        assert_eq!(Gallery::new().refresh(), Request::FetchAnimationCount);
    }

    #[test]
    fn test_count_loaded_bumps_token_and_requests_images() {
        let mut gallery = Gallery::new();
        assert!(!gallery.is_loaded());

        let requests = gallery.count_loaded(Ok(3));
        assert_eq!(gallery.count(), 3);
        assert!(gallery.is_loaded());
        assert_eq!(gallery.reload_token(), 1);
        assert_eq!(
            requests,
            vec![
                Request::FetchAnimationImage { index: 0, token: 1 },
                Request::FetchAnimationImage { index: 1, token: 1 },
                Request::FetchAnimationImage { index: 2, token: 1 },
            ]
        );
    }

    #[test]
    fn test_failed_refresh_keeps_state() {
        let mut gallery = loaded_gallery(5);
        let requests = gallery.count_loaded(Err("connection refused".into()));
        assert!(requests.is_empty());
        assert_eq!(gallery.count(), 5);
        assert_eq!(gallery.reload_token(), 1);
    }

    #[test]
    fn test_huge_count_is_truncated() {
        let mut gallery = Gallery::new();
        let requests = gallery.count_loaded(Ok(4_000_000_000));
        assert_eq!(gallery.count(), 4_000_000_000);
        assert_eq!(gallery.listed_count(), MAX_LISTED_ANIMATIONS);
        assert_eq!(requests.len(), MAX_LISTED_ANIMATIONS as usize);
        assert_eq!(
            requests.last(),
            Some(&Request::FetchAnimationImage {
                index: MAX_LISTED_ANIMATIONS - 1,
                token: 1,
            })
        );
        assert!(!gallery.is_current_image(MAX_LISTED_ANIMATIONS, 1));
    }

    #[test]
    fn test_stale_images_are_rejected() {
        let mut gallery = loaded_gallery(2);
        assert!(gallery.is_current_image(1, 1));

        gallery.count_loaded(Ok(1));
        assert!(!gallery.is_current_image(0, 1));
        assert!(!gallery.is_current_image(1, 2));
        assert!(gallery.is_current_image(0, 2));
    }

    #[test]
    fn test_upload_without_file_is_noop() {
        let mut gallery = Gallery::new();
        assert_eq!(gallery.start_upload(None), None);
        assert_eq!(gallery.upload(), UploadState::Idle);
    }

    #[test]
    fn test_upload_while_in_progress_is_noop() {
        let mut gallery = Gallery::new();
        let first = gallery.start_upload(Some(PathBuf::from("a.gif")));
        assert_eq!(first, Some(Request::UploadAnimation(PathBuf::from("a.gif"))));
        gallery.upload_progress(50, 100);
        let before = gallery.upload();

        assert_eq!(gallery.start_upload(Some(PathBuf::from("b.gif"))), None);
        assert_eq!(gallery.upload(), before);
    }

    #[test]
    fn test_upload_progress_percent() {
        let mut gallery = Gallery::new();
        gallery.start_upload(Some(PathBuf::from("a.gif")));
        assert_eq!(gallery.upload().percent(), UPLOAD_PLACEHOLDER_PERCENT);

        gallery.upload_progress(0, 400);
        assert_eq!(gallery.upload().percent(), UPLOAD_PLACEHOLDER_PERCENT);

        gallery.upload_progress(100, 400);
        assert_eq!(gallery.upload().percent(), 25.0);

        gallery.upload_progress(400, 400);
        assert!(gallery.upload().is_finishing());
    }

    #[test]
    fn test_progress_ignored_when_idle() {
        let mut gallery = Gallery::new();
        gallery.upload_progress(10, 20);
        assert_eq!(gallery.upload(), UploadState::Idle);
    }

    #[test]
    fn test_successful_upload_refreshes_once() {
        let mut gallery = Gallery::new();
        gallery.start_upload(Some(PathBuf::from("a.gif")));
        gallery.upload_progress(100, 100);

        let next = gallery.upload_finished(Ok(()));
        assert_eq!(next, Some(Request::FetchAnimationCount));
        assert_eq!(gallery.upload(), UploadState::Idle);
        assert_eq!(gallery.upload().percent(), 0.0);
    }

    #[test]
    fn test_failed_upload_resets_without_refresh() {
        let mut gallery = Gallery::new();
        gallery.start_upload(Some(PathBuf::from("a.gif")));

        assert_eq!(gallery.upload_finished(Err("HTTP 500".into())), None);
        assert_eq!(gallery.upload(), UploadState::Idle);

        // A new upload is accepted again
        assert!(gallery.start_upload(Some(PathBuf::from("b.gif"))).is_some());
    }

    #[test]
    fn test_request_then_cancel_delete() {
        let mut gallery = loaded_gallery(4);
        gallery.request_delete(2);
        assert!(gallery.pending_deletion().is_dialog_open());
        assert_eq!(gallery.pending_deletion().index(), Some(2));

        gallery.cancel_delete();
        assert!(!gallery.pending_deletion().is_dialog_open());
        assert_eq!(gallery.pending_deletion().index(), None);
        assert_eq!(gallery.confirm_delete(), None);
        assert_eq!(gallery.count(), 4);
    }

    #[test]
    fn test_confirm_delete_then_refresh() {
        let mut gallery = loaded_gallery(4);
        gallery.request_delete(1);

        assert_eq!(gallery.confirm_delete(), Some(Request::DeleteAnimation(1)));
        assert!(!gallery.pending_deletion().is_dialog_open());
        assert_eq!(gallery.pending_deletion().index(), None);

        assert_eq!(
            gallery.delete_finished(Ok(())),
            Some(Request::FetchAnimationCount)
        );
        gallery.count_loaded(Ok(3));
        assert_eq!(gallery.count(), 3);
        assert_eq!(gallery.reload_token(), 2);
    }

    #[test]
    fn test_failed_delete_does_not_refresh() {
        let mut gallery = loaded_gallery(4);
        gallery.request_delete(3);
        gallery.confirm_delete();
        assert_eq!(gallery.delete_finished(Err("HTTP 404".into())), None);
        assert_eq!(gallery.count(), 4);
    }
}

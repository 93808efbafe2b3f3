//! Gallery message handlers

use iced::Task;

use crate::app::helpers::pick_gif_file;
use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle gallery-related messages
    pub fn handle_gallery(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::AnimationCountLoaded(result) => {
                let requests = self.gallery.count_loaded(result.clone());
                if result.is_ok() {
                    let count = self.gallery.listed_count();
                    tracing::debug!(
                        "Loading {} previews (token {})",
                        count,
                        self.gallery.reload_token()
                    );
                    self.ui.previews.retain(|index, _| *index < count);
                    self.ui.tile_hover.clear();
                }
                Some(self.run_requests(requests))
            }

            Message::AnimationPreviewLoaded {
                index,
                token,
                result,
            } => {
                if !self.gallery.is_current_image(*index, *token) {
                    tracing::debug!("Dropping stale preview {} (token {})", index, token);
                    return Some(Task::none());
                }
                match result {
                    Ok(preview) => {
                        self.ui.previews.insert(*index, preview.clone());
                    }
                    Err(e) => tracing::error!("Failed to load animation {}: {}", index, e),
                }
                Some(Task::none())
            }

            Message::PreviewTick(now) => {
                self.ui.preview_now = *now;
                Some(Task::none())
            }

            Message::HoverAnimation(index) => {
                self.ui.tile_hover.hover(*index);
                Some(Task::none())
            }

            Message::PickAnimationFile => {
                if self.gallery.upload().is_in_progress() {
                    tracing::debug!("Upload already in progress, not opening file dialog");
                    return Some(Task::none());
                }
                Some(Task::perform(pick_gif_file(), Message::AnimationFilePicked))
            }

            Message::AnimationFilePicked(path) => {
                let request = self.gallery.start_upload(path.clone());
                Some(self.run_optional(request))
            }

            Message::UploadProgress { sent, total } => {
                self.gallery.upload_progress(*sent, *total);
                Some(Task::none())
            }

            Message::UploadFinished(result) => {
                let request = self.gallery.upload_finished(result.clone());
                Some(self.run_optional(request))
            }

            Message::RequestDeleteAnimation(index) => {
                self.gallery.request_delete(*index);
                self.sync_delete_dialog();
                Some(Task::none())
            }

            Message::CancelDeleteAnimation => {
                self.gallery.cancel_delete();
                self.sync_delete_dialog();
                Some(Task::none())
            }

            Message::ConfirmDeleteAnimation => {
                let request = self.gallery.confirm_delete();
                self.sync_delete_dialog();
                Some(self.run_optional(request))
            }

            Message::AnimationDeleted(result) => {
                let request = self.gallery.delete_finished(result.clone());
                Some(self.run_optional(request))
            }

            _ => None,
        }
    }

    /// Fade the delete dialog towards the gallery's dialog flag
    fn sync_delete_dialog(&mut self) {
        let open = self.gallery.pending_deletion().is_dialog_open();
        self.ui.delete_dialog.set_visible(open);
    }
}

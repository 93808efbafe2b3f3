//! Turns feature requests into tasks against the matrix API

use iced::Task;

use crate::api::{UploadEvent, upload_animation};
use crate::app::helpers::load_animation_preview;
use crate::app::message::Message;
use crate::app::state::App;
use crate::features::Request;

/// Collapse an API error into the message payload, keeping its context chain
fn describe<T>(result: anyhow::Result<T>) -> Result<T, String> {
    result.map_err(|e| format!("{:#}", e))
}

impl App {
    /// Run every request, in order, as one batch
    pub fn run_requests(&self, requests: impl IntoIterator<Item = Request>) -> Task<Message> {
        Task::batch(requests.into_iter().map(|request| self.run_request(request)))
    }

    pub fn run_optional(&self, request: Option<Request>) -> Task<Message> {
        request.map_or_else(Task::none, |request| self.run_request(request))
    }

    /// Issue a single request; its completion comes back as a message
    pub fn run_request(&self, request: Request) -> Task<Message> {
        tracing::debug!("Request: {:?}", request);

        let Some(client) = self.core.client.clone() else {
            return Task::done(unavailable(request));
        };

        match request {
            Request::FetchAnimationCount => Task::perform(
                async move { describe(client.animation_count().await) },
                Message::AnimationCountLoaded,
            ),
            Request::FetchAnimationImage { index, token } => Task::perform(
                async move { describe(load_animation_preview(client, index, token).await) },
                move |result| Message::AnimationPreviewLoaded {
                    index,
                    token,
                    result,
                },
            ),
            Request::UploadAnimation(path) => {
                Task::run(upload_animation(client, path), |event| match event {
                    UploadEvent::Progress { sent, total } => Message::UploadProgress { sent, total },
                    UploadEvent::Finished(result) => Message::UploadFinished(result),
                })
            }
            Request::DeleteAnimation(index) => Task::perform(
                async move { describe(client.delete_animation(index).await) },
                Message::AnimationDeleted,
            ),
            Request::FetchCycleDelay => Task::perform(
                async move { describe(client.cycle_delay().await) },
                Message::CycleDelayLoaded,
            ),
            Request::SetCycleDelay(value) => Task::perform(
                async move { describe(client.set_cycle_delay(value).await) },
                Message::CycleDelayWritten,
            ),
            Request::Next => Task::perform(
                async move { describe(client.next().await) },
                Message::PlaybackActionFinished,
            ),
            Request::Prev => Task::perform(
                async move { describe(client.prev().await) },
                Message::PlaybackActionFinished,
            ),
        }
    }
}

const NO_CLIENT: &str = "matrix API client is not available";

/// Completion message for a request that could not be sent at all
fn unavailable(request: Request) -> Message {
    let err = || Err::<(), String>(NO_CLIENT.to_string());
    match request {
        Request::FetchAnimationCount => Message::AnimationCountLoaded(Err(NO_CLIENT.to_string())),
        Request::FetchAnimationImage { index, token } => Message::AnimationPreviewLoaded {
            index,
            token,
            result: Err(NO_CLIENT.to_string()),
        },
        Request::UploadAnimation(_) => Message::UploadFinished(err()),
        Request::DeleteAnimation(_) => Message::AnimationDeleted(err()),
        Request::FetchCycleDelay => Message::CycleDelayLoaded(Err(NO_CLIENT.to_string())),
        Request::SetCycleDelay(_) => Message::CycleDelayWritten(err()),
        Request::Next | Request::Prev => Message::PlaybackActionFinished(err()),
    }
}


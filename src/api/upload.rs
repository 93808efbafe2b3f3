//! Streaming animation upload
//!
//! Runs the multipart upload on the tokio runtime and exposes its progress as
//! a stream of [`UploadEvent`]s that the app turns into messages.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use futures_util::Stream;
use tokio::sync::mpsc;

use super::MatrixClient;

/// Progress update sent while an upload is running
#[derive(Debug, Clone, PartialEq)]
pub enum UploadEvent {
    /// Bytes handed to the transport so far
    Progress { sent: u64, total: u64 },
    /// Upload finished; `Err` carries the failure description
    Finished(Result<(), String>),
}

/// Upload the GIF at `path`, yielding progress and exactly one `Finished` event
pub fn upload_animation(client: MatrixClient, path: PathBuf) -> impl Stream<Item = UploadEvent> {
    let (tx, mut rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        let progress_tx = tx.clone();
        let result = run_upload(&client, &path, move |sent, total| {
            let _ = progress_tx.send(UploadEvent::Progress { sent, total });
        })
        .await
        .map_err(|e| format!("{:#}", e));

        let _ = tx.send(UploadEvent::Finished(result));
    });

    async_stream::stream! {
        while let Some(event) = rx.recv().await {
            let finished = matches!(event, UploadEvent::Finished(_));
            yield event;
            if finished {
                break;
            }
        }
    }
}

async fn run_upload<F>(client: &MatrixClient, path: &Path, on_progress: F) -> Result<()>
where
    F: Fn(u64, u64) + Send + Sync + 'static,
{
    let data = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let file_name = upload_file_name(path);
    tracing::info!("Uploading {} ({} bytes)", file_name, data.len());

    client.upload_animation(file_name, data, on_progress).await
}

/// File name sent in the multipart part
fn upload_file_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("animation.gif")
        .to_string()
}

/// Percentage of an upload in progress, `None` when the total is unknown
pub fn progress_percent(sent: u64, total: u64) -> Option<f32> {
    if total == 0 {
        return None;
    }
    Some((sent as f64 / total as f64 * 100.0).min(100.0) as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_percent() {
        assert_eq!(progress_percent(0, 0), None);
        assert_eq!(progress_percent(50, 200), Some(25.0));
        assert_eq!(progress_percent(200, 200), Some(100.0));
        assert_eq!(progress_percent(300, 200), Some(100.0));
    }

    #[test]
    fn test_upload_file_name() {
        assert_eq!(upload_file_name(Path::new("/tmp/fire.gif")), "fire.gif");
        assert_eq!(upload_file_name(Path::new("/")), "animation.gif");
    }
}

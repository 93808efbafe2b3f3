//! Matrix API client implementation
//!
//! Every endpoint maps to one request against the controller's `/api` tree.
//! Failures of any kind (transport, HTTP status, unparsable body) surface as a
//! single `anyhow::Error`; callers only log them.

use std::fmt;
use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use futures_util::StreamExt;
use reqwest::multipart::{Form, Part};
use reqwest::{Body, Client, RequestBuilder, Response, header};

/// Address the controller announces itself under via mDNS
pub const DEFAULT_BASE_URL: &str = "http://matrix/api";

/// Multipart field the controller reads uploaded GIFs from
const UPLOAD_FIELD: &str = "File";

/// Chunk size used to stream uploads (progress granularity)
const UPLOAD_CHUNK_BYTES: usize = 4 * 1024;

#[derive(Clone)]
pub struct MatrixClient {
    client: Client,
    base_url: String,
}

impl fmt::Debug for MatrixClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatrixClient")
            .field("client", &"<HttpClient>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl MatrixClient {
    /// Create a client for the API rooted at `base_url`
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to initialize HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// URL of a single animation, with the cache-busting token appended
    pub fn animation_url(&self, index: u32, reload_token: u64) -> String {
        format!("{}?dummy={}", self.url(&format!("animations/{}", index)), reload_token)
    }

    // ============ Animations ============

    /// GET /animations - number of stored animations
    pub async fn animation_count(&self) -> Result<u32> {
        let body = self
            .send(self.client.get(self.url("animations")), "GET animations")
            .await?
            .text()
            .await?;
        let count = parse_integer(&body)?;
        u32::try_from(count).map_err(|_| anyhow!("Invalid animation count: {}", count))
    }

    /// GET /animations/{index} - raw GIF bytes
    pub async fn animation_image(&self, index: u32, reload_token: u64) -> Result<Vec<u8>> {
        let bytes = self
            .send(
                self.client.get(self.animation_url(index, reload_token)),
                "GET animation image",
            )
            .await?
            .bytes()
            .await?;
        Ok(bytes.to_vec())
    }

    /// POST /animations - multipart upload of one GIF file
    ///
    /// `on_progress` is called with `(bytes_sent, total_bytes)` every time a
    /// chunk is handed to the transport.
    pub async fn upload_animation<F>(
        &self,
        file_name: String,
        data: Vec<u8>,
        on_progress: F,
    ) -> Result<()>
    where
        F: Fn(u64, u64) + Send + Sync + 'static,
    {
        let total = data.len() as u64;
        let chunks: Vec<Vec<u8>> = data
            .chunks(UPLOAD_CHUNK_BYTES)
            .map(|chunk| chunk.to_vec())
            .collect();

        let mut sent: u64 = 0;
        let stream = futures_util::stream::iter(chunks).map(move |chunk| {
            sent += chunk.len() as u64;
            on_progress(sent, total);
            Ok::<Vec<u8>, std::io::Error>(chunk)
        });

        let part = Part::stream_with_length(Body::wrap_stream(stream), total)
            .file_name(file_name)
            .mime_str("image/gif")?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        self.send(
            self.client.post(self.url("animations")).multipart(form),
            "POST animations",
        )
        .await?;
        Ok(())
    }

    /// DELETE /animations/{index}
    pub async fn delete_animation(&self, index: u32) -> Result<()> {
        self.send(
            self.client.delete(self.url(&format!("animations/{}", index))),
            "DELETE animation",
        )
        .await?;
        Ok(())
    }

    // ============ Control ============

    /// GET /control/cycle - cycle delay in seconds, 0 while paused
    pub async fn cycle_delay(&self) -> Result<u32> {
        let body = self
            .send(self.client.get(self.url("control/cycle")), "GET control/cycle")
            .await?
            .text()
            .await?;
        let delay = parse_integer(&body)?;
        u32::try_from(delay).map_err(|_| anyhow!("Invalid cycle delay: {}", delay))
    }

    /// POST /control/cycle - plain-text integer body, 0 pauses
    pub async fn set_cycle_delay(&self, delay: u32) -> Result<()> {
        self.send(
            self.client
                .post(self.url("control/cycle"))
                .header(header::CONTENT_TYPE, "text/plain")
                .body(delay.to_string()),
            "POST control/cycle",
        )
        .await?;
        Ok(())
    }

    /// POST /control/next
    pub async fn next(&self) -> Result<()> {
        self.send(self.client.post(self.url("control/next")), "POST control/next")
            .await?;
        Ok(())
    }

    /// POST /control/prev
    pub async fn prev(&self) -> Result<()> {
        self.send(self.client.post(self.url("control/prev")), "POST control/prev")
            .await?;
        Ok(())
    }

    /// Send a request and turn non-success statuses into errors carrying the body
    async fn send(&self, request: RequestBuilder, what: &str) -> Result<Response> {
        tracing::debug!("{}", what);
        let response = request
            .send()
            .await
            .with_context(|| format!("{} failed", what))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let body = body.trim();
        if body.is_empty() {
            bail!("{} failed with HTTP {}", what, status)
        } else {
            bail!("{} failed with HTTP {}: {}", what, status, body)
        }
    }
}

/// Parse an integer from a plain-text response body
pub fn parse_integer(body: &str) -> Result<i64> {
    let trimmed = body.trim();
    trimmed
        .parse::<i64>()
        .with_context(|| format!("Expected an integer response, got {:?}", trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    /// Captured request: request line, headers and body as text
    struct Captured {
        head: String,
        body: Vec<u8>,
    }

    /// Serve exactly one HTTP response on a local port
    async fn one_shot_server(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, oneshot::Receiver<Captured>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 4096];

            // Read headers
            let header_end = loop {
                let n = socket.read(&mut chunk).await.unwrap();
                buf.extend_from_slice(&chunk[..n]);
                if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                    break pos + 4;
                }
                if n == 0 {
                    break buf.len();
                }
            };
            let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
            let content_length = head
                .lines()
                .find_map(|line| {
                    let lower = line.to_ascii_lowercase();
                    lower
                        .strip_prefix("content-length:")
                        .map(|v| v.trim().parse::<usize>().unwrap_or(0))
                })
                .unwrap_or(0);

            // Read body
            while buf.len() < header_end + content_length {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
            }
            let body_bytes = buf[header_end..].to_vec();

            let response = format!(
                "{}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            let _ = tx.send(Captured {
                head,
                body: body_bytes,
            });
        });

        (format!("http://{}/api", addr), rx)
    }

    fn client(base_url: &str) -> MatrixClient {
        MatrixClient::new(base_url, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_url_building() {
        let client = client("http://matrix/api/");
        assert_eq!(client.base_url(), "http://matrix/api");
        assert_eq!(client.url("animations"), "http://matrix/api/animations");
        assert_eq!(client.url("/control/cycle"), "http://matrix/api/control/cycle");
        assert_eq!(
            client.animation_url(3, 7),
            "http://matrix/api/animations/3?dummy=7"
        );
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("15").unwrap(), 15);
        assert_eq!(parse_integer(" 0\n").unwrap(), 0);
        assert_eq!(parse_integer("-4").unwrap(), -4);
        assert!(parse_integer("").is_err());
        assert!(parse_integer("ten").is_err());
    }

    #[tokio::test]
    async fn test_animation_count() {
        let (base, captured) = one_shot_server("HTTP/1.1 200 OK", "4").await;
        let count = client(&base).animation_count().await.unwrap();
        assert_eq!(count, 4);

        let captured = captured.await.unwrap();
        assert!(captured.head.starts_with("GET /api/animations HTTP/1.1"));
    }

    #[tokio::test]
    async fn test_cycle_delay_rejects_garbage() {
        let (base, _captured) = one_shot_server("HTTP/1.1 200 OK", "paused").await;
        assert!(client(&base).cycle_delay().await.is_err());
    }

    #[tokio::test]
    async fn test_set_cycle_delay_sends_plain_text() {
        let (base, captured) = one_shot_server("HTTP/1.1 200 OK", "").await;
        client(&base).set_cycle_delay(600).await.unwrap();

        let captured = captured.await.unwrap();
        assert!(captured.head.starts_with("POST /api/control/cycle HTTP/1.1"));
        assert!(captured.head.to_ascii_lowercase().contains("content-type: text/plain"));
        assert_eq!(captured.body, b"600");
    }

    #[tokio::test]
    async fn test_delete_animation_path() {
        let (base, captured) = one_shot_server("HTTP/1.1 200 OK", "").await;
        client(&base).delete_animation(2).await.unwrap();

        let captured = captured.await.unwrap();
        assert!(captured.head.starts_with("DELETE /api/animations/2 HTTP/1.1"));
    }

    #[tokio::test]
    async fn test_error_status_carries_body() {
        let (base, _captured) =
            one_shot_server("HTTP/1.1 404 Not Found", "Gif file not found.").await;
        let err = client(&base).delete_animation(9).await.unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("404"));
        assert!(message.contains("Gif file not found."));
    }

    #[tokio::test]
    async fn test_upload_reports_progress() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicU64, Ordering};

        let (base, captured) = one_shot_server("HTTP/1.1 200 OK", "").await;
        let data = vec![7u8; UPLOAD_CHUNK_BYTES * 2 + 10];
        let total = data.len() as u64;
        let last_sent = Arc::new(AtomicU64::new(0));
        let last_sent_clone = last_sent.clone();

        client(&base)
            .upload_animation("cat.gif".to_string(), data, move |sent, t| {
                assert_eq!(t, total);
                last_sent_clone.store(sent, Ordering::SeqCst);
            })
            .await
            .unwrap();

        assert_eq!(last_sent.load(Ordering::SeqCst), total);

        let captured = captured.await.unwrap();
        assert!(captured.head.starts_with("POST /api/animations HTTP/1.1"));
        assert!(captured.head.contains("multipart/form-data"));
        let body = String::from_utf8_lossy(&captured.body);
        assert!(body.contains("name=\"File\""));
        assert!(body.contains("filename=\"cat.gif\""));
    }
}

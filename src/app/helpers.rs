//! Async helpers used by the update handlers

use std::io::Cursor;
use std::sync::Arc;
use std::time::Duration;

use ::image::AnimationDecoder;
use ::image::codecs::gif::GifDecoder;
use anyhow::{Context, Result};
use iced::widget::image;

use crate::api::MatrixClient;

/// Frames shorter than this play at `FALLBACK_FRAME_DELAY`, as browsers do
const MIN_FRAME_DELAY: Duration = Duration::from_millis(20);
const FALLBACK_FRAME_DELAY: Duration = Duration::from_millis(100);

/// Decoded GIF frames of one gallery tile, looping forever
#[derive(Debug, Clone)]
pub struct AnimationPreview {
    /// Never empty
    frames: Arc<[(image::Handle, Duration)]>,
    period: Duration,
}

impl AnimationPreview {
    /// `None` for an empty frame list
    pub fn new(frames: Vec<(image::Handle, Duration)>) -> Option<Self> {
        if frames.is_empty() {
            return None;
        }
        let frames: Vec<_> = frames
            .into_iter()
            .map(|(handle, delay)| {
                let delay = if delay < MIN_FRAME_DELAY {
                    FALLBACK_FRAME_DELAY
                } else {
                    delay
                };
                (handle, delay)
            })
            .collect();
        let period = frames.iter().map(|(_, delay)| *delay).sum();
        Some(Self {
            frames: frames.into(),
            period,
        })
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn is_animated(&self) -> bool {
        self.frames.len() > 1
    }

    /// Frame shown `elapsed` after playback started
    pub fn frame_at(&self, elapsed: Duration) -> &image::Handle {
        let position = elapsed.as_nanos() % self.period.as_nanos();
        let mut offset = Duration::from_nanos(position as u64);
        for (handle, delay) in self.frames.iter() {
            if offset < *delay {
                return handle;
            }
            offset -= *delay;
        }
        &self.frames[0].0
    }
}

/// Download one animation and decode its frames for the gallery tile
pub async fn load_animation_preview(
    client: MatrixClient,
    index: u32,
    token: u64,
) -> Result<AnimationPreview> {
    let bytes = client.animation_image(index, token).await?;
    tracing::debug!("Animation {} downloaded ({} bytes)", index, bytes.len());
    decode_frames(&bytes).with_context(|| format!("Animation {} is not a valid GIF", index))
}

/// Decode every GIF frame (composited to full size) into RGBA image handles
pub fn decode_frames(bytes: &[u8]) -> Result<AnimationPreview> {
    let decoder = GifDecoder::new(Cursor::new(bytes))?;
    let frames = decoder
        .into_frames()
        .collect_frames()?
        .into_iter()
        .map(|frame| {
            let delay = Duration::from(frame.delay());
            let buffer = frame.into_buffer();
            let (width, height) = buffer.dimensions();
            (
                image::Handle::from_rgba(width, height, buffer.into_raw()),
                delay,
            )
        })
        .collect();
    AnimationPreview::new(frames).context("GIF has no frames")
}

/// Open the system file dialog filtered to GIFs
pub async fn pick_gif_file() -> Option<std::path::PathBuf> {
    rfd::AsyncFileDialog::new()
        .add_filter("GIF", &["gif"])
        .pick_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::image::codecs::gif::GifEncoder;
    use ::image::{Delay, Frame, Rgba, RgbaImage};

    /// 1x1 GIF with a single red pixel
    const RED_PIXEL_GIF: &[u8] = &[
        0x47, 0x49, 0x46, 0x38, 0x39, 0x61, 0x01, 0x00, 0x01, 0x00, 0x80, 0x00, 0x00, 0xff, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x2c, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x02,
        0x02, 0x44, 0x01, 0x00, 0x3b,
    ];

    fn two_frame_gif() -> Vec<u8> {
        let mut bytes = Vec::new();
        {
            let mut encoder = GifEncoder::new(&mut bytes);
            let frames = [Rgba([255, 0, 0, 255]), Rgba([0, 0, 255, 255])].map(|pixel| {
                Frame::from_parts(
                    RgbaImage::from_pixel(2, 2, pixel),
                    0,
                    0,
                    Delay::from_numer_denom_ms(100, 1),
                )
            });
            encoder.encode_frames(frames).unwrap();
        }
        bytes
    }

    fn handle(value: u8) -> image::Handle {
        image::Handle::from_rgba(1, 1, vec![value, value, value, 255])
    }

    #[test]
    fn test_decode_single_frame() {
        let preview = decode_frames(RED_PIXEL_GIF).unwrap();
        assert_eq!(preview.frame_count(), 1);
        assert!(!preview.is_animated());
    }

    #[test]
    fn test_decode_every_frame() {
        let preview = decode_frames(&two_frame_gif()).unwrap();
        assert_eq!(preview.frame_count(), 2);
        assert!(preview.is_animated());
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_frames(b"not a gif").is_err());
    }

    #[test]
    fn test_frame_at_follows_delays_and_loops() {
        let first = handle(0);
        let second = handle(200);
        let preview = AnimationPreview::new(vec![
            (first.clone(), Duration::from_millis(100)),
            (second.clone(), Duration::from_millis(300)),
        ])
        .unwrap();

        let at = |ms| preview.frame_at(Duration::from_millis(ms)).id();
        assert_eq!(at(0), first.id());
        assert_eq!(at(99), first.id());
        assert_eq!(at(100), second.id());
        assert_eq!(at(399), second.id());
        assert_eq!(at(400), first.id());
        assert_eq!(at(4_150), second.id());
    }

    #[test]
    fn test_zero_delay_frames_use_fallback() {
        let first = handle(0);
        let second = handle(200);
        let preview = AnimationPreview::new(vec![
            (first.clone(), Duration::ZERO),
            (second.clone(), Duration::ZERO),
        ])
        .unwrap();

        assert_eq!(preview.frame_at(Duration::from_millis(50)).id(), first.id());
        assert_eq!(preview.frame_at(Duration::from_millis(150)).id(), second.id());
    }

    #[test]
    fn test_empty_preview_is_rejected() {
        assert!(AnimationPreview::new(Vec::new()).is_none());
    }
}

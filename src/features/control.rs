//! Playback control state
//!
//! The matrix exposes a single cycle delay. Zero means paused, any positive
//! value means playing with that delay. The bar remembers the last positive
//! delay so a resume can restore it.

use std::num::IntErrorKind;

use super::Request;

pub const CYCLE_DELAY_MIN: u32 = 1;
pub const CYCLE_DELAY_MAX: u32 = 600;
pub const CYCLE_DELAY_DEFAULT: u32 = 10;

/// Clamp any integer into the accepted delay range
pub fn clamp_cycle_delay(value: i64) -> u32 {
    value.clamp(CYCLE_DELAY_MIN as i64, CYCLE_DELAY_MAX as i64) as u32
}

#[derive(Debug, Clone)]
pub struct ControlBar {
    playing: bool,
    /// Remembered delay in seconds, never 0
    cycle_delay: u32,
    /// Raw contents of the delay text field
    delay_input: String,
    /// Cycle delay writes not yet answered
    pending_writes: u32,
}

impl Default for ControlBar {
    fn default() -> Self {
        Self {
            playing: false,
            cycle_delay: CYCLE_DELAY_DEFAULT,
            delay_input: CYCLE_DELAY_DEFAULT.to_string(),
            pending_writes: 0,
        }
    }
}

impl ControlBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn cycle_delay(&self) -> u32 {
        self.cycle_delay
    }

    pub fn delay_input(&self) -> &str {
        &self.delay_input
    }

    pub fn is_syncing(&self) -> bool {
        self.pending_writes > 0
    }

    pub fn refresh(&self) -> Request {
        Request::FetchCycleDelay
    }

    /// Apply a GET /control/cycle result
    pub fn cycle_delay_loaded(&mut self, result: Result<u32, String>) {
        match result {
            Ok(value) => {
                self.playing = value != 0;
                if self.playing {
                    self.cycle_delay = clamp_cycle_delay(value as i64);
                }
                self.sync_input();
                tracing::debug!(
                    "Cycle delay loaded: {} (playing: {})",
                    value,
                    self.playing
                );
            }
            Err(e) => tracing::error!("Failed to fetch cycle delay: {}", e),
        }
    }

    /// Flip play/pause optimistically and return the write to issue
    ///
    /// A delay typed but not yet submitted is adopted first, so a resume
    /// sends what the field shows.
    pub fn toggle_playing(&mut self) -> Request {
        if let Some(value) = self.parse_delay_input() {
            self.cycle_delay = clamp_cycle_delay(value);
        }
        self.sync_input();
        self.playing = !self.playing;
        let value = if self.playing { self.cycle_delay } else { 0 };
        tracing::info!("Playback {}", if self.playing { "resumed" } else { "paused" });
        self.begin_write(value)
    }

    /// Store a new delay; it is only sent while playing
    pub fn set_cycle_delay(&mut self, value: i64) -> Option<Request> {
        self.cycle_delay = clamp_cycle_delay(value);
        self.sync_input();
        self.playing.then(|| self.begin_write(self.cycle_delay))
    }

    pub fn edit_delay_input(&mut self, text: String) {
        self.delay_input = text;
    }

    /// Parse the text field; unparsable input restores the current delay
    pub fn submit_delay_input(&mut self) -> Option<Request> {
        match self.parse_delay_input() {
            Some(value) => self.set_cycle_delay(value),
            None => {
                tracing::warn!("Ignoring invalid cycle delay input: {:?}", self.delay_input);
                self.sync_input();
                None
            }
        }
    }

    /// Integer in the text field, saturated to `i64` when it has too many digits
    fn parse_delay_input(&self) -> Option<i64> {
        match self.delay_input.trim().parse::<i64>() {
            Ok(value) => Some(value),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => Some(i64::MAX),
                IntErrorKind::NegOverflow => Some(i64::MIN),
                _ => None,
            },
        }
    }

    pub fn next(&self) -> Request {
        Request::Next
    }

    pub fn prev(&self) -> Request {
        Request::Prev
    }

    /// A cycle delay write completed; state is not rolled back on failure
    pub fn write_finished(&mut self, result: Result<(), String>) {
        self.pending_writes = self.pending_writes.saturating_sub(1);
        if let Err(e) = result {
            tracing::error!("Failed to set cycle delay: {}", e);
        }
    }

    /// Next/prev completed
    pub fn action_finished(&self, result: Result<(), String>) {
        if let Err(e) = result {
            tracing::error!("Playback action failed: {}", e);
        }
    }

    fn begin_write(&mut self, value: u32) -> Request {
        self.pending_writes += 1;
        Request::SetCycleDelay(value)
    }

    fn sync_input(&mut self) {
        self.delay_input = self.cycle_delay.to_string();
    }
}

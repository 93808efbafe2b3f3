//! Single open/close fade (delete dialog)

use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

const FADE_DURATION: Duration = Duration::from_millis(180);

fn fade_easing() -> Easing {
    Easing::EASE.with_duration(FADE_DURATION)
}

#[derive(Debug)]
pub struct Fade {
    opacity: Animated<f32>,
}

impl Default for Fade {
    fn default() -> Self {
        Self::new()
    }
}

impl Fade {
    pub fn new() -> Self {
        Self {
            opacity: Animated::transition(0.0, fade_easing()),
        }
    }

    /// Fade towards fully visible (`true`) or hidden (`false`)
    pub fn set_visible(&mut self, visible: bool) {
        self.opacity.update(if visible { 1.0 } else { 0.0 }.into());
    }

    pub fn opacity(&self) -> f32 {
        *self.opacity.value()
    }

    pub fn is_animating(&self) -> bool {
        self.opacity.is_animating()
    }

    pub fn tick(&mut self, now: Instant) {
        self.opacity.tick(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        let fade = Fade::new();
        assert_eq!(fade.opacity(), 0.0);
        assert!(!fade.is_animating());
    }

    #[test]
    fn test_fade_in_reaches_full_opacity() {
        let mut fade = Fade::new();
        fade.set_visible(true);
        assert!(fade.is_animating() || fade.opacity() > 0.0);

        let now = Instant::now();
        fade.tick(now);
        fade.tick(now + FADE_DURATION * 4);
        assert!(fade.opacity() > 0.99);
    }
}

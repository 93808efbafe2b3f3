//! Exclusive hover fade for grid tiles
//!
//! The pointer can only rest on one tile, so only two transitions exist at any
//! time: the tile fading in and the tile it left, fading out.

use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

const HOVER_DURATION: Duration = Duration::from_millis(200);

fn hover_easing() -> Easing {
    Easing::EASE_OUT.with_duration(HOVER_DURATION)
}

/// Transition towards `target` starting at `from`
fn transition(from: f32, target: f32) -> Animated<f32> {
    let mut anim = Animated::transition(from, hover_easing());
    if from != target {
        anim.update(target.into());
    }
    anim
}

#[derive(Debug)]
pub struct HoverFade<K: PartialEq + Clone> {
    entering: Option<(K, Animated<f32>)>,
    leaving: Option<(K, Animated<f32>)>,
}

impl<K: PartialEq + Clone> Default for HoverFade<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialEq + Clone> HoverFade<K> {
    pub fn new() -> Self {
        Self {
            entering: None,
            leaving: None,
        }
    }

    /// Move the hover to `key`, or clear it with `None`
    pub fn hover(&mut self, key: Option<K>) {
        if self.hovered() == key.as_ref() {
            return;
        }

        if let Some((old, anim)) = self.entering.take() {
            self.leaving = Some((old, transition(*anim.value(), 0.0)));
        }

        if let Some(key) = key {
            // Re-entering the tile that is fading out continues from its value
            let from = match &self.leaving {
                Some((leaving, anim)) if *leaving == key => *anim.value(),
                _ => 0.0,
            };
            if from > 0.0 {
                self.leaving = None;
            }
            self.entering = Some((key, transition(from, 1.0)));
        }
    }

    pub fn hovered(&self) -> Option<&K> {
        self.entering.as_ref().map(|(key, _)| key)
    }

    /// Hover progress for `key` in 0.0..=1.0
    pub fn progress(&self, key: &K) -> f32 {
        [&self.entering, &self.leaving]
            .into_iter()
            .flatten()
            .find(|(k, _)| k == key)
            .map(|(_, anim)| *anim.value())
            .unwrap_or(0.0)
    }

    pub fn is_animating(&self) -> bool {
        [&self.entering, &self.leaving]
            .into_iter()
            .flatten()
            .any(|(_, anim)| anim.is_animating())
    }

    pub fn tick(&mut self, now: Instant) {
        if let Some((_, anim)) = &mut self.entering {
            anim.tick(now);
        }
        if let Some((_, anim)) = &mut self.leaving {
            anim.tick(now);
            if !anim.is_animating() && *anim.value() < 0.01 {
                self.leaving = None;
            }
        }
    }

    /// Forget every tile, used when the listing changes underneath
    pub fn clear(&mut self) {
        self.entering = None;
        self.leaving = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_is_exclusive() {
        let mut hover: HoverFade<u32> = HoverFade::new();
        assert_eq!(hover.progress(&1), 0.0);
        assert_eq!(hover.hovered(), None);

        hover.hover(Some(1));
        assert_eq!(hover.hovered(), Some(&1));

        hover.hover(Some(2));
        assert_eq!(hover.hovered(), Some(&2));

        hover.hover(None);
        assert_eq!(hover.hovered(), None);
    }

    #[test]
    fn test_progress_stays_in_range() {
        let mut hover: HoverFade<u32> = HoverFade::new();
        hover.hover(Some(3));

        let now = Instant::now();
        hover.tick(now);
        hover.tick(now + HOVER_DURATION * 4);
        let progress = hover.progress(&3);
        assert!((0.0..=1.0).contains(&progress));
        assert_eq!(hover.progress(&4), 0.0);
    }

    #[test]
    fn test_clear_forgets_tiles() {
        let mut hover: HoverFade<u32> = HoverFade::new();
        hover.hover(Some(0));
        hover.hover(Some(1));
        hover.clear();
        assert_eq!(hover.hovered(), None);
        assert_eq!(hover.progress(&0), 0.0);
        assert!(!hover.is_animating());
    }
}

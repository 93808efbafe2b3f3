//! Transitions driven by `iced_anim`
//!
//! Animations are ticked from `Message::AnimationTick`, which the app only
//! subscribes to while [`HoverFade::is_animating`] or [`Fade::is_animating`]
//! report work left.

mod fade;
mod hover;

pub use fade::Fade;
pub use hover::HoverFade;

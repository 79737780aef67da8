//! Animation support for edgeslide.
//!
//! A panel settle is a fixed-duration eased tween driven by the runtime's
//! frame callbacks; callers never await it and observe completion through a
//! callback instead.

pub mod animatable;
pub mod easing;

pub use animatable::Animatable;
pub use easing::{AnimationSpec, Easing};

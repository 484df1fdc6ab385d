//! Slide transition motion: easing curves and per-frame interpolation

pub mod easing;
pub mod glide;

pub use easing::{EasingType, EasingTypeExt};
pub use glide::{project_frame, visual_state};

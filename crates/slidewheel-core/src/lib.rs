pub mod autoplay;
pub mod config;
pub mod controller;
pub mod deck;
pub mod error;
pub mod projector;
pub mod scroll_lock;

pub use config::{AppConfig, EasingType, MotionConfig};
pub use controller::{CommitOutcome, Direction, InteractionController};
pub use deck::{Slide, SlideDeck};
pub use error::{Error, Result};
pub use projector::Projection;
pub use scroll_lock::{ScrollLock, VerticalExtent, WheelOutcome};

//! Viewport-containment test for wheel capture in compact/embedded mode.
//!
//! A wheel event belongs to the carousel only while the carousel occupies a
//! full, unscrolled "page" of its own: its frame entirely inside the viewport
//! vertically and its height equal to the viewport height within a small
//! tolerance. Anything else leaves page scrolling untouched.

/// Vertical extent of a box, in whatever unit the host page uses
/// (rows for the TUI, pixels for a browser-like host)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalExtent {
    pub top: f64,
    pub height: f64,
}

impl VerticalExtent {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// What to do with an intercepted wheel event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelOutcome {
    /// Suppress page scroll; the event became a slide navigation
    /// (or was dropped by the animation lock)
    Consumed,
    /// Leave the event to native page scrolling
    PassThrough,
}

/// Containment tester with a fixed height tolerance
#[derive(Debug, Clone, Copy)]
pub struct ScrollLock {
    tolerance: f64,
}

impl Default for ScrollLock {
    fn default() -> Self {
        Self { tolerance: 1.0 }
    }
}

impl ScrollLock {
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }

    /// True when `frame` fills the viewport: fully inside vertically and the
    /// same height within the tolerance.
    pub fn is_contained(&self, frame: VerticalExtent, viewport: VerticalExtent) -> bool {
        let inside =
            frame.top >= viewport.top - self.tolerance && frame.bottom() <= viewport.bottom() + self.tolerance;
        let full_height = (frame.height - viewport.height).abs() <= self.tolerance;
        inside && full_height
    }
}

//! Pure mapping from interaction state to the parallax layer offsets.
//!
//! Each layer follows the drag at its own rate: the track carries the primary
//! horizontal position, the background moves at half speed for depth, the
//! oversized glyph trails loosest and the label text tightest. The projector
//! never reads or writes controller state.

/// Visual offsets for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Primary track offset, percent of container width
    pub track_pct: f64,
    /// Background layer offset, percent (half the track rate, opposite sign)
    pub background_pct: f64,
    /// Oversized-glyph offset in viewport-width units
    pub glyph_vw: f64,
    /// Label text offset in pixel units
    pub label_px: f64,
}

/// Project a slide position and live drag delta to layer offsets.
///
/// `position` is the 1-based slide index; fractional values occur mid-glide
/// when the front-end eases a committed transition. A settled slide with no
/// active drag projects to exact multiples of 100/50 percent.
pub fn project(position: f64, drag_delta: f64) -> Projection {
    Projection {
        track_pct: -(position - 1.0) * 100.0 - drag_delta / 30.0,
        background_pct: (position - 1.0) * 50.0 + drag_delta / 60.0,
        glyph_vw: drag_delta / 60.0,
        label_px: drag_delta / 15.0,
    }
}

/// Offsets for a slide at rest
pub fn settled(slide: usize) -> Projection {
    project(slide as f64, 0.0)
}

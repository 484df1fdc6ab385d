//! Interaction controller: the single writer of carousel state.
//!
//! Five input modalities (drag, wheel, keyboard, nav clicks, autoplay ticks)
//! funnel into one slide-index state machine:
//!
//! Idle -> Dragging -> Animating -> Idle, or Idle -> Animating -> Idle for
//! direct navigation. No transition is valid out of Animating; input arriving
//! while the lock is held is dropped, never queued.
//!
//! The animation lock is an `Option<ActiveTransition>` cleared lazily when its
//! duration has elapsed, checked at the top of every state-changing entry
//! point. Authoritative state (`current_slide`) moves at commit time; the
//! transition record only describes the glide for rendering.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::config::MotionConfig;
use crate::scroll_lock::WheelOutcome;

/// Sweep direction for navigation and autoplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// How a drag gesture resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Threshold exceeded, advanced one slide
    Forward,
    /// Threshold exceeded in the other direction
    Backward,
    /// Below threshold, snapped back to the source slide
    Rollback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    Commit,
    Rollback,
}

/// A committed transition currently playing out
#[derive(Debug, Clone)]
pub struct ActiveTransition {
    start: Instant,
    from: usize,
    to: usize,
    kind: TransitionKind,
    /// Drag delta at the moment of release (0 for non-gesture commits);
    /// the renderer glides it back to zero
    release_delta: f64,
    duration: Duration,
}

impl ActiveTransition {
    pub fn from_slide(&self) -> usize {
        self.from
    }

    pub fn to_slide(&self) -> usize {
        self.to
    }

    pub fn kind(&self) -> TransitionKind {
        self.kind
    }

    pub fn release_delta(&self) -> f64 {
        self.release_delta
    }

    /// Linear progress in [0, 1]; easing is the renderer's concern
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let ratio = self.start.elapsed().as_secs_f64() / self.duration.as_secs_f64();
        ratio.clamp(0.0, 1.0)
    }

    fn is_complete(&self) -> bool {
        self.start.elapsed() >= self.duration
    }
}

/// An active drag with its captured origin
#[derive(Debug, Clone, Copy)]
struct Gesture {
    origin_x: f64,
    source_slide: usize,
}

/// Owns all mutable interaction state; every input handler goes through here.
///
/// The commit threshold (20% of the viewport width by default) is captured
/// once at construction and not recomputed on resize, matching the original
/// mount-time capture.
#[derive(Debug)]
pub struct InteractionController {
    slide_count: usize,
    current_slide: usize,
    drag_delta: f64,
    gesture: Option<Gesture>,
    transition: Option<ActiveTransition>,
    autoplay_direction: Direction,
    autoplay_paused: bool,
    scroll_locked: bool,
    commit_threshold: f64,
    transition_duration: Duration,
}

impl InteractionController {
    pub fn new(slide_count: usize, viewport_width: f64, config: &MotionConfig) -> Self {
        Self {
            slide_count,
            current_slide: 1,
            drag_delta: 0.0,
            gesture: None,
            transition: None,
            autoplay_direction: Direction::Forward,
            autoplay_paused: false,
            scroll_locked: false,
            commit_threshold: viewport_width * config.commit_threshold,
            transition_duration: Duration::from_millis(config.transition_duration_ms),
        }
    }

    /// Start from a caller-supplied slide instead of slide 1
    pub fn with_initial_slide(mut self, slide: usize) -> Self {
        if self.slide_count > 0 {
            self.current_slide = slide.clamp(1, self.slide_count);
        }
        self
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn current_slide(&self) -> usize {
        self.current_slide
    }

    pub fn drag_delta(&self) -> f64 {
        self.drag_delta
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_some()
    }

    /// Slide grabbed by the live gesture, if one is active
    pub fn gesture_source(&self) -> Option<usize> {
        self.gesture.map(|g| g.source_slide)
    }

    pub fn autoplay_direction(&self) -> Direction {
        self.autoplay_direction
    }

    pub fn autoplay_paused(&self) -> bool {
        self.autoplay_paused
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    pub fn commit_threshold(&self) -> f64 {
        self.commit_threshold
    }

    /// The transition currently playing, if any
    pub fn transition(&self) -> Option<&ActiveTransition> {
        self.transition.as_ref()
    }

    /// True while a committed transition is still playing
    pub fn is_animating(&self) -> bool {
        self.transition.as_ref().is_some_and(|t| !t.is_complete())
    }

    /// Clear the lock once the transition duration has elapsed.
    /// Call once per frame; returns whether a transition is still playing.
    pub fn update(&mut self) -> bool {
        self.settle();
        self.transition.is_some()
    }

    fn settle(&mut self) {
        if self.transition.as_ref().is_some_and(|t| t.is_complete()) {
            self.transition = None;
        }
    }

    fn step_target(&self, direction: Direction) -> Option<usize> {
        if self.slide_count < 2 {
            return None;
        }
        match direction {
            Direction::Forward if self.current_slide < self.slide_count => {
                Some(self.current_slide + 1)
            }
            Direction::Backward if self.current_slide > 1 => Some(self.current_slide - 1),
            _ => None,
        }
    }

    /// Begin a drag gesture at `origin_x`, grabbing `source_slide`.
    /// Rejected while a transition is playing or another gesture is live.
    pub fn begin_gesture(&mut self, origin_x: f64, source_slide: usize) -> bool {
        self.settle();
        if self.is_animating() || self.gesture.is_some() || !origin_x.is_finite() {
            return false;
        }
        self.drag_delta = 0.0;
        self.gesture = Some(Gesture {
            origin_x,
            source_slide,
        });
        true
    }

    /// Update the live drag delta from the current pointer position.
    ///
    /// The delta hard-stops at the deck boundaries: dragging past the first
    /// or last slide leaves the delta at its last valid value instead of
    /// rubber-banding.
    pub fn update_gesture(&mut self, x: f64) {
        let Some(gesture) = self.gesture else {
            return;
        };
        // Position data can be missing on some touch events; skip the sample
        if !x.is_finite() {
            return;
        }
        let delta = gesture.origin_x - x;
        let past_first = self.current_slide <= 1 && delta < 0.0;
        let past_last = self.current_slide >= self.slide_count && delta > 0.0;
        if past_first || past_last {
            return;
        }
        self.drag_delta = delta;
    }

    /// Release the gesture and resolve it against the commit threshold.
    ///
    /// Returns `None` when no gesture was active. Any release counts as a
    /// manual interaction and silences autoplay, including rollbacks.
    pub fn end_gesture(&mut self) -> Option<CommitOutcome> {
        // The gesture's move/release subscription ends here unconditionally
        self.gesture.take()?;
        self.autoplay_paused = true;

        let delta = self.drag_delta;
        let outcome = if delta >= self.commit_threshold && self.current_slide < self.slide_count {
            self.commit(self.current_slide + 1, TransitionKind::Commit, delta, true);
            CommitOutcome::Forward
        } else if delta <= -self.commit_threshold && self.current_slide > 1 {
            self.commit(self.current_slide - 1, TransitionKind::Commit, delta, true);
            CommitOutcome::Backward
        } else if delta != 0.0 {
            self.commit(self.current_slide, TransitionKind::Rollback, delta, true);
            CommitOutcome::Rollback
        } else {
            // Nothing moved; no snap animation to play
            CommitOutcome::Rollback
        };
        Some(outcome)
    }

    /// Drop a live gesture without committing (teardown path)
    pub fn cancel_gesture(&mut self) {
        self.gesture = None;
        self.drag_delta = 0.0;
    }

    /// Advance one slide in `direction`. Used by keyboard arrows, side-nav
    /// clicks and wheel capture; end state is identical to a drag commit of
    /// the same slide pair.
    pub fn navigate(&mut self, direction: Direction) -> bool {
        self.settle();
        if self.is_animating() {
            return false;
        }
        let Some(target) = self.step_target(direction) else {
            return false;
        };
        self.commit(target, TransitionKind::Commit, 0.0, true);
        true
    }

    /// Direct commit to an arbitrary slide (nav dots)
    pub fn go_to(&mut self, target: usize) -> bool {
        self.settle();
        if self.is_animating()
            || target == self.current_slide
            || target < 1
            || target > self.slide_count
        {
            return false;
        }
        self.commit(target, TransitionKind::Commit, 0.0, true);
        true
    }

    /// One scheduler tick: advance in the autoplay direction, or reverse at
    /// the boundary without moving. No-op while paused or animating.
    ///
    /// Returns whether the slide actually changed.
    pub fn autoplay_tick(&mut self) -> bool {
        self.settle();
        if self.autoplay_paused || self.is_animating() || self.slide_count < 2 {
            return false;
        }
        match self.step_target(self.autoplay_direction) {
            Some(target) => {
                self.commit(target, TransitionKind::Commit, 0.0, false);
                true
            }
            None => {
                // Boundary reached: reverse and stay, the next tick moves
                self.autoplay_direction = self.autoplay_direction.reversed();
                debug!(direction = ?self.autoplay_direction, "autoplay reversed");
                false
            }
        }
    }

    /// Route a captured wheel event. `contained` is the scroll-lock
    /// containment verdict for the carousel frame.
    ///
    /// Consumed events suppress page scroll; at a boundary in the requested
    /// direction the event passes through so the page scrolls past.
    pub fn handle_wheel(&mut self, direction: Direction, contained: bool) -> WheelOutcome {
        if !contained {
            self.scroll_locked = false;
            return WheelOutcome::PassThrough;
        }
        self.settle();
        if self.step_target(direction).is_none() {
            self.scroll_locked = false;
            return WheelOutcome::PassThrough;
        }
        self.scroll_locked = true;
        // May still drop the event while the lock is held; dropped, not queued
        self.navigate(direction);
        WheelOutcome::Consumed
    }

    fn commit(&mut self, target: usize, kind: TransitionKind, release_delta: f64, manual: bool) {
        debug!(
            from = self.current_slide,
            to = target,
            ?kind,
            manual,
            "slide transition"
        );
        self.transition = Some(ActiveTransition {
            start: Instant::now(),
            from: self.current_slide,
            to: target,
            kind,
            release_delta,
            duration: self.transition_duration,
        });
        self.current_slide = target;
        self.drag_delta = 0.0;
        if manual {
            self.autoplay_paused = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: f64 = 1000.0;

    fn instant_motion() -> MotionConfig {
        // Zero-duration transitions so the lock clears on the next settle
        MotionConfig {
            transition_duration_ms: 0,
            ..Default::default()
        }
    }

    fn controller(n: usize) -> InteractionController {
        InteractionController::new(n, W, &instant_motion())
    }

    fn locked_controller(n: usize) -> InteractionController {
        InteractionController::new(n, W, &MotionConfig::default())
    }

    #[test]
    fn test_boundary_clamp() {
        for n in 1..=5 {
            let mut c = controller(n).with_initial_slide(n);
            assert!(!c.navigate(Direction::Forward));
            assert_eq!(c.current_slide(), n);

            let mut c = controller(n);
            assert!(!c.navigate(Direction::Backward));
            assert_eq!(c.current_slide(), 1);
        }
    }

    #[test]
    fn test_threshold_equivalence() {
        // Drag ending at 0.21*W commits exactly like navigate(forward)
        let mut dragged = controller(3);
        dragged.begin_gesture(500.0, 1);
        dragged.update_gesture(500.0 - 0.21 * W);
        assert_eq!(dragged.end_gesture(), Some(CommitOutcome::Forward));

        let mut navigated = controller(3);
        navigated.navigate(Direction::Forward);

        assert_eq!(dragged.current_slide(), navigated.current_slide());
        assert_eq!(dragged.current_slide(), 2);
        assert_eq!(dragged.drag_delta(), 0.0);
    }

    #[test]
    fn test_rollback_below_threshold() {
        let mut c = controller(3).with_initial_slide(2);
        c.begin_gesture(500.0, 2);
        c.update_gesture(500.0 - 0.1 * W);
        assert_eq!(c.end_gesture(), Some(CommitOutcome::Rollback));
        assert_eq!(c.current_slide(), 2);
        assert_eq!(c.drag_delta(), 0.0);

        let mut c = controller(3).with_initial_slide(2);
        c.begin_gesture(500.0, 2);
        c.update_gesture(500.0 + 0.1 * W);
        assert_eq!(c.end_gesture(), Some(CommitOutcome::Rollback));
        assert_eq!(c.current_slide(), 2);
    }

    #[test]
    fn test_animation_lock_drops_second_navigate() {
        let mut c = locked_controller(3);
        assert!(c.navigate(Direction::Forward));
        // Still within the 750ms lock: dropped, not queued
        assert!(!c.navigate(Direction::Forward));
        assert_eq!(c.current_slide(), 2);
    }

    #[test]
    fn test_animation_lock_rejects_gesture_and_goto() {
        let mut c = locked_controller(3);
        assert!(c.navigate(Direction::Forward));
        assert!(!c.begin_gesture(500.0, 2));
        assert!(!c.go_to(3));
        assert!(!c.autoplay_tick());
        assert_eq!(c.current_slide(), 2);
    }

    #[test]
    fn test_drag_hard_stop_at_boundaries() {
        let mut c = controller(3);
        c.begin_gesture(500.0, 1);
        // Dragging past the first slide is ignored
        c.update_gesture(600.0);
        assert_eq!(c.drag_delta(), 0.0);
        // Valid direction still tracks
        c.update_gesture(400.0);
        assert_eq!(c.drag_delta(), 100.0);
        // Swinging back past the boundary keeps the last valid value
        c.update_gesture(700.0);
        assert_eq!(c.drag_delta(), 100.0);
    }

    #[test]
    fn test_gesture_release_without_movement() {
        let mut c = controller(3);
        assert!(c.begin_gesture(500.0, 1));
        assert_eq!(c.end_gesture(), Some(CommitOutcome::Rollback));
        assert!(!c.is_animating());
        assert!(c.autoplay_paused());
    }

    #[test]
    fn test_end_gesture_without_begin() {
        let mut c = controller(3);
        assert_eq!(c.end_gesture(), None);
        assert!(!c.autoplay_paused());
    }

    #[test]
    fn test_second_gesture_rejected_while_dragging() {
        let mut c = controller(3);
        assert!(c.begin_gesture(500.0, 1));
        assert!(!c.begin_gesture(400.0, 2));
        assert_eq!(c.gesture_source(), Some(1));
    }

    #[test]
    fn test_non_finite_positions_skipped() {
        let mut c = controller(3);
        assert!(!c.begin_gesture(f64::NAN, 1));
        assert!(c.begin_gesture(500.0, 1));
        c.update_gesture(f64::NAN);
        assert_eq!(c.drag_delta(), 0.0);
        c.update_gesture(300.0);
        assert_eq!(c.drag_delta(), 200.0);
    }

    #[test]
    fn test_autoplay_reversal_sequence() {
        let mut c = controller(3);
        assert!(c.autoplay_tick());
        assert_eq!(c.current_slide(), 2);
        assert!(c.autoplay_tick());
        assert_eq!(c.current_slide(), 3);
        // Boundary: reverse, no move
        assert!(!c.autoplay_tick());
        assert_eq!(c.current_slide(), 3);
        assert_eq!(c.autoplay_direction(), Direction::Backward);
        assert!(c.autoplay_tick());
        assert_eq!(c.current_slide(), 2);
    }

    #[test]
    fn test_autoplay_reverses_at_lower_boundary() {
        let mut c = controller(2);
        assert!(c.autoplay_tick()); // 1 -> 2
        assert!(!c.autoplay_tick()); // reverse at 2
        assert!(c.autoplay_tick()); // 2 -> 1
        assert!(!c.autoplay_tick()); // reverse at 1
        assert_eq!(c.autoplay_direction(), Direction::Forward);
        assert_eq!(c.current_slide(), 1);
    }

    #[test]
    fn test_manual_interaction_pauses_autoplay_permanently() {
        let mut c = controller(3);
        c.navigate(Direction::Forward);
        assert!(c.autoplay_paused());
        for _ in 0..10 {
            assert!(!c.autoplay_tick());
        }
        assert_eq!(c.current_slide(), 2);
    }

    #[test]
    fn test_autoplay_does_not_pause_itself() {
        let mut c = controller(3);
        c.autoplay_tick();
        assert!(!c.autoplay_paused());
    }

    #[test]
    fn test_concrete_drag_scenario() {
        // labels ["Vibe Coder", "Prompting", "Automations"], drag +0.25*W
        let mut c = controller(3);
        c.begin_gesture(800.0, 1);
        c.update_gesture(800.0 - 0.25 * W);
        assert_eq!(c.end_gesture(), Some(CommitOutcome::Forward));
        assert_eq!(c.current_slide(), 2);
        assert_eq!(c.drag_delta(), 0.0);
        assert!(c.autoplay_paused());
    }

    #[test]
    fn test_goto_direct_commit() {
        let mut c = controller(5);
        assert!(c.go_to(4));
        assert_eq!(c.current_slide(), 4);
        assert!(c.autoplay_paused());
        // Same slide is a no-op
        assert!(!c.go_to(4));
        assert!(!c.go_to(0));
        assert!(!c.go_to(6));
    }

    #[test]
    fn test_wheel_routing() {
        let mut c = controller(3);
        // Not contained: untouched
        assert_eq!(
            c.handle_wheel(Direction::Forward, false),
            WheelOutcome::PassThrough
        );
        assert_eq!(c.current_slide(), 1);
        assert!(!c.scroll_locked());

        // Contained and movable: consumed
        assert_eq!(
            c.handle_wheel(Direction::Forward, true),
            WheelOutcome::Consumed
        );
        assert_eq!(c.current_slide(), 2);
        assert!(c.scroll_locked());
        assert!(c.autoplay_paused());
    }

    #[test]
    fn test_wheel_passes_through_at_boundary() {
        let mut c = controller(3).with_initial_slide(3);
        assert_eq!(
            c.handle_wheel(Direction::Forward, true),
            WheelOutcome::PassThrough
        );
        assert_eq!(c.current_slide(), 3);
        assert!(!c.scroll_locked());
    }

    #[test]
    fn test_single_and_empty_deck_are_noops() {
        for n in [0, 1] {
            let mut c = controller(n);
            assert!(!c.navigate(Direction::Forward));
            assert!(!c.navigate(Direction::Backward));
            assert!(!c.autoplay_tick());
            assert!(!c.go_to(2));
            c.begin_gesture(500.0, 1);
            c.update_gesture(100.0);
            assert_eq!(c.drag_delta(), 0.0);
            assert_eq!(c.end_gesture(), Some(CommitOutcome::Rollback));
            assert_eq!(c.current_slide(), 1);
        }
    }

    #[test]
    fn test_initial_slide_clamped() {
        let c = controller(3).with_initial_slide(9);
        assert_eq!(c.current_slide(), 3);
        let c = controller(3).with_initial_slide(0);
        assert_eq!(c.current_slide(), 1);
    }

    #[test]
    fn test_transition_records_release_delta() {
        let mut c = locked_controller(3);
        c.begin_gesture(500.0, 1);
        c.update_gesture(500.0 - 0.25 * W);
        c.end_gesture();
        let t = c.transition().expect("transition active");
        assert_eq!(t.from_slide(), 1);
        assert_eq!(t.to_slide(), 2);
        assert_eq!(t.release_delta(), 250.0);
        assert_eq!(t.kind(), TransitionKind::Commit);
    }
}

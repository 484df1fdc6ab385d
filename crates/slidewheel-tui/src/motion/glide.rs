//! Frame-by-frame interpolation for slide transitions
//!
//! Bridges the interaction state machine and the projector: while a
//! transition is in flight, the visible position glides from the slide the
//! pointer was released on to the committed slide, and any residual drag
//! offset relaxes back to zero along the same curve.

use slidewheel_core::{projector, InteractionController, Projection};

use crate::motion::easing::{EasingType, EasingTypeExt};

/// Current visual `(position, drag_delta)` pair for rendering.
///
/// Settled or mid-drag, this is the controller state verbatim. Mid-glide it
/// is the eased interpolation between the release point and the target.
pub fn visual_state(controller: &InteractionController, easing: EasingType) -> (f64, f64) {
    if let Some(transition) = controller.transition() {
        if controller.is_animating() {
            let eased = easing.apply(transition.progress());
            let position = lerp(
                transition.from_slide() as f64,
                transition.to_slide() as f64,
                eased,
            );
            let delta = lerp(transition.release_delta(), 0.0, eased);
            return (position, delta);
        }
    }
    (controller.current_slide() as f64, controller.drag_delta())
}

/// Project the controller's current visual state into layer offsets
pub fn project_frame(controller: &InteractionController, easing: EasingType) -> Projection {
    let (position, delta) = visual_state(controller, easing);
    projector::project(position, delta)
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use slidewheel_core::MotionConfig;

    const W: f64 = 1000.0;

    fn instant_motion() -> MotionConfig {
        MotionConfig {
            transition_duration_ms: 0,
            ..MotionConfig::default()
        }
    }

    fn slow_motion() -> MotionConfig {
        MotionConfig {
            transition_duration_ms: 60_000,
            ..MotionConfig::default()
        }
    }

    #[test]
    fn test_settled_state_is_verbatim() {
        let controller = InteractionController::new(3, W, &instant_motion());
        let (position, delta) = visual_state(&controller, EasingType::Cubic);
        assert_eq!(position, 1.0);
        assert_eq!(delta, 0.0);
    }

    #[test]
    fn test_mid_drag_state_is_verbatim() {
        let mut controller = InteractionController::new(3, W, &instant_motion());
        controller.begin_gesture(500.0, 1);
        controller.update_gesture(440.0);
        let (position, delta) = visual_state(&controller, EasingType::Cubic);
        assert_eq!(position, 1.0);
        assert_eq!(delta, 60.0);
    }

    #[test]
    fn test_glide_starts_at_release_point() {
        let mut controller = InteractionController::new(3, W, &slow_motion());
        controller.begin_gesture(500.0, 1);
        controller.update_gesture(500.0 - 0.25 * W);
        controller.end_gesture();
        // 60s transition has barely started, so the frame still sits at
        // the release point even though current_slide is already 2.
        assert_eq!(controller.current_slide(), 2);
        let (position, delta) = visual_state(&controller, EasingType::Linear);
        assert!(position < 1.01, "position {position}");
        assert!(delta > 0.24 * W, "delta {delta}");
    }

    #[test]
    fn test_completed_glide_lands_on_target() {
        let mut controller = InteractionController::new(3, W, &instant_motion());
        controller.begin_gesture(500.0, 1);
        controller.update_gesture(500.0 - 0.25 * W);
        controller.end_gesture();
        let (position, delta) = visual_state(&controller, EasingType::Cubic);
        assert_eq!(position, 2.0);
        assert_eq!(delta, 0.0);
    }

    #[test]
    fn test_project_frame_matches_projector() {
        let controller = InteractionController::new(3, W, &instant_motion())
            .with_initial_slide(2);
        let frame = project_frame(&controller, EasingType::Cubic);
        assert_eq!(frame.track_pct, -100.0);
        assert_eq!(frame.background_pct, 50.0);
    }
}

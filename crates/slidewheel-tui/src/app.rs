use ratatui::layout::{Position, Rect};
use tracing::debug;

use slidewheel_core::{
    AppConfig, Direction, InteractionController, ScrollLock, SlideDeck, VerticalExtent,
    WheelOutcome,
};

use crate::input::Action;
use crate::theme::Theme;
use crate::widgets::nav_dots::{self, NavHit};

/// Rows of filler content above the carousel page in compact mode
pub const PAGE_HEADER_ROWS: u16 = 8;
/// Rows of filler content below the carousel page in compact mode
pub const PAGE_FOOTER_ROWS: u16 = 12;

/// Rows scrolled per wheel notch while the page has the wheel
const PAGE_SCROLL_STEP: u16 = 2;

/// Ticks a status message stays visible (at the UI tick rate)
const STATUS_TTL_TICKS: u32 = 30;

/// Application state
pub struct App {
    /// Slide labels and their precomputed segments
    pub deck: SlideDeck,
    /// Gesture / navigation state machine
    pub controller: InteractionController,
    /// Application configuration
    pub config: AppConfig,
    /// Compact mode embeds the carousel in a scrollable page
    pub compact: bool,
    /// Color palette
    pub theme: Theme,
    /// Page scroll offset in rows (compact mode only)
    pub page_scroll: u16,
    /// Screen region of the slide stage, updated each draw
    pub stage_area: Rect,
    /// Screen region of the nav dots row, updated each draw
    pub nav_area: Rect,
    /// Rows available to the page viewport, updated each draw
    pub page_rows: u16,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Status message
    pub status_message: Option<String>,
    status_ttl: u32,
    scroll_lock: ScrollLock,
}

impl App {
    pub fn new(deck: SlideDeck, config: AppConfig, compact: bool, viewport_width: f64) -> Self {
        let controller = InteractionController::new(deck.len(), viewport_width, &config.motion);
        Self {
            deck,
            controller,
            config,
            compact,
            theme: Theme::default(),
            page_scroll: 0,
            stage_area: Rect::default(),
            nav_area: Rect::default(),
            page_rows: 0,
            should_quit: false,
            status_message: None,
            status_ttl: 0,
            scroll_lock: ScrollLock::default(),
        }
    }

    /// Translate an input action into controller calls
    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::Quit => {
                self.controller.cancel_gesture();
                self.should_quit = true;
            }
            Action::Navigate(direction) => {
                if self.controller.navigate(direction) {
                    self.announce_slide();
                }
            }
            Action::GoTo(target) => {
                if self.controller.go_to(target) {
                    self.announce_slide();
                }
            }
            Action::Press { x, y } => self.on_press(x, y),
            Action::DragMove { x } => self.controller.update_gesture(f64::from(x)),
            Action::Release => {
                if self.controller.end_gesture().is_some() {
                    self.announce_slide();
                }
            }
            Action::Wheel(direction) => self.on_wheel(direction),
            Action::None => {}
        }
    }

    fn on_press(&mut self, x: u16, y: u16) {
        let point = Position::new(x, y);
        if self.nav_area.contains(point) {
            match nav_dots::hit_test(self.nav_area, self.controller.slide_count(), x) {
                Some(NavHit::Prev) => self.apply_action(Action::Navigate(Direction::Backward)),
                Some(NavHit::Next) => self.apply_action(Action::Navigate(Direction::Forward)),
                Some(NavHit::Dot(target)) => self.apply_action(Action::GoTo(target)),
                None => {}
            }
        } else if self.stage_area.contains(point) {
            self.controller
                .begin_gesture(f64::from(x), self.controller.current_slide());
        }
    }

    /// Route a wheel event through the scroll lock (compact mode only)
    fn on_wheel(&mut self, direction: Direction) {
        if !self.compact {
            return;
        }
        let rows = f64::from(self.page_rows);
        let frame = VerticalExtent::new(
            f64::from(PAGE_HEADER_ROWS) - f64::from(self.page_scroll),
            rows,
        );
        let viewport = VerticalExtent::new(0.0, rows);
        let contained = self.scroll_lock.is_contained(frame, viewport);
        match self.controller.handle_wheel(direction, contained) {
            WheelOutcome::Consumed => {
                debug!(?direction, "wheel hijacked by carousel");
                self.announce_slide();
            }
            WheelOutcome::PassThrough => self.scroll_page(direction),
        }
    }

    fn scroll_page(&mut self, direction: Direction) {
        let max_scroll = PAGE_HEADER_ROWS + PAGE_FOOTER_ROWS;
        self.page_scroll = match direction {
            Direction::Forward => (self.page_scroll + PAGE_SCROLL_STEP).min(max_scroll),
            Direction::Backward => self.page_scroll.saturating_sub(PAGE_SCROLL_STEP),
        };
    }

    /// Feed a scheduler tick into the controller
    pub fn on_autoplay_tick(&mut self) {
        self.controller.autoplay_tick();
    }

    /// Advance the animation lock; returns true while a transition runs
    pub fn update_motion(&mut self) -> bool {
        self.controller.update()
    }

    /// Whether the event loop should poll at animation rate
    pub fn needs_motion_update(&self) -> bool {
        self.controller.is_animating() || self.controller.is_dragging()
    }

    /// UI tick housekeeping
    pub fn tick(&mut self) {
        if self.status_ttl > 0 {
            self.status_ttl -= 1;
            if self.status_ttl == 0 {
                self.status_message = None;
            }
        }
    }

    /// Set a transient status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_ttl = STATUS_TTL_TICKS;
    }

    fn announce_slide(&mut self) {
        if let Some(slide) = self.deck.get(self.controller.current_slide()) {
            let message = format!(
                "slide {}/{}: {}",
                slide.ordinal,
                self.deck.len(),
                slide.label
            );
            self.set_status(message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slidewheel_core::MotionConfig;

    const W: f64 = 120.0;

    fn app(labels: &[&str]) -> App {
        let deck = SlideDeck::new(labels.iter().copied());
        let mut config = AppConfig::default();
        config.motion = MotionConfig {
            transition_duration_ms: 0,
            ..MotionConfig::default()
        };
        let mut app = App::new(deck, config, true, W);
        app.stage_area = Rect::new(0, 0, 120, 20);
        app.nav_area = Rect::new(0, 20, 120, 1);
        app.page_rows = 24;
        app
    }

    #[test]
    fn test_navigate_action_moves_and_pauses() {
        let mut app = app(&["One", "Two", "Three"]);
        app.apply_action(Action::Navigate(Direction::Forward));
        assert_eq!(app.controller.current_slide(), 2);
        assert!(app.controller.autoplay_paused());
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_press_in_stage_begins_gesture() {
        let mut app = app(&["One", "Two", "Three"]);
        app.apply_action(Action::Press { x: 60, y: 10 });
        assert!(app.controller.is_dragging());
        app.apply_action(Action::DragMove { x: 30 });
        assert_eq!(app.controller.drag_delta(), 30.0);
        app.apply_action(Action::Release);
        assert_eq!(app.controller.current_slide(), 2);
    }

    #[test]
    fn test_wheel_scrolls_page_until_contained() {
        let mut app = app(&["One", "Two", "Three"]);
        // Header rows are above the fold, so the first notches go to the page.
        app.apply_action(Action::Wheel(Direction::Forward));
        assert_eq!(app.page_scroll, 2);
        assert_eq!(app.controller.current_slide(), 1);
        for _ in 0..3 {
            app.apply_action(Action::Wheel(Direction::Forward));
        }
        // The carousel now fills the viewport; this notch is hijacked.
        assert_eq!(app.page_scroll, 8);
        app.apply_action(Action::Wheel(Direction::Forward));
        assert_eq!(app.page_scroll, 8);
        assert_eq!(app.controller.current_slide(), 2);
        assert!(app.controller.scroll_locked());
    }

    #[test]
    fn test_wheel_ignored_in_full_mode() {
        let mut app = app(&["One", "Two", "Three"]);
        app.compact = false;
        app.apply_action(Action::Wheel(Direction::Forward));
        assert_eq!(app.page_scroll, 0);
        assert_eq!(app.controller.current_slide(), 1);
    }

    #[test]
    fn test_wheel_passes_through_at_last_slide() {
        let mut app = app(&["One", "Two"]);
        app.page_scroll = 8;
        app.apply_action(Action::Wheel(Direction::Forward));
        assert_eq!(app.controller.current_slide(), 2);
        // At the boundary the page resumes scrolling.
        app.apply_action(Action::Wheel(Direction::Forward));
        assert_eq!(app.controller.current_slide(), 2);
        assert_eq!(app.page_scroll, 10);
    }

    #[test]
    fn test_autoplay_tick_advances_until_manual_input() {
        let mut app = app(&["One", "Two", "Three"]);
        app.on_autoplay_tick();
        assert_eq!(app.controller.current_slide(), 2);
        app.apply_action(Action::Navigate(Direction::Backward));
        app.on_autoplay_tick();
        assert_eq!(app.controller.current_slide(), 1);
    }

    #[test]
    fn test_status_expires_after_ttl() {
        let mut app = app(&["One", "Two"]);
        app.set_status("hello");
        for _ in 0..STATUS_TTL_TICKS {
            app.tick();
        }
        assert!(app.status_message.is_none());
    }
}

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        let mode_str = if app.controller.is_dragging() {
            "DRAG"
        } else if app.controller.is_animating() {
            "GLIDE"
        } else {
            "IDLE"
        };

        let autoplay_str = if !app.compact || app.controller.slide_count() < 2 {
            "OFF"
        } else if app.controller.autoplay_paused() {
            "PAUSED"
        } else {
            "AUTO"
        };

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else {
            format!(
                " {} | slide {}/{} | {}",
                mode_str,
                app.controller.current_slide(),
                app.controller.slide_count(),
                autoplay_str
            )
        };

        let help_hint = " q:quit ←/→:slide 1-9:jump drag:swipe ";
        // Display width, not char count: labels can carry wide glyphs
        let padding_len = usize::from(area.width)
            .saturating_sub(status_text.as_str().width())
            .saturating_sub(help_hint.width());

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(theme.fg0).bg(theme.bg2),
            ),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(
                help_hint,
                Style::default().fg(theme.grey1).bg(theme.bg2),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}

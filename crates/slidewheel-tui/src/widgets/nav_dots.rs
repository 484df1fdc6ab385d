use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

/// Columns reserved for each side arrow
const ARROW_COLS: u16 = 3;
/// Columns occupied by one dot cell
const DOT_CELL: u16 = 4;

/// What a click on the nav row landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavHit {
    Prev,
    Next,
    Dot(usize),
}

/// Total columns the dot cells need; saturates for decks far wider than
/// any terminal so the layout math stays in range.
fn dots_block_width(slide_count: usize) -> u16 {
    u16::try_from(usize::from(DOT_CELL).saturating_mul(slide_count)).unwrap_or(u16::MAX)
}

/// Left screen column of the dots block
fn dots_origin(area: Rect, slide_count: usize) -> u16 {
    let block = dots_block_width(slide_count);
    let middle = area.width.saturating_sub(2 * ARROW_COLS);
    area.x + ARROW_COLS + middle.saturating_sub(block) / 2
}

/// Resolve a click column to an arrow or a dot; the caller has already
/// checked the row.
pub fn hit_test(area: Rect, slide_count: usize, x: u16) -> Option<NavHit> {
    if x < area.x || x >= area.right() {
        return None;
    }
    if x < area.x + ARROW_COLS {
        return Some(NavHit::Prev);
    }
    if x >= area.right().saturating_sub(ARROW_COLS) {
        return Some(NavHit::Next);
    }
    let origin = dots_origin(area, slide_count);
    if x < origin {
        return None;
    }
    let ordinal = usize::from((x - origin) / DOT_CELL) + 1;
    if ordinal <= slide_count {
        Some(NavHit::Dot(ordinal))
    } else {
        None
    }
}

pub struct NavDotsWidget;

impl NavDotsWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let count = app.controller.slide_count();
        let current = app.controller.current_slide();

        let origin = dots_origin(area, count);
        let arrow_style = Style::default().fg(theme.fg1);
        let mut spans = vec![
            Span::styled(" ‹ ", arrow_style),
            Span::raw(" ".repeat(usize::from(
                origin.saturating_sub(area.x + ARROW_COLS),
            ))),
        ];

        for ordinal in 1..=count {
            if ordinal == current {
                // Current dot widens into a bar
                spans.push(Span::styled(
                    " ── ",
                    Style::default().fg(theme.dot_active),
                ));
            } else {
                spans.push(Span::styled(
                    " ·  ",
                    Style::default().fg(theme.dot_inactive),
                ));
            }
        }

        let used = (origin - area.x).saturating_add(dots_block_width(count));
        let trailing = area
            .width
            .saturating_sub(used)
            .saturating_sub(ARROW_COLS);
        spans.push(Span::raw(" ".repeat(usize::from(trailing))));
        spans.push(Span::styled(" › ", arrow_style));

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

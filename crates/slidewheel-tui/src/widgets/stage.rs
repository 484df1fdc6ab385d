use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Block,
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::app::App;
use crate::motion;

pub struct StageWidget;

impl StageWidget {
    /// Render the slide track with its parallax layers.
    ///
    /// Each slide occupies one viewport width on the track; the projection
    /// supplies the track, watermark, glyph and label offsets for the
    /// current frame. Content outside the stage is clipped, not wrapped.
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = app.theme.clone();
        frame.render_widget(
            Block::default().style(Style::default().bg(theme.bg0)),
            area,
        );
        if area.width == 0 || area.height < 4 || app.deck.is_empty() {
            return;
        }

        let projection = motion::project_frame(&app.controller, app.config.motion.easing);
        let width = f64::from(area.width);
        let track_shift = projection.track_pct / 100.0 * width;
        let background_shift = projection.background_pct / 100.0 * width;
        let glyph_shift = projection.glyph_vw / 100.0 * width;
        let label_shift = projection.label_px;

        let watermark_row = area.y + 1;
        let glyph_row = area.y + area.height / 3;
        let segments_row = glyph_row + 2;

        let buf = frame.buffer_mut();
        for slide in app.deck.iter() {
            let cell = (slide.ordinal - 1) as f64;
            let slide_left = cell * width + track_shift;
            let center = slide_left + width / 2.0;

            // Background layer moves at half speed, opposite direction
            let watermark = slide.label.to_uppercase();
            let watermark_x = background_shift - cell * width / 2.0 + width / 2.0
                - text_width(&watermark) / 2.0;
            draw_clipped(
                buf,
                area,
                watermark_x.round() as i64,
                watermark_row,
                &watermark,
                Style::default().fg(theme.watermark),
            );

            if let Some(initial) = slide.initial() {
                let glyph = initial.to_string();
                let glyph_x = center + glyph_shift - 0.5;
                draw_clipped(
                    buf,
                    area,
                    glyph_x.round() as i64,
                    glyph_row,
                    &glyph,
                    Style::default()
                        .fg(theme.glyph)
                        .add_modifier(Modifier::BOLD),
                );
            }

            for (row, segment) in slide.segments.iter().enumerate() {
                let y = segments_row + row as u16;
                if y >= area.bottom() {
                    break;
                }
                let segment_x = center + label_shift - text_width(segment) / 2.0;
                draw_clipped(
                    buf,
                    area,
                    segment_x.round() as i64,
                    y,
                    segment,
                    Style::default().fg(theme.fg0),
                );
            }
        }
    }
}

fn text_width(text: &str) -> f64 {
    text.chars()
        .map(|c| c.width().unwrap_or(0))
        .sum::<usize>() as f64
}

/// Write `text` at column `x` relative to the stage's left edge, dropping
/// anything that falls outside `area`. `x` may be negative mid-track.
fn draw_clipped(buf: &mut Buffer, area: Rect, x: i64, y: u16, text: &str, style: Style) {
    if y < area.y || y >= area.bottom() {
        return;
    }
    let mut col = x;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0) as i64;
        if w == 0 {
            continue;
        }
        if col >= 0 && col + w <= i64::from(area.width) {
            let screen_x = area.x + col as u16;
            buf[(screen_x, y)].set_char(ch).set_style(style);
        }
        col += w;
    }
}

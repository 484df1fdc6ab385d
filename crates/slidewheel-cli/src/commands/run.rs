use std::io;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Text},
    widgets::Paragraph,
    Frame, Terminal,
};
use tokio::sync::{mpsc, watch};

use slidewheel_core::autoplay::{AutoplayEvent, AutoplayService};
use slidewheel_core::{AppConfig, SlideDeck};
use slidewheel_tui::{
    app::{App, PAGE_HEADER_ROWS},
    event::{AppEvent, EventHandler},
    input::{handle_key_event, handle_mouse_event},
    widgets::{NavDotsWidget, StageWidget, StatusBarWidget},
};

const DEFAULT_LABELS: [&str; 3] = ["Vibe Coder", "Prompting", "Automations"];

pub async fn run(config: AppConfig, slides: Vec<String>, full: bool) -> Result<()> {
    let labels: Vec<String> = if slides.is_empty() {
        DEFAULT_LABELS.iter().map(|s| s.to_string()).collect()
    } else {
        slides
    };
    let deck = SlideDeck::new(labels);
    let compact = config.ui.compact && !full;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle("Slidewheel")
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // The commit threshold is captured from this width for the whole session
    let viewport_width = f64::from(terminal.size()?.width);
    let mut app = App::new(deck, config, compact, viewport_width);

    let event_handler = EventHandler::with_animation_fps(
        app.config.ui.tick_rate_ms,
        app.config.motion.animation_fps,
    );

    // The scheduler task lives as long as the carousel; the controller
    // decides what each tick means.
    let (tick_tx, mut tick_rx) = mpsc::unbounded_channel::<AutoplayEvent>();
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let autoplay_handle = if compact && app.deck.len() > 1 {
        let service = AutoplayService::new(app.config.autoplay.interval_ms, tick_tx);
        Some(tokio::spawn(service.run(shutdown_rx)))
    } else {
        None
    };

    // Checked at the END of each iteration to pick the NEXT poll rate
    let mut needs_fast_update = false;

    // Main loop
    loop {
        // Drain scheduler ticks (non-blocking)
        while let Ok(AutoplayEvent::Tick) = tick_rx.try_recv() {
            app.on_autoplay_tick();
        }

        // Settle any completed glide
        app.update_motion();

        terminal.draw(|frame| draw(frame, &mut app))?;

        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    app.apply_action(handle_key_event(key));
                }
                AppEvent::Mouse(mouse) => {
                    app.apply_action(handle_mouse_event(mouse));
                }
                AppEvent::Resize(_, _) => {
                    // Layout adapts on the next draw; the commit threshold
                    // keeps its mount-time value.
                }
                AppEvent::Tick => app.tick(),
            }
        }

        needs_fast_update = app.needs_motion_update();

        if app.should_quit {
            break;
        }
    }

    // Stop the scheduler before tearing the terminal down
    if let Some(handle) = autoplay_handle {
        let _ = shutdown_tx.send(true);
        let _ = handle.await;
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

fn draw(frame: &mut Frame, app: &mut App) {
    // Main layout: content + status bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(frame.area());

    if app.compact {
        draw_page(frame, main_layout[0], app);
    } else {
        app.page_rows = main_layout[0].height;
        draw_carousel(frame, main_layout[0], app);
    }

    StatusBarWidget::render(frame, main_layout[1], app);
}

/// Stage above, nav dots on the bottom row
fn draw_carousel(frame: &mut Frame, area: Rect, app: &mut App) {
    if area.height < 2 {
        app.stage_area = area;
        app.nav_area = Rect::default();
        StageWidget::render(frame, area, app);
        return;
    }
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);
    app.stage_area = rows[0];
    app.nav_area = rows[1];
    StageWidget::render(frame, rows[0], app);
    NavDotsWidget::render(frame, rows[1], app);
}

/// Compact mode: the carousel is one section of a taller page. The page is
/// header filler, a viewport-height carousel, then footer filler; the wheel
/// scrolls this page until the carousel fills the view and takes over.
fn draw_page(frame: &mut Frame, area: Rect, app: &mut App) {
    app.page_rows = area.height;
    let scroll = app.page_scroll;

    // Every slice is clamped to the rows actually available, so a short
    // terminal degrades to fewer visible sections instead of indexing
    // outside the frame buffer.
    let header_visible = PAGE_HEADER_ROWS.saturating_sub(scroll).min(area.height);
    let footer_visible = scroll
        .saturating_sub(PAGE_HEADER_ROWS)
        .min(area.height.saturating_sub(header_visible));
    let carousel_visible = area
        .height
        .saturating_sub(header_visible)
        .saturating_sub(footer_visible);

    app.stage_area = Rect::default();
    app.nav_area = Rect::default();

    let mut y = area.y;
    if header_visible > 0 {
        let header_area = Rect::new(area.x, y, area.width, header_visible);
        let header = Paragraph::new(header_text(app)).scroll((scroll, 0));
        frame.render_widget(header, header_area);
        y += header_visible;
    }
    if carousel_visible > 0 {
        let carousel = Rect::new(area.x, y, area.width, carousel_visible);
        draw_carousel(frame, carousel, app);
        y += carousel_visible;
    }
    if footer_visible > 0 {
        let footer_area = Rect::new(area.x, y, area.width, footer_visible);
        frame.render_widget(Paragraph::new(footer_text(app)), footer_area);
    }
}

fn header_text(app: &App) -> Text<'static> {
    let dim = Style::default().fg(app.theme.grey1);
    let title = Style::default().fg(app.theme.fg1);
    Text::from(vec![
        Line::default(),
        Line::styled("  SLIDEWHEEL", title),
        Line::default(),
        Line::styled("  Scroll down; the carousel catches the wheel", dim),
        Line::styled("  once it fills the view.", dim),
        Line::default(),
        Line::default(),
        Line::default(),
    ])
}

fn footer_text(app: &App) -> Text<'static> {
    let dim = Style::default().fg(app.theme.grey1);
    let mut lines = vec![
        Line::default(),
        Line::styled("  Past the last slide the wheel releases", dim),
        Line::styled("  and the page keeps scrolling.", dim),
    ];
    lines.resize_with(11, Line::default);
    lines.push(Line::styled("  ~ end ~", dim));
    Text::from(lines)
}

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use slidewheel_core::Direction;

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Advance one slide (keyboard arrows, side-nav)
    Navigate(Direction),
    /// Jump straight to a slide (digit keys)
    GoTo(usize),
    /// Pointer pressed; the app decides between gesture start and nav click
    Press { x: u16, y: u16 },
    /// Pointer moved while held
    DragMove { x: u16 },
    /// Pointer released anywhere, ending a live gesture
    Release,
    /// Wheel/scroll input, routed through the scroll lock in compact mode
    Wheel(Direction),
    None,
}

/// Map a key event to an action
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Esc, KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Slide navigation
        (KeyCode::Left, KeyModifiers::NONE) => Action::Navigate(Direction::Backward),
        (KeyCode::Char('h'), KeyModifiers::NONE) => Action::Navigate(Direction::Backward),
        (KeyCode::Right, KeyModifiers::NONE) => Action::Navigate(Direction::Forward),
        (KeyCode::Char('l'), KeyModifiers::NONE) => Action::Navigate(Direction::Forward),

        // Direct jump (nav-dot equivalent)
        (KeyCode::Char(c), KeyModifiers::NONE) if c.is_ascii_digit() && c != '0' => {
            Action::GoTo(c as usize - '0' as usize)
        }

        _ => Action::None,
    }
}

/// Map a mouse event to an action
pub fn handle_mouse_event(mouse: MouseEvent) -> Action {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Action::Press {
            x: mouse.column,
            y: mouse.row,
        },
        MouseEventKind::Drag(MouseButton::Left) => Action::DragMove { x: mouse.column },
        MouseEventKind::Up(MouseButton::Left) => Action::Release,
        MouseEventKind::ScrollUp => Action::Wheel(Direction::Backward),
        MouseEventKind::ScrollDown => Action::Wheel(Direction::Forward),
        _ => Action::None,
    }
}

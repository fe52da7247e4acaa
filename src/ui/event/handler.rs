use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use ledgerview_app::action::Action;
use ledgerview_app::input_mode::InputMode;
use ledgerview_app::reducer::SCROLL_STEP;
use ledgerview_app::state::AppState;
use ledgerview_app::table_pane::RowMotion;

use super::Event;

pub fn handle_event(event: Event, state: &AppState) -> Action {
    match event {
        Event::Init => Action::Render,
        Event::Resize(w, h) => Action::Resize(w, h),
        Event::Key(key) => handle_key_event(key, state),
        Event::Mouse(mouse) => handle_mouse_event(mouse, state),
    }
}

fn handle_key_event(key: KeyEvent, state: &AppState) -> Action {
    match state.input_mode {
        InputMode::Normal => handle_normal_mode(key),
        InputMode::ColumnsMenu => handle_columns_menu_keys(key),
        InputMode::Help => handle_help_keys(key),
    }
}

fn handle_normal_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('?') => Action::OpenHelp,
        KeyCode::Tab | KeyCode::BackTab => Action::NextTable,
        KeyCode::Char('c') => Action::OpenColumnsMenu,
        KeyCode::Char('s') => Action::SortSelected,
        KeyCode::Char('+' | '=') => Action::StepFontSize(true),
        KeyCode::Char('-') => Action::StepFontSize(false),
        KeyCode::Char('0') => Action::ResetColumns,
        KeyCode::Char('R') => Action::ResetAll,

        // Rows
        KeyCode::Up | KeyCode::Char('k') => Action::MoveRow(RowMotion::Previous),
        KeyCode::Down | KeyCode::Char('j') => Action::MoveRow(RowMotion::Next),
        KeyCode::Char('g') | KeyCode::Home => Action::MoveRow(RowMotion::First),
        KeyCode::Char('G') | KeyCode::End => Action::MoveRow(RowMotion::Last),
        KeyCode::PageDown => Action::MoveRow(RowMotion::PageDown),
        KeyCode::PageUp => Action::MoveRow(RowMotion::PageUp),

        // Columns
        KeyCode::Left | KeyCode::Char('h') => Action::PreviousColumn,
        KeyCode::Right | KeyCode::Char('l') => Action::NextColumn,
        KeyCode::Char('H') => Action::Scroll(-SCROLL_STEP),
        KeyCode::Char('L') => Action::Scroll(SCROLL_STEP),
        KeyCode::Char('<') => Action::NudgeColumn(-1),
        KeyCode::Char('>') => Action::NudgeColumn(1),

        _ => Action::None,
    }
}

fn handle_columns_menu_keys(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc | KeyCode::Char('c') => Action::CloseColumnsMenu,
        KeyCode::Up | KeyCode::Char('k') => Action::MenuPrevious,
        KeyCode::Down | KeyCode::Char('j') => Action::MenuNext,
        KeyCode::Char(' ') | KeyCode::Enter => Action::MenuToggle,
        KeyCode::Char('0') => Action::ResetColumns,
        _ => Action::None,
    }
}

fn handle_help_keys(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Esc | KeyCode::Char('?') => Action::CloseHelp,
        _ => Action::None,
    }
}

/// Overlays swallow the mouse, except that a release always goes through so
/// a drag cannot outlive the button.
fn handle_mouse_event(mouse: MouseEvent, state: &AppState) -> Action {
    if let MouseEventKind::Up(MouseButton::Left) = mouse.kind {
        return Action::MouseUp;
    }
    if state.input_mode != InputMode::Normal {
        return Action::None;
    }
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Action::MouseDown {
            x: mouse.column,
            y: mouse.row,
        },
        MouseEventKind::Drag(MouseButton::Left) => Action::MouseDrag { x: mouse.column },
        MouseEventKind::ScrollDown => Action::MoveRow(RowMotion::Next),
        MouseEventKind::ScrollUp => Action::MoveRow(RowMotion::Previous),
        MouseEventKind::ScrollRight => Action::Scroll(SCROLL_STEP),
        MouseEventKind::ScrollLeft => Action::Scroll(-SCROLL_STEP),
        _ => Action::None,
    }
}

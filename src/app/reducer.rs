//! Pure reducer: state transitions only, no I/O.
//!
//! Layout changes of the active table come back from the pane as
//! `LayoutEffect`s and are forwarded as `Effect::Persist`.

use crate::action::Action;
use crate::effect::Effect;
use crate::input_mode::InputMode;
use crate::layout::LayoutEffect;
use crate::state::AppState;

/// Cells moved per horizontal scroll step.
pub const SCROLL_STEP: i32 = 8;

pub fn reduce(state: &mut AppState, action: Action) -> Vec<Effect> {
    let should_mark_dirty = !matches!(action, Action::None | Action::Render);

    let effects = reduce_inner(state, action);

    if should_mark_dirty {
        state.mark_dirty();
    }

    effects
}

fn persist(effects: Vec<LayoutEffect>) -> Vec<Effect> {
    effects.into_iter().map(Effect::from).collect()
}

fn reduce_inner(state: &mut AppState, action: Action) -> Vec<Effect> {
    match action {
        Action::None => vec![],
        Action::Quit => {
            state.should_quit = true;
            vec![]
        }
        Action::Render => {
            state.clear_dirty();
            vec![Effect::Render]
        }
        Action::Resize(width, height) => {
            state.set_terminal_size(width, height);
            vec![]
        }

        Action::NextTable => {
            // a half-finished drag belongs to the table it started on
            let mut effects = persist(state.active_pane_mut().release());
            state.active = state.active.next();
            state.menu_cursor = 0;
            effects.extend(persist(state.active_pane_mut().release()));
            effects
        }
        Action::MoveRow(motion) => {
            let page = state.visible_rows();
            let pane = state.active_pane_mut();
            pane.move_row(motion, page);
            pane.ensure_row_visible(page);
            vec![]
        }
        Action::NextColumn => {
            state.active_pane_mut().move_column(true);
            vec![]
        }
        Action::PreviousColumn => {
            state.active_pane_mut().move_column(false);
            vec![]
        }
        Action::Scroll(delta) => {
            state.active_pane_mut().scroll(delta);
            vec![]
        }

        Action::NudgeColumn(dx) => persist(state.active_pane_mut().nudge_selected(f64::from(dx))),
        Action::SortSelected => persist(state.active_pane_mut().sort_selected()),
        Action::StepFontSize(larger) => {
            let effects = persist(state.active_pane_mut().step_font_size(larger));
            let page = state.visible_rows();
            state.active_pane_mut().ensure_row_visible(page);
            effects
        }
        Action::ResetColumns => persist(state.active_pane_mut().reset_columns()),
        Action::ResetAll => persist(state.active_pane_mut().reset_all()),

        Action::OpenColumnsMenu => {
            state.input_mode = InputMode::ColumnsMenu;
            state.menu_cursor = 0;
            vec![]
        }
        Action::CloseColumnsMenu | Action::CloseHelp => {
            state.input_mode = InputMode::Normal;
            vec![]
        }
        Action::MenuNext => {
            let last = state.active_pane().menu().len().saturating_sub(1);
            state.menu_cursor = (state.menu_cursor + 1).min(last);
            vec![]
        }
        Action::MenuPrevious => {
            state.menu_cursor = state.menu_cursor.saturating_sub(1);
            vec![]
        }
        Action::MenuToggle => {
            let index = state.menu_cursor;
            persist(state.active_pane_mut().toggle_entry(index))
        }

        Action::OpenHelp => {
            state.input_mode = InputMode::Help;
            vec![]
        }

        Action::MouseDown { x, y } => {
            let viewport = state.viewport;
            if state.input_mode != InputMode::Normal
                || y != viewport.header_y
                || !viewport.contains_x(x)
            {
                return vec![];
            }
            persist(state.active_pane_mut().press(viewport.local_x(x)))
        }
        Action::MouseDrag { x } => {
            let local_x = state.viewport.local_x(x);
            persist(state.active_pane_mut().drag_to(local_x))
        }
        Action::MouseUp => persist(state.active_pane_mut().release()),
    }
}

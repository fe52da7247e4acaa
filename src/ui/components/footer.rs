use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use ledgerview_app::input_mode::InputMode;
use ledgerview_app::keybindings::{
    COLUMNS_MENU_KEYS, GLOBAL_KEYS, HELP_KEYS, NAVIGATION_KEYS, idx,
};
use ledgerview_app::state::AppState;

use super::molecules::hint_line;
use crate::theme::Theme;

pub struct Footer;

impl Footer {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let line = match &state.status_message {
            Some(message) => Line::from(Span::styled(
                message.clone(),
                Style::default().fg(Theme::STATUS_ERROR),
            )),
            None => hint_line(&Self::get_context_hints(state.input_mode)),
        };
        frame.render_widget(Paragraph::new(line), area);
    }

    /// Hint ordering: Actions → Navigation → Help → Close → Quit
    fn get_context_hints(mode: InputMode) -> Vec<(&'static str, &'static str)> {
        match mode {
            InputMode::Normal => vec![
                GLOBAL_KEYS[idx::global::COLUMNS].as_hint(),
                GLOBAL_KEYS[idx::global::SORT].as_hint(),
                NAVIGATION_KEYS[idx::nav::WIDTH].as_hint(),
                GLOBAL_KEYS[idx::global::FONT_LARGER].as_hint(),
                GLOBAL_KEYS[idx::global::NEXT_TABLE].as_hint(),
                GLOBAL_KEYS[idx::global::HELP].as_hint(),
                GLOBAL_KEYS[idx::global::QUIT].as_hint(),
            ],
            InputMode::ColumnsMenu => vec![
                COLUMNS_MENU_KEYS[idx::columns_menu::TOGGLE].as_hint(),
                COLUMNS_MENU_KEYS[idx::columns_menu::RESET].as_hint(),
                COLUMNS_MENU_KEYS[idx::columns_menu::NAVIGATE].as_hint(),
                COLUMNS_MENU_KEYS[idx::columns_menu::CLOSE].as_hint(),
            ],
            InputMode::Help => vec![
                HELP_KEYS[idx::help::CLOSE].as_hint(),
                HELP_KEYS[idx::help::QUIT].as_hint(),
            ],
        }
    }
}

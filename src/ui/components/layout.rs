use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use ledgerview_app::input_mode::InputMode;
use ledgerview_app::state::AppState;
use ledgerview_app::tables::TableKind;

use super::columns_menu::ColumnsMenu;
use super::footer::Footer;
use super::help_overlay::HelpOverlay;
use super::ledger_table::LedgerTable;
use super::tabs::Tabs;

pub struct MainLayout;

impl MainLayout {
    pub fn render(frame: &mut Frame, state: &mut AppState) {
        let area = frame.area();
        if (area.width, area.height) != (state.terminal_width, state.terminal_height) {
            state.set_terminal_size(area.width, area.height);
        }

        let [tabs_area, table_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        let visible_rows = state.visible_rows();
        state.active_pane_mut().ensure_row_visible(visible_rows);

        Tabs::render(frame, tabs_area, state);

        let title = state.active.title();
        match state.active {
            TableKind::Positions => LedgerTable::render(frame, table_area, &state.positions, title),
            TableKind::Trades => LedgerTable::render(frame, table_area, &state.trades, title),
        }

        Footer::render(frame, footer_area, state);

        // Render overlays (on top of everything else)
        match state.input_mode {
            InputMode::Normal => {}
            InputMode::ColumnsMenu => ColumnsMenu::render(frame, state),
            InputMode::Help => HelpOverlay::render(frame),
        }
    }
}

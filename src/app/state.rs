use ledgerview_domain::{Position, Trade};

use super::input_mode::InputMode;
use super::screen::{TableViewport, table_viewport};
use super::table_pane::{Pane, TablePane};
use super::tables::{PositionColumn, TableKind, TradeColumn};

pub type PositionsPane = TablePane<PositionColumn, Position>;
pub type TradesPane = TablePane<TradeColumn, Trade>;

#[derive(Debug, Clone)]
pub struct AppState {
    pub positions: PositionsPane,
    pub trades: TradesPane,
    pub active: TableKind,
    pub input_mode: InputMode,
    /// Highlighted entry of the Columns menu (catalog index).
    pub menu_cursor: usize,
    pub terminal_width: u16,
    pub terminal_height: u16,
    pub viewport: TableViewport,
    /// Where the rows came from, shown in the tabs row.
    pub source_label: String,
    pub status_message: Option<String>,
    pub should_quit: bool,
    pub render_dirty: bool,
}

impl AppState {
    pub fn new(positions: PositionsPane, trades: TradesPane, source_label: impl Into<String>) -> Self {
        Self {
            positions,
            trades,
            active: TableKind::default(),
            input_mode: InputMode::default(),
            menu_cursor: 0,
            terminal_width: 0,
            terminal_height: 0,
            viewport: TableViewport::default(),
            source_label: source_label.into(),
            status_message: None,
            should_quit: false,
            render_dirty: true,
        }
    }

    pub fn active_pane(&self) -> &dyn Pane {
        match self.active {
            TableKind::Positions => &self.positions,
            TableKind::Trades => &self.trades,
        }
    }

    pub fn active_pane_mut(&mut self) -> &mut dyn Pane {
        match self.active {
            TableKind::Positions => &mut self.positions,
            TableKind::Trades => &mut self.trades,
        }
    }

    /// Both tables share the viewport; each keeps its own layout.
    pub fn set_terminal_size(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
        self.viewport = table_viewport(width, height);
        let table_width = self.viewport.width;
        self.positions.resize(table_width);
        self.trades.resize(table_width);
    }

    /// Body rows that fit at the active table's text size.
    pub fn visible_rows(&self) -> usize {
        let row_height = self.active_pane().font_size().row_height().max(1);
        usize::from(self.viewport.body_height / row_height)
    }

    pub fn mark_dirty(&mut self) {
        self.render_dirty = true;
    }

    pub fn clear_dirty(&mut self) {
        self.render_dirty = false;
    }
}

/// Tabs(1) + Footer(1)
pub const LAYOUT_FIXED_ROWS: u16 = 2;

/// Cells of slack to the right of a divider that still grab it.
pub const DIVIDER_TOLERANCE: u16 = 1;

/// Where the active table's cells land on the terminal: inside a bordered
/// block between the tabs row and the footer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableViewport {
    pub x: u16,
    pub header_y: u16,
    pub width: u16,
    pub body_height: u16,
}

impl TableViewport {
    pub fn contains_x(&self, x: u16) -> bool {
        x >= self.x && x < self.x.saturating_add(self.width)
    }

    /// Terminal column to viewport-relative column, clamped into the viewport.
    pub fn local_x(&self, x: u16) -> u16 {
        x.saturating_sub(self.x).min(self.width.saturating_sub(1))
    }
}

pub fn table_viewport(terminal_width: u16, terminal_height: u16) -> TableViewport {
    let block_height = terminal_height.saturating_sub(LAYOUT_FIXED_ROWS);
    TableViewport {
        x: 1,
        header_y: 2,
        width: terminal_width.saturating_sub(2),
        // borders(2) + header(1)
        body_height: block_height.saturating_sub(3),
    }
}

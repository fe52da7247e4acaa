use crate::table_pane::RowMotion;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    None,
    Quit,
    Render,
    Resize(u16, u16),

    NextTable,
    MoveRow(RowMotion),
    NextColumn,
    PreviousColumn,
    /// Horizontal scroll in cells; negative scrolls left.
    Scroll(i32),

    // Layout of the active table
    /// Widens (positive) or narrows the selected column against its
    /// right-hand neighbor.
    NudgeColumn(i16),
    SortSelected,
    StepFontSize(bool),
    ResetColumns,
    ResetAll,

    // Columns menu
    OpenColumnsMenu,
    CloseColumnsMenu,
    MenuNext,
    MenuPrevious,
    MenuToggle,

    OpenHelp,
    CloseHelp,

    // Terminal coordinates
    MouseDown { x: u16, y: u16 },
    MouseDrag { x: u16 },
    MouseUp,
}

impl Action {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

use ledgerview_domain::{FontSize, Width};

/// Input to one table's layout. Every variant is a complete, discrete change
/// except the drag updates, which only settle on `EndDrag`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayoutAction<C> {
    Resize(Width),
    ToggleColumn(C),
    BeginDrag(C),
    /// Offset from where the gesture started.
    UpdateDrag(C, Width),
    EndDrag,
    Nudge(C, Width),
    SetFontSize(FontSize),
    /// `true` for larger.
    StepFontSize(bool),
    ResetColumns,
    ResetAll,
    SortBy(C),
}

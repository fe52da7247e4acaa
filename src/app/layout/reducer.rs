//! Pure layout reducer: applies one action and reports what to persist.
//!
//! Only settled changes persist: toggles, drag end, nudges, font size and
//! resets. Resizes, drag updates and sorting never write. Hydration does not
//! go through here, so loading preferences cannot trigger a write.

use ledgerview_domain::ColumnId;

use super::action::LayoutAction;
use super::effect::LayoutEffect;
use super::table_layout::TableLayout;

pub fn reduce_layout<C: ColumnId>(
    layout: &mut TableLayout<C>,
    action: LayoutAction<C>,
) -> Vec<LayoutEffect> {
    let settled = match action {
        LayoutAction::Resize(width) => {
            layout.set_available_width(width);
            false
        }
        LayoutAction::ToggleColumn(column) => layout.toggle_column(column),
        LayoutAction::BeginDrag(column) => {
            layout.begin_drag(column);
            false
        }
        LayoutAction::UpdateDrag(column, dx) => {
            layout.update_drag(column, dx);
            false
        }
        LayoutAction::EndDrag => layout.end_drag(),
        LayoutAction::Nudge(column, dx) => layout.nudge(column, dx),
        LayoutAction::SetFontSize(font_size) => layout.set_font_size(font_size),
        LayoutAction::StepFontSize(larger) => {
            let current = layout.font_size();
            let next = if larger {
                current.larger()
            } else {
                current.smaller()
            };
            layout.set_font_size(next)
        }
        LayoutAction::ResetColumns => {
            layout.reset_columns();
            true
        }
        LayoutAction::ResetAll => {
            layout.reset_all();
            true
        }
        LayoutAction::SortBy(column) => {
            layout.sort_by(column);
            false
        }
    };

    if settled {
        vec![persist(layout)]
    } else {
        vec![]
    }
}

pub fn persist<C: ColumnId>(layout: &TableLayout<C>) -> LayoutEffect {
    LayoutEffect::Persist {
        table_kind: layout.table_kind(),
        preferences: layout.preferences(),
    }
}

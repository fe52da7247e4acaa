//! A table on screen: its layout plus rows, selection and scroll position.

use ledgerview_domain::{ColumnId, FontSize, Width};

use crate::layout::{LayoutAction, LayoutEffect, SortableRow, TableLayout, reduce_layout};
use crate::screen::DIVIDER_TOLERANCE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowMotion {
    Next,
    Previous,
    First,
    Last,
    PageDown,
    PageUp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub title: &'static str,
    pub visible: bool,
    pub toggleable: bool,
}

#[derive(Debug, Clone)]
pub struct TablePane<C: ColumnId, R> {
    pub layout: TableLayout<C>,
    pub rows: Vec<R>,
    pub selected_row: usize,
    pub row_offset: usize,
    /// Index into the visible columns.
    pub selected_column: usize,
    pub h_offset: u16,
    pub viewport_width: u16,
    /// Viewport x where the current header drag started.
    drag_anchor: Option<u16>,
}

/// Table operations the host drives without knowing the column and row
/// types.
pub trait Pane {
    fn table_kind(&self) -> &'static str;
    fn font_size(&self) -> FontSize;
    fn resize(&mut self, width: u16);
    fn scroll(&mut self, delta: i32);
    fn move_column(&mut self, forward: bool);
    fn move_row(&mut self, motion: RowMotion, page: usize);
    fn ensure_row_visible(&mut self, visible_rows: usize);
    fn nudge_selected(&mut self, dx: Width) -> Vec<LayoutEffect>;
    fn sort_selected(&mut self) -> Vec<LayoutEffect>;
    fn step_font_size(&mut self, larger: bool) -> Vec<LayoutEffect>;
    fn reset_columns(&mut self) -> Vec<LayoutEffect>;
    fn reset_all(&mut self) -> Vec<LayoutEffect>;
    fn menu(&self) -> Vec<MenuItem>;
    fn toggle_entry(&mut self, index: usize) -> Vec<LayoutEffect>;
    fn press(&mut self, x: u16) -> Vec<LayoutEffect>;
    fn drag_to(&mut self, x: u16) -> Vec<LayoutEffect>;
    fn release(&mut self) -> Vec<LayoutEffect>;
    fn is_dragging(&self) -> bool;
}

impl<C: ColumnId, R: SortableRow<C>> TablePane<C, R> {
    pub fn new(layout: TableLayout<C>, mut rows: Vec<R>) -> Self {
        layout.sort_rows(&mut rows);
        Self {
            layout,
            rows,
            selected_row: 0,
            row_offset: 0,
            selected_column: 0,
            h_offset: 0,
            viewport_width: 0,
            drag_anchor: None,
        }
    }

    pub fn apply(&mut self, action: LayoutAction<C>) -> Vec<LayoutEffect> {
        let resort = matches!(action, LayoutAction::SortBy(_));
        let effects = reduce_layout(&mut self.layout, action);
        if resort {
            self.layout.sort_rows(&mut self.rows);
        }
        self.clamp();
        effects
    }

    pub fn selected_column_id(&self) -> Option<C> {
        self.layout
            .visible_columns()
            .get(self.selected_column)
            .copied()
    }

    pub fn surface_cells(&self) -> u16 {
        self.layout
            .cell_widths()
            .iter()
            .fold(0u16, |total, (_, width)| total.saturating_add(*width))
    }

    pub fn max_h_offset(&self) -> u16 {
        self.surface_cells().saturating_sub(self.viewport_width)
    }

    /// Scrolls just enough to bring the selected column into view.
    pub fn ensure_column_visible(&mut self) {
        let cells = self.layout.cell_widths();
        let start = cells
            .iter()
            .take(self.selected_column)
            .fold(0u16, |total, (_, width)| total.saturating_add(*width));
        let end = start.saturating_add(cells.get(self.selected_column).map_or(0, |(_, width)| *width));
        if start < self.h_offset {
            self.h_offset = start;
        } else if end > self.h_offset.saturating_add(self.viewport_width) {
            self.h_offset = end.saturating_sub(self.viewport_width).min(start);
        }
        self.h_offset = self.h_offset.min(self.max_h_offset());
    }

    fn clamp(&mut self) {
        let visible = self.layout.visible_columns().len();
        self.selected_column = self.selected_column.min(visible.saturating_sub(1));
        self.selected_row = self.selected_row.min(self.rows.len().saturating_sub(1));
        self.h_offset = self.h_offset.min(self.max_h_offset());
    }
}

impl<C: ColumnId, R: SortableRow<C>> Pane for TablePane<C, R> {
    fn table_kind(&self) -> &'static str {
        self.layout.table_kind()
    }

    fn font_size(&self) -> FontSize {
        self.layout.font_size()
    }

    fn resize(&mut self, width: u16) {
        self.viewport_width = width;
        self.apply(LayoutAction::Resize(Width::from(width)));
    }

    fn scroll(&mut self, delta: i32) {
        let offset = (i32::from(self.h_offset) + delta).clamp(0, i32::from(self.max_h_offset()));
        self.h_offset = u16::try_from(offset).unwrap_or(0);
    }

    fn move_column(&mut self, forward: bool) {
        let last = self.layout.visible_columns().len().saturating_sub(1);
        self.selected_column = if forward {
            (self.selected_column + 1).min(last)
        } else {
            self.selected_column.saturating_sub(1)
        };
        self.ensure_column_visible();
    }

    fn move_row(&mut self, motion: RowMotion, page: usize) {
        let last = self.rows.len().saturating_sub(1);
        let page = page.max(1);
        self.selected_row = match motion {
            RowMotion::Next => (self.selected_row + 1).min(last),
            RowMotion::Previous => self.selected_row.saturating_sub(1),
            RowMotion::First => 0,
            RowMotion::Last => last,
            RowMotion::PageDown => (self.selected_row + page).min(last),
            RowMotion::PageUp => self.selected_row.saturating_sub(page),
        };
    }

    /// Keeps the selected row within `visible_rows` rows from `row_offset`.
    fn ensure_row_visible(&mut self, visible_rows: usize) {
        let visible_rows = visible_rows.max(1);
        if self.selected_row < self.row_offset {
            self.row_offset = self.selected_row;
        } else if self.selected_row >= self.row_offset + visible_rows {
            self.row_offset = self.selected_row + 1 - visible_rows;
        }
    }

    fn nudge_selected(&mut self, dx: Width) -> Vec<LayoutEffect> {
        match self.selected_column_id() {
            Some(column) => self.apply(LayoutAction::Nudge(column, dx)),
            None => vec![],
        }
    }

    fn sort_selected(&mut self) -> Vec<LayoutEffect> {
        match self.selected_column_id() {
            Some(column) => self.apply(LayoutAction::SortBy(column)),
            None => vec![],
        }
    }

    fn step_font_size(&mut self, larger: bool) -> Vec<LayoutEffect> {
        self.apply(LayoutAction::StepFontSize(larger))
    }

    fn reset_columns(&mut self) -> Vec<LayoutEffect> {
        self.apply(LayoutAction::ResetColumns)
    }

    fn reset_all(&mut self) -> Vec<LayoutEffect> {
        let effects = self.apply(LayoutAction::ResetAll);
        self.h_offset = 0;
        effects
    }

    fn menu(&self) -> Vec<MenuItem> {
        self.layout
            .menu_entries()
            .into_iter()
            .map(|entry| MenuItem {
                title: entry.title,
                visible: entry.visible,
                toggleable: entry.toggleable,
            })
            .collect()
    }

    /// Toggles the `index`-th catalog column, keeping the selection on the
    /// same column when it stays visible.
    fn toggle_entry(&mut self, index: usize) -> Vec<LayoutEffect> {
        let Some(column) = self.layout.catalog().specs().get(index).map(|spec| spec.id) else {
            return vec![];
        };
        let selected = self.selected_column_id();
        let effects = self.apply(LayoutAction::ToggleColumn(column));
        if let Some(position) = selected
            .and_then(|id| self.layout.visible_columns().iter().position(|c| *c == id))
        {
            self.selected_column = position;
        }
        self.clamp();
        effects
    }

    /// Header press at viewport column `x`: grabs a divider when one is under
    /// the pointer, otherwise sorts by the column there.
    fn press(&mut self, x: u16) -> Vec<LayoutEffect> {
        let surface_x = x.saturating_add(self.h_offset);
        if let Some(column) = self.layout.divider_at(surface_x, DIVIDER_TOLERANCE) {
            let effects = self.apply(LayoutAction::BeginDrag(column));
            if self.layout.is_dragging() {
                self.drag_anchor = Some(x);
            }
            return effects;
        }
        let Some(column) = self.layout.column_at(surface_x) else {
            return vec![];
        };
        if let Some(position) = self.layout.visible_columns().iter().position(|c| *c == column) {
            self.selected_column = position;
        }
        self.apply(LayoutAction::SortBy(column))
    }

    fn drag_to(&mut self, x: u16) -> Vec<LayoutEffect> {
        let (Some(anchor), Some(primary)) =
            (self.drag_anchor, self.layout.drag().map(|ctx| ctx.primary))
        else {
            return vec![];
        };
        self.apply(LayoutAction::UpdateDrag(
            primary,
            Width::from(x) - Width::from(anchor),
        ))
    }

    fn release(&mut self) -> Vec<LayoutEffect> {
        if self.drag_anchor.take().is_none() {
            return vec![];
        }
        self.apply(LayoutAction::EndDrag)
    }

    fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }
}

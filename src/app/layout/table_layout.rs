//! Per-table layout state: visibility, fractions, resolved widths, the active
//! drag gesture, sort and font size.
//!
//! All mutations go through methods returning whether the state changed; the
//! reducer turns settled changes into persistence effects. Hydration lives in
//! [`hydrate`] and never produces effects.

mod hydrate;

use std::sync::Arc;

use ledgerview_domain::{ColumnCatalog, ColumnId, FontSize, Width};
use log::debug;

use super::drag::DragContext;
use super::fraction::{FractionModel, MIN_FRACTION};
use super::resolver::{
    ColumnInput, ResolvedWidths, quantize, resolve, sanitize_width, surface_width,
};
use super::sort::{SortState, SortableRow};
use super::visibility::VisibilitySet;

/// Smallest width change a nudge counts as a move.
const NUDGE_EPSILON: Width = 1e-9;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMenuEntry<C> {
    pub id: C,
    pub title: &'static str,
    pub visible: bool,
    /// Whether toggling would change anything (hiding may be refused).
    pub toggleable: bool,
}

#[derive(Debug, Clone)]
pub struct TableLayout<C: ColumnId> {
    catalog: Arc<ColumnCatalog<C>>,
    visible: VisibilitySet<C>,
    fractions: FractionModel<C>,
    resolved: ResolvedWidths<C>,
    available_width: Width,
    surface_width: Width,
    font_size: FontSize,
    drag: Option<DragContext<C>>,
    sort: SortState<C>,
}

impl<C: ColumnId> TableLayout<C> {
    pub fn new(catalog: Arc<ColumnCatalog<C>>) -> Self {
        let visible = VisibilitySet::defaults(&catalog);
        let fractions = FractionModel::defaults(&catalog);
        Self::from_parts(catalog, visible, fractions, FontSize::default())
    }

    fn from_parts(
        catalog: Arc<ColumnCatalog<C>>,
        visible: VisibilitySet<C>,
        mut fractions: FractionModel<C>,
        font_size: FontSize,
    ) -> Self {
        fractions.normalize(visible.as_slice());
        let mut layout = Self {
            catalog,
            visible,
            fractions,
            resolved: ResolvedWidths::default(),
            available_width: 0.0,
            surface_width: 0.0,
            font_size,
            drag: None,
            sort: SortState::default(),
        };
        layout.recompute();
        layout
    }

    pub fn catalog(&self) -> &ColumnCatalog<C> {
        &self.catalog
    }

    pub fn table_kind(&self) -> &'static str {
        self.catalog.table_kind()
    }

    /// Visible columns in catalog order.
    pub fn visible_columns(&self) -> &[C] {
        self.visible.as_slice()
    }

    pub fn fractions(&self) -> &FractionModel<C> {
        &self.fractions
    }

    pub fn resolved_widths(&self) -> &ResolvedWidths<C> {
        &self.resolved
    }

    /// Resolved widths rounded to whole cells.
    pub fn cell_widths(&self) -> Vec<(C, u16)> {
        quantize(&self.resolved)
    }

    pub fn available_width(&self) -> Width {
        self.available_width
    }

    /// Width the columns are laid out on; wider than the viewport when the
    /// minimums do not fit.
    pub fn surface_width(&self) -> Width {
        self.surface_width
    }

    pub fn font_size(&self) -> FontSize {
        self.font_size
    }

    pub fn drag(&self) -> Option<&DragContext<C>> {
        self.drag.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn sort(&self) -> &SortState<C> {
        &self.sort
    }

    pub fn menu_entries(&self) -> Vec<ColumnMenuEntry<C>> {
        self.catalog
            .specs()
            .iter()
            .map(|spec| {
                let visible = self.visible.contains(spec.id);
                ColumnMenuEntry {
                    id: spec.id,
                    title: spec.title,
                    visible,
                    toggleable: !visible || self.visible.can_hide(&self.catalog, spec.id),
                }
            })
            .collect()
    }

    /// Same width twice is a no-op.
    pub fn set_available_width(&mut self, width: Width) -> bool {
        let width = sanitize_width(width);
        if width == self.available_width {
            return false;
        }
        self.available_width = width;
        self.recompute();
        true
    }

    pub fn toggle_column(&mut self, column: C) -> bool {
        if !self.visible.toggle(&self.catalog, column) {
            debug!(
                "{}: toggle of {:?} refused",
                self.catalog.table_kind(),
                column
            );
            return false;
        }
        if self.visible.contains(column) && !self.fractions.has_share(column) {
            let default_share = FractionModel::defaults(&self.catalog).get(column);
            self.fractions.set(column, default_share);
        }
        self.drag = None;
        self.fractions.normalize(self.visible.as_slice());
        self.recompute();
        true
    }

    /// Default visible set and default fractions.
    pub fn reset_columns(&mut self) {
        self.visible = VisibilitySet::defaults(&self.catalog);
        self.fractions = FractionModel::defaults(&self.catalog);
        self.fractions.normalize(self.visible.as_slice());
        self.drag = None;
        self.recompute();
    }

    /// Columns, fractions and font size back to defaults.
    pub fn reset_all(&mut self) {
        self.reset_columns();
        self.font_size = FontSize::default();
    }

    pub fn set_font_size(&mut self, font_size: FontSize) -> bool {
        if self.font_size == font_size {
            return false;
        }
        self.font_size = font_size;
        true
    }

    pub fn sort_by(&mut self, column: C) -> bool {
        self.sort.click(&self.catalog, column)
    }

    pub fn sort_rows<R: SortableRow<C>>(&self, rows: &mut [R]) {
        self.sort.sort_rows(rows);
    }

    /// Starts resizing the divider after `primary`.
    ///
    /// Refused when a drag is already active, when `primary` is hidden, or
    /// when it is the last visible column.
    pub fn begin_drag(&mut self, primary: C) -> bool {
        if self.drag.is_some() {
            debug!(
                "{}: nested drag on {:?} ignored",
                self.catalog.table_kind(),
                primary
            );
            return false;
        }
        let Some(neighbor) = self.visible.next_after(primary) else {
            return false;
        };
        let (Some(primary_base), Some(neighbor_base)) =
            (self.resolved.get(primary), self.resolved.get(neighbor))
        else {
            return false;
        };

        // Shares now mirror on-screen widths, so re-resolving during the drag
        // leaves the other columns where they are.
        self.fractions
            .rebase(self.resolved.iter(), self.surface_width);
        self.drag = Some(DragContext {
            primary,
            neighbor,
            primary_base,
            neighbor_base,
        });
        true
    }

    /// `dx` is measured from where the gesture started, not from the last
    /// update.
    pub fn update_drag(&mut self, primary: C, dx: Width) -> bool {
        let Some(ctx) = self.drag.filter(|ctx| ctx.primary == primary) else {
            return false;
        };
        let (primary_width, neighbor_width) = ctx.split(
            dx,
            self.catalog.min_width(ctx.primary),
            self.catalog.min_width(ctx.neighbor),
        );
        let surface = self.surface_width;
        self.fractions
            .set(ctx.primary, (primary_width / surface).max(MIN_FRACTION));
        self.fractions
            .set(ctx.neighbor, (neighbor_width / surface).max(MIN_FRACTION));
        self.recompute();
        true
    }

    pub fn end_drag(&mut self) -> bool {
        self.drag.take().is_some()
    }

    /// One-step resize (keyboard): begin, update and end in a single change.
    ///
    /// `false`, with the fractions left as they were, when the minimums leave
    /// no room to move the divider.
    pub fn nudge(&mut self, primary: C, dx: Width) -> bool {
        let fractions = self.fractions.clone();
        let Some(width_before) = self.resolved.get(primary) else {
            return false;
        };
        if !self.begin_drag(primary) {
            return false;
        }
        self.update_drag(primary, dx);
        self.end_drag();

        let moved = self
            .resolved
            .get(primary)
            .is_some_and(|width| (width - width_before).abs() > NUDGE_EPSILON);
        if !moved {
            self.fractions = fractions;
            self.recompute();
        }
        moved
    }

    /// Column whose trailing divider sits at cell `x` of the surface, or up to
    /// `tolerance` cells right of it. The last visible column has no divider.
    pub fn divider_at(&self, x: u16, tolerance: u16) -> Option<C> {
        let cells = self.cell_widths();
        let x = u32::from(x);
        let mut edge: u32 = 0;
        for (column, width) in cells.iter().take(cells.len().saturating_sub(1)) {
            edge += u32::from(*width);
            if edge > 0 && x + 1 >= edge && x < edge + u32::from(tolerance) {
                return Some(*column);
            }
        }
        None
    }

    /// Column covering cell `x` of the surface.
    pub fn column_at(&self, x: u16) -> Option<C> {
        let mut edge: u32 = 0;
        for (column, width) in self.cell_widths() {
            edge += u32::from(width);
            if u32::from(x) < edge {
                return Some(column);
            }
        }
        None
    }

    fn recompute(&mut self) {
        let visible = self.visible.as_slice();
        let inputs: Vec<ColumnInput<C>> = visible
            .iter()
            .zip(self.fractions.active(visible))
            .map(|(&id, share)| ColumnInput {
                id,
                share,
                min_width: self.catalog.min_width(id),
            })
            .collect();
        self.surface_width = surface_width(self.available_width, &inputs);
        self.resolved = resolve(&inputs, self.surface_width);
    }
}

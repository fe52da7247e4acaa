use ledgerview_domain::{ColumnId, Width};

/// State of one continuous resize gesture on the divider between `primary`
/// and the next visible column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragContext<C> {
    pub primary: C,
    pub neighbor: C,
    pub primary_base: Width,
    pub neighbor_base: Width,
}

impl<C: ColumnId> DragContext<C> {
    pub fn combined(&self) -> Width {
        self.primary_base + self.neighbor_base
    }

    /// Widths for a pointer offset of `dx` from where the gesture started.
    ///
    /// The pair's combined width is conserved and neither side drops below
    /// its minimum.
    pub fn split(&self, dx: Width, primary_min: Width, neighbor_min: Width) -> (Width, Width) {
        let combined = self.combined();
        let upper = (combined - neighbor_min).max(primary_min);
        let dx = if dx.is_finite() { dx } else { 0.0 };
        let primary = (self.primary_base + dx).clamp(primary_min, upper);
        (primary, combined - primary)
    }
}

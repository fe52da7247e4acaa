//! Relative column shares.
//!
//! Fractions are relative claims on width, not percentages: only their ratios
//! over the visible set matter. The model keeps the visible set summing to 1
//! and rescales hidden entries by the same factor, so hiding and re-showing a
//! column restores the previous proportions.

use std::collections::BTreeMap;

use ledgerview_domain::{ColumnCatalog, ColumnId, Width};

/// Lower bound written by a drag so a column never collapses to a zero share.
pub const MIN_FRACTION: f64 = 1e-4;

#[derive(Debug, Clone, PartialEq)]
pub struct FractionModel<C: ColumnId> {
    values: BTreeMap<C, f64>,
}

impl<C: ColumnId> Default for FractionModel<C> {
    fn default() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

impl<C: ColumnId> FractionModel<C> {
    /// Shares proportional to each column's default width, normalized over the
    /// default visible set. Hidden-by-default columns get a share on the same
    /// scale so that showing them later behaves like the defaults.
    pub fn defaults(catalog: &ColumnCatalog<C>) -> Self {
        let visible_total: Width = catalog
            .specs()
            .iter()
            .filter(|spec| spec.default_visible || spec.required)
            .map(|spec| spec.default_width)
            .sum();
        let values = catalog
            .specs()
            .iter()
            .map(|spec| (spec.id, spec.default_width / visible_total))
            .collect();
        Self { values }
    }

    /// Invalid and absent entries read as zero.
    pub fn get(&self, column: C) -> f64 {
        self.values.get(&column).copied().map_or(0.0, sanitize)
    }

    pub fn has_share(&self, column: C) -> bool {
        self.get(column) > 0.0
    }

    pub fn set(&mut self, column: C, value: f64) {
        self.values.insert(column, sanitize(value));
    }

    pub fn iter(&self) -> impl Iterator<Item = (C, f64)> + '_ {
        self.values.iter().map(|(column, value)| (*column, *value))
    }

    /// Normalized shares of `visible`, in the given order.
    ///
    /// Falls back to an equal split when the shares sum to zero or overflow.
    pub fn active(&self, visible: &[C]) -> Vec<f64> {
        if visible.is_empty() {
            return Vec::new();
        }
        let total: f64 = visible.iter().map(|column| self.get(*column)).sum();
        if total.is_finite() && total > 0.0 {
            visible
                .iter()
                .map(|column| self.get(*column) / total)
                .collect()
        } else {
            vec![1.0 / visible.len() as f64; visible.len()]
        }
    }

    /// Rescales every entry so the visible shares sum to 1.
    ///
    /// With no usable visible share, the visible columns are reset to an equal
    /// split and hidden entries are left alone.
    pub fn normalize(&mut self, visible: &[C]) {
        let total: f64 = visible.iter().map(|column| self.get(*column)).sum();
        if total.is_finite() && total > 0.0 {
            for value in self.values.values_mut() {
                *value = sanitize(*value) / total;
            }
        } else if !visible.is_empty() {
            let equal = 1.0 / visible.len() as f64;
            for column in visible {
                self.values.insert(*column, equal);
            }
        }
    }

    /// Replaces the visible shares with on-screen widths over `surface`, so
    /// that resolving again reproduces exactly those widths.
    pub fn rebase(&mut self, widths: impl IntoIterator<Item = (C, Width)>, surface: Width) {
        if !(surface.is_finite() && surface > 0.0) {
            return;
        }
        for (column, width) in widths {
            self.set(column, (width / surface).max(MIN_FRACTION));
        }
    }
}

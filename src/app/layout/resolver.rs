//! Fraction → width resolution under per-column minimums.
//!
//! Clamp-and-redistribute: every pass gives each remaining column its share of
//! the remaining budget; columns whose share falls below their minimum are
//! pinned to the minimum and leave the pool. At least one column leaves per
//! pass, so there are at most `n` passes.

use ledgerview_domain::{ColumnId, Width};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnInput<C> {
    pub id: C,
    /// Normalized share over the visible set.
    pub share: f64,
    pub min_width: Width,
}

/// Resolved widths of the visible columns, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedWidths<C> {
    widths: Vec<(C, Width)>,
}

impl<C> Default for ResolvedWidths<C> {
    fn default() -> Self {
        Self { widths: Vec::new() }
    }
}

impl<C: ColumnId> ResolvedWidths<C> {
    pub fn get(&self, column: C) -> Option<Width> {
        self.widths
            .iter()
            .find(|(id, _)| *id == column)
            .map(|(_, width)| *width)
    }

    pub fn iter(&self) -> impl Iterator<Item = (C, Width)> + '_ {
        self.widths.iter().copied()
    }

    pub fn total(&self) -> Width {
        self.widths.iter().map(|(_, width)| width).sum()
    }

    pub fn len(&self) -> usize {
        self.widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    /// Left edge of `column`, measured from the start of the surface.
    pub fn offset_of(&self, column: C) -> Option<Width> {
        let mut offset = 0.0;
        for (id, width) in &self.widths {
            if *id == column {
                return Some(offset);
            }
            offset += width;
        }
        None
    }
}

/// Non-finite and negative widths count as zero.
pub fn sanitize_width(width: Width) -> Width {
    if width.is_finite() && width > 0.0 {
        width
    } else {
        0.0
    }
}

/// Width to lay the table out on: the viewport, widened to the sum of the
/// minimums when it is too narrow (the host then scrolls horizontally).
pub fn surface_width<C>(available: Width, columns: &[ColumnInput<C>]) -> Width {
    let minimums: Width = columns.iter().map(|column| column.min_width).sum();
    sanitize_width(available).max(minimums)
}

pub fn resolve<C: ColumnId>(columns: &[ColumnInput<C>], available: Width) -> ResolvedWidths<C> {
    let mut widths: Vec<Option<Width>> = vec![None; columns.len()];
    let mut remaining: Vec<usize> = (0..columns.len()).collect();
    let mut budget = sanitize_width(available);

    while !remaining.is_empty() {
        let share_sum: f64 = remaining.iter().map(|&i| columns[i].share).sum();
        let proportional = share_sum.is_finite() && share_sum > 0.0;
        let proposed = |i: usize| {
            if proportional {
                budget * columns[i].share / share_sum
            } else {
                budget / remaining.len() as f64
            }
        };

        let clamped: Vec<usize> = remaining
            .iter()
            .copied()
            .filter(|&i| proposed(i) < columns[i].min_width)
            .collect();

        if clamped.is_empty() {
            for &i in &remaining {
                widths[i] = Some(proposed(i));
            }
            break;
        }

        for &i in &clamped {
            widths[i] = Some(columns[i].min_width);
            budget -= columns[i].min_width;
        }
        remaining.retain(|i| !clamped.contains(i));
    }

    ResolvedWidths {
        widths: columns
            .iter()
            .zip(widths)
            .map(|(column, width)| (column.id, width.unwrap_or(column.min_width)))
            .collect(),
    }
}

/// Converts real widths to whole cells by cumulative rounding: the cells sum
/// to the rounded total, each cell is within 1 of its real width, and whole
/// minimums stay satisfied.
pub fn quantize<C: ColumnId>(resolved: &ResolvedWidths<C>) -> Vec<(C, u16)> {
    let mut cells = Vec::with_capacity(resolved.len());
    let mut edge = 0.0;
    let mut previous = 0.0_f64;
    for (column, width) in resolved.iter() {
        edge += width;
        let rounded = edge.round();
        let cell = (rounded - previous).clamp(0.0, f64::from(u16::MAX));
        cells.push((column, cell as u16));
        previous = rounded;
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::test_support::Col;
    use rstest::rstest;

    fn input(id: Col, share: f64, min_width: Width) -> ColumnInput<Col> {
        ColumnInput {
            id,
            share,
            min_width,
        }
    }

    fn three_equal() -> Vec<ColumnInput<Col>> {
        vec![
            input(Col::A, 1.0 / 3.0, 100.0),
            input(Col::B, 1.0 / 3.0, 100.0),
            input(Col::C, 1.0 / 3.0, 100.0),
        ]
    }

    fn assert_close(actual: Width, expected: Width) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    mod water_filling {
        use super::*;

        #[test]
        fn exact_fit_gives_every_column_its_minimum() {
            let resolved = resolve(&three_equal(), 300.0);

            assert_eq!(
                resolved.iter().collect::<Vec<_>>(),
                vec![(Col::A, 100.0), (Col::B, 100.0), (Col::C, 100.0)]
            );
        }

        #[test]
        fn proportional_when_nothing_clamps() {
            let columns = vec![input(Col::A, 0.25, 10.0), input(Col::B, 0.75, 10.0)];

            let resolved = resolve(&columns, 400.0);

            assert_eq!(resolved.get(Col::A), Some(100.0));
            assert_eq!(resolved.get(Col::B), Some(300.0));
        }

        #[test]
        fn clamped_column_releases_budget_to_others() {
            let columns = vec![
                input(Col::A, 0.1, 100.0),
                input(Col::B, 0.45, 100.0),
                input(Col::C, 0.45, 100.0),
            ];

            let resolved = resolve(&columns, 500.0);

            assert_close(resolved.get(Col::A).unwrap(), 100.0);
            assert_close(resolved.get(Col::B).unwrap(), 200.0);
            assert_close(resolved.get(Col::C).unwrap(), 200.0);
        }

        #[test]
        fn cascading_clamps_take_multiple_passes() {
            // pass 1 clamps A (50 < 100); pass 2 clamps B (88.9 < 95)
            let columns = vec![
                input(Col::A, 0.1, 100.0),
                input(Col::B, 0.2, 95.0),
                input(Col::C, 0.7, 50.0),
            ];

            let resolved = resolve(&columns, 500.0);

            assert_close(resolved.get(Col::A).unwrap(), 100.0);
            assert_close(resolved.get(Col::B).unwrap(), 95.0);
            assert_close(resolved.get(Col::C).unwrap(), 305.0);
        }

        #[test]
        fn zero_shares_split_remaining_budget_equally() {
            let columns = vec![input(Col::A, 0.0, 10.0), input(Col::B, 0.0, 10.0)];

            let resolved = resolve(&columns, 100.0);

            assert_eq!(resolved.get(Col::A), Some(50.0));
            assert_eq!(resolved.get(Col::B), Some(50.0));
        }

        #[test]
        fn empty_input_resolves_to_nothing() {
            let resolved = resolve::<Col>(&[], 100.0);

            assert!(resolved.is_empty());
        }
    }

    mod degenerate_width {
        use super::*;

        #[rstest]
        #[case(0.0)]
        #[case(-50.0)]
        #[case(f64::NAN)]
        #[case(f64::INFINITY)]
        fn invalid_width_yields_minimums(#[case] available: Width) {
            let resolved = resolve(&three_equal(), available);

            for (_, width) in resolved.iter() {
                assert_eq!(width, 100.0);
            }
        }

        #[test]
        fn narrow_width_never_goes_below_minimum() {
            let resolved = resolve(&three_equal(), 150.0);

            for (_, width) in resolved.iter() {
                assert_eq!(width, 100.0);
            }
        }
    }

    mod properties {
        use super::*;
        use crate::layout::fraction::MIN_FRACTION;

        #[rstest]
        #[case(300.0)]
        #[case(301.5)]
        #[case(777.0)]
        #[case(4096.0)]
        fn sum_and_minimum_invariants_hold(#[case] available: Width) {
            let columns = vec![
                input(Col::A, 0.05, 100.0),
                input(Col::B, 0.6, 100.0),
                input(Col::C, 0.35, 100.0),
            ];

            let resolved = resolve(&columns, available);

            assert!((resolved.total() - available).abs() < 1e-6);
            for column in &columns {
                assert!(resolved.get(column.id).unwrap() >= column.min_width);
            }
        }

        fn columns(shares: &[f64], minimums: &[Width]) -> Vec<ColumnInput<Col>> {
            Col::ALL
                .iter()
                .zip(shares.iter().zip(minimums))
                .map(|(id, (share, min))| input(*id, *share, *min))
                .collect()
        }

        #[rstest]
        fn widths_fill_the_budget_and_respect_minimums(
            #[values(
                (&[1.0][..], &[40.0][..]),
                (&[0.5, 0.5][..], &[30.0, 90.0][..]),
                (&[0.0, 1.0][..], &[25.0, 25.0][..]),
                (&[0.0, 0.0, 0.0][..], &[10.0, 60.0, 35.0][..]),
                (&[MIN_FRACTION, 0.5, 0.5 - MIN_FRACTION][..], &[80.0, 12.0, 12.0][..]),
                (&[0.1, 0.2, 0.7][..], &[100.0, 95.0, 50.0][..]),
                (&[0.01, 0.02, 0.03, 0.94][..], &[120.0, 110.0, 100.0, 8.0][..]),
                (&[0.4, 0.3, 0.2, 0.1][..], &[5.0, 50.0, 75.0, 150.0][..])
            )]
            set: (&[f64], &[Width]),
            #[values(0.0, 1e-9, 0.5, 37.0, 1000.0)] slack: Width,
        ) {
            let (shares, minimums) = set;
            let columns = columns(shares, minimums);
            let available = minimums.iter().sum::<Width>() + slack;

            let resolved = resolve(&columns, available);

            assert_eq!(resolved.len(), columns.len());
            assert!(
                (resolved.total() - available).abs() < 1e-6,
                "total {} != {available}",
                resolved.total()
            );
            for column in &columns {
                let width = resolved.get(column.id).unwrap();
                assert!(width >= column.min_width - 1e-9, "{:?}: {width}", column.id);
            }
        }

        #[rstest]
        #[case(&[0.1, 0.2, 0.7], &[100.0, 95.0, 50.0], 500.0)]
        #[case(&[0.05, 0.05, 0.9], &[60.0, 70.0, 10.0], 400.0)]
        #[case(&[MIN_FRACTION, 0.3, 0.7 - MIN_FRACTION], &[30.0, 40.0, 40.0], 200.0)]
        fn unclamped_columns_keep_their_share_ratio(
            #[case] shares: &[f64],
            #[case] minimums: &[Width],
            #[case] available: Width,
        ) {
            let columns = columns(shares, minimums);

            let resolved = resolve(&columns, available);

            let free: Vec<(f64, Width)> = columns
                .iter()
                .map(|column| (column.share, resolved.get(column.id).unwrap()))
                .zip(&columns)
                .filter(|((_, width), column)| *width > column.min_width + 1e-9)
                .map(|(pair, _)| pair)
                .collect();
            assert!(!free.is_empty());
            let (first_share, first_width) = free[0];
            for (share, width) in &free[1..] {
                assert_close(width / share, first_width / first_share);
            }
        }

        #[test]
        fn resolving_twice_is_identical() {
            let columns = three_equal();

            assert_eq!(resolve(&columns, 913.0), resolve(&columns, 913.0));
        }
    }

    mod surface {
        use super::*;

        #[test]
        fn widens_to_sum_of_minimums() {
            assert_eq!(surface_width(150.0, &three_equal()), 300.0);
        }

        #[test]
        fn keeps_wider_viewport() {
            assert_eq!(surface_width(640.0, &three_equal()), 640.0);
        }

        #[test]
        fn treats_invalid_viewport_as_zero() {
            assert_eq!(surface_width(f64::NAN, &three_equal()), 300.0);
        }
    }

    mod cells {
        use super::*;

        #[test]
        fn quantize_preserves_rounded_total() {
            let columns = vec![
                input(Col::A, 1.0 / 3.0, 1.0),
                input(Col::B, 1.0 / 3.0, 1.0),
                input(Col::C, 1.0 / 3.0, 1.0),
            ];
            let resolved = resolve(&columns, 100.0);

            let cells = quantize(&resolved);

            assert_eq!(cells.iter().map(|(_, w)| u32::from(*w)).sum::<u32>(), 100);
            for ((_, cell), (_, width)) in cells.iter().zip(resolved.iter()) {
                assert!((f64::from(*cell) - width).abs() <= 1.0);
            }
        }

        #[test]
        fn quantize_keeps_whole_minimums() {
            let columns = vec![input(Col::A, 0.01, 8.0), input(Col::B, 0.99, 8.0)];
            let resolved = resolve(&columns, 33.7);

            let cells = quantize(&resolved);

            assert!(cells.iter().all(|(_, cell)| *cell >= 8));
        }

        #[test]
        fn offset_of_accumulates_preceding_widths() {
            let resolved = resolve(&three_equal(), 600.0);

            assert_eq!(resolved.offset_of(Col::A), Some(0.0));
            assert_close(resolved.offset_of(Col::C).unwrap(), 400.0);
            assert_eq!(resolved.offset_of(Col::D), None);
        }
    }
}

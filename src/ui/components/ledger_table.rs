use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use ledgerview_app::table_pane::TablePane;
use ledgerview_app::tables::{CellAlign, LedgerColumn, LedgerRow};
use ledgerview_domain::FontSize;

use super::scroll_indicator::render_horizontal_scroll_indicator;
use super::text_utils::{clip_cells, fit};
use crate::theme::Theme;

const DIVIDER: &str = "│";

type Segment = (String, Style);

pub struct LedgerTable;

impl LedgerTable {
    pub fn render<C: LedgerColumn, R: LedgerRow<C>>(
        frame: &mut Frame,
        area: Rect,
        pane: &TablePane<C, R>,
        title: &str,
    ) {
        let block = Block::default()
            .title(format!(" {title} ({}) ", pane.rows.len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Theme::TABLE_BORDER));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let start = usize::from(pane.h_offset);
        let width = usize::from(inner.width);
        let mut lines = vec![clip_line(&header_segments(pane), start, width)];

        if pane.rows.is_empty() {
            lines.push(Line::from(Span::styled(
                " No rows",
                Style::default().fg(Theme::TEXT_MUTED),
            )));
        }

        let row_height = usize::from(pane.layout.font_size().row_height().max(1));
        let body_lines = usize::from(inner.height.saturating_sub(1));
        let visible_rows = body_lines / row_height;
        for (index, row) in pane
            .rows
            .iter()
            .enumerate()
            .skip(pane.row_offset)
            .take(visible_rows)
        {
            let selected = index == pane.selected_row;
            lines.push(clip_line(&row_segments(pane, row, selected), start, width));
            for _ in 1..row_height {
                let style = row_style(pane.layout.font_size(), selected);
                lines.push(Line::from(Span::styled(" ".repeat(width), style)));
            }
        }

        frame.render_widget(Paragraph::new(lines), inner);

        render_horizontal_scroll_indicator(
            frame,
            area,
            pane.h_offset,
            inner.width,
            pane.surface_cells(),
        );
    }
}

/// Splits a column's cells into content and its trailing divider. The last
/// column has no divider.
fn content_width(width: u16, last: bool) -> usize {
    if last {
        usize::from(width)
    } else {
        usize::from(width.saturating_sub(1))
    }
}

fn header_segments<C: LedgerColumn, R>(pane: &TablePane<C, R>) -> Vec<Segment> {
    let cells = pane.layout.cell_widths();
    let dragging = pane.layout.drag().map(|ctx| ctx.primary);
    let header = Style::default()
        .bg(Theme::TABLE_HEADER_BG)
        .fg(Theme::TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD);
    let last = cells.len().saturating_sub(1);

    let mut segments = Vec::with_capacity(cells.len() * 2);
    for (index, (column, width)) in cells.iter().enumerate() {
        if *width == 0 {
            continue;
        }
        let spec_title = pane
            .layout
            .catalog()
            .spec(*column)
            .map_or("", |spec| spec.title);
        let label = match pane.layout.sort().direction_for(*column) {
            Some(direction) => format!("{spec_title} {}", direction.arrow()),
            None => spec_title.to_string(),
        };
        let style = if index == pane.selected_column {
            header.fg(Theme::TEXT_ACCENT)
        } else {
            header
        };
        segments.push((fit(&label, content_width(*width, index == last), CellAlign::Left), style));
        if index != last {
            let divider = if dragging == Some(*column) {
                header.fg(Theme::DIVIDER_ACTIVE)
            } else {
                header.fg(Theme::DIVIDER)
            };
            segments.push((DIVIDER.to_string(), divider));
        }
    }
    segments
}

fn row_segments<C: LedgerColumn, R: LedgerRow<C>>(
    pane: &TablePane<C, R>,
    row: &R,
    selected: bool,
) -> Vec<Segment> {
    let cells = pane.layout.cell_widths();
    let style = row_style(pane.layout.font_size(), selected);
    let last = cells.len().saturating_sub(1);

    let mut segments = Vec::with_capacity(cells.len() * 2);
    for (index, (column, width)) in cells.iter().enumerate() {
        if *width == 0 {
            continue;
        }
        let cell_style = if selected && index == pane.selected_column {
            style.add_modifier(Modifier::REVERSED)
        } else {
            style
        };
        let text = fit(&row.cell(*column), content_width(*width, index == last), column.align());
        segments.push((text, cell_style));
        if index != last {
            segments.push((DIVIDER.to_string(), style.fg(Theme::DIVIDER)));
        }
    }
    segments
}

fn row_style(font_size: FontSize, selected: bool) -> Style {
    let mut style = Style::default().fg(Theme::TEXT_PRIMARY);
    if selected {
        style = style.bg(Theme::SELECTED_ROW_BG);
    }
    match font_size {
        FontSize::XSmall => style.add_modifier(Modifier::DIM),
        FontSize::Large | FontSize::XLarge => style.add_modifier(Modifier::BOLD),
        FontSize::Small | FontSize::Medium => style,
    }
}

/// Keeps the part of the surface line that falls in `[start, start + width)`.
fn clip_line(segments: &[Segment], start: usize, width: usize) -> Line<'static> {
    let end = start + width;
    let mut x = 0;
    let mut spans = Vec::new();
    for (text, style) in segments {
        let segment_width = text.width();
        let next = x + segment_width;
        if next > start && x < end {
            let local_start = start.saturating_sub(x);
            let local_width = next.min(end) - x.max(start);
            spans.push(Span::styled(
                clip_cells(text, local_start, local_width),
                *style,
            ));
        }
        x = next;
        if x >= end {
            break;
        }
    }
    Line::from(spans)
}

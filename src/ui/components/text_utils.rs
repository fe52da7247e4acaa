use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use ledgerview_app::tables::CellAlign;

const ELLIPSIS: char = '…';

/// Truncates `text` to at most `width` cells, marking the cut with `…`.
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push(ELLIPSIS);
    out
}

/// Exactly `width` cells: truncated, then padded on the side opposite `align`.
pub fn fit(text: &str, width: usize, align: CellAlign) -> String {
    let text = truncate(text, width);
    let pad = " ".repeat(width.saturating_sub(text.width()));
    match align {
        CellAlign::Left => format!("{text}{pad}"),
        CellAlign::Right => format!("{pad}{text}"),
    }
}

/// The cells of `text` in `[start, start + width)`. A wide character cut by
/// either edge becomes a space.
pub fn clip_cells(text: &str, start: usize, width: usize) -> String {
    let end = start + width;
    let mut out = String::new();
    let mut x = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        let next = x + w;
        if next <= start {
            x = next;
            continue;
        }
        if x >= end {
            break;
        }
        if x < start || next > end {
            let visible = next.min(end) - x.max(start);
            out.push_str(&" ".repeat(visible));
        } else {
            out.push(ch);
        }
        x = next;
    }
    out
}

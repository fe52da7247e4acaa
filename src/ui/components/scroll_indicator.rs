use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::theme::Theme;

/// Render a horizontal scroll indicator over the bottom border of a table
/// block. `area` is the block's outer area; positions are in cells.
pub fn render_horizontal_scroll_indicator(
    frame: &mut Frame,
    area: Rect,
    offset: u16,
    viewport: u16,
    total: u16,
) {
    if total <= viewport || area.height == 0 {
        return;
    }

    let can_scroll_left = offset > 0;
    let can_scroll_right = offset.saturating_add(viewport) < total;

    // Reserve 1 char on each side for the block corners
    let available_width = usize::from(area.width.saturating_sub(2));
    if available_width < 15 {
        return;
    }

    let end = offset.saturating_add(viewport).min(total);
    let position_text = format!("{}-{}/{}", offset + 1, end, total);

    // Format: "< X-Y/Z ───█─── >"
    let fixed_parts_len = 1 + 1 + position_text.len() + 1 + 1 + 1;
    let track_width = available_width.saturating_sub(fixed_parts_len).clamp(5, 40);
    let max_offset = usize::from(total - viewport);
    let scrollbar = build_scrollbar_track(usize::from(offset), max_offset, track_width);

    let arrow_active = Style::default().fg(Theme::SCROLL_ARROW);
    let arrow_inactive = Style::default().fg(Theme::TEXT_MUTED);
    let text_style = Style::default().fg(Theme::SCROLL_ARROW);

    let line = Line::from(vec![
        Span::styled("<", if can_scroll_left { arrow_active } else { arrow_inactive }),
        Span::styled(format!(" {position_text} "), text_style),
        Span::styled(scrollbar, text_style),
        Span::styled(" >", if can_scroll_right { arrow_active } else { arrow_inactive }),
    ]);

    let indicator_area = Rect {
        x: area.x + 1,
        y: area.y + area.height - 1,
        width: (line.width() as u16).min(available_width as u16),
        height: 1,
    };

    frame.render_widget(Paragraph::new(line), indicator_area);
}

fn build_scrollbar_track(position: usize, max_position: usize, width: usize) -> String {
    if max_position == 0 || width < 3 {
        return "─".repeat(width);
    }

    let thumb_size = if width >= 10 { 2 } else { 1 };
    let thumb_pos = (position.min(max_position) * (width - thumb_size)) / max_position;

    (0..width)
        .map(|i| {
            if i >= thumb_pos && i < thumb_pos + thumb_size {
                '█'
            } else {
                '─'
            }
        })
        .collect()
}

use ratatui::Frame;
use ratatui::layout::Constraint;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use ledgerview_app::state::AppState;
use ledgerview_app::table_pane::MenuItem;

use super::overlay::{centered_rect, clear_area};
use crate::theme::Theme;

/// Checklist of the active table's columns.
pub struct ColumnsMenu;

impl ColumnsMenu {
    pub fn render(frame: &mut Frame, state: &AppState) {
        let items = state.active_pane().menu();
        let longest = items
            .iter()
            .map(|item| item.title.len())
            .max()
            .unwrap_or_default() as u16;
        // "> [x] " + title + "  (locked)" + borders
        let width = (longest + 6 + 10 + 2).max(24);
        let height = items.len() as u16 + 2;
        let area = centered_rect(
            frame.area(),
            Constraint::Length(width),
            Constraint::Length(height),
        );

        clear_area(frame, area);

        let block = Block::default()
            .title(format!(" Columns: {} ", state.active.title()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Theme::MODAL_BORDER))
            .style(Style::default().bg(Theme::MODAL_BG));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines: Vec<Line> = items
            .iter()
            .enumerate()
            .map(|(index, item)| Self::item_line(item, index == state.menu_cursor))
            .collect();
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn item_line(item: &MenuItem, highlighted: bool) -> Line<'static> {
        let marker = if highlighted { "> " } else { "  " };
        let check = if item.visible { "[x] " } else { "[ ] " };
        let mut style = Style::default().fg(if item.toggleable {
            Theme::TEXT_PRIMARY
        } else {
            Theme::TEXT_MUTED
        });
        if highlighted {
            style = style.bg(Theme::MENU_SELECTED_BG).add_modifier(Modifier::BOLD);
        }

        let mut spans = vec![
            Span::styled(marker, style.fg(Theme::TEXT_ACCENT)),
            Span::styled(format!("{check}{}", item.title), style),
        ];
        if !item.toggleable && item.visible {
            spans.push(Span::styled(
                "  (locked)",
                Style::default().fg(Theme::TEXT_MUTED),
            ));
        }
        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_columns_are_checked() {
        let item = MenuItem {
            title: "Price",
            visible: true,
            toggleable: true,
        };

        assert_eq!(ColumnsMenu::item_line(&item, false).to_string(), "  [x] Price");
    }

    #[test]
    fn locked_columns_are_marked() {
        let item = MenuItem {
            title: "Account",
            visible: true,
            toggleable: false,
        };

        assert_eq!(
            ColumnsMenu::item_line(&item, true).to_string(),
            "> [x] Account  (locked)"
        );
    }
}

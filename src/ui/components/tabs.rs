use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Tabs as RatatuiTabs};

use ledgerview_app::state::AppState;
use ledgerview_app::tables::TableKind;

use crate::theme::Theme;

pub struct Tabs;

impl Tabs {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let info = Self::info_line(state);
        let info_width = info.width() as u16;
        let [tabs_area, info_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(info_width)]).areas(area);

        let titles = TableKind::ALL.iter().map(|kind| kind.title());
        let selected = TableKind::ALL
            .iter()
            .position(|kind| *kind == state.active)
            .unwrap_or_default();
        let tabs = RatatuiTabs::new(titles)
            .select(selected)
            .style(Style::default().fg(Theme::TEXT_PRIMARY))
            .highlight_style(
                Style::default()
                    .fg(Theme::TEXT_ACCENT)
                    .add_modifier(Modifier::BOLD),
            )
            .divider(" | ");

        frame.render_widget(tabs, tabs_area);
        frame.render_widget(Paragraph::new(info), info_area);
    }

    /// Text size and data source, right-aligned next to the tabs.
    fn info_line(state: &AppState) -> Line<'static> {
        let font_size = state.active_pane().font_size();
        Line::from(vec![
            Span::styled("Text ", Style::default().fg(Theme::TEXT_MUTED)),
            Span::styled(
                font_size.label().to_string(),
                Style::default().fg(Theme::TEXT_ACCENT),
            ),
            Span::styled(
                format!("  {} ", state.source_label),
                Style::default().fg(Theme::TEXT_SECONDARY),
            ),
        ])
    }
}

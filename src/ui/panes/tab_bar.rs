//! Top-level tab strip

use crate::catalog::builtin::{CatalogTab, Catalogs};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

pub fn render_tab_bar(frame: &mut Frame, area: Rect, current: CatalogTab, catalogs: &Catalogs) {
    let titles: Vec<Line> = CatalogTab::ALL
        .iter()
        .map(|&tab| {
            Line::from(format!(
                "{} {} ({})",
                tab.index() + 1,
                tab.title(),
                catalogs.len(tab)
            ))
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(DEFAULT_THEME.border(false))
                .title(" tui-gallery "),
        )
        .select(current.index())
        .style(Style::default().fg(DEFAULT_THEME.muted))
        .highlight_style(
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        )
        .divider("│");
    frame.render_widget(tabs, area);
}

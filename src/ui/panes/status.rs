//! Status bar with breadcrumb and keybindings

use crate::demos::Hint;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status bar at the bottom.
///
/// `breadcrumb` runs from the tab to the visible screen.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    breadcrumb: &[&str],
    message: &str,
    hints: &[Hint],
) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let bar_bg = DEFAULT_THEME.highlight_bg;
    let sep_style = Style::default().bg(bar_bg).fg(DEFAULT_THEME.muted);

    // Left side: where we are, plus the last message
    let mut left_spans = vec![Span::styled(
        format!(" {} ", breadcrumb.join(" › ")),
        Style::default()
            .bg(if breadcrumb.len() > 1 {
                DEFAULT_THEME.secondary
            } else {
                DEFAULT_THEME.primary
            })
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
    )];
    if !message.is_empty() {
        left_spans.push(Span::styled(" | ", sep_style));
        left_spans.push(Span::styled(
            format!("{} ", message),
            Style::default().bg(bar_bg).fg(DEFAULT_THEME.fg),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(left_spans))
            .style(Style::default().bg(bar_bg))
            .alignment(Alignment::Left),
        layout[0],
    );

    // Right side: keybinds
    let key_style = Style::default().bg(DEFAULT_THEME.muted).fg(Color::Black);
    let desc_style = Style::default().bg(bar_bg).fg(DEFAULT_THEME.fg);
    let mut right_spans = Vec::new();
    for (i, (keys, action)) in hints.iter().enumerate() {
        if i > 0 {
            right_spans.push(Span::styled("│", sep_style));
            right_spans.push(Span::styled(" ", desc_style));
        }
        right_spans.push(Span::styled(format!(" {} ", keys), key_style));
        right_spans.push(Span::styled(format!(" {} ", action), desc_style));
    }
    frame.render_widget(
        Paragraph::new(Line::from(right_spans))
            .style(Style::default().bg(bar_bg))
            .alignment(Alignment::Right),
        layout[1],
    );
}

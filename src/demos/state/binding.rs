//! A child editor that writes through a mutable borrow of its parent's state

use crate::demos::{key_span, panel, Demo, Hint};
use crate::ui::theme::DEFAULT_THEME;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub volume: u8,
    pub muted: bool,
}

/// Borrows the parent's profile for the duration of one edit
pub struct VolumeEditor<'a> {
    profile: &'a mut Profile,
}

impl<'a> VolumeEditor<'a> {
    pub fn new(profile: &'a mut Profile) -> Self {
        VolumeEditor { profile }
    }

    pub fn apply(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Right | KeyCode::Char('l') => {
                self.profile.volume = (self.profile.volume + 10).min(100);
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.profile.volume = self.profile.volume.saturating_sub(10);
            }
            KeyCode::Char('m') => self.profile.muted = !self.profile.muted,
            _ => return false,
        }
        true
    }
}

pub struct BindingDemo {
    title: String,
    pub profile: Profile,
}

impl BindingDemo {
    pub fn new(title: String) -> Self {
        BindingDemo {
            title,
            profile: Profile {
                volume: 50,
                muted: false,
            },
        }
    }
}

impl Demo for BindingDemo {
    fn title(&self) -> &str {
        &self.title
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let parent = vec![
            Line::from(vec![
                Span::styled("volume ", Style::default().fg(DEFAULT_THEME.muted)),
                Span::styled(
                    self.profile.volume.to_string(),
                    Style::default()
                        .fg(DEFAULT_THEME.fg)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("muted  ", Style::default().fg(DEFAULT_THEME.muted)),
                Span::styled(
                    self.profile.muted.to_string(),
                    Style::default().fg(if self.profile.muted {
                        DEFAULT_THEME.warning
                    } else {
                        DEFAULT_THEME.fg
                    }),
                ),
            ]),
        ];
        frame.render_widget(
            Paragraph::new(parent).block(panel(&format!("{} · parent", self.title), false)),
            cols[0],
        );

        let filled = (self.profile.volume / 10) as usize;
        let bar = format!("[{}{}]", "█".repeat(filled), " ".repeat(10 - filled));
        let child = vec![
            Line::styled(bar, Style::default().fg(DEFAULT_THEME.primary)),
            Line::raw(""),
            Line::from(vec![
                key_span("←/→"),
                Span::raw(" volume  "),
                key_span("m"),
                Span::raw(" mute"),
            ]),
        ];
        frame.render_widget(Paragraph::new(child).block(panel("child editor", true)), cols[1]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        VolumeEditor::new(&mut self.profile).apply(key.code)
    }

    fn hints(&self) -> &'static [Hint] {
        &[("←/→", "volume"), ("m", "mute")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_child_edits_parent_state() {
        let mut demo = BindingDemo::new("Binding".into());
        for _ in 0..8 {
            demo.handle_key(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE));
        }
        assert_eq!(demo.profile.volume, 100);
        demo.handle_key(KeyEvent::new(KeyCode::Char('m'), KeyModifiers::NONE));
        assert!(demo.profile.muted);
    }

    #[test]
    fn test_volume_floor() {
        let mut profile = Profile {
            volume: 5,
            muted: false,
        };
        assert!(VolumeEditor::new(&mut profile).apply(KeyCode::Left));
        assert_eq!(profile.volume, 0);
        assert!(!VolumeEditor::new(&mut profile).apply(KeyCode::Enter));
    }
}

//! Boolean switches, one of which overrides the others

use crate::demos::{panel, Demo, Hint};
use crate::ui::theme::DEFAULT_THEME;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    AirplaneMode,
    WiFi,
    Bluetooth,
    DarkMode,
}

impl Setting {
    pub const ALL: [Setting; 4] = [
        Setting::AirplaneMode,
        Setting::WiFi,
        Setting::Bluetooth,
        Setting::DarkMode,
    ];

    fn label(self) -> &'static str {
        match self {
            Setting::AirplaneMode => "Airplane Mode",
            Setting::WiFi => "Wi-Fi",
            Setting::Bluetooth => "Bluetooth",
            Setting::DarkMode => "Dark Mode",
        }
    }

    fn is_radio(self) -> bool {
        matches!(self, Setting::WiFi | Setting::Bluetooth)
    }
}

pub struct TogglesDemo {
    title: String,
    values: [bool; 4],
    list_state: ListState,
}

impl TogglesDemo {
    pub fn new(title: String) -> Self {
        TogglesDemo {
            title,
            values: [false, true, true, true],
            list_state: ListState::default().with_selected(Some(0)),
        }
    }

    pub fn is_on(&self, setting: Setting) -> bool {
        self.values[Self::index(setting)]
    }

    fn index(setting: Setting) -> usize {
        Setting::ALL
            .iter()
            .position(|&s| s == setting)
            .unwrap_or_default()
    }

    /// Radios cannot be enabled while airplane mode is on
    pub fn is_enabled(&self, setting: Setting) -> bool {
        !(setting.is_radio() && self.is_on(Setting::AirplaneMode))
    }

    pub fn toggle(&mut self, setting: Setting) {
        if !self.is_enabled(setting) {
            return;
        }
        let i = Self::index(setting);
        self.values[i] = !self.values[i];
        if setting == Setting::AirplaneMode && self.values[i] {
            for radio in Setting::ALL.into_iter().filter(|s| s.is_radio()) {
                self.values[Self::index(radio)] = false;
            }
        }
    }

    fn selected(&self) -> Setting {
        Setting::ALL[self.list_state.selected().unwrap_or(0)]
    }
}

impl Demo for TogglesDemo {
    fn title(&self) -> &str {
        &self.title
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = Setting::ALL
            .iter()
            .map(|&setting| {
                let on = self.is_on(setting);
                let enabled = self.is_enabled(setting);
                let switch = if on { "[ ●]" } else { "[○ ]" };
                let switch_style = if !enabled {
                    Style::default().fg(DEFAULT_THEME.muted)
                } else if on {
                    Style::default().fg(DEFAULT_THEME.success)
                } else {
                    Style::default().fg(DEFAULT_THEME.border_normal)
                };
                let label_style = if enabled {
                    Style::default().fg(DEFAULT_THEME.fg)
                } else {
                    Style::default()
                        .fg(DEFAULT_THEME.muted)
                        .add_modifier(Modifier::DIM)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:<16}", setting.label()), label_style),
                    Span::styled(switch, switch_style),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(panel(&self.title, true))
            .highlight_style(Style::default().bg(DEFAULT_THEME.highlight_bg))
            .highlight_symbol("▶ ");
        frame.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        let last = Setting::ALL.len() - 1;
        let current = self.list_state.selected().unwrap_or(0);
        match key.code {
            KeyCode::Up => self.list_state.select(Some(current.saturating_sub(1))),
            KeyCode::Down => self.list_state.select(Some((current + 1).min(last))),
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle(self.selected()),
            _ => return false,
        }
        true
    }

    fn hints(&self) -> &'static [Hint] {
        &[("↑/↓", "select"), ("⎵", "toggle")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_airplane_mode_turns_radios_off() {
        let mut demo = TogglesDemo::new("Toggle".into());
        assert!(demo.is_on(Setting::WiFi));
        demo.toggle(Setting::AirplaneMode);
        assert!(!demo.is_on(Setting::WiFi));
        assert!(!demo.is_on(Setting::Bluetooth));
        assert!(demo.is_on(Setting::DarkMode));
    }

    #[test]
    fn test_radios_locked_during_airplane_mode() {
        let mut demo = TogglesDemo::new("Toggle".into());
        demo.toggle(Setting::AirplaneMode);
        demo.toggle(Setting::WiFi);
        assert!(!demo.is_on(Setting::WiFi));

        demo.toggle(Setting::AirplaneMode);
        demo.toggle(Setting::WiFi);
        assert!(demo.is_on(Setting::WiFi));
    }
}

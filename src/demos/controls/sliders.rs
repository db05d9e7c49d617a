//! RGB sliders driving a color swatch

use crate::demos::{panel, Demo, Hint};
use crate::ui::theme::DEFAULT_THEME;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    widgets::{Block, Borders, LineGauge, Paragraph},
    Frame,
};

const STEP: u8 = 5;
const COARSE_STEP: u8 = 25;

pub struct SlidersDemo {
    title: String,
    pub channels: [u8; 3],
    pub focused: usize,
}

impl SlidersDemo {
    pub fn new(title: String) -> Self {
        SlidersDemo {
            title,
            channels: [137, 180, 250],
            focused: 0,
        }
    }

    pub fn adjust(&mut self, delta: i16) {
        let value = self.channels[self.focused] as i16 + delta;
        self.channels[self.focused] = value.clamp(0, u8::MAX as i16) as u8;
    }

    pub fn color(&self) -> Color {
        Color::Rgb(self.channels[0], self.channels[1], self.channels[2])
    }
}

impl Demo for SlidersDemo {
    fn title(&self) -> &str {
        &self.title
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = panel(&self.title, true);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Min(3),
            ])
            .split(inner);

        let names = ["Red", "Green", "Blue"];
        let colors = [DEFAULT_THEME.error, DEFAULT_THEME.success, DEFAULT_THEME.primary];
        for i in 0..3 {
            let label_style = if i == self.focused {
                Style::default()
                    .fg(DEFAULT_THEME.border_focused)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            let gauge = LineGauge::default()
                .label(format!("{:<6}{:>3}", names[i], self.channels[i]))
                .style(label_style)
                .filled_style(Style::default().fg(colors[i]))
                .line_set(symbols::line::THICK)
                .ratio(self.channels[i] as f64 / u8::MAX as f64);
            frame.render_widget(gauge, rows[i]);
        }

        let [r, g, b] = self.channels;
        let swatch = Paragraph::new(format!("#{:02X}{:02X}{:02X}", r, g, b))
            .style(Style::default().fg(DEFAULT_THEME.bg).bg(self.color()))
            .block(Block::default().borders(Borders::TOP).title(" Preview "));
        frame.render_widget(swatch, rows[3]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        let step = if key.modifiers.contains(KeyModifiers::SHIFT) {
            COARSE_STEP
        } else {
            STEP
        } as i16;
        match key.code {
            KeyCode::Up => self.focused = self.focused.saturating_sub(1),
            KeyCode::Down => self.focused = (self.focused + 1).min(2),
            KeyCode::Left => self.adjust(-step),
            KeyCode::Right => self.adjust(step),
            _ => return false,
        }
        true
    }

    fn hints(&self) -> &'static [Hint] {
        &[("↑/↓", "channel"), ("←/→", "adjust"), ("⇧", "coarse")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjust_clamps_to_byte_range() {
        let mut demo = SlidersDemo::new("Slider".into());
        demo.adjust(500);
        assert_eq!(demo.channels[0], 255);
        demo.adjust(-1000);
        assert_eq!(demo.channels[0], 0);
    }

    #[test]
    fn test_shift_uses_coarse_step() {
        let mut demo = SlidersDemo::new("Slider".into());
        demo.channels[0] = 100;
        demo.handle_key(KeyEvent::new(KeyCode::Right, KeyModifiers::SHIFT));
        assert_eq!(demo.channels[0], 125);
        demo.handle_key(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE));
        assert_eq!(demo.channels[0], 120);
    }
}

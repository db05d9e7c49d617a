use ratatui::style::{Color, Modifier, Style};

pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub muted: Color,     // Grey
    pub success: Color,   // Green
    pub warning: Color,   // Yellow
    pub error: Color,     // Red
    pub accent: Color,    // Pink
    pub teal: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub highlight_bg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    muted: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    warning: Color::Rgb(249, 226, 175),
    error: Color::Rgb(243, 139, 168),
    accent: Color::Rgb(245, 194, 231),
    teal: Color::Rgb(148, 226, 213),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    highlight_bg: Color::Rgb(50, 50, 70),      // Slightly lighter BG for selection
};

impl Theme {
    /// Named swatches, in display order
    pub fn swatches(&self) -> [(&'static str, Color); 13] {
        [
            ("bg", self.bg),
            ("fg", self.fg),
            ("primary", self.primary),
            ("secondary", self.secondary),
            ("muted", self.muted),
            ("success", self.success),
            ("warning", self.warning),
            ("error", self.error),
            ("accent", self.accent),
            ("teal", self.teal),
            ("border_focused", self.border_focused),
            ("border_normal", self.border_normal),
            ("highlight_bg", self.highlight_bg),
        ]
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(self.border_focused)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.border_normal)
        }
    }

    /// Green → yellow → red for a 0.0..=1.0 load ratio
    pub fn load_color(&self, ratio: f64) -> Color {
        if ratio >= 0.85 {
            self.error
        } else if ratio >= 0.6 {
            self.warning
        } else {
            self.success
        }
    }
}

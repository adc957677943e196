use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub fn track() -> Color {
        Color::DarkGray
    }

    pub fn label(tint: Color) -> Style {
        Style::default().fg(tint).add_modifier(Modifier::BOLD)
    }

    pub fn control(tint: Color) -> Style {
        Style::default().fg(tint)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn status_running() -> Style {
        Style::default().fg(Color::Green).bg(Color::DarkGray)
    }

    pub fn status_idle() -> Style {
        Style::default().fg(Color::Yellow).bg(Color::DarkGray)
    }

    pub fn key_hint() -> Style {
        Style::default().fg(Color::Cyan).bg(Color::DarkGray)
    }
}

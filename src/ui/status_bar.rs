use crate::app::state::AppState;
use crate::timer::TickSource;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const KEY_HINTS: &str = " [space] start/stop  [q] quit ";

pub fn render<T: TickSource>(frame: &mut Frame, area: Rect, state: &AppState<T>) {
    let style = if state.timer.is_running() {
        Theme::status_running()
    } else {
        Theme::status_idle()
    };

    let mut parts: Vec<Span> = vec![Span::styled(format!(" {} ", state.status_line()), style)];

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.chars().count()).sum();
    let remaining = (area.width as usize).saturating_sub(used + KEY_HINTS.len());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(KEY_HINTS, Theme::key_hint()));

    let line = Line::from(parts);
    let paragraph = Paragraph::new(line);
    frame.render_widget(paragraph, area);
}

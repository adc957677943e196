use crate::app::state::WidgetView;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// Play/pause glyph, tinted with the current phase color.
pub fn render(frame: &mut Frame, area: Rect, view: &WidgetView) {
    let button = Paragraph::new(Span::styled(
        format!("[ {} ]", view.control.glyph()),
        Theme::control(view.tint),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(button, area);
}

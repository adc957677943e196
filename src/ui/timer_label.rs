use crate::app::state::WidgetView;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, view: &WidgetView) {
    let label = Paragraph::new(Span::styled(view.label.as_str(), Theme::label(view.tint)))
        .alignment(Alignment::Center);
    frame.render_widget(label, area);
}

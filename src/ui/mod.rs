mod control_button;
mod layout;
mod progress_ring;
mod status_bar;
mod theme;
mod timer_label;

use crate::app::state::AppState;
use crate::timer::TickSource;
use ratatui::prelude::*;
use std::time::Instant;

pub fn render<T: TickSource>(frame: &mut Frame, state: &AppState<T>) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);
    let view = state.view();

    progress_ring::render(
        frame,
        app_layout.ring,
        view.stroke.fraction_at(Instant::now()),
        view.stroke_color,
    );
    timer_label::render(frame, app_layout.label, view);
    control_button::render(frame, app_layout.control, view);
    status_bar::render(frame, app_layout.status_bar, state);
}

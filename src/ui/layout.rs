use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub ring: Rect,
    pub label: Rect,
    pub control: Rect,
    pub status_bar: Rect,
}

/// Terminal cells are roughly twice as tall as they are wide, so a round
/// ring needs twice as many columns as rows.
const CELL_ASPECT: u16 = 2;

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Ring
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = main_chunks[0];
    let status_bar = main_chunks[1];

    let ring = square_in(content);

    // Label sits on the ring's center row, the control a couple of rows
    // below it.
    let center_y = ring.y + ring.height / 2;
    let label = Rect {
        x: ring.x,
        y: center_y,
        width: ring.width,
        height: 1.min(ring.height),
    };
    let control_y = (center_y + 2).min(ring.bottom().saturating_sub(1));
    let control = Rect {
        x: ring.x,
        y: control_y.max(ring.y),
        width: ring.width,
        height: 1.min(ring.height),
    };

    AppLayout {
        ring,
        label,
        control,
        status_bar,
    }
}

/// Largest visually-square rect centered in `area`.
fn square_in(area: Rect) -> Rect {
    let height = area.height.min(area.width / CELL_ASPECT);
    let width = height * CELL_ASPECT;
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

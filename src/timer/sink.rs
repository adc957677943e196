use ratatui::style::Color;

use super::format::StrokeFraction;

/// Icon shown on the single start/stop control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlIcon {
    Play,
    Pause,
}

impl ControlIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            ControlIcon::Play => "▶",
            ControlIcon::Pause => "⏸",
        }
    }
}

/// Everything the engine pushes out. Implemented by the terminal view and by
/// the recording view used in tests.
pub trait TimerView {
    /// Render sink. When `animated` is set the ring should ease linearly from
    /// whatever it currently shows to `fraction`.
    fn set_progress(&mut self, fraction: StrokeFraction, color: Color, animated: bool);

    /// Text sink. Always receives a fixed-width `MM:SS` string.
    fn set_label(&mut self, text: &str);

    /// Tint shared by the label and the control.
    fn set_tint(&mut self, color: Color);

    fn set_control(&mut self, icon: ControlIcon);
}

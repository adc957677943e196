use crate::timer::{
    ControlIcon, PhaseDurations, PomodoroEngine, StrokeFraction, TickSource, TimerView,
};
use ratatui::style::Color;
use std::time::{Duration, Instant};

/// How long the ring takes to ease between two pushed fractions.
pub const STROKE_ANIMATION: Duration = Duration::from_secs(1);

/// Linear ease of the ring fraction from where it was to the latest target.
#[derive(Debug, Clone)]
pub struct StrokeAnimation {
    from: f64,
    to: f64,
    started: Instant,
    duration: Duration,
}

impl StrokeAnimation {
    pub fn at_rest(fraction: StrokeFraction, duration: Duration) -> Self {
        Self {
            from: fraction.get(),
            to: fraction.get(),
            started: Instant::now(),
            duration,
        }
    }

    /// Aim at a new fraction. Animated moves start from whatever is on
    /// screen at `now`; others jump.
    pub fn retarget(&mut self, to: StrokeFraction, animated: bool, now: Instant) {
        self.from = if animated {
            self.fraction_at(now)
        } else {
            to.get()
        };
        self.to = to.get();
        self.started = now;
    }

    pub fn fraction_at(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return self.to;
        }
        let t = now.saturating_duration_since(self.started).as_secs_f64()
            / self.duration.as_secs_f64();
        let t = t.min(1.0);
        self.from + (self.to - self.from) * t
    }

    pub fn is_settled(&self, now: Instant) -> bool {
        self.from == self.to || now.saturating_duration_since(self.started) >= self.duration
    }

    pub fn target(&self) -> f64 {
        self.to
    }
}

/// What the widget currently shows. The engine writes it through
/// [`TimerView`]; the renderer only reads it.
#[derive(Debug, Clone)]
pub struct WidgetView {
    pub stroke: StrokeAnimation,
    pub stroke_color: Color,
    pub tint: Color,
    pub label: String,
    pub control: ControlIcon,
}

impl WidgetView {
    pub fn new() -> Self {
        Self {
            stroke: StrokeAnimation::at_rest(StrokeFraction::EMPTY, STROKE_ANIMATION),
            stroke_color: Color::Reset,
            tint: Color::Reset,
            label: String::new(),
            control: ControlIcon::Play,
        }
    }
}

impl TimerView for WidgetView {
    fn set_progress(&mut self, fraction: StrokeFraction, color: Color, animated: bool) {
        self.stroke.retarget(fraction, animated, Instant::now());
        self.stroke_color = color;
    }

    fn set_label(&mut self, text: &str) {
        self.label.clear();
        self.label.push_str(text);
    }

    fn set_tint(&mut self, color: Color) {
        self.tint = color;
    }

    fn set_control(&mut self, icon: ControlIcon) {
        self.control = icon;
    }
}

pub struct AppState<T: TickSource> {
    pub timer: PomodoroEngine<T, WidgetView>,
    pub should_quit: bool,
    pub dirty: bool,
}

impl<T: TickSource> AppState<T> {
    pub fn new(durations: PhaseDurations, ticker: T) -> Self {
        Self {
            timer: PomodoroEngine::new(durations, ticker, WidgetView::new()),
            should_quit: false,
            dirty: true,
        }
    }

    pub fn view(&self) -> &WidgetView {
        self.timer.view()
    }

    pub fn status_line(&self) -> String {
        let state = if self.timer.is_running() {
            "running"
        } else {
            "idle"
        };
        format!("{} · {}", self.timer.phase(), state)
    }
}

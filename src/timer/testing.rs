//! Deterministic doubles for driving the engine without a runtime or terminal.

use ratatui::style::Color;
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;
use std::time::Duration;

use super::engine::{PhaseChange, PomodoroEngine};
use super::format::StrokeFraction;
use super::sink::{ControlIcon, TimerView};
use super::ticker::{TickHandle, TickId, TickSource};

#[derive(Debug, Default)]
struct ClockState {
    next_id: u64,
    live: BTreeSet<TickId>,
    scheduled: usize,
    last_period: Option<Duration>,
}

/// Shared view of the handles a [`ManualTicker`] has handed out.
#[derive(Debug, Clone, Default)]
pub struct ManualClock(Rc<RefCell<ClockState>>);

impl ManualClock {
    pub fn live(&self) -> Vec<TickId> {
        self.0.borrow().live.iter().copied().collect()
    }

    pub fn scheduled(&self) -> usize {
        self.0.borrow().scheduled
    }

    pub fn last_period(&self) -> Option<Duration> {
        self.0.borrow().last_period
    }
}

pub struct ManualTicker {
    clock: ManualClock,
}

impl ManualTicker {
    pub fn new() -> (Self, ManualClock) {
        let clock = ManualClock::default();
        (
            Self {
                clock: clock.clone(),
            },
            clock,
        )
    }
}

impl TickSource for ManualTicker {
    type Handle = ManualHandle;

    fn schedule(&mut self, period: Duration) -> ManualHandle {
        let mut state = self.clock.0.borrow_mut();
        state.next_id += 1;
        let id = TickId(state.next_id);
        state.live.insert(id);
        state.scheduled += 1;
        state.last_period = Some(period);
        ManualHandle {
            id,
            clock: self.clock.clone(),
        }
    }
}

pub struct ManualHandle {
    id: TickId,
    clock: ManualClock,
}

impl TickHandle for ManualHandle {
    fn id(&self) -> TickId {
        self.id
    }

    fn cancel(self) {
        self.clock.0.borrow_mut().live.remove(&self.id);
    }
}

/// Fires every live handle once per step, the way a real scheduler would.
pub fn advance<V: TimerView>(
    engine: &mut PomodoroEngine<ManualTicker, V>,
    clock: &ManualClock,
    ticks: usize,
) -> Vec<PhaseChange> {
    let mut changes = Vec::new();
    for _ in 0..ticks {
        for id in clock.live() {
            changes.extend(engine.tick(id));
        }
    }
    changes
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressPush {
    pub fraction: f64,
    pub color: Color,
    pub animated: bool,
}

/// Keeps every value the engine pushed, newest last.
#[derive(Debug, Default)]
pub struct RecordingView {
    pub progress: Vec<ProgressPush>,
    pub labels: Vec<String>,
    pub tints: Vec<Color>,
    pub controls: Vec<ControlIcon>,
}

impl RecordingView {
    pub fn label(&self) -> &str {
        self.labels.last().map(String::as_str).unwrap_or_default()
    }

    pub fn tint(&self) -> Option<Color> {
        self.tints.last().copied()
    }

    pub fn stroke(&self) -> Option<&ProgressPush> {
        self.progress.last()
    }

    pub fn control(&self) -> Option<ControlIcon> {
        self.controls.last().copied()
    }
}

impl TimerView for RecordingView {
    fn set_progress(&mut self, fraction: StrokeFraction, color: Color, animated: bool) {
        self.progress.push(ProgressPush {
            fraction: fraction.get(),
            color,
            animated,
        });
    }

    fn set_label(&mut self, text: &str) {
        self.labels.push(text.to_string());
    }

    fn set_tint(&mut self, color: Color) {
        self.tints.push(color);
    }

    fn set_control(&mut self, icon: ControlIcon) {
        self.controls.push(icon);
    }
}

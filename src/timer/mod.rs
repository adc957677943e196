//! Pomodoro timer core: the work/relax state machine and the seams it talks
//! through (tick source, view sinks).

pub mod engine;
pub mod format;
pub mod phase;
pub mod sink;
pub mod ticker;

#[cfg(test)]
pub mod testing;

pub use engine::{PhaseChange, PomodoroEngine, RunState};
pub use format::StrokeFraction;
pub use phase::{DurationError, Phase, PhaseDurations};
pub use sink::{ControlIcon, TimerView};
pub use ticker::{TickId, TickSource, TokioTicker};

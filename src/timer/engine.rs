//! Pomodoro timer engine.
//!
//! A tick-driven state machine alternating between work and relax phases.
//! The engine owns the timer state, the tick handle and the view it pushes
//! presentation values into. It has no thread of its own: the tick source
//! calls back into [`PomodoroEngine::tick`] once per second while running.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> RunningWork <-> RunningRelax -> Idle
//! ```
//!
//! `start` always enters `RunningWork`; a boundary tick swaps phases; `stop`
//! returns to `Idle` with the work phase reloaded. There is no terminal
//! state.

use std::time::Duration;
use tracing::{debug, info, trace};

use super::format::{format_clock, StrokeFraction};
use super::phase::{Phase, PhaseDurations};
use super::sink::{ControlIcon, TimerView};
use super::ticker::{TickHandle, TickId, TickSource};

/// Scheduling period. One tick advances elapsed time by one second.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    RunningWork,
    RunningRelax,
}

/// Emitted by the tick that crosses a phase boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseChange {
    pub from: Phase,
    pub to: Phase,
}

pub struct PomodoroEngine<T: TickSource, V: TimerView> {
    durations: PhaseDurations,
    phase: Phase,
    /// Whole seconds spent in the current phase.
    elapsed_secs: u64,
    /// Present exactly while running.
    handle: Option<T::Handle>,
    ticker: T,
    view: V,
}

impl<T: TickSource, V: TimerView> PomodoroEngine<T, V> {
    /// Create an idle engine and pre-populate the view with the full work
    /// duration.
    pub fn new(durations: PhaseDurations, ticker: T, view: V) -> Self {
        let mut engine = Self {
            durations,
            phase: Phase::Work,
            elapsed_secs: 0,
            handle: None,
            ticker,
            view,
        };
        engine.push_phase_reset();
        engine.view.set_control(ControlIcon::Play);
        engine
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    pub fn run_state(&self) -> RunState {
        match (self.is_running(), self.phase) {
            (false, _) => RunState::Idle,
            (true, Phase::Work) => RunState::RunningWork,
            (true, Phase::Relax) => RunState::RunningRelax,
        }
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    /// Length of the phase currently being counted down.
    pub fn active_secs(&self) -> u64 {
        self.durations.secs(self.phase)
    }

    pub fn remaining_secs(&self) -> u64 {
        self.active_secs().saturating_sub(self.elapsed_secs)
    }

    pub fn progress(&self) -> StrokeFraction {
        StrokeFraction::ratio(self.elapsed_secs, self.active_secs())
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin ticking. Returns `false` without scheduling anything if a tick
    /// handle is already live.
    pub fn start(&mut self) -> bool {
        if self.handle.is_some() {
            debug!("start ignored, timer already running");
            return false;
        }
        let handle = self.ticker.schedule(TICK_PERIOD);
        info!(
            tick_id = handle.id().0,
            phase = %self.phase,
            remaining = %format_clock(self.remaining_secs()),
            "timer started"
        );
        self.handle = Some(handle);
        self.view.set_control(ControlIcon::Pause);
        true
    }

    /// Cancel the tick handle and return to idle with the work phase
    /// reloaded. Returns `false` if the timer was not running.
    pub fn stop(&mut self) -> bool {
        let Some(handle) = self.handle.take() else {
            debug!("stop ignored, timer already idle");
            return false;
        };
        info!(tick_id = handle.id().0, phase = %self.phase, "timer stopped");
        handle.cancel();
        self.phase = Phase::Work;
        self.elapsed_secs = 0;
        self.push_phase_reset();
        self.view.set_control(ControlIcon::Play);
        true
    }

    pub fn toggle(&mut self) {
        if self.is_running() {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Advance by one tick. Ticks from a handle other than the live one are
    /// stale and leave the state untouched.
    pub fn tick(&mut self, id: TickId) -> Option<PhaseChange> {
        match self.handle.as_ref() {
            Some(handle) if handle.id() == id => {}
            _ => {
                trace!(tick_id = id.0, "dropping stale tick");
                return None;
            }
        }

        self.elapsed_secs += 1;
        trace!(elapsed = self.elapsed_secs, phase = %self.phase, "tick");

        if self.elapsed_secs >= self.active_secs() {
            let from = self.phase;
            self.phase = from.toggled();
            self.elapsed_secs = 0;
            self.push_phase_reset();
            info!(%from, to = %self.phase, "phase boundary crossed");
            Some(PhaseChange {
                from,
                to: self.phase,
            })
        } else {
            self.view.set_progress(self.progress(), self.phase.color(), true);
            self.view.set_label(&format_clock(self.remaining_secs()));
            None
        }
    }

    /// Stroke back to empty, label to the full phase length, and the phase
    /// color onto stroke and tint together.
    fn push_phase_reset(&mut self) {
        let color = self.phase.color();
        self.view.set_progress(StrokeFraction::EMPTY, color, false);
        self.view.set_tint(color);
        self.view.set_label(&format_clock(self.remaining_secs()));
    }
}

impl<T: TickSource, V: TimerView> Drop for PomodoroEngine<T, V> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.cancel();
        }
    }
}

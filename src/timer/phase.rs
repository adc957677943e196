use ratatui::style::Color;
use std::fmt;
use thiserror::Error;

/// Longest phase the `MM:SS` label can show without changing width.
pub const MAX_PHASE_SECS: u64 = 99 * 60 + 59;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Work,
    Relax,
}

impl Phase {
    pub fn toggled(self) -> Self {
        match self {
            Phase::Work => Phase::Relax,
            Phase::Relax => Phase::Work,
        }
    }

    /// Stroke color, shared with the label and control tint.
    pub fn color(self) -> Color {
        match self {
            Phase::Work => Color::Green,
            Phase::Relax => Color::Red,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Work => f.write_str("work"),
            Phase::Relax => f.write_str("relax"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DurationError {
    #[error("{phase} duration must be at least one second")]
    Zero { phase: Phase },

    #[error("{phase} duration of {secs}s exceeds the 99:59 display limit")]
    TooLong { phase: Phase, secs: u64 },
}

/// Work and relax lengths in whole seconds, fixed for the engine's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseDurations {
    work_secs: u64,
    relax_secs: u64,
}

impl PhaseDurations {
    pub fn from_secs(work_secs: u64, relax_secs: u64) -> Result<Self, DurationError> {
        validate(Phase::Work, work_secs)?;
        validate(Phase::Relax, relax_secs)?;
        Ok(Self {
            work_secs,
            relax_secs,
        })
    }

    pub fn secs(&self, phase: Phase) -> u64 {
        match phase {
            Phase::Work => self.work_secs,
            Phase::Relax => self.relax_secs,
        }
    }
}

impl Default for PhaseDurations {
    fn default() -> Self {
        Self {
            work_secs: 10,
            relax_secs: 5,
        }
    }
}

fn validate(phase: Phase, secs: u64) -> Result<(), DurationError> {
    if secs == 0 {
        return Err(DurationError::Zero { phase });
    }
    if secs > MAX_PHASE_SECS {
        return Err(DurationError::TooLong { phase, secs });
    }
    Ok(())
}

use crate::timer::TickId;
use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// One period elapsed on the timer's tick handle
    TimerTick(TickId),

    /// Frame tick for UI refresh while the ring is animating
    Frame,
}

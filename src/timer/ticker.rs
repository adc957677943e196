//! Periodic tick sources.
//!
//! The engine never sleeps or spawns on its own. It asks a [`TickSource`] for
//! a handle and the source arranges for `tick(id)` to be called once per
//! period until the handle is cancelled. Every tick carries the [`TickId`] of
//! the handle that produced it, so a tick still queued when its handle is
//! cancelled can be recognised and dropped.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickId(pub u64);

pub trait TickHandle {
    fn id(&self) -> TickId;

    /// Stops the periodic callback. Must not return until no further tick
    /// with this id can be produced.
    fn cancel(self);
}

pub trait TickSource {
    type Handle: TickHandle;

    fn schedule(&mut self, period: Duration) -> Self::Handle;
}

/// Tick source backed by a tokio interval task per handle. Ticks are
/// delivered into the application's event channel, wrapped by `wrap`.
pub struct TokioTicker<E> {
    tx: mpsc::UnboundedSender<E>,
    wrap: fn(TickId) -> E,
    next_id: u64,
}

impl<E> TokioTicker<E> {
    pub fn new(tx: mpsc::UnboundedSender<E>, wrap: fn(TickId) -> E) -> Self {
        Self {
            tx,
            wrap,
            next_id: 0,
        }
    }
}

impl<E: Send + 'static> TickSource for TokioTicker<E> {
    type Handle = TokioTickHandle;

    fn schedule(&mut self, period: Duration) -> TokioTickHandle {
        self.next_id += 1;
        let id = TickId(self.next_id);
        let tx = self.tx.clone();
        let wrap = self.wrap;

        let task = tokio::spawn(async move {
            // First tick one full period after start, not immediately.
            let mut interval = time::interval_at(time::Instant::now() + period, period);
            // A delayed runtime still owes the missed seconds.
            interval.set_missed_tick_behavior(MissedTickBehavior::Burst);
            loop {
                interval.tick().await;
                if tx.send(wrap(id)).is_err() {
                    break;
                }
            }
        });

        TokioTickHandle { id, task }
    }
}

pub struct TokioTickHandle {
    id: TickId,
    task: JoinHandle<()>,
}

impl TickHandle for TokioTickHandle {
    fn id(&self) -> TickId {
        self.id
    }

    fn cancel(self) {
        self.task.abort();
    }
}

impl Drop for TokioTickHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_one_tick_per_period() {
        let (tx, mut rx) = mpsc::unbounded_channel::<TickId>();
        let mut ticker = TokioTicker::new(tx, |id: TickId| id);
        let started = time::Instant::now();

        let handle = ticker.schedule(Duration::from_secs(1));
        for _ in 0..3 {
            assert_eq!(rx.recv().await, Some(handle.id()));
        }
        assert_eq!(started.elapsed(), Duration::from_secs(3));
        handle.cancel();
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_ticks_after_cancel() {
        let (tx, mut rx) = mpsc::unbounded_channel::<TickId>();
        let mut ticker = TokioTicker::new(tx, |id: TickId| id);

        let handle = ticker.schedule(Duration::from_secs(1));
        assert!(rx.recv().await.is_some());
        handle.cancel();

        time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_task() {
        let (tx, mut rx) = mpsc::unbounded_channel::<TickId>();
        let mut ticker = TokioTicker::new(tx, |id: TickId| id);

        drop(ticker.schedule(Duration::from_secs(1)));
        time::sleep(Duration::from_secs(3)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_each_schedule_gets_a_fresh_id() {
        let (tx, _rx) = mpsc::unbounded_channel::<TickId>();
        let mut ticker = TokioTicker::new(tx, |id: TickId| id);

        let first = ticker.schedule(Duration::from_secs(1));
        let second = ticker.schedule(Duration::from_secs(1));
        assert_ne!(first.id(), second.id());
    }
}

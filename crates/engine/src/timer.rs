//! Fall timer
//!
//! Ticks are posted into the same queue as input events, so the consumer
//! never sees the two interleave. Every `start`/`stop` begins a new epoch;
//! a tick carrying an older epoch may still sit in the queue and must be
//! dropped, which is what [`TickControl::accepts`] decides.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::event::Event;

pub trait TickControl {
    /// (Re)start ticking every `interval_ms`; the first tick comes one full
    /// interval from now
    fn start(&mut self, interval_ms: u32);
    fn stop(&mut self);
    /// Whether a tick of `epoch` belongs to the current run
    fn accepts(&self, epoch: u64) -> bool;
}

/// Tokio interval task posting [`Event::Tick`]
pub struct TickTimer {
    handle: Handle,
    tx: UnboundedSender<Event>,
    epoch: u64,
    interval_ms: Option<u32>,
    task: Option<JoinHandle<()>>,
}

impl TickTimer {
    pub fn new(handle: Handle, tx: UnboundedSender<Event>) -> Self {
        Self {
            handle,
            tx,
            epoch: 0,
            interval_ms: None,
            task: None,
        }
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Current period, None while stopped
    pub fn interval_ms(&self) -> Option<u32> {
        self.interval_ms
    }

    fn abort(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl TickControl for TickTimer {
    fn start(&mut self, interval_ms: u32) {
        self.abort();
        self.epoch += 1;
        self.interval_ms = Some(interval_ms);

        let epoch = self.epoch;
        let tx = self.tx.clone();
        let period = Duration::from_millis(u64::from(interval_ms.max(1)));
        self.task = Some(self.handle.spawn(async move {
            let mut ticks = time::interval_at(Instant::now() + period, period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticks.tick().await;
                if tx.send(Event::Tick { epoch }).is_err() {
                    break;
                }
            }
        }));
    }

    fn stop(&mut self) {
        self.abort();
        self.epoch += 1;
        self.interval_ms = None;
    }

    fn accepts(&self, epoch: u64) -> bool {
        self.interval_ms.is_some() && epoch == self.epoch
    }
}

impl Drop for TickTimer {
    fn drop(&mut self) {
        self.abort();
    }
}

/// Timer that never fires on its own; the caller posts ticks by hand.
///
/// Used by tests, benchmarks and headless drivers.
#[derive(Debug, Clone, Default)]
pub struct ManualTicks {
    epoch: u64,
    interval_ms: Option<u32>,
    starts: u32,
}

impl ManualTicks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tick event for the current run
    pub fn tick(&self) -> Event {
        Event::Tick { epoch: self.epoch }
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn interval_ms(&self) -> Option<u32> {
        self.interval_ms
    }

    pub fn is_running(&self) -> bool {
        self.interval_ms.is_some()
    }

    /// Number of `start` calls so far
    pub fn starts(&self) -> u32 {
        self.starts
    }
}

impl TickControl for ManualTicks {
    fn start(&mut self, interval_ms: u32) {
        self.epoch += 1;
        self.interval_ms = Some(interval_ms);
        self.starts += 1;
    }

    fn stop(&mut self) {
        self.epoch += 1;
        self.interval_ms = None;
    }

    fn accepts(&self, epoch: u64) -> bool {
        self.interval_ms.is_some() && epoch == self.epoch
    }
}

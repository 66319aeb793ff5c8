//! Event loop
//!
//! Bridges the synchronous game loop with the tokio timer. The runtime
//! only hosts the tick task and the journal writer; all game state is
//! touched by the thread that calls [`EventLoop::step`].

use tokio::runtime::{Builder, Runtime};
use tokio::sync::mpsc;

use crate::config::GameConfig;
use crate::core::RoundSnapshot;
use crate::error::{EngineError, Result};
use crate::event::Event;
use crate::journal::Journal;
use crate::session::{Flow, Session};
use crate::timer::TickTimer;

/// Producer side of the event channel
pub type EventSender = mpsc::UnboundedSender<Event>;

pub struct EventLoop {
    runtime: Runtime,
    tx: EventSender,
    rx: mpsc::UnboundedReceiver<Event>,
    session: Session<TickTimer>,
}

impl EventLoop {
    pub fn new(config: &GameConfig) -> Result<Self> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("pentris-timer")
            .enable_all()
            .build()?;

        let (tx, rx) = mpsc::unbounded_channel::<Event>();
        let timer = TickTimer::new(runtime.handle().clone(), tx.clone());
        let journal = match config.log_path.as_deref() {
            Some(path) => Journal::open(runtime.handle(), path),
            None => Journal::disabled(),
        };
        let session = Session::new(config.round_config(), timer, journal);

        Ok(Self {
            runtime,
            tx,
            rx,
            session,
        })
    }

    /// Sender for other producers (the input thread)
    pub fn sender(&self) -> EventSender {
        self.tx.clone()
    }

    /// Start the first round's timer
    pub fn start(&mut self) {
        self.session.start();
    }

    /// Block until the next event arrives
    pub fn next_event(&mut self) -> Result<Event> {
        self.rx.blocking_recv().ok_or(EngineError::ChannelClosed)
    }

    /// Wait for one event and apply it
    pub fn step(&mut self) -> Result<Flow> {
        let event = self.next_event()?;
        Ok(self.apply(event))
    }

    pub fn apply(&mut self, event: Event) -> Flow {
        self.session.handle(event)
    }

    pub fn session(&self) -> &Session<TickTimer> {
        &self.session
    }

    pub fn snapshot_into(&self, out: &mut RoundSnapshot) {
        self.session.snapshot_into(out);
    }

    /// Stop the timer and wait for the journal to drain
    pub fn shutdown(self) {
        let Self {
            runtime, session, ..
        } = self;
        let journal = session.finish();
        if let Some(writer) = journal.close() {
            let _ = runtime.block_on(writer);
        }
    }
}

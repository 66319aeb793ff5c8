//! Terminal pentomino runner (default binary).
//!
//! Key events are read on a plain thread and posted into the engine's event
//! channel next to the fall ticks; the main thread applies one event at a
//! time and redraws after each.
//!
//! Settings come from the environment (`PENTRIS_GHOST`, `PENTRIS_SEED`,
//! `PENTRIS_LOG_PATH`).

use std::thread;

use anyhow::Result;
use crossterm::event::{self, KeyEventKind};

use tui_pentris::core::RoundSnapshot;
use tui_pentris::engine::{Event, EventLoop, EventSender, Flow, GameConfig, Session, TickControl};
use tui_pentris::input::{handle_key_event, should_quit};
use tui_pentris::term::{FrameBuffer, GameView, MenuOverlay, TerminalRenderer, Viewport};
use tui_pentris::types::RoundStatus;

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    let mut events = EventLoop::new(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut events);

    // Always try to restore terminal state.
    let _ = term.exit();
    events.shutdown();
    result
}

fn run(term: &mut TerminalRenderer, events: &mut EventLoop) -> Result<()> {
    spawn_input_thread(events.sender())?;
    events.start();

    let view = GameView::default();
    let mut snapshot = RoundSnapshot::default();
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut fb = FrameBuffer::new(w, h);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        events.snapshot_into(&mut snapshot);
        view.render_into(&snapshot, overlay(events.session()), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        let event = events.next_event()?;
        if event == Event::Resize {
            term.invalidate();
        }
        if events.apply(event) == Flow::Exit {
            return Ok(());
        }
    }
}

fn overlay<T: TickControl>(session: &Session<T>) -> MenuOverlay {
    match session.round().status() {
        RoundStatus::Running => MenuOverlay::None,
        RoundStatus::Menu => MenuOverlay::Pause(session.pause_choice()),
        RoundStatus::GameOver => MenuOverlay::GameOver(session.game_over_choice()),
    }
}

/// Forward terminal events until the channel closes.
fn spawn_input_thread(tx: EventSender) -> Result<()> {
    thread::Builder::new()
        .name("pentris-input".into())
        .spawn(move || loop {
            let event = match event::read() {
                Ok(crossterm::event::Event::Key(key))
                    if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                {
                    if should_quit(key) {
                        Event::Quit
                    } else if let Some(input) = handle_key_event(key) {
                        Event::Input(input)
                    } else {
                        continue;
                    }
                }
                Ok(crossterm::event::Event::Resize(..)) => Event::Resize,
                Ok(_) => continue,
                Err(_) => Event::Quit,
            };
            let quit = event == Event::Quit;
            if tx.send(event).is_err() || quit {
                break;
            }
        })?;
    Ok(())
}

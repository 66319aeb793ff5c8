//! Session - one round plus its menus and fall timer
//!
//! Applies events strictly one at a time. Which input map is used depends
//! on the round status:
//!
//! | Status | Keys |
//! |--------|------|
//! | Running | Up rotate, Down/Left/Right move, Space drop, Menu pause |
//! | Menu | Up/Down select, Enter: Play, Restart or Back |
//! | GameOver | Up/Down select, Enter: Restart or Back |
//!
//! The timer is stopped whenever the round leaves Running and restarted at
//! the level interval when it comes back (800ms after a restart).

use crate::core::{Round, RoundConfig, RoundSnapshot, TickOutcome};
use crate::event::Event;
use crate::journal::{Journal, Record};
use crate::timer::TickControl;
use crate::types::{GameInput, GameOverChoice, PauseChoice, RoundStatus};

/// What the caller should do after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// Back / quit: tear the round down
    Exit,
}

pub struct Session<T: TickControl> {
    round: Round,
    timer: T,
    journal: Journal,
    pause_choice: PauseChoice,
    game_over_choice: GameOverChoice,
}

impl<T: TickControl> Session<T> {
    /// Build the round; nothing ticks until [`Session::start`]
    pub fn new(config: RoundConfig, timer: T, journal: Journal) -> Self {
        Self {
            round: Round::new(config),
            timer,
            journal,
            pause_choice: PauseChoice::default(),
            game_over_choice: GameOverChoice::default(),
        }
    }

    pub fn start(&mut self) {
        self.journal_round_start();
        self.timer.start(self.round.fall_interval_ms());
    }

    pub fn handle(&mut self, event: Event) -> Flow {
        match event {
            Event::Tick { epoch } => {
                // Ticks of a stopped or restarted run are stale.
                if self.timer.accepts(epoch) {
                    self.on_tick();
                }
                Flow::Continue
            }
            Event::Input(input) => match self.round.status() {
                RoundStatus::Running => {
                    self.on_running_input(input);
                    Flow::Continue
                }
                RoundStatus::Menu => self.on_menu_input(input),
                RoundStatus::GameOver => self.on_game_over_input(input),
            },
            Event::Resize => Flow::Continue,
            Event::Quit => Flow::Exit,
        }
    }

    fn on_tick(&mut self) {
        match self.round.tick() {
            TickOutcome::Ignored | TickOutcome::Fell => {}
            TickOutcome::Landed(report) => {
                self.timer.stop();
                if report.rows_cleared > 0 {
                    self.journal.record(Record::rows_cleared(&report));
                }
                self.journal_spawn();
                self.timer.start(self.round.fall_interval_ms());
            }
            TickOutcome::GameOver => {
                self.timer.stop();
                self.game_over_choice = GameOverChoice::default();
                self.journal.record(Record::game_over(
                    self.round.score(),
                    self.round.level(),
                    self.round.cleared_rows(),
                ));
                self.journal.record(Record::status_changed(RoundStatus::GameOver));
            }
        }
    }

    fn on_running_input(&mut self, input: GameInput) {
        if input == GameInput::Menu {
            if self.round.pause() {
                self.timer.stop();
                self.pause_choice = PauseChoice::default();
                self.journal.record(Record::status_changed(RoundStatus::Menu));
            }
            return;
        }
        self.round.apply_input(input);
    }

    fn on_menu_input(&mut self, input: GameInput) -> Flow {
        match input {
            GameInput::Up => self.pause_choice = self.pause_choice.prev(),
            GameInput::Down => self.pause_choice = self.pause_choice.next(),
            GameInput::Enter => {
                let choice = std::mem::take(&mut self.pause_choice);
                match choice {
                    PauseChoice::Play => {
                        self.round.resume();
                        self.journal.record(Record::status_changed(RoundStatus::Running));
                        self.timer.start(self.round.fall_interval_ms());
                    }
                    PauseChoice::Restart => self.restart(),
                    PauseChoice::Back => return Flow::Exit,
                }
            }
            _ => {}
        }
        Flow::Continue
    }

    fn on_game_over_input(&mut self, input: GameInput) -> Flow {
        match input {
            GameInput::Up => self.game_over_choice = self.game_over_choice.prev(),
            GameInput::Down => self.game_over_choice = self.game_over_choice.next(),
            GameInput::Enter => {
                let choice = std::mem::take(&mut self.game_over_choice);
                match choice {
                    GameOverChoice::Restart => self.restart(),
                    GameOverChoice::Back => return Flow::Exit,
                }
            }
            _ => {}
        }
        Flow::Continue
    }

    fn restart(&mut self) {
        self.round.restart();
        self.journal_round_start();
        self.timer.start(self.round.fall_interval_ms());
    }

    fn journal_round_start(&self) {
        let config = self.round.config();
        self.journal
            .record(Record::round_started(config.seed, config.ghost_enabled));
        self.journal_spawn();
    }

    fn journal_spawn(&self) {
        let active = self.round.active();
        self.journal.record(Record::piece_spawned(
            active.kind,
            active.rotation,
            self.round.pieces_spawned(),
        ));
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn pause_choice(&self) -> PauseChoice {
        self.pause_choice
    }

    pub fn game_over_choice(&self) -> GameOverChoice {
        self.game_over_choice
    }

    pub fn snapshot_into(&self, out: &mut RoundSnapshot) {
        self.round.snapshot_into(out);
    }

    /// Tear down, handing back the journal so it can be flushed
    pub fn finish(self) -> Journal {
        self.journal
    }
}

use crate::config::GameConfig;
use crate::game::Session;
use crossterm::event::{poll, read};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Instant;

/// Drives a [`Session`]: draws frames at a fixed rate and feeds it input
/// events and timer deadlines in between
#[derive(Clone, Debug)]
pub(crate) struct App {
    session: Session,
    quitting: bool,
}

impl App {
    pub(crate) fn new(config: GameConfig) -> App {
        App {
            session: Session::new(config, Instant::now()),
            quitting: false,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        let frame_period = self.session.config().frame_period();
        let mut next_frame = Instant::now();
        while !self.quitting {
            let now = Instant::now();
            self.session.frame(now);
            terminal.draw(|frame| self.session.draw(frame))?;
            next_frame = (next_frame + frame_period).max(now);
            self.process_input(next_frame)?;
        }
        tracing::info!("Quitting");
        Ok(())
    }

    /// Handle input events and fire timers until it is time to draw the
    /// frame due at `until`
    fn process_input(&mut self, until: Instant) -> io::Result<()> {
        loop {
            let now = Instant::now();
            self.session.run_timers(now);
            let deadline = self
                .session
                .next_deadline()
                .map_or(until, |when| when.min(until));
            let wait = deadline.saturating_duration_since(now);
            if wait.is_zero() || !poll(wait)? {
                if deadline >= until {
                    self.session.run_timers(Instant::now());
                    return Ok(());
                }
                continue;
            }
            if self.session.handle_event(read()?, Instant::now()).is_some() {
                self.quitting = true;
                return Ok(());
            }
        }
    }
}

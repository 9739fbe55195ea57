use crate::command::Command;
use crate::event::{Event, EventSource, TimerId};
use crate::game::{Direction, GameRound};
use crate::menu::Menu;
use crate::options::Options;
use rand::Rng;
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Instant;
use thiserror::Error;

#[derive(Clone, Debug)]
pub(crate) struct App<R = rand::rngs::ThreadRng> {
    state: AppState,
    rng: R,
}

impl<R: Rng> App<R> {
    pub(crate) fn new(options: Options, rng: R) -> App<R> {
        let state = AppState::Menu(Menu::new(options));
        App { state, rng }
    }

    /// Run the control loop until the user quits.
    ///
    /// Each iteration waits for one event and handles it.  The screen is only
    /// redrawn once there are no further events immediately available.
    pub(crate) fn run<B: Backend, E: EventSource>(
        mut self,
        terminal: &mut Terminal<B>,
        events: &mut E,
    ) -> Result<(), LoopError> {
        let timer = events.timer();
        self.draw(terminal, Instant::now())?;
        while !self.quitting() {
            let event = events.next_event()?;
            let redraw = self.handle_event(event, timer, Instant::now())?;
            if redraw && !self.quitting() && !events.has_pending()? {
                self.draw(terminal, Instant::now())?;
            }
        }
        Ok(())
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>, now: Instant) -> io::Result<()> {
        match self.state {
            AppState::Menu(ref menu) => {
                terminal.draw(|frame| frame.render_widget(menu, frame.area()))?;
            }
            AppState::Game(ref round) => {
                terminal.draw(|frame| frame.render_widget(round.view(now), frame.area()))?;
            }
            AppState::Quit => (),
        }
        Ok(())
    }

    /// Handle an event received at time `now`.  Returns `true` if the screen
    /// should be redrawn.
    fn handle_event(
        &mut self,
        event: Event,
        timer: TimerId,
        now: Instant,
    ) -> Result<bool, LoopError> {
        match event {
            Event::Closed => {
                tracing::info!("Terminal closed; quitting");
                self.state = AppState::Quit;
                return Ok(false);
            }
            Event::Key(Command::Escape) => {
                tracing::info!("Escape pressed; quitting");
                self.state = AppState::Quit;
                return Ok(false);
            }
            Event::Tick(id) if id != timer => {
                tracing::error!(expected = %timer, got = %id, "Tick from unknown timer");
                return Err(LoopError::ForeignTimer {
                    expected: timer,
                    got: id,
                });
            }
            _ => (),
        }
        let redraw = match self.state {
            AppState::Menu(ref menu) => {
                if let Event::Key(cmd) = event {
                    self.state = menu.handle_command(cmd, now, &mut self.rng);
                }
                true
            }
            AppState::Game(ref mut round) => match event {
                Event::Tick(_) => {
                    round.tick(&mut self.rng);
                    true
                }
                Event::Key(cmd) => {
                    if let Some(direction) = direction_for(cmd) {
                        round.turn(direction);
                    }
                    false
                }
                _ => true,
            },
            AppState::Quit => false,
        };
        Ok(redraw)
    }

    fn quitting(&self) -> bool {
        matches!(self.state, AppState::Quit)
    }
}

fn direction_for(cmd: Command) -> Option<Direction> {
    match cmd {
        Command::Up => Some(Direction::Up),
        Command::Down => Some(Direction::Down),
        Command::Left => Some(Direction::Left),
        Command::Right => Some(Direction::Right),
        Command::Escape | Command::Other => None,
    }
}

#[derive(Clone, Debug)]
pub(crate) enum AppState {
    Menu(Menu),
    Game(GameRound),
    Quit,
}

#[derive(Debug, Error)]
pub(crate) enum LoopError {
    #[error("received tick from {got}, expected {expected}")]
    ForeignTimer { expected: TimerId, got: TimerId },
    #[error("failed to interact with terminal")]
    Io(#[from] io::Error),
}

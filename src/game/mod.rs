mod direction;
mod grid;
mod queue;
mod snake;
pub(crate) use self::direction::Direction;
pub(crate) use self::grid::{Cell, Grid};
use self::snake::Snake;
use crate::consts;
use crate::options::Options;
use crate::util::center_rect;
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Position, Rect, Size},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Widget},
};
use std::fmt;
use std::time::{Duration, Instant};

/// A single round of play: the snake, the apple it is chasing, and the time
/// at which the round began
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct GameRound {
    grid: Grid,
    snake: Snake,
    apple: Cell,
    started: Instant,
}

impl GameRound {
    /// Start a new round.  The snake consists of just a head at
    /// [`SNAKE_START`][consts::SNAKE_START] facing
    /// [`SNAKE_START_DIRECTION`][consts::SNAKE_START_DIRECTION], and the apple
    /// is at [`APPLE_START`][consts::APPLE_START].  A start position that does
    /// not fit on the configured grid is replaced by the middle of the grid
    /// (for the snake) or a random cell (for the apple).
    pub(crate) fn new<R: Rng + ?Sized>(options: Options, started: Instant, rng: &mut R) -> Self {
        let grid = options.grid;
        let head = if grid.contains(consts::SNAKE_START) {
            consts::SNAKE_START
        } else {
            grid.center()
        };
        let apple = if grid.contains(consts::APPLE_START) {
            consts::APPLE_START
        } else {
            grid.random_cell(rng)
        };
        let snake = Snake::new(
            head,
            consts::SNAKE_START_DIRECTION,
            options.max_snake_length,
            options.max_pending_turns,
        );
        GameRound {
            grid,
            snake,
            apple,
            started,
        }
    }

    /// Advance the round by one tick.
    ///
    /// If the snake's head is currently on the apple, the apple is moved to a
    /// random cell (possibly one occupied by the snake) and the snake grows by
    /// one segment.  The snake then moves.
    pub(crate) fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.snake.head() == self.apple {
            self.apple = self.grid.random_cell(rng);
            tracing::debug!(
                length = self.snake.len(),
                apple = ?self.apple,
                "Apple eaten; placed new apple"
            );
            if let Err(e) = self.snake.grow() {
                tracing::warn!("{e}");
            }
        }
        self.snake.advance();
    }

    /// Queue a turn requested by the player
    pub(crate) fn turn(&mut self, direction: Direction) {
        if let Err(e) = self.snake.queue_turn(direction) {
            tracing::warn!(
                ?direction,
                heading = ?self.snake.direction(),
                pending = self.snake.pending_turns().len(),
                capacity = self.snake.pending_turns().capacity().get(),
                "{e}"
            );
        }
    }

    /// Return the countdown value to show at time `now`, or `None` once the
    /// countdown is over.  This is for display purposes only; the round ticks
    /// and accepts turns regardless.
    pub(crate) fn countdown(&self, now: Instant) -> Option<Countdown> {
        Countdown::after(now.saturating_duration_since(self.started))
    }

    pub(crate) fn snake(&self) -> &Snake {
        &self.snake
    }

    pub(crate) fn apple(&self) -> Cell {
        self.apple
    }

    pub(crate) fn grid(&self) -> Grid {
        self.grid
    }

    /// Return a widget for drawing the round as of time `now`
    pub(crate) fn view(&self, now: Instant) -> GameView<'_> {
        GameView {
            round: self,
            countdown: self.countdown(now),
        }
    }
}

/// The "3, 2, 1, Go!" shown at the start of a round
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Countdown {
    Three,
    Two,
    One,
    Go,
}

impl Countdown {
    fn after(elapsed: Duration) -> Option<Countdown> {
        match elapsed.as_millis() / consts::COUNTDOWN_STEP.as_millis() {
            0 => Some(Countdown::Three),
            1 => Some(Countdown::Two),
            2 => Some(Countdown::One),
            3 => Some(Countdown::Go),
            _ => None,
        }
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Countdown::Three => "3",
            Countdown::Two => "2",
            Countdown::One => "1",
            Countdown::Go => "Go!",
        }
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct GameView<'a> {
    round: &'a GameRound,
    countdown: Option<Countdown>,
}

impl Widget for GameView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [status_area, field_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(area);
        let mut status = Line::default().style(consts::STATUS_BAR_STYLE);
        status.push_span(" Esc: quit");
        if let Some(c) = self.countdown {
            status.push_span("   ");
            status.push_span(Span::styled(c.as_str(), consts::COUNTDOWN_STYLE));
        }
        status.render(status_area, buf);

        let grid = self.round.grid();
        let block_size = Size {
            width: grid.cols.get().saturating_add(2),
            height: grid.rows.get().div_ceil(2).saturating_add(2),
        };
        if field_area.width < block_size.width || field_area.height < block_size.height {
            let [msg_area] = Layout::vertical([Constraint::Length(1)])
                .flex(Flex::Center)
                .areas(field_area);
            Line::from(format!(
                "Enlarge the terminal to at least {}x{}",
                block_size.width,
                block_size.height.saturating_add(1)
            ))
            .centered()
            .render(msg_area, buf);
            return;
        }
        let block_area = center_rect(field_area, block_size);
        let block = Block::bordered();
        let inner = block.inner(block_area);
        block.render(block_area, buf);
        let mut canvas = Canvas::new(inner, buf, grid);
        canvas.clear();
        for &cell in self.round.snake().segments() {
            canvas.paint(cell, consts::SNAKE_COLOR);
        }
        canvas.paint(self.round.apple(), consts::APPLE_COLOR);
    }
}

/// Paints grid cells onto a terminal buffer, two rows of the grid per line of
/// the terminal
#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
    grid: Grid,
}

impl<'a> Canvas<'a> {
    fn new(area: Rect, buf: &'a mut Buffer, grid: Grid) -> Self {
        Canvas { area, buf, grid }
    }

    fn clear(&mut self) {
        for pos in self.area.positions() {
            if let Some(cell) = self.buf.cell_mut(pos) {
                cell.set_symbol(consts::HALF_BLOCK_SYMBOL);
                cell.set_style(
                    Style::reset()
                        .fg(consts::FIELD_COLOR)
                        .bg(consts::FIELD_COLOR),
                );
            }
        }
    }

    /// Color in the grid cell `gc`.  Cells off the grid or outside the
    /// canvas are ignored.
    fn paint(&mut self, gc: Cell, color: Color) {
        if !self.grid.contains(gc) {
            return;
        }
        let (Ok(row), Ok(col)) = (u16::try_from(gc.row), u16::try_from(gc.col)) else {
            return;
        };
        let Some(x) = self.area.x.checked_add(col) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(row / 2) else {
            return;
        };
        let pos = Position { x, y };
        if !self.area.contains(pos) {
            return;
        }
        if let Some(cell) = self.buf.cell_mut(pos) {
            if row % 2 == 0 {
                cell.set_fg(color);
            } else {
                cell.set_bg(color);
            }
        }
    }
}

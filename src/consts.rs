//! Assorted constants & hard-coded configuration
use crate::game::{Cell, Direction};
use ratatui::style::{Color, Modifier, Style};
use std::num::{NonZeroU16, NonZeroUsize};
use std::time::Duration;

/// Default time between movements of the snake
pub(crate) const TICK_PERIOD: Duration = Duration::from_millis(100);

/// Default number of rows in the playing field.  Two rows share a line of the
/// terminal, so with the border and status bar this fills 23 lines.
pub(crate) const GRID_ROWS: NonZeroU16 = NonZeroU16::new(40).expect("40 is nonzero");

/// Default number of columns in the playing field; 80 with the border
pub(crate) const GRID_COLS: NonZeroU16 = NonZeroU16::new(78).expect("78 is nonzero");

/// Default maximum number of segments in the snake, head included
pub(crate) const MAX_SNAKE_LENGTH: NonZeroUsize = NonZeroUsize::new(200).expect("200 is nonzero");

/// Default maximum number of turns that may be waiting to be applied
pub(crate) const MAX_PENDING_TURNS: NonZeroUsize = NonZeroUsize::new(10).expect("10 is nonzero");

/// Where the snake's head is placed at the start of a round
pub(crate) const SNAKE_START: Cell = Cell::new(13, 15);

/// The direction the snake faces at the start of a round
pub(crate) const SNAKE_START_DIRECTION: Direction = Direction::Down;

/// Where the apple is placed at the start of a round
pub(crate) const APPLE_START: Cell = Cell::new(20, 22);

/// How long each step of the pre-game countdown is shown
pub(crate) const COUNTDOWN_STEP: Duration = Duration::from_secs(1);

/// Glyph for a terminal cell covering two grid rows, of which the upper half
/// takes the foreground color and the lower half the background color
pub(crate) const HALF_BLOCK_SYMBOL: &str = "▀";

/// Color of empty grid cells
pub(crate) const FIELD_COLOR: Color = Color::Black;

/// Color of the snake's segments
pub(crate) const SNAKE_COLOR: Color = Color::Rgb(0, 255, 50);

/// Color of the apple
pub(crate) const APPLE_COLOR: Color = Color::Rgb(255, 0, 50);

/// Style for the status bar at the top of the game screen
pub(crate) const STATUS_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for the countdown text
pub(crate) const COUNTDOWN_STYLE: Style = Style::new()
    .fg(Color::Yellow)
    .add_modifier(Modifier::BOLD);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the title on the menu screen
pub(crate) const TITLE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

use crate::consts;
use crate::game::Grid;
use serde::Deserialize;
use std::num::{NonZeroU16, NonZeroUsize};
use std::time::Duration;
use thiserror::Error;

/// Gameplay settings that remain fixed for the life of the program
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(try_from = "RawOptions")]
pub(crate) struct Options {
    /// Time between movements of the snake
    pub(crate) tick_period: Duration,

    /// Dimensions of the playing field
    pub(crate) grid: Grid,

    /// Maximum number of segments in the snake, head included
    pub(crate) max_snake_length: NonZeroUsize,

    /// Maximum number of turns that may be waiting to be applied
    pub(crate) max_pending_turns: NonZeroUsize,
}

impl Default for Options {
    fn default() -> Options {
        Options {
            tick_period: consts::TICK_PERIOD,
            grid: Grid::new(consts::GRID_ROWS, consts::GRID_COLS),
            max_snake_length: consts::MAX_SNAKE_LENGTH,
            max_pending_turns: consts::MAX_PENDING_TURNS,
        }
    }
}

/// [`Options`] as written in the configuration file
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
struct RawOptions {
    tick_period_ms: u64,
    rows: u16,
    cols: u16,
    max_snake_length: usize,
    max_pending_turns: usize,
}

impl Default for RawOptions {
    fn default() -> RawOptions {
        let opts = Options::default();
        RawOptions {
            tick_period_ms: u64::try_from(opts.tick_period.as_millis()).unwrap_or(u64::MAX),
            rows: opts.grid.rows.get(),
            cols: opts.grid.cols.get(),
            max_snake_length: opts.max_snake_length.get(),
            max_pending_turns: opts.max_pending_turns.get(),
        }
    }
}

impl TryFrom<RawOptions> for Options {
    type Error = OptionsError;

    fn try_from(value: RawOptions) -> Result<Options, OptionsError> {
        if value.tick_period_ms == 0 {
            return Err(OptionsError::Zero("tick-period-ms"));
        }
        let rows = NonZeroU16::new(value.rows).ok_or(OptionsError::Zero("rows"))?;
        let cols = NonZeroU16::new(value.cols).ok_or(OptionsError::Zero("cols"))?;
        let max_snake_length = NonZeroUsize::new(value.max_snake_length)
            .ok_or(OptionsError::Zero("max-snake-length"))?;
        let max_pending_turns = NonZeroUsize::new(value.max_pending_turns)
            .ok_or(OptionsError::Zero("max-pending-turns"))?;
        Ok(Options {
            tick_period: Duration::from_millis(value.tick_period_ms),
            grid: Grid::new(rows, cols),
            max_snake_length,
            max_pending_turns,
        })
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum OptionsError {
    #[error("{0} must be greater than zero")]
    Zero(&'static str),
}

use super::direction::Direction;
use std::collections::VecDeque;
use std::num::NonZeroUsize;
use thiserror::Error;

/// A bounded first-in, first-out buffer of turns requested by the player that
/// have not yet been applied to the snake.
///
/// Key presses can arrive at any time, but the snake only changes direction
/// once per tick; buffering the requests means that quickly pressing two keys
/// in a row executes both turns, in order, over the following ticks.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct TurnQueue {
    /// Allocated with room for exactly `capacity` items and never grown
    turns: VecDeque<Direction>,
    capacity: NonZeroUsize,
}

impl TurnQueue {
    pub(crate) fn new(capacity: NonZeroUsize) -> TurnQueue {
        TurnQueue {
            turns: VecDeque::with_capacity(capacity.get()),
            capacity,
        }
    }

    /// Append a turn to the back of the queue.  If the queue is already full,
    /// the turn is dropped and an error is returned.
    pub(crate) fn push(&mut self, turn: Direction) -> Result<(), QueueFull> {
        if self.turns.len() >= self.capacity().get() {
            return Err(QueueFull(self.capacity()));
        }
        self.turns.push_back(turn);
        Ok(())
    }

    /// Remove & return the turn at the front of the queue
    pub(crate) fn pop(&mut self) -> Option<Direction> {
        self.turns.pop_front()
    }

    pub(crate) fn len(&self) -> usize {
        self.turns.len()
    }

    /// The maximum number of turns the queue can hold at once
    pub(crate) fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("pending turn buffer is full ({0} turns); disregarding turn")]
pub(crate) struct QueueFull(NonZeroUsize);

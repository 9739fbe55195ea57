use super::direction::Direction;
use super::grid::Cell;
use super::queue::{QueueFull, TurnQueue};
use std::num::NonZeroUsize;
use thiserror::Error;

/// The snake's body, heading, and pending turns.
///
/// The body lives in an arena allocated once at the maximum length; only the
/// first `len` entries are meaningful.  `segments[0]` is the head.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    segments: Box<[Cell]>,

    /// The number of valid entries in `segments`; always at least 1
    len: usize,

    /// The direction in which the snake is currently moving
    direction: Direction,

    /// Turns requested by the player but not yet applied
    turns: TurnQueue,
}

impl Snake {
    /// Create a new snake consisting of just a head at `head`, facing in
    /// `direction`, that can grow up to `max_len` segments and buffer up to
    /// `max_pending` turns.
    pub(crate) fn new(
        head: Cell,
        direction: Direction,
        max_len: NonZeroUsize,
        max_pending: NonZeroUsize,
    ) -> Snake {
        Snake {
            segments: vec![head; max_len.get()].into_boxed_slice(),
            len: 1,
            direction,
            turns: TurnQueue::new(max_pending),
        }
    }

    /// Return the position of the snake's head
    pub(crate) fn head(&self) -> Cell {
        self.segments[0]
    }

    /// Return the positions of the snake's segments, head first
    pub(crate) fn segments(&self) -> &[Cell] {
        &self.segments[..self.len]
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn direction(&self) -> Direction {
        self.direction
    }

    pub(crate) fn pending_turns(&self) -> &TurnQueue {
        &self.turns
    }

    /// Request that the snake turn to face `direction`.  The turn takes effect
    /// on a later call to [`Snake::advance()`].
    pub(crate) fn queue_turn(&mut self, direction: Direction) -> Result<(), QueueFull> {
        self.turns.push(direction)
    }

    /// Move the snake forwards one cell.
    ///
    /// At most one pending turn is applied first; a turn directly opposite
    /// the current direction is discarded.  Each segment after the head then
    /// takes the position the segment in front of it had before this call,
    /// and finally the head steps once in the current direction.
    pub(crate) fn advance(&mut self) {
        if let Some(turn) = self.turns.pop() {
            if turn != self.direction.reverse() {
                self.direction = turn;
            }
        }
        let body = &mut self.segments[..self.len];
        // Overlapping copy: behaves as if copying from the tail end forwards,
        // so every segment receives its predecessor's old value.
        body.copy_within(..self.len - 1, 1);
        if let Some(head) = body.first_mut() {
            *head = self.direction.step(*head);
        }
    }

    /// Add one segment to the end of the snake.  The new segment starts out
    /// on the same cell as the current last segment and separates from it on
    /// the next call to [`Snake::advance()`].
    pub(crate) fn grow(&mut self) -> Result<(), SnakeFull> {
        if self.len >= self.segments.len() {
            return Err(SnakeFull(self.segments.len()));
        }
        self.segments[self.len] = self.segments[self.len - 1];
        self.len += 1;
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("snake has reached its maximum length of {0} segments")]
pub(crate) struct SnakeFull(usize);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn snake(head: Cell, direction: Direction, max_len: usize) -> Snake {
        Snake::new(
            head,
            direction,
            NonZeroUsize::new(max_len).expect("max_len should be nonzero"),
            NonZeroUsize::new(10).expect("10 should be nonzero"),
        )
    }

    /// Build a snake with the given segments, head first
    fn snake_with_body(segments: &[Cell], direction: Direction, max_len: usize) -> Snake {
        let mut s = snake(segments[0], direction, max_len);
        s.segments[..segments.len()].copy_from_slice(segments);
        s.len = segments.len();
        s
    }

    #[test]
    fn new_snake() {
        let s = snake(Cell::new(13, 15), Direction::Down, 200);
        assert_eq!(s.head(), Cell::new(13, 15));
        assert_eq!(s.segments(), [Cell::new(13, 15)]);
        assert_eq!(s.len(), 1);
        assert_eq!(s.segments.len(), 200);
        assert_eq!(s.direction(), Direction::Down);
        assert_eq!(s.pending_turns().len(), 0);
    }

    #[test]
    fn advance_head_only() {
        let mut s = snake(Cell::new(13, 15), Direction::Down, 200);
        s.advance();
        assert_eq!(s.segments(), [Cell::new(14, 15)]);
        s.advance();
        assert_eq!(s.segments(), [Cell::new(15, 15)]);
    }

    #[test]
    fn advance_shifts_body() {
        let mut s = snake_with_body(
            &[
                Cell::new(5, 5),
                Cell::new(5, 4),
                Cell::new(5, 3),
                Cell::new(4, 3),
            ],
            Direction::Right,
            200,
        );
        s.advance();
        assert_eq!(
            s.segments(),
            [
                Cell::new(5, 6),
                Cell::new(5, 5),
                Cell::new(5, 4),
                Cell::new(5, 3),
            ]
        );
    }

    #[test]
    fn segments_follow_head_history() {
        let mut s = snake_with_body(&[Cell::new(10, 10); 5], Direction::Right, 200);
        let turns = [
            Direction::Up,
            Direction::Up,
            Direction::Left,
            Direction::Left,
            Direction::Down,
            Direction::Left,
            Direction::Up,
            Direction::Right,
            Direction::Up,
        ];
        let mut history = vec![s.head()];
        for &turn in &turns {
            s.queue_turn(turn).expect("queue should have room");
            s.advance();
            history.push(s.head());
        }
        let n = history.len() - 1;
        for (i, &seg) in s.segments().iter().enumerate() {
            assert_eq!(seg, history[n - i], "segment {i}");
        }
    }

    #[rstest]
    #[case(Direction::Up, Direction::Down)]
    #[case(Direction::Down, Direction::Up)]
    #[case(Direction::Left, Direction::Right)]
    #[case(Direction::Right, Direction::Left)]
    fn reversal_is_discarded(#[case] heading: Direction, #[case] turn: Direction) {
        let mut s = snake(Cell::new(20, 20), heading, 200);
        s.queue_turn(turn).expect("queue should have room");
        s.advance();
        assert_eq!(s.direction(), heading);
        assert_eq!(s.head(), heading.step(Cell::new(20, 20)));
        assert_eq!(s.pending_turns().len(), 0);
    }

    #[test]
    fn one_turn_per_advance() {
        let mut s = snake(Cell::new(20, 20), Direction::Down, 200);
        s.queue_turn(Direction::Left).expect("queue should have room");
        s.queue_turn(Direction::Up).expect("queue should have room");
        s.advance();
        assert_eq!(s.direction(), Direction::Left);
        assert_eq!(s.head(), Cell::new(20, 19));
        assert_eq!(s.pending_turns().len(), 1);
        s.advance();
        assert_eq!(s.direction(), Direction::Up);
        assert_eq!(s.head(), Cell::new(19, 19));
    }

    #[test]
    fn reversal_checked_against_committed_direction() {
        // The discarded Right leaves Left committed, so Up is accepted.
        let mut s = snake(Cell::new(20, 20), Direction::Left, 200);
        s.queue_turn(Direction::Right).expect("queue should have room");
        s.queue_turn(Direction::Up).expect("queue should have room");
        s.advance();
        assert_eq!(s.direction(), Direction::Left);
        s.advance();
        assert_eq!(s.direction(), Direction::Up);
        assert_eq!(s.head(), Cell::new(19, 19));
    }

    #[test]
    fn queue_turn_overflow() {
        let mut s = snake(Cell::new(20, 20), Direction::Down, 200);
        for _ in 0..10 {
            s.queue_turn(Direction::Left).expect("queue should have room");
        }
        assert!(s.queue_turn(Direction::Right).is_err());
        assert_eq!(s.pending_turns().len(), 10);
    }

    #[test]
    fn grow_duplicates_last_segment() {
        let mut s = snake_with_body(
            &[Cell::new(5, 5), Cell::new(4, 5), Cell::new(3, 5)],
            Direction::Down,
            200,
        );
        assert_eq!(s.grow(), Ok(()));
        assert_eq!(s.len(), 4);
        assert_eq!(
            s.segments(),
            [
                Cell::new(5, 5),
                Cell::new(4, 5),
                Cell::new(3, 5),
                Cell::new(3, 5),
            ]
        );
        s.advance();
        assert_eq!(
            s.segments(),
            [
                Cell::new(6, 5),
                Cell::new(5, 5),
                Cell::new(4, 5),
                Cell::new(3, 5),
            ]
        );
    }

    #[test]
    fn grow_head_only() {
        let mut s = snake(Cell::new(13, 15), Direction::Down, 200);
        assert_eq!(s.grow(), Ok(()));
        assert_eq!(s.segments(), [Cell::new(13, 15), Cell::new(13, 15)]);
        s.advance();
        assert_eq!(s.segments(), [Cell::new(14, 15), Cell::new(13, 15)]);
    }

    #[test]
    fn grow_at_capacity() {
        let mut s = snake(Cell::new(13, 15), Direction::Down, 3);
        assert_eq!(s.grow(), Ok(()));
        assert_eq!(s.grow(), Ok(()));
        assert_eq!(s.len(), 3);
        let e = s.grow().expect_err("growing past max_len should fail");
        assert_eq!(
            e.to_string(),
            "snake has reached its maximum length of 3 segments"
        );
        assert_eq!(s.len(), 3);
        assert_eq!(s.segments(), [Cell::new(13, 15); 3]);
    }

    #[test]
    fn max_len_one_cannot_grow() {
        let mut s = snake(Cell::new(0, 0), Direction::Right, 1);
        assert!(s.grow().is_err());
        s.advance();
        assert_eq!(s.segments(), [Cell::new(0, 1)]);
    }
}

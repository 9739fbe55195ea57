use crate::command::Command;
use crossterm::event::{poll, read, Event as TermEvent, KeyCode, KeyModifiers};
use std::fmt;
use std::io;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{Duration, Instant};

/// An input to the application's control loop
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Event {
    /// A timer fired
    Tick(TimerId),

    /// The user pressed a key
    Key(Command),

    /// The screen needs to be redrawn, e.g., because the terminal was resized
    Redraw,

    /// The user asked for the program to close
    Closed,
}

impl Event {
    /// Convert a terminal event to an [`Event`].  Returns `None` for events
    /// the application does not care about.
    pub(crate) fn from_terminal(event: TermEvent) -> Option<Event> {
        if matches!(event, TermEvent::Resize(..)) {
            return Some(Event::Redraw);
        }
        let key = event.as_key_press_event()?;
        if key.modifiers == KeyModifiers::CONTROL && matches!(key.code, KeyCode::Char('c' | 'd'))
        {
            Some(Event::Closed)
        } else {
            Some(Event::Key(Command::from_key_event(key)))
        }
    }
}

/// Identifier distinguishing one timer from another
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct TimerId(u32);

impl TimerId {
    /// Return an ID not previously returned by this function
    pub(crate) fn fresh() -> TimerId {
        static NEXT: AtomicU32 = AtomicU32::new(0);
        TimerId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer #{}", self.0)
    }
}

/// A source of [`Event`]s
pub(crate) trait EventSource {
    /// The ID of the timer whose ticks drive the game
    fn timer(&self) -> TimerId;

    /// Block until the next event is available and return it
    fn next_event(&mut self) -> io::Result<Event>;

    /// Return `true` if a call to `next_event()` would return immediately
    fn has_pending(&mut self) -> io::Result<bool>;
}

/// A fixed-rate timer that is polled rather than run on its own thread
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Timer {
    id: TimerId,
    period: Duration,
    next_tick: Instant,
}

impl Timer {
    fn new(period: Duration, now: Instant) -> Timer {
        Timer {
            id: TimerId::fresh(),
            period,
            next_tick: now + period,
        }
    }

    /// Return how long until the timer next fires
    fn remaining(&self, now: Instant) -> Duration {
        self.next_tick.saturating_duration_since(now)
    }

    /// Schedule the tick after the current one.  If the timer has fallen more
    /// than a whole period behind, missed ticks are skipped.
    fn fire(&mut self, now: Instant) {
        self.next_tick += self.period;
        if self.next_tick <= now {
            self.next_tick = now + self.period;
        }
    }
}

/// Events read from the terminal, interleaved with ticks of a timer
#[derive(Debug)]
pub(crate) struct TerminalEvents {
    timer: Timer,

    /// An event read by `has_pending()` that has not yet been returned
    buffered: Option<Event>,
}

impl TerminalEvents {
    pub(crate) fn new(tick_period: Duration) -> TerminalEvents {
        TerminalEvents {
            timer: Timer::new(tick_period, Instant::now()),
            buffered: None,
        }
    }
}

impl EventSource for TerminalEvents {
    fn timer(&self) -> TimerId {
        self.timer.id
    }

    fn next_event(&mut self) -> io::Result<Event> {
        if let Some(ev) = self.buffered.take() {
            return Ok(ev);
        }
        loop {
            let wait = self.timer.remaining(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                self.timer.fire(Instant::now());
                return Ok(Event::Tick(self.timer.id));
            }
            if let Some(ev) = Event::from_terminal(read()?) {
                return Ok(ev);
            }
        }
    }

    fn has_pending(&mut self) -> io::Result<bool> {
        if self.buffered.is_some() {
            return Ok(true);
        }
        // Discard events that would be ignored anyway so that they don't
        // hold up redrawing.
        while poll(Duration::ZERO)? {
            if let Some(ev) = Event::from_terminal(read()?) {
                self.buffered = Some(ev);
                return Ok(true);
            }
        }
        Ok(self.timer.remaining(Instant::now()).is_zero())
    }
}

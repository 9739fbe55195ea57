use crate::app::AppState;
use crate::command::Command;
use crate::consts;
use crate::game::GameRound;
use crate::options::Options;
use crate::util::center_rect;
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect, Size},
    text::{Line, Span, Text},
    widgets::Widget,
};
use std::time::Instant;

/// The screen shown before play begins
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Menu {
    options: Options,
}

impl Menu {
    const WIDTH: u16 = 30;
    const HEIGHT: u16 = 10;

    pub(crate) fn new(options: Options) -> Menu {
        Menu { options }
    }

    /// Handle a key press.  Any key other than Escape starts a new round
    /// begun at time `now`.
    pub(crate) fn handle_command<R: Rng + ?Sized>(
        &self,
        cmd: Command,
        now: Instant,
        rng: &mut R,
    ) -> AppState {
        if cmd == Command::Escape {
            AppState::Quit
        } else {
            tracing::info!("Starting new round");
            AppState::Game(GameRound::new(self.options, now, rng))
        }
    }
}

impl Widget for &Menu {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = Text::from_iter([
            Line::styled("G R I D S N A K E", consts::TITLE_STYLE),
            Line::default(),
            Line::raw("Steer with:"),
            Line::raw("← ↓ ↑ →"),
            Line::raw("or h j k l, or a s w d"),
            Line::default(),
            Line::raw("Eat the apple to grow!"),
            Line::default(),
            Line::from_iter([
                Span::raw("Press any key to start, "),
                Span::styled("Esc", consts::KEY_STYLE),
            ]),
            Line::raw("to quit"),
        ])
        .alignment(Alignment::Center);
        let area = center_rect(
            area,
            Size {
                width: Menu::WIDTH,
                height: Menu::HEIGHT,
            },
        );
        text.render(area, buf);
    }
}

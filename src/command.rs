use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press means to the game
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Up,
    Down,
    Left,
    Right,
    Escape,
    /// Any other key
    Other,
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Command {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        if !normal_modifiers.contains(ev.modifiers) {
            return Command::Other;
        }
        match ev.code {
            KeyCode::Char('w' | 'k') | KeyCode::Up => Command::Up,
            KeyCode::Char('s' | 'j') | KeyCode::Down => Command::Down,
            KeyCode::Char('a' | 'h') | KeyCode::Left => Command::Left,
            KeyCode::Char('d' | 'l') | KeyCode::Right => Command::Right,
            KeyCode::Esc => Command::Escape,
            _ => Command::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(KeyCode::Up, Command::Up)]
    #[case(KeyCode::Char('w'), Command::Up)]
    #[case(KeyCode::Char('k'), Command::Up)]
    #[case(KeyCode::Down, Command::Down)]
    #[case(KeyCode::Char('s'), Command::Down)]
    #[case(KeyCode::Char('j'), Command::Down)]
    #[case(KeyCode::Left, Command::Left)]
    #[case(KeyCode::Char('a'), Command::Left)]
    #[case(KeyCode::Char('h'), Command::Left)]
    #[case(KeyCode::Right, Command::Right)]
    #[case(KeyCode::Char('d'), Command::Right)]
    #[case(KeyCode::Char('l'), Command::Right)]
    #[case(KeyCode::Esc, Command::Escape)]
    #[case(KeyCode::Enter, Command::Other)]
    #[case(KeyCode::Char('x'), Command::Other)]
    fn test_from_key_event(#[case] code: KeyCode, #[case] cmd: Command) {
        assert_eq!(Command::from_key_event(KeyEvent::from(code)), cmd);
    }

    #[test]
    fn control_modified_keys_are_other() {
        let ev = KeyEvent::new(KeyCode::Left, KeyModifiers::CONTROL);
        assert_eq!(Command::from_key_event(ev), Command::Other);
    }
}

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::Result;

/// Exit requests seen since the last poll.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSet {
    pub quit: bool,
    pub escape: bool,
}

impl InputSet {
    pub fn exit_requested(&self) -> bool {
        self.quit || self.escape
    }

    pub fn record(&mut self, event: &Event) {
        if let Event::Key(key) = event {
            self.record_key(key);
        }
    }

    fn record_key(&mut self, key: &KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        match key.code {
            KeyCode::Esc => self.escape = true,
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit = true,
            _ => {}
        }
    }
}

pub trait InputSource {
    /// Never blocks.
    fn poll(&mut self) -> Result<InputSet>;
}

/// Keyboard input from the controlling terminal.
pub struct TerminalInput;

impl InputSource for TerminalInput {
    fn poll(&mut self) -> Result<InputSet> {
        let mut set = InputSet::default();
        while event::poll(Duration::ZERO)? {
            set.record(&event::read()?);
        }
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn maps_exit_keys() {
        let mut set = InputSet::default();
        set.record(&key(KeyCode::Char('x'), KeyModifiers::NONE));
        assert!(!set.exit_requested());

        set.record(&key(KeyCode::Esc, KeyModifiers::NONE));
        assert!(set.escape && !set.quit);

        let mut set = InputSet::default();
        set.record(&key(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(set.quit);

        let mut set = InputSet::default();
        set.record(&key(KeyCode::Char('c'), KeyModifiers::NONE));
        assert!(!set.exit_requested());
    }

    #[test]
    fn ignores_non_key_events() {
        let mut set = InputSet::default();
        set.record(&Event::Resize(80, 24));
        set.record(&Event::FocusLost);
        assert_eq!(set, InputSet::default());
    }
}

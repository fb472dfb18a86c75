use crossterm::event::{read, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::tty::IsTty;
use modeplan_core::KeyPrompt;
use std::io::stdin;

pub fn stdin_is_tty() -> bool {
    stdin().is_tty()
}

/// Raw-mode single-key reader for the interactive pause between stride
/// levels. Reports no key source when stdin is not a terminal, which makes
/// the search disable further interaction.
pub struct TerminalPrompt;

impl KeyPrompt for TerminalPrompt {
    fn wait_for_key(&mut self) -> Option<char> {
        if !stdin_is_tty() || enable_raw_mode().is_err() {
            return None;
        }
        let key = loop {
            match read() {
                Ok(Event::Key(event)) if event.kind == KeyEventKind::Press => {
                    if let KeyCode::Char(c) = event.code {
                        break Some(c);
                    }
                }
                Ok(_) => continue,
                Err(_) => break None,
            }
        };
        let _ = disable_raw_mode();
        key
    }
}

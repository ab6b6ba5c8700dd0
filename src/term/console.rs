extern crate mortal;
use crate::mach::{Host, BREAK};
use mortal::{Event, Key, PrepareConfig, PrepareState, Terminal};
use std::collections::VecDeque;
use std::io;
use std::time::Duration;

/// Raw terminal host. Keys arrive one at a time without local echo;
/// the interpreter does its own echo and editing.
pub struct Console {
    terminal: Terminal,
    state: Option<PrepareState>,
    pending: VecDeque<u8>,
}

impl Console {
    pub fn new() -> io::Result<Console> {
        let terminal = Terminal::new()?;
        let state = terminal.prepare(PrepareConfig::default())?;
        Ok(Console {
            terminal,
            state: Some(state),
            pending: VecDeque::new(),
        })
    }

    /// Wait up to `timeout` for a key and queue it as a byte.
    fn poll(&mut self, timeout: Option<Duration>) -> io::Result<()> {
        if let Some(Event::Key(key)) = self.terminal.read_event(timeout)? {
            if let Some(ch) = key_byte(key)? {
                self.pending.push_back(ch);
            }
        }
        Ok(())
    }
}

fn key_byte(key: Key) -> io::Result<Option<u8>> {
    Ok(match key {
        Key::Char(ch) if ch.is_ascii() => Some(ch as u8),
        Key::Enter => Some(b'\r'),
        Key::Backspace => Some(0x08),
        Key::Delete => Some(0x7f),
        Key::Tab => Some(b'\t'),
        Key::Ctrl('d') => {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"))
        }
        Key::Ctrl('c') => Some(BREAK),
        Key::Ctrl(ch) if ch.is_ascii_alphabetic() => Some(ch.to_ascii_lowercase() as u8 & 0x1f),
        _ => None,
    })
}

impl Host for Console {
    fn read_char(&mut self) -> io::Result<u8> {
        loop {
            if let Some(ch) = self.pending.pop_front() {
                return Ok(ch);
            }
            self.poll(None)?;
        }
    }

    fn has_input(&mut self) -> io::Result<bool> {
        if self.pending.is_empty() {
            self.poll(Some(Duration::from_millis(0)))?;
        }
        Ok(!self.pending.is_empty())
    }

    fn write_char(&mut self, ch: u8) -> io::Result<()> {
        match ch {
            b'\n' => self.terminal.write_str("\r\n"),
            ch => {
                let mut buf = [0; 4];
                self.terminal.write_str(char::from(ch).encode_utf8(&mut buf))
            }
        }
    }

    fn write_bytes(&mut self, s: &[u8]) -> io::Result<()> {
        let text: String = s
            .iter()
            .map(|&ch| match ch {
                b'\n' => "\r\n".to_string(),
                ch => char::from(ch).to_string(),
            })
            .collect();
        self.terminal.write_str(&text)
    }
}

impl Drop for Console {
    fn drop(&mut self) {
        if let Some(state) = self.state.take() {
            if let Err(error) = self.terminal.restore(state) {
                log::warn!("terminal restore failed: {}", error);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_bytes() {
        assert_eq!(key_byte(Key::Char('a')).unwrap(), Some(b'a'));
        assert_eq!(key_byte(Key::Enter).unwrap(), Some(b'\r'));
        assert_eq!(key_byte(Key::Backspace).unwrap(), Some(0x08));
        assert_eq!(key_byte(Key::Ctrl('c')).unwrap(), Some(BREAK));
        assert_eq!(key_byte(Key::Ctrl('g')).unwrap(), Some(0x07));
        assert_eq!(key_byte(Key::Char('é')).unwrap(), None);
        assert_eq!(
            key_byte(Key::Ctrl('d')).unwrap_err().kind(),
            io::ErrorKind::UnexpectedEof
        );
    }
}

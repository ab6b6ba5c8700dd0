use std::collections::VecDeque;
use std::io;

/// Ctrl-C, which breaks a running program.
pub const BREAK: u8 = 0x03;

/// ## Host collaborator
///
/// Character I/O for the interpreter. All line editing, echo and output
/// formatting happen in the interpreter; the host only moves bytes.

pub trait Host {
    /// Block until a character arrives.
    fn read_char(&mut self) -> io::Result<u8>;

    /// Non-blocking check for a character waiting to be read.
    fn has_input(&mut self) -> io::Result<bool>;

    fn write_char(&mut self, ch: u8) -> io::Result<()>;

    fn write_bytes(&mut self, s: &[u8]) -> io::Result<()> {
        for &ch in s {
            self.write_char(ch)?;
        }
        Ok(())
    }
}

/// In-memory host. Input is queued up front and output is collected.
///
/// Only a queued break counts as pending input, so answers queued for
/// `INPUT` are not swallowed by the break check between statements.
#[derive(Debug, Default)]
pub struct Script {
    input: VecDeque<u8>,
    output: Vec<u8>,
}

impl Script {
    pub fn new() -> Script {
        Script::default()
    }

    /// Queue one line of input, terminated as if ENTER was pressed.
    pub fn type_line(&mut self, s: &str) {
        self.input.extend(s.bytes());
        self.input.push_back(b'\r');
    }

    pub fn type_bytes(&mut self, s: &[u8]) {
        self.input.extend(s.iter().copied());
    }

    pub fn type_break(&mut self) {
        self.input.push_back(BREAK);
    }

    /// Everything written so far, clearing the record.
    pub fn take_output(&mut self) -> String {
        let s = String::from_utf8_lossy(&self.output).into_owned();
        self.output.clear();
        s
    }
}

impl Host for Script {
    fn read_char(&mut self) -> io::Result<u8> {
        self.input
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }

    fn has_input(&mut self) -> io::Result<bool> {
        Ok(self.input.front() == Some(&BREAK))
    }

    fn write_char(&mut self, ch: u8) -> io::Result<()> {
        self.output.push(ch);
        Ok(())
    }
}

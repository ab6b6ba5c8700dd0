use super::{Host, Program, BREAK};
use crate::error;
use crate::lang::{normalize, Column, Error, ErrorCode, LineNumber, Scanner, LINE_MARKER};
use rand::{rngs::StdRng, SeedableRng};
use std::io;

const BELL: u8 = 0x07;
const BACKSPACE: u8 = 0x08;
const DELETE: u8 = 0x7f;
const CR: u8 = b'\r';

/// Longest line that can be typed. With at least one digit of line
/// number it still fits a record whose length is one byte.
const MAX_ENTRY_LEN: usize = 252;

/// ## Interpreter configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Size of the program buffer in bytes.
    pub ram_size: usize,
    /// Control stack capacity, counted in `FOR` frames.
    pub stack_frames: usize,
    /// Echo typed characters back to the host.
    pub echo: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            ram_size: 19 * 1024,
            stack_frames: 5,
            echo: true,
        }
    }
}

/// What the interpreter is waiting on after a line is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Ready,
    Bye,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum State {
    ColdStart,
    WarmRestart,
    Prompt,
    Direct,
    LineExec,
    Bye,
}

/// Where execution goes after a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Flow {
    /// Past any `:` to the next statement, or the next line at the end.
    Statement,
    /// Skip the rest of this line.
    NextLine,
    /// Start of the line at `current_line`.
    Line,
    Restart(State),
}

pub(super) enum Halt {
    Error(Error),
    Io(io::Error),
}

impl From<Error> for Halt {
    fn from(error: Error) -> Halt {
        Halt::Error(error)
    }
}

impl From<io::Error> for Halt {
    fn from(error: io::Error) -> Halt {
        Halt::Io(error)
    }
}

/// ## Interpreter
///
/// Owns the program buffer and the interpreter registers: the line being
/// executed (`None` in direct mode) and the scan position.

pub struct Runtime {
    pub(super) program: Program,
    pub(super) current_line: Option<Column>,
    pub(super) txtpos: Column,
    /// Start of the direct-mode line being executed. `INPUT` must not
    /// type over it.
    pub(super) direct_text: Option<Column>,
    pub(super) rng: StdRng,
    echo: bool,
}

impl Default for Runtime {
    fn default() -> Runtime {
        Runtime::new(Config::default())
    }
}

impl Runtime {
    pub fn new(config: Config) -> Runtime {
        let mut runtime = Runtime {
            program: Program::new(config.ram_size, config.stack_frames),
            current_line: None,
            txtpos: 0,
            direct_text: None,
            rng: StdRng::seed_from_u64(0),
            echo: config.echo,
        };
        runtime.cold_start();
        runtime
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn variable(&self, name: char) -> Option<i16> {
        super::Var::from_char(name).map(|var| self.program.fetch(var))
    }

    /// Greet the host and run the prompt loop until `BYE`.
    pub fn run<H: Host>(&mut self, host: &mut H) -> io::Result<()> {
        let mut state = self.drive(host, State::ColdStart)?;
        while state == State::Prompt {
            self.direct_text = None;
            self.read_line(host, b'>')?;
            state = self.accept(host)?;
            state = self.drive(host, state)?;
        }
        Ok(())
    }

    /// Submit one line as if it had been typed at the prompt, then run
    /// whatever it starts until the interpreter wants another line.
    pub fn enter<H: Host>(&mut self, host: &mut H, line: &str) -> io::Result<Event> {
        self.direct_text = None;
        let start = self.program.entry_start();
        let room = self.entry_limit().saturating_sub(start);
        let text: Vec<u8> = line
            .bytes()
            .take_while(|&ch| ch != CR && ch != LINE_MARKER)
            .take(room)
            .collect();
        self.program.text_mut(start)[..text.len()].copy_from_slice(&text);
        self.program.put(start + text.len(), LINE_MARKER);
        let state = self.accept(host)?;
        match self.drive(host, state)? {
            State::Bye => Ok(Event::Bye),
            _ => Ok(Event::Ready),
        }
    }

    fn drive<H: Host>(&mut self, host: &mut H, mut state: State) -> io::Result<State> {
        loop {
            state = match state {
                State::Prompt | State::Bye => return Ok(state),
                State::ColdStart => {
                    self.cold_start();
                    let banner = format!("TinyBasic Plus v{}", env!("CARGO_PKG_VERSION"));
                    print_line(host, banner.as_bytes())?;
                    print_free(host, self.program.free())?;
                    State::WarmRestart
                }
                State::WarmRestart => {
                    self.warm_restart();
                    print_line(host, b"OK")?;
                    State::Prompt
                }
                State::Direct => {
                    if Scanner::new(self.program.ram(), self.txtpos).at_end_of_line() {
                        State::Prompt
                    } else {
                        self.execute(host)?
                    }
                }
                State::LineExec => match self.current_line {
                    Some(addr) if addr < self.program.program_end() => {
                        self.txtpos = Program::text_start(addr);
                        self.execute(host)?
                    }
                    _ => State::WarmRestart,
                },
            }
        }
    }

    fn cold_start(&mut self) {
        log::info!("cold start, {} bytes", self.program.len());
        self.program.clear();
        self.rng = StdRng::seed_from_u64(0);
        self.warm_restart();
    }

    fn warm_restart(&mut self) {
        self.current_line = None;
        self.direct_text = None;
        self.program.clear_stack();
    }

    /// Run statements from `txtpos` until control leaves the line.
    fn execute<H: Host>(&mut self, host: &mut H) -> io::Result<State> {
        let mut flow = None;
        loop {
            flow = match flow {
                Some(Flow::Statement) => {
                    let mut scan = Scanner::new(self.program.ram(), self.txtpos);
                    while scan.peek() == b':' {
                        scan.advance();
                    }
                    scan.ignore_blanks();
                    let at_end = scan.at_end_of_line();
                    self.txtpos = scan.position();
                    if at_end {
                        Some(Flow::NextLine)
                    } else {
                        None
                    }
                }
                Some(Flow::NextLine) => {
                    return match self.current_line {
                        None => Ok(State::Prompt),
                        Some(addr) => {
                            self.current_line = Some(self.program.next_line(addr));
                            Ok(State::LineExec)
                        }
                    };
                }
                Some(Flow::Line) => return Ok(State::LineExec),
                Some(Flow::Restart(state)) => return Ok(state),
                None => {
                    if self.break_requested(host)? {
                        print_line(host, b"break!")?;
                        return Ok(State::WarmRestart);
                    }
                    match self.statement(host) {
                        Ok(flow) => Some(flow),
                        Err(Halt::Io(error)) => return Err(error),
                        Err(Halt::Error(error)) => return self.report(host, error),
                    }
                }
            }
        }
    }

    fn break_requested<H: Host>(&mut self, host: &mut H) -> io::Result<bool> {
        if host.has_input()? {
            return Ok(host.read_char()? == BREAK);
        }
        Ok(false)
    }

    /// Take the line just typed: store it if it is numbered, otherwise
    /// get ready to execute it directly.
    fn accept<H: Host>(&mut self, host: &mut H) -> io::Result<State> {
        let start = self.program.entry_start();
        normalize(self.program.text_mut(start));
        let staged = self.program.stage(start);
        let mut scan = Scanner::new(self.program.ram(), staged);
        let number = scan.line_number();
        scan.ignore_blanks();
        let body = scan.position();
        self.current_line = None;
        match number {
            0 => {
                self.txtpos = body;
                self.direct_text = Some(staged);
                Ok(State::Direct)
            }
            LineNumber::MAX => {
                let error = error!(IllegalFunctionCall, ..body; "INVALID LINE NUMBER");
                self.report(host, error)
            }
            _ => match self.program.insert_staged(number, body) {
                Ok(()) => Ok(State::Prompt),
                Err(error) => self.report(host, error),
            },
        }
    }

    /// Read one line into the free gap above the program with simple
    /// editing. The line ends with `LINE_MARKER` at the entry start.
    pub(super) fn read_line<H: Host>(&mut self, host: &mut H, prompt: u8) -> io::Result<()> {
        host.write_char(prompt)?;
        let start = self.program.entry_start();
        let limit = self.entry_limit();
        let mut pos = start;
        loop {
            match host.read_char()? {
                CR | LINE_MARKER => {
                    if self.echo {
                        newline(host)?;
                    }
                    self.program.put(pos, LINE_MARKER);
                    return Ok(());
                }
                BACKSPACE | DELETE => {
                    if pos > start {
                        pos -= 1;
                        if self.echo {
                            host.write_bytes(b"\x08 \x08")?;
                        }
                    }
                }
                ch if ch < b' ' && ch != b'\t' => {}
                ch => {
                    if pos >= limit {
                        host.write_char(BELL)?;
                    } else {
                        self.program.put(pos, ch);
                        pos += 1;
                        if self.echo {
                            host.write_char(ch)?;
                        }
                    }
                }
            }
        }
    }

    fn entry_limit(&self) -> Column {
        let start = self.program.entry_start();
        let mut limit = self.program.entry_limit().min(start + MAX_ENTRY_LEN);
        if let Some(direct) = self.direct_text {
            limit = limit.min(direct.saturating_sub(1));
        }
        limit
    }

    fn report<H: Host>(&mut self, host: &mut H, error: Error) -> io::Result<State> {
        log::debug!("{:?} in {:?}", error, self.current_line);
        match error.code() {
            ErrorCode::SyntaxError => {
                host.write_bytes(error.to_string().as_bytes())?;
                host.write_char(b' ')?;
                if let Some(line) = self.current_line.and_then(|addr| self.program.line_at(addr)) {
                    let start = self.current_line.map_or(0, Program::text_start);
                    host.write_bytes(line.number().to_string().as_bytes())?;
                    host.write_char(b' ')?;
                    for (i, &ch) in line.text().iter().enumerate() {
                        let ch = if start + i == error.column() { b'^' } else { ch };
                        host.write_char(ch)?;
                    }
                }
                newline(host)?;
                self.current_line = None;
                Ok(State::Prompt)
            }
            ErrorCode::IllegalFunctionCall => {
                print_line(host, error.to_string().as_bytes())?;
                self.current_line = None;
                Ok(State::Prompt)
            }
            ErrorCode::OutOfMemory => {
                print_line(host, error.to_string().as_bytes())?;
                Ok(State::WarmRestart)
            }
        }
    }
}

pub(super) fn newline<H: Host>(host: &mut H) -> io::Result<()> {
    host.write_char(LINE_MARKER)
}

pub(super) fn print_line<H: Host>(host: &mut H, s: &[u8]) -> io::Result<()> {
    host.write_bytes(s)?;
    newline(host)
}

pub(super) fn print_num<H: Host>(host: &mut H, num: i16) -> io::Result<()> {
    host.write_bytes(num.to_string().as_bytes())
}

pub(super) fn print_free<H: Host>(host: &mut H, free: usize) -> io::Result<()> {
    host.write_bytes(free.to_string().as_bytes())?;
    print_line(host, b" bytes free.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mach::Script;

    fn quiet() -> Runtime {
        Runtime::new(Config {
            echo: false,
            ..Config::default()
        })
    }

    #[test]
    fn test_run_greets_and_exits() {
        let mut r = quiet();
        let mut host = Script::new();
        host.type_line("BYE");
        r.run(&mut host).unwrap();
        let out = host.take_output();
        assert!(out.starts_with("TinyBasic Plus v"));
        assert!(out.contains(" bytes free.\nOK\n>"));
    }

    #[test]
    fn test_run_stops_on_exhausted_input() {
        let mut r = quiet();
        let mut host = Script::new();
        host.type_line("PRINT 1");
        let e = r.run(&mut host).unwrap_err();
        assert_eq!(e.kind(), io::ErrorKind::UnexpectedEof);
        assert!(host.take_output().ends_with("OK\n>1\n>"));
    }

    #[test]
    fn test_backspace_edits_line() {
        let mut r = Runtime::default();
        let mut host = Script::new();
        host.type_bytes(b"PRINT 12\x083\r");
        host.type_line("BYE");
        r.run(&mut host).unwrap();
        let out = host.take_output();
        assert!(out.contains(">PRINT 12\x08 \x083\n13\n>BYE\n"));
    }

    #[test]
    fn test_entry_is_bounded() {
        let mut r = quiet();
        let mut host = Script::new();
        host.type_bytes(&[b'9'; 400]);
        host.type_bytes(b"\r");
        host.type_line("BYE");
        r.run(&mut host).unwrap();
        let out = host.take_output();
        assert!(out.contains('\x07'));
        assert!(r.program().is_empty());
    }

    #[test]
    fn test_line_number_sentinel() {
        let mut r = quiet();
        let mut host = Script::new();
        assert_eq!(r.enter(&mut host, "65535 PRINT 1").unwrap(), Event::Ready);
        assert_eq!(host.take_output(), "How?\n");
        assert!(r.program().is_empty());
    }

    #[test]
    fn test_bye() {
        let mut r = quiet();
        let mut host = Script::new();
        assert_eq!(r.enter(&mut host, "BYE").unwrap(), Event::Bye);
    }
}

use super::runtime::{newline, print_free, print_line, print_num, Flow, Halt, State};
use super::{Evaluator, Frame, Host, Runtime, Var};
use crate::error;
use crate::lang::{normalize, Error, ErrorCode, Scanner, Step, To, Word};
use rand::{rngs::StdRng, SeedableRng};

type Result<T> = std::result::Result<T, Halt>;

/// ## Statements
///
/// Each handler starts with `txtpos` just past its keyword and leaves it
/// where the next statement may begin.

impl Runtime {
    pub(super) fn statement<H: Host>(&mut self, host: &mut H) -> Result<Flow> {
        let mut scan = self.scanner();
        let word = scan.scan::<Word>();
        self.txtpos = scan.position();
        log::trace!("{:?} at {}", word, self.txtpos);
        match word {
            None | Some(Word::Let) => self.assign(),
            Some(Word::List) => self.list(host),
            Some(Word::Load) | Some(Word::Save) => Ok(Flow::NextLine),
            Some(Word::Rem1) | Some(Word::Rem2) => Ok(Flow::NextLine),
            Some(Word::New) => self.new_program(),
            Some(Word::Run) => self.run_program(),
            Some(Word::Next) => self.next(),
            Some(Word::If) => self.branch(),
            Some(Word::Goto) => self.goto(),
            Some(Word::Gosub) => self.gosub(),
            Some(Word::Return) => self.gosub_return(),
            Some(Word::For) => self.for_loop(),
            Some(Word::Input) => self.input(host),
            Some(Word::Print1) | Some(Word::Print2) => self.print(host),
            Some(Word::Poke) => self.poke(),
            Some(Word::Stop) | Some(Word::End) => self.end(),
            Some(Word::Bye) => Ok(Flow::Restart(State::Bye)),
            Some(Word::Mem) => {
                print_free(host, self.program.free())?;
                Ok(Flow::Statement)
            }
            Some(Word::Rseed) => self.rseed(),
        }
    }

    fn scanner(&self) -> Scanner<'_> {
        Scanner::new(self.program.ram(), self.txtpos)
    }

    fn expression(&mut self) -> std::result::Result<i16, Error> {
        let scan = Scanner::new(self.program.ram(), self.txtpos);
        let mut eval = Evaluator::new(scan, &self.program, &mut self.rng);
        let result = eval.expression();
        self.txtpos = eval.position();
        result
    }

    /// An expression whose failure is reported as `How?`.
    fn target(&mut self) -> std::result::Result<i16, Error> {
        self.expression()
            .map_err(|error| error.recode(ErrorCode::IllegalFunctionCall))
    }

    fn read_var(&mut self) -> std::result::Result<Var, Error> {
        let mut scan = self.scanner();
        scan.ignore_blanks();
        match scan.letter().and_then(Var::from_byte) {
            Some(var) => {
                scan.advance();
                scan.ignore_blanks();
                self.txtpos = scan.position();
                Ok(var)
            }
            None => Err(error!(SyntaxError, ..scan.position(); "EXPECTED VARIABLE")),
        }
    }

    fn expect(&mut self, ch: u8, message: &'static str) -> std::result::Result<(), Error> {
        let mut scan = self.scanner();
        if scan.expect(ch) {
            self.txtpos = scan.position();
            Ok(())
        } else {
            Err(error!(SyntaxError, ..scan.position(); message))
        }
    }

    fn end_of_statement(&mut self) -> std::result::Result<(), Error> {
        let mut scan = self.scanner();
        scan.ignore_blanks();
        let at_end = scan.at_end_of_statement();
        let pos = scan.position();
        self.txtpos = pos;
        if at_end {
            Ok(())
        } else {
            Err(error!(SyntaxError, ..pos; "EXPECTED END OF STATEMENT"))
        }
    }

    fn end_of_line(&mut self) -> std::result::Result<(), Error> {
        let mut scan = self.scanner();
        scan.ignore_blanks();
        let at_end = scan.at_end_of_line();
        let pos = scan.position();
        self.txtpos = pos;
        if at_end {
            Ok(())
        } else {
            Err(error!(SyntaxError, ..pos; "EXPECTED END OF LINE"))
        }
    }

    fn assign(&mut self) -> Result<Flow> {
        let var = self.read_var()?;
        self.expect(b'=', "EXPECTED =")?;
        let value = self.expression()?;
        self.end_of_statement()?;
        self.program.store(var, value);
        Ok(Flow::Statement)
    }

    fn list<H: Host>(&mut self, host: &mut H) -> Result<Flow> {
        let mut scan = self.scanner();
        let from = scan.line_number();
        self.txtpos = scan.position();
        self.end_of_line()?;
        for line in self.program.lines_from(from) {
            print_line(host, line.to_string().as_bytes())?;
        }
        Ok(Flow::Restart(State::WarmRestart))
    }

    fn new_program(&mut self) -> Result<Flow> {
        self.end_of_line()?;
        self.program.clear_program();
        self.program.clear_stack();
        Ok(Flow::Restart(State::Prompt))
    }

    fn run_program(&mut self) -> Result<Flow> {
        self.program.clear_stack();
        self.current_line = Some(0);
        Ok(Flow::Line)
    }

    fn end(&mut self) -> Result<Flow> {
        self.end_of_line()?;
        self.current_line = Some(self.program.program_end());
        Ok(Flow::Line)
    }

    fn branch(&mut self) -> Result<Flow> {
        let value = self.target()?;
        if self.scanner().at_end_of_line() {
            return Err(error!(IllegalFunctionCall, ..self.txtpos; "IF WITHOUT STATEMENT").into());
        }
        if value != 0 {
            Ok(Flow::Statement)
        } else {
            Ok(Flow::NextLine)
        }
    }

    fn goto(&mut self) -> Result<Flow> {
        let number = self.target()?;
        self.end_of_statement()
            .map_err(|error| error.recode(ErrorCode::IllegalFunctionCall))?;
        self.current_line = Some(self.program.find_line(number as u16));
        Ok(Flow::Line)
    }

    fn gosub(&mut self) -> Result<Flow> {
        let number = self.target()?;
        self.end_of_statement()
            .map_err(|error| error.recode(ErrorCode::IllegalFunctionCall))?;
        self.program.push_frame(Frame::Gosub {
            line: self.current_line,
            pos: self.txtpos,
        })?;
        self.current_line = Some(self.program.find_line(number as u16));
        Ok(Flow::Line)
    }

    fn gosub_return(&mut self) -> Result<Flow> {
        match self.program.find_gosub() {
            Some((addr, Frame::Gosub { line, pos })) => {
                self.program.remove_frame(addr);
                self.current_line = line;
                self.txtpos = pos;
                Ok(Flow::Statement)
            }
            _ => Err(error!(IllegalFunctionCall, ..self.txtpos; "RETURN WITHOUT GOSUB").into()),
        }
    }

    fn for_loop(&mut self) -> Result<Flow> {
        let var = self.read_var()?;
        self.expect(b'=', "EXPECTED =")?;
        let initial = self.expression()?;
        let mut scan = self.scanner();
        if scan.scan::<To>().is_none() {
            return Err(error!(SyntaxError, ..scan.position(); "EXPECTED TO").into());
        }
        self.txtpos = scan.position();
        let terminal = self.expression()?;
        let mut scan = self.scanner();
        let step = if scan.scan::<Step>().is_some() {
            self.txtpos = scan.position();
            self.expression()?
        } else {
            1
        };
        self.end_of_statement()?;
        self.program.push_frame(Frame::For {
            var,
            terminal,
            step,
            line: self.current_line,
            pos: self.txtpos,
        })?;
        self.program.store(var, initial);
        Ok(Flow::Statement)
    }

    fn next(&mut self) -> Result<Flow> {
        let mut scan = self.scanner();
        scan.ignore_blanks();
        let var = if scan.at_end_of_statement() {
            None
        } else {
            Some(self.read_var()?)
        };
        self.end_of_statement()?;
        let (addr, frame) = match self.program.find_for(var) {
            Some(found) => found,
            None => {
                return Err(error!(IllegalFunctionCall, ..self.txtpos; "NEXT WITHOUT FOR").into())
            }
        };
        if let Frame::For {
            var,
            terminal,
            step,
            line,
            pos,
        } = frame
        {
            let value = self.program.fetch(var).wrapping_add(step);
            self.program.store(var, value);
            if (step > 0 && value <= terminal) || (step < 0 && value >= terminal) {
                self.program.unwind_to(addr);
                self.current_line = line;
                self.txtpos = pos;
            } else {
                self.program.unwind_past(addr);
            }
        }
        Ok(Flow::Statement)
    }

    fn input<H: Host>(&mut self, host: &mut H) -> Result<Flow> {
        let var = self.read_var()?;
        self.end_of_statement()?;
        let resume = self.txtpos;
        loop {
            self.read_line(host, b'?')?;
            let start = self.program.entry_start();
            normalize(self.program.text_mut(start));
            self.txtpos = start;
            match self.expression() {
                Ok(value) => {
                    self.program.store(var, value);
                    break;
                }
                Err(error) => log::debug!("INPUT rejected: {:?}", error),
            }
        }
        self.txtpos = resume;
        Ok(Flow::Statement)
    }

    fn print<H: Host>(&mut self, host: &mut H) -> Result<Flow> {
        let mut scan = self.scanner();
        scan.ignore_blanks();
        if scan.peek() == b':' {
            scan.advance();
            self.txtpos = scan.position();
            newline(host)?;
            return Ok(Flow::Statement);
        }
        if scan.at_end_of_line() {
            newline(host)?;
            return Ok(Flow::NextLine);
        }
        // Once items are joined with `;` the line is left open.
        let mut joined = false;
        loop {
            let mut scan = self.scanner();
            scan.ignore_blanks();
            if let Some(text) = scan.quoted() {
                host.write_bytes(text)?;
                scan.ignore_blanks();
                self.txtpos = scan.position();
            } else if scan.peek() == b'"' || scan.peek() == b'\'' {
                return Err(error!(SyntaxError, ..scan.position(); "UNTERMINATED STRING").into());
            } else {
                self.txtpos = scan.position();
                let value = self.expression()?;
                print_num(host, value)?;
            }

            let mut scan = self.scanner();
            scan.ignore_blanks();
            match scan.peek() {
                b',' => {
                    scan.advance();
                    self.txtpos = scan.position();
                }
                b';' => {
                    scan.advance();
                    scan.ignore_blanks();
                    let at_end = scan.at_end_of_statement();
                    self.txtpos = scan.position();
                    joined = true;
                    if at_end {
                        return Ok(Flow::Statement);
                    }
                }
                _ if scan.at_end_of_statement() => {
                    self.txtpos = scan.position();
                    if !joined {
                        newline(host)?;
                    }
                    return Ok(Flow::Statement);
                }
                _ => {
                    return Err(error!(SyntaxError, ..scan.position(); "EXPECTED , OR ;").into());
                }
            }
        }
    }

    fn poke(&mut self) -> Result<Flow> {
        let addr = self.expression()?;
        self.expect(b',', "EXPECTED ,")?;
        let value = self.expression()?;
        self.end_of_statement()?;
        log::debug!("POKE {},{} ignored", addr, value);
        Ok(Flow::Statement)
    }

    fn rseed(&mut self) -> Result<Flow> {
        let seed = self.expression()?;
        self.end_of_statement()?;
        log::debug!("RSEED {}", seed);
        self.rng = StdRng::seed_from_u64(seed as u64);
        Ok(Flow::Statement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mach::{Config, Script};

    fn runtime() -> (Runtime, Script) {
        let config = Config {
            echo: false,
            ..Config::default()
        };
        (Runtime::new(config), Script::new())
    }

    fn exec(r: &mut Runtime, host: &mut Script, lines: &[&str]) -> String {
        for line in lines {
            r.enter(host, line).unwrap();
        }
        host.take_output()
    }

    #[test]
    fn test_let_is_optional() {
        let (mut r, mut host) = runtime();
        exec(&mut r, &mut host, &["LET A = 5", "B=A*2"]);
        assert_eq!(r.variable('A'), Some(5));
        assert_eq!(r.variable('B'), Some(10));
    }

    #[test]
    fn test_if_continues_same_line() {
        let (mut r, mut host) = runtime();
        let out = exec(
            &mut r,
            &mut host,
            &["10 IF 1 PRINT 1", "20 IF 0 PRINT 2", "30 PRINT 3", "RUN"],
        );
        assert_eq!(out, "1\n3\nOK\n");
    }

    #[test]
    fn test_next_without_variable() {
        let (mut r, mut host) = runtime();
        let out = exec(&mut r, &mut host, &["FOR I=1 TO 2:PRINT I:NEXT"]);
        assert_eq!(out, "1\n2\n");
        assert_eq!(r.program().stack_depth(), 0);
    }

    #[test]
    fn test_rseed_repeats() {
        let (mut r, mut host) = runtime();
        let a = exec(&mut r, &mut host, &["RSEED 9", "PRINT RND(1000),RND(1000)"]);
        let b = exec(&mut r, &mut host, &["RSEED 9", "PRINT RND(1000),RND(1000)"]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_poke_is_parsed() {
        let (mut r, mut host) = runtime();
        assert_eq!(exec(&mut r, &mut host, &["POKE 1,2"]), "");
        assert_eq!(exec(&mut r, &mut host, &["POKE 1"]), "What? \n");
    }

    #[test]
    fn test_load_save_ignored() {
        let (mut r, mut host) = runtime();
        assert_eq!(exec(&mut r, &mut host, &["SAVE FOO", "LOAD"]), "");
    }

    #[test]
    fn test_new_requires_end_of_line() {
        let (mut r, mut host) = runtime();
        exec(&mut r, &mut host, &["10 PRINT 1"]);
        assert_eq!(exec(&mut r, &mut host, &["NEW 5"]), "What? \n");
        assert!(!r.program().is_empty());
        exec(&mut r, &mut host, &["NEW"]);
        assert!(r.program().is_empty());
    }
}

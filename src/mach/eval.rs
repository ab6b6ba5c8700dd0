use super::{Function, Operation, Program, Var};
use crate::error;
use crate::lang::{Column, Error, Function as Func, Relation, Scanner};
use rand::rngs::StdRng;

type Result<T> = std::result::Result<T, Error>;

/// ## Expression evaluator
///
/// Recursive descent over the program text, one level per precedence:
///
/// ```text
/// relation := additive [relop additive]
/// additive := [+|-] term {(+|-) term}
/// term     := primary {(*|/|%) primary}
/// primary  := -primary | number | var | func(relation) | (relation)
/// ```
///
/// A failure does not stop the scan. The first one is remembered, the
/// level returns 0, and evaluation carries on so the cursor ends where
/// the expression ends. `expression` reports the remembered failure.

pub struct Evaluator<'a> {
    scan: Scanner<'a>,
    program: &'a Program,
    rng: &'a mut StdRng,
    fault: Option<Error>,
}

impl<'a> Evaluator<'a> {
    pub fn new(scan: Scanner<'a>, program: &'a Program, rng: &'a mut StdRng) -> Evaluator<'a> {
        Evaluator {
            scan,
            program,
            rng,
            fault: None,
        }
    }

    pub fn position(&self) -> Column {
        self.scan.position()
    }

    pub fn expression(&mut self) -> Result<i16> {
        self.fault = None;
        let val = self.relation();
        match self.fault.take() {
            Some(error) => Err(error.in_column(self.scan.position())),
            None => Ok(val),
        }
    }

    fn fail(&mut self, error: Error) -> i16 {
        if self.fault.is_none() {
            self.fault = Some(error);
        }
        0
    }

    fn relation(&mut self) -> i16 {
        let lhs = self.additive();
        match self.scan.scan::<Relation>() {
            None => lhs,
            Some(relation) => {
                let rhs = self.additive();
                Operation::compare(relation, lhs, rhs)
            }
        }
    }

    fn additive(&mut self) -> i16 {
        let mut lhs = match self.scan.peek() {
            b'-' | b'+' => 0,
            _ => self.term(),
        };
        loop {
            match self.scan.peek() {
                b'-' => {
                    self.scan.advance();
                    let rhs = self.term();
                    lhs = Operation::subtract(lhs, rhs);
                }
                b'+' => {
                    self.scan.advance();
                    let rhs = self.term();
                    lhs = Operation::sum(lhs, rhs);
                }
                _ => return lhs,
            }
        }
    }

    fn term(&mut self) -> i16 {
        let mut lhs = self.primary();
        self.scan.ignore_blanks();
        loop {
            let op = self.scan.peek();
            if op != b'*' && op != b'%' && op != b'/' {
                return lhs;
            }
            self.scan.advance();
            let rhs = self.primary();
            let result = match op {
                b'*' => Ok(Operation::multiply(lhs, rhs)),
                b'%' => Operation::modulus(lhs, rhs),
                _ => Operation::divide(lhs, rhs),
            };
            match result {
                Ok(val) => lhs = val,
                Err(error) => {
                    self.fail(error);
                }
            }
        }
    }

    fn primary(&mut self) -> i16 {
        self.scan.ignore_blanks();
        let ch = self.scan.peek();
        if ch == b'-' {
            self.scan.advance();
            return Operation::negate(self.primary());
        }
        if ch == b'0' {
            self.scan.advance();
            return 0;
        }
        if ch.is_ascii_digit() {
            let mut val: i16 = 0;
            while self.scan.peek().is_ascii_digit() {
                let digit = i16::from(self.scan.peek() - b'0');
                val = val.wrapping_mul(10).wrapping_add(digit);
                self.scan.advance();
            }
            return val;
        }
        if let Some(var) = self.scan.letter().and_then(Var::from_byte) {
            self.scan.advance();
            return self.program.fetch(var);
        }
        if self.scan.is_name() {
            return self.function();
        }
        if ch == b'(' {
            self.scan.advance();
            let val = self.relation();
            if self.scan.peek() != b')' {
                return self.fail(error!(SyntaxError; "EXPECTED )"));
            }
            self.scan.advance();
            return val;
        }
        self.fail(error!(SyntaxError; "EXPECTED EXPRESSION"))
    }

    fn function(&mut self) -> i16 {
        let func = match self.scan.scan::<Func>() {
            Some(func) => func,
            None => return self.fail(error!(SyntaxError; "UNDEFINED FUNCTION")),
        };
        if self.scan.peek() != b'(' {
            return self.fail(error!(SyntaxError; "EXPECTED ("));
        }
        self.scan.advance();
        let arg = self.relation();
        if self.scan.peek() != b')' {
            return self.fail(error!(SyntaxError; "EXPECTED )"));
        }
        self.scan.advance();
        let result = match func {
            Func::Peek => Function::peek(self.program, arg),
            Func::Abs => Ok(Function::abs(arg)),
            Func::Aread => Ok(Function::aread(arg)),
            Func::Dread => Ok(Function::dread(arg)),
            Func::Rnd => Function::rnd(self.rng, arg),
        };
        match result {
            Ok(val) => val,
            Err(error) => self.fail(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;
    use rand::SeedableRng;

    fn eval_in(program: &Program, s: &str) -> (Result<i16>, Column) {
        let mut text = s.as_bytes().to_vec();
        text.push(b'\n');
        let mut rng = StdRng::seed_from_u64(0);
        let mut e = Evaluator::new(Scanner::new(&text, 0), program, &mut rng);
        let r = e.expression();
        (r, e.position())
    }

    fn eval(s: &str) -> Result<i16> {
        eval_in(&Program::new(1024, 5), s).0
    }

    #[test]
    fn test_precedence() {
        assert_eq!(eval("2+3*4"), Ok(14));
        assert_eq!(eval("(2+3)*4"), Ok(20));
        assert_eq!(eval("7/2"), Ok(3));
        assert_eq!(eval("7%3"), Ok(1));
        assert_eq!(eval("10-2-3"), Ok(5));
        assert_eq!(eval("2*3%4"), Ok(2));
    }

    #[test]
    fn test_unary() {
        assert_eq!(eval("-5+2"), Ok(-3));
        assert_eq!(eval("--5"), Ok(5));
        assert_eq!(eval("+5"), Ok(5));
        assert_eq!(eval("2*-3"), Ok(-6));
    }

    #[test]
    fn test_relations() {
        assert_eq!(eval("1<2"), Ok(1));
        assert_eq!(eval("1+1=2"), Ok(1));
        assert_eq!(eval("3>=4"), Ok(0));
        assert_eq!(eval("3!=4"), Ok(1));
        assert_eq!(eval("3<>3"), Ok(0));
        assert_eq!(eval("2 <= 2"), Ok(1));
    }

    #[test]
    fn test_wrapping_literals() {
        assert_eq!(eval("32767+1"), Ok(-32768));
        assert_eq!(eval("40000"), Ok(-25536));
    }

    #[test]
    fn test_division_by_zero_scans_whole_expression() {
        let (r, pos) = eval_in(&Program::new(1024, 5), "7%0+1");
        let e = r.unwrap_err();
        assert_eq!(e.code(), ErrorCode::SyntaxError);
        assert_eq!(pos, 5);
        assert_eq!(e.column(), 5);
    }

    #[test]
    fn test_failed_operand_still_scans_relation() {
        let (r, pos) = eval_in(&Program::new(1024, 5), "1/0=1");
        assert_eq!(pos, 5);
        assert_eq!(r.unwrap_err().column(), 5);
    }

    #[test]
    fn test_variables_and_functions() {
        let mut p = Program::new(1024, 5);
        p.store(Var::from_byte(b'X').unwrap(), -9);
        assert_eq!(eval_in(&p, "X*2").0, Ok(-18));
        assert_eq!(eval_in(&p, "ABS(X)").0, Ok(9));
        assert_eq!(eval_in(&p, "ABS (X)").0, Ok(9));
        assert_eq!(eval_in(&p, "AREAD(1)+DREAD(2)").0, Ok(0));
        assert_eq!(eval_in(&p, "PEEK(0)").0, Ok(0));
        let r = eval_in(&p, "RND(10)").0.unwrap();
        assert!((0..10).contains(&r));
    }

    #[test]
    fn test_syntax_errors() {
        assert!(eval("FOO(1)").is_err());
        assert!(eval("ABS 1").is_err());
        assert!(eval("(1+2").is_err());
        assert!(eval("*").is_err());
        assert!(eval("PEEK(-1)").is_err());
        assert!(eval("RND(0)").is_err());
    }
}

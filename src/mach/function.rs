use super::Program;
use crate::error;
use crate::lang::Error;
use rand::{rngs::StdRng, Rng};

type Result<T> = std::result::Result<T, Error>;

/// ## Built-in functions
///
/// Each takes exactly one argument in parentheses.

pub struct Function {}

impl Function {
    pub fn peek(program: &Program, addr: i16) -> Result<i16> {
        match program.peek(addr) {
            Some(b) => Ok(i16::from(b)),
            None => Err(error!(SyntaxError; "PEEK OUT OF RANGE")),
        }
    }

    pub fn abs(val: i16) -> i16 {
        val.wrapping_abs()
    }

    /// Analog pins are not wired up on this host.
    pub fn aread(_pin: i16) -> i16 {
        0
    }

    /// Digital pins are not wired up on this host.
    pub fn dread(_pin: i16) -> i16 {
        0
    }

    /// Uniform in `[0, |n|)`.
    pub fn rnd(rng: &mut StdRng, n: i16) -> Result<i16> {
        if n == 0 {
            return Err(error!(SyntaxError; "RND OF ZERO"));
        }
        Ok(rng.gen_range(0..n.unsigned_abs()) as i16)
    }
}

use crate::error;
use crate::lang::{Error, Relation};

type Result<T> = std::result::Result<T, Error>;

/// ## Arithmetic on 16-bit signed integers
///
/// Everything wraps on overflow the way the 16-bit machine did.

pub struct Operation {}

impl Operation {
    pub fn negate(val: i16) -> i16 {
        val.wrapping_neg()
    }

    pub fn multiply(lhs: i16, rhs: i16) -> i16 {
        lhs.wrapping_mul(rhs)
    }

    /// Truncates toward zero.
    pub fn divide(lhs: i16, rhs: i16) -> Result<i16> {
        if rhs == 0 {
            return Err(error!(SyntaxError; "DIVISION BY ZERO"));
        }
        Ok(lhs.wrapping_div(rhs))
    }

    pub fn modulus(lhs: i16, rhs: i16) -> Result<i16> {
        if rhs == 0 {
            return Err(error!(SyntaxError; "DIVISION BY ZERO"));
        }
        Ok(lhs.wrapping_rem(rhs))
    }

    pub fn sum(lhs: i16, rhs: i16) -> i16 {
        lhs.wrapping_add(rhs)
    }

    pub fn subtract(lhs: i16, rhs: i16) -> i16 {
        lhs.wrapping_sub(rhs)
    }

    /// 1 when the relation holds, otherwise 0.
    pub fn compare(relation: Relation, lhs: i16, rhs: i16) -> i16 {
        use Relation::*;
        let truth = match relation {
            GreaterEqual => lhs >= rhs,
            NotEqual => lhs != rhs,
            Greater => lhs > rhs,
            Equal => lhs == rhs,
            LessEqual => lhs <= rhs,
            Less => lhs < rhs,
        };
        truth as i16
    }
}

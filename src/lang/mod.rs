/*!
# Rust Language Module

This Rust module provides scanning of the TinyBasic Plus language:
the keyword, function and operator tables and a cursor over
line-marker-terminated program text.

*/

#[macro_use]
mod error;
mod line;
mod scan;
mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use line::Line;
pub use scan::normalize;
pub use scan::Scanner;
pub use token::{Function, Relation, Step, Table, To, Word};

/// Position in the program buffer.
pub type Column = usize;
pub type LineNumber = u16;

/// Terminates every line of text in the program buffer.
pub const LINE_MARKER: u8 = b'\n';

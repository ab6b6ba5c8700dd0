/*!
## Rust Machine Module

This Rust module is the TinyBasic Plus interpreter: the program buffer
with its line store, variables and control stack, the expression
evaluator, and the read-execute loop that drives them through a host.

*/

mod eval;
mod function;
mod host;
mod listing;
mod operation;
mod program;
mod runtime;
mod stack;
mod statement;
mod var;

pub use eval::Evaluator;
pub use function::Function;
pub use host::{Host, Script, BREAK};
pub use listing::{Lines, LINE_HEADER};
pub use operation::Operation;
pub use program::{Program, MAX_RAM_SIZE, MIN_RAM_SIZE};
pub use runtime::{Config, Event, Runtime};
pub use stack::{Frame, Frames, FOR_FRAME_SIZE, GOSUB_FRAME_SIZE};
pub use var::Var;

//! # TinyBasic Plus
//!
//! A line-number BASIC in the style of the microcontroller Tiny BASICs.
//! Programs, variables and the `FOR`/`GOSUB` stack all live in one
//! fixed block of memory.
//!
//! Run the executable in a terminal. If you get the following, you have
//! achieved success.
//! ```text
//! TinyBasic Plus v1.0.0
//! 19354 bytes free.
//! OK
//! >█
//! ```
//!
//! Embedding takes a [`mach::Runtime`] and anything that implements
//! [`mach::Host`]:
//! ```
//! use tinybasic::mach::{Config, Runtime, Script};
//!
//! let mut runtime = Runtime::new(Config { echo: false, ..Config::default() });
//! let mut host = Script::new();
//! runtime.enter(&mut host, "10 PRINT 6*7").unwrap();
//! runtime.enter(&mut host, "RUN").unwrap();
//! assert_eq!(host.take_output(), "42\nOK\n");
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/chapter_3.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_3;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

#[path = "doc/appendix_c.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_C;

pub mod lang;
pub mod mach;
pub mod term;

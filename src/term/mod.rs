/*!
## Terminal front ends

`console` drives a raw terminal through mortal. `stream` reads plain
bytes from stdin, for pipes and scripts, with Ctrl-C delivered as a
break through a signal handler. Piped input is never echoed.

*/

extern crate ansi_term;
use crate::mach::{Config, Host, Runtime};
use ansi_term::Style;
use std::io::{self, IsTerminal};

mod console;
mod stream;

pub use console::Console;
pub use stream::Stream;

pub fn main(config: Config, force_stream: bool) {
    let result = if force_stream || !io::stdin().is_terminal() {
        log::info!("stream front end");
        let config = Config {
            echo: false,
            ..config
        };
        Stream::new().and_then(|mut host| session(config, &mut host))
    } else {
        log::info!("console front end");
        Console::new().and_then(|mut host| session(config, &mut host))
    };
    if let Err(error) = result {
        eprintln!("{}", Style::new().bold().paint(error.to_string()));
        std::process::exit(1);
    }
}

/// Running out of input ends the session the same as `BYE`.
fn session<H: Host>(config: Config, host: &mut H) -> io::Result<()> {
    let mut runtime = Runtime::new(config);
    match runtime.run(host) {
        Err(error) if error.kind() == io::ErrorKind::UnexpectedEof => {
            log::info!("end of input");
            Ok(())
        }
        result => result,
    }
}

extern crate ctrlc;
use crate::mach::{Host, BREAK};
use std::io::{self, BufWriter, Read, Stdout, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Plain stdio host. A Ctrl-C from the terminal raises a flag that the
/// interpreter sees as a pending break.
pub struct Stream {
    input: io::Bytes<io::Stdin>,
    output: BufWriter<Stdout>,
    interrupted: Arc<AtomicBool>,
}

impl Stream {
    pub fn new() -> io::Result<Stream> {
        let interrupted = Arc::new(AtomicBool::new(false));
        let int_moved = interrupted.clone();
        ctrlc::set_handler(move || {
            int_moved.store(true, Ordering::SeqCst);
        })
        .map_err(|error| io::Error::new(io::ErrorKind::Other, error.to_string()))?;
        Ok(Stream {
            input: io::stdin().bytes(),
            output: BufWriter::new(io::stdout()),
            interrupted,
        })
    }
}

impl Host for Stream {
    fn read_char(&mut self) -> io::Result<u8> {
        if self.interrupted.swap(false, Ordering::SeqCst) {
            return Ok(BREAK);
        }
        self.output.flush()?;
        match self.input.next() {
            Some(ch) => ch,
            None => Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input")),
        }
    }

    fn has_input(&mut self) -> io::Result<bool> {
        Ok(self.interrupted.load(Ordering::SeqCst))
    }

    fn write_char(&mut self, ch: u8) -> io::Result<()> {
        self.output.write_all(&[ch])
    }

    fn write_bytes(&mut self, s: &[u8]) -> io::Result<()> {
        self.output.write_all(s)
    }
}

impl Drop for Stream {
    fn drop(&mut self) {
        if let Err(error) = self.output.flush() {
            log::warn!("flush failed: {}", error);
        }
    }
}

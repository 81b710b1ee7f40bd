//! Live console adapter using the process standard streams.

use std::io::{self, BufRead, Write};

use crate::ports::console::Console;

/// Live console backed by the real stdin, stdout, and stderr.
pub struct LiveConsole;

impl Console for LiveConsole {
    fn write(&self, s: &str) -> io::Result<()> {
        io::stdout().lock().write_all(s.as_bytes())
    }

    fn write_line(&self, s: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(s.as_bytes())?;
        out.write_all(b"\n")
    }

    fn error_line(&self, s: &str) -> io::Result<()> {
        let mut err = io::stderr().lock();
        err.write_all(s.as_bytes())?;
        err.write_all(b"\n")
    }

    fn read_line(&self) -> io::Result<Option<String>> {
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        while line.ends_with(['\n', '\r']) {
            line.pop();
        }
        Ok(Some(line))
    }

    fn flush(&self) -> io::Result<()> {
        io::stdout().lock().flush()
    }

    fn is_terminal(&self) -> bool {
        atty::is(atty::Stream::Stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_to_stdout_without_error() {
        let console = LiveConsole;
        console.write("").unwrap();
        console.write_line("").unwrap();
        console.flush().unwrap();
    }

    #[test]
    fn is_terminal_matches_atty() {
        let console = LiveConsole;
        assert_eq!(console.is_terminal(), atty::is(atty::Stream::Stdout));
    }
}

//! In-memory console double with scripted input and captured output.

use std::collections::VecDeque;
use std::io;
use std::sync::Mutex;

use crate::ports::console::Console;

/// In-memory console: tests queue input lines up front and inspect the
/// captured output afterwards.
#[derive(Default)]
pub struct MemConsole {
    input: Mutex<VecDeque<String>>,
    out: Mutex<String>,
    err: Mutex<String>,
}

impl MemConsole {
    /// Creates an empty console.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a line to be returned by a later `read_line` call.
    pub fn push_input(&self, line: &str) {
        self.input.lock().expect("console input lock poisoned").push_back(line.to_string());
    }

    /// Returns everything written to standard output so far.
    #[must_use]
    pub fn output(&self) -> String {
        self.out.lock().expect("console output lock poisoned").clone()
    }

    /// Returns everything written to standard error so far.
    #[must_use]
    pub fn error_output(&self) -> String {
        self.err.lock().expect("console error lock poisoned").clone()
    }
}

impl Console for MemConsole {
    fn write(&self, s: &str) -> io::Result<()> {
        self.out.lock().expect("console output lock poisoned").push_str(s);
        Ok(())
    }

    fn write_line(&self, s: &str) -> io::Result<()> {
        let mut out = self.out.lock().expect("console output lock poisoned");
        out.push_str(s);
        out.push('\n');
        Ok(())
    }

    fn error_line(&self, s: &str) -> io::Result<()> {
        let mut err = self.err.lock().expect("console error lock poisoned");
        err.push_str(s);
        err.push('\n');
        Ok(())
    }

    fn read_line(&self) -> io::Result<Option<String>> {
        Ok(self.input.lock().expect("console input lock poisoned").pop_front())
    }

    fn flush(&self) -> io::Result<()> {
        Ok(())
    }

    fn is_terminal(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_output_and_error_separately() {
        let console = MemConsole::new();
        console.write("a").unwrap();
        console.write_line("b").unwrap();
        console.error_line("oops").unwrap();

        assert_eq!(console.output(), "ab\n");
        assert_eq!(console.error_output(), "oops\n");
    }

    #[test]
    fn scripted_input_drains_then_signals_eof() {
        let console = MemConsole::new();
        console.push_input("first");
        console.push_input("second");

        assert_eq!(console.read_line().unwrap().as_deref(), Some("first"));
        assert_eq!(console.read_line().unwrap().as_deref(), Some("second"));
        assert_eq!(console.read_line().unwrap(), None);
    }

    #[test]
    fn never_claims_a_terminal() {
        assert!(!MemConsole::new().is_terminal());
    }
}

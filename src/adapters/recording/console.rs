//! Recording decorator for the `Console` port.

use std::io;

use serde_json::json;

use super::journal::{outcome, Journal};
use crate::ports::console::Console;

/// Forwards every call to the inner console and journals it.
pub struct RecordingConsole {
    inner: Box<dyn Console>,
    journal: Journal,
}

impl RecordingConsole {
    /// Wraps the given console, appending interactions to `journal`.
    #[must_use]
    pub fn new(inner: Box<dyn Console>, journal: Journal) -> Self {
        Self { inner, journal }
    }
}

impl Console for RecordingConsole {
    fn write(&self, s: &str) -> io::Result<()> {
        let result = self.inner.write(s);
        self.journal.record("console", "write", json!({"text": s}), outcome(&result));
        result
    }

    fn write_line(&self, s: &str) -> io::Result<()> {
        let result = self.inner.write_line(s);
        self.journal.record("console", "write_line", json!({"line": s}), outcome(&result));
        result
    }

    fn error_line(&self, s: &str) -> io::Result<()> {
        let result = self.inner.error_line(s);
        self.journal.record("console", "error_line", json!({"line": s}), outcome(&result));
        result
    }

    fn read_line(&self) -> io::Result<Option<String>> {
        let result = self.inner.read_line();
        let output = match &result {
            Ok(line) => json!({"ok": line}),
            Err(err) => json!({"err": err.to_string()}),
        };
        self.journal.record("console", "read_line", json!({}), output);
        result
    }

    fn flush(&self) -> io::Result<()> {
        let result = self.inner.flush();
        self.journal.record("console", "flush", json!({}), outcome(&result));
        result
    }

    fn is_terminal(&self) -> bool {
        self.inner.is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mem::MemConsole;
    use std::sync::Arc;

    #[test]
    fn journals_console_traffic() {
        let journal = Journal::new();
        let mem = Arc::new(MemConsole::new());
        mem.push_input("answer");
        let console = RecordingConsole::new(Box::new(Arc::clone(&mem)), journal.clone());

        console.write_line("question").unwrap();
        let line = console.read_line().unwrap();

        assert_eq!(line.as_deref(), Some("answer"));
        assert_eq!(journal.methods("console"), ["write_line", "read_line"]);
        assert_eq!(journal.entries()[0].input["line"], "question");
        assert_eq!(journal.entries()[1].output["ok"], "answer");
        assert_eq!(mem.output(), "question\n");
    }
}

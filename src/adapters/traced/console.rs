//! Tracing decorator for the `Console` port.

use std::io;

use tracing::debug;

use crate::ports::console::Console;

/// Forwards every call to the inner console and logs it.
pub struct TracedConsole {
    inner: Box<dyn Console>,
}

impl TracedConsole {
    /// Wraps the given console.
    #[must_use]
    pub fn new(inner: Box<dyn Console>) -> Self {
        Self { inner }
    }
}

impl Console for TracedConsole {
    fn write(&self, s: &str) -> io::Result<()> {
        let result = self.inner.write(s);
        debug!(target: "sysports::console", op = "write", len = s.len(), ok = result.is_ok());
        result
    }

    fn write_line(&self, s: &str) -> io::Result<()> {
        let result = self.inner.write_line(s);
        debug!(target: "sysports::console", op = "write_line", len = s.len(), ok = result.is_ok());
        result
    }

    fn error_line(&self, s: &str) -> io::Result<()> {
        let result = self.inner.error_line(s);
        debug!(target: "sysports::console", op = "error_line", len = s.len(), ok = result.is_ok());
        result
    }

    fn read_line(&self) -> io::Result<Option<String>> {
        let result = self.inner.read_line();
        debug!(target: "sysports::console", op = "read_line", ok = result.is_ok());
        result
    }

    fn flush(&self) -> io::Result<()> {
        let result = self.inner.flush();
        debug!(target: "sysports::console", op = "flush", ok = result.is_ok());
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
    fn forwards_to_the_inner_console() {
        let mem = Arc::new(MemConsole::new());
        mem.push_input("typed");
        let traced = TracedConsole::new(Box::new(Arc::clone(&mem)));

        traced.write_line("shown").unwrap();
        assert_eq!(traced.read_line().unwrap().as_deref(), Some("typed"));
        assert_eq!(mem.output(), "shown\n");
    }
}

//! Console port for interactive terminal input and output.

use std::io;

/// Provides access to the process console streams.
///
/// Abstracting the console lets tests script input lines and capture
/// output without a real terminal attached.
pub trait Console: Send + Sync {
    /// Writes a string to standard output without a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the underlying output stream.
    fn write(&self, s: &str) -> io::Result<()>;

    /// Writes a line to standard output.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the underlying output stream.
    fn write_line(&self, s: &str) -> io::Result<()>;

    /// Writes a line to standard error.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the underlying error stream.
    fn error_line(&self, s: &str) -> io::Result<()>;

    /// Reads one line from standard input, without the trailing newline.
    ///
    /// Returns `Ok(None)` once input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the underlying input stream.
    fn read_line(&self) -> io::Result<Option<String>>;

    /// Flushes standard output.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the underlying output stream.
    fn flush(&self) -> io::Result<()>;

    /// Returns `true` if standard output is attached to a terminal.
    fn is_terminal(&self) -> bool;
}

// Shared handles forward like the console they wrap, so an `Arc`ed double
// can be handed to adapters that take ownership.
impl<T: Console + ?Sized> Console for std::sync::Arc<T> {
    fn write(&self, s: &str) -> io::Result<()> {
        (**self).write(s)
    }

    fn write_line(&self, s: &str) -> io::Result<()> {
        (**self).write_line(s)
    }

    fn error_line(&self, s: &str) -> io::Result<()> {
        (**self).error_line(s)
    }

    fn read_line(&self) -> io::Result<Option<String>> {
        (**self).read_line()
    }

    fn flush(&self) -> io::Result<()> {
        (**self).flush()
    }

    fn is_terminal(&self) -> bool {
        (**self).is_terminal()
    }
}

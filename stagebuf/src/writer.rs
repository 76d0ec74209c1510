use core::fmt::{self, Debug};

use embedded_io::{Error, ErrorType, Write};
use ufmt::uWrite;

use crate::codes;

/// Console-like view over a byte sink.
///
/// Provides unformatted (`write_str`, `writeln_str`) and formatted
/// (`uwrite!`, `write!`) output and remembers whether the last written
/// line is still open.
pub struct Writer<'a, W: Write<Error = E>, E: Error> {
    /// Something was written after the last line feed
    line_open: bool,
    sink: &'a mut W,
}

impl<'a, W: Write<Error = E>, E: Error> Debug for Writer<'a, W, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Writer")
            .field("line_open", &self.line_open)
            .finish()
    }
}

impl<'a, W: Write<Error = E>, E: Error> Writer<'a, W, E> {
    pub fn new(sink: &'a mut W) -> Self {
        Self {
            line_open: false,
            sink,
        }
    }

    pub fn is_line_open(&self) -> bool {
        self.line_open
    }

    pub fn write_str(&mut self, text: &str) -> Result<(), E> {
        let Some(&last) = text.as_bytes().last() else {
            return Ok(());
        };
        self.sink.write_str(text)?;
        self.line_open = last != codes::LINE_FEED;
        Ok(())
    }

    pub fn writeln_str(&mut self, text: &str) -> Result<(), E> {
        self.sink.write_str(text)?;
        self.sink.write_str(codes::LF)?;
        self.line_open = false;
        Ok(())
    }

    /// Terminate current line if something was written to it
    pub fn finish_line(&mut self) -> Result<(), E> {
        if self.line_open {
            self.writeln_str("")?;
        }
        Ok(())
    }

    /// Push everything written so far out of the sink
    pub fn flush(&mut self) -> Result<(), E> {
        self.sink.flush()
    }
}

impl<'a, W: Write<Error = E>, E: Error> uWrite for Writer<'a, W, E> {
    type Error = E;

    fn write_str(&mut self, s: &str) -> Result<(), E> {
        Writer::write_str(self, s)
    }
}

impl<'a, W: Write<Error = E>, E: Error> fmt::Write for Writer<'a, W, E> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        Writer::write_str(self, s).map_err(|_| fmt::Error)
    }
}

pub trait WriteExt: ErrorType {
    fn write_str(&mut self, text: &str) -> Result<(), Self::Error>;

    /// Write all given bytes and flush the sink
    fn flush_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;
}

impl<W: Write> WriteExt for W {
    fn write_str(&mut self, text: &str) -> Result<(), Self::Error> {
        self.write_all(text.as_bytes())
    }

    fn flush_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.write_all(bytes)?;
        self.flush()
    }
}

//! Line-oriented text input from a serial port.

use embedded_io_async::Read;
use heapless::String;

use crate::{Error, Result};

/// Collects printable ASCII bytes until a line ends.
///
/// `\n` and `\r` end a line, so `\r\n` endings work too. Empty lines are skipped.
/// Other control bytes and non-ASCII bytes are dropped. A line that overflows is
/// dropped whole, up to and including its line ending.
#[derive(Debug, Default)]
pub struct LineBuffer<const CAP: usize> {
    line: String<CAP>,
    complete: bool,
    discarding: bool,
}

impl<const CAP: usize> LineBuffer<CAP> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            line: String::new(),
            complete: false,
            discarding: false,
        }
    }

    /// Feeds one byte. Returns the line once it is complete.
    ///
    /// The returned line stays valid until the next call to `push`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LineTooLong`] once, when the line stops fitting. The rest of that
    /// line is dropped; collecting starts again after the next line ending.
    pub fn push(&mut self, byte: u8) -> Result<Option<&str>> {
        if self.complete {
            self.line.clear();
            self.complete = false;
        }
        match byte {
            b'\n' | b'\r' if self.discarding => {
                self.discarding = false;
                Ok(None)
            }
            _ if self.discarding => Ok(None),
            b'\n' | b'\r' if self.line.is_empty() => Ok(None),
            b'\n' | b'\r' => {
                self.complete = true;
                Ok(Some(self.line.as_str()))
            }
            0x20..=0x7E => {
                if self.line.push(char::from(byte)).is_err() {
                    self.line.clear();
                    self.discarding = true;
                    return Err(Error::LineTooLong);
                }
                Ok(None)
            }
            _ => Ok(None),
        }
    }

    /// The bytes collected so far for the current line.
    #[must_use]
    pub fn pending(&self) -> &str {
        if self.complete { "" } else { self.line.as_str() }
    }
}

/// Reads from `reader` one byte at a time until a whole line is in `buffer` and returns it.
///
/// # Errors
///
/// Returns [`Error::SerialRead`] if the reader fails, [`Error::SerialClosed`] if it
/// reports end of input, and [`Error::LineTooLong`] if the line does not fit.
pub async fn read_line<'b, R: Read, const CAP: usize>(
    reader: &mut R,
    buffer: &'b mut LineBuffer<CAP>,
) -> Result<&'b str> {
    let mut byte = [0_u8; 1];
    loop {
        let count = reader.read(&mut byte).await.map_err(|_| Error::SerialRead)?;
        if count == 0 {
            return Err(Error::SerialClosed);
        }
        let [value] = byte;
        if buffer.push(value)?.is_some() {
            return Ok(buffer.line.as_str());
        }
    }
}

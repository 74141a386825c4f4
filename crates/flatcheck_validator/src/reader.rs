//! Line-oriented record reader.

use crate::error::{Result, ValidatorError};
use flatcheck_core::Record;
use std::io::{self, BufRead};

/// Reads records one line at a time, reusing its buffers.
///
/// `\n`, `\r\n` and a lone `\r` all end a record and are normalised to a
/// single `\n`, so a terminator always counts as one character. A final line
/// without terminator is still a record.
///
/// # Example
///
/// ```rust
/// use flatcheck_validator::RecordReader;
///
/// let mut reader = RecordReader::new("a,b\r\nc\rd".as_bytes());
///
/// let first = reader.next_record().unwrap().unwrap();
/// assert_eq!((first.number(), first.text()), (1, "a,b\n"));
///
/// let second = reader.next_record().unwrap().unwrap();
/// assert_eq!((second.number(), second.text()), (2, "c\n"));
///
/// let third = reader.next_record().unwrap().unwrap();
/// assert_eq!((third.number(), third.text()), (3, "d"));
///
/// assert!(reader.next_record().unwrap().is_none());
/// ```
pub struct RecordReader<R> {
    inner: R,
    bytes: Vec<u8>,
    line: String,
    count: usize,
    // The previous record ended in `\r`; a `\n` right after it belongs to it.
    skip_lf: bool,
}

impl<R: BufRead> RecordReader<R> {
    /// Wraps a buffered reader.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            bytes: Vec::new(),
            line: String::new(),
            count: 0,
            skip_lf: false,
        }
    }

    /// Returns the next record, or `None` at end of input.
    pub fn next_record(&mut self) -> Result<Option<Record<'_>>> {
        let record = self.count + 1;
        let terminated = self
            .read_raw_line()
            .map_err(|source| ValidatorError::Read { record, source })?;

        if self.bytes.is_empty() && !terminated {
            return Ok(None);
        }

        let text = std::str::from_utf8(&self.bytes).map_err(|e| ValidatorError::Read {
            record,
            source: io::Error::new(io::ErrorKind::InvalidData, e),
        })?;

        self.line.clear();
        self.line.push_str(text);
        if terminated {
            self.line.push('\n');
        }

        self.count = record;
        Ok(Some(Record::new(self.count, &self.line)))
    }

    /// Returns the number of records read so far.
    pub fn records_read(&self) -> usize {
        self.count
    }

    /// Reads the next line's bytes without its terminator. Returns whether a
    /// terminator was found.
    fn read_raw_line(&mut self) -> io::Result<bool> {
        self.bytes.clear();

        if std::mem::take(&mut self.skip_lf) && self.peek()? == Some(b'\n') {
            self.inner.consume(1);
        }

        loop {
            let available = match self.inner.fill_buf() {
                Ok(available) => available,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if available.is_empty() {
                return Ok(false);
            }

            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(end) => {
                    let terminator = available[end];
                    self.bytes.extend_from_slice(&available[..end]);
                    self.inner.consume(end + 1);
                    self.skip_lf = terminator == b'\r';
                    return Ok(true);
                }
                None => {
                    let len = available.len();
                    self.bytes.extend_from_slice(available);
                    self.inner.consume(len);
                }
            }
        }
    }

    fn peek(&mut self) -> io::Result<Option<u8>> {
        loop {
            match self.inner.fill_buf() {
                Ok(available) => return Ok(available.first().copied()),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

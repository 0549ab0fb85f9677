//! Injected line-oriented input.

use std::io::BufRead;

/// A source of input lines.
///
/// `Ok(None)` means the source is exhausted.
pub trait InputSource {
    /// Reads the next line without its trailing newline.
    fn next_line(&mut self) -> std::io::Result<Option<String>>;
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn next_line(&mut self) -> std::io::Result<Option<String>> {
        (**self).next_line()
    }
}

/// Input read from any buffered reader (stdin, a file, an in-memory cursor).
#[derive(Debug)]
pub struct LineInput<R> {
    reader: R,
}

impl<R: BufRead> LineInput<R> {
    /// Wraps a reader.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> InputSource for LineInput<R> {
    fn next_line(&mut self) -> std::io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_lines_until_exhausted() {
        let mut input = LineInput::new(Cursor::new("1 2\r\nabc\n"));
        assert_eq!(input.next_line().unwrap().as_deref(), Some("1 2"));
        assert_eq!(input.next_line().unwrap().as_deref(), Some("abc"));
        assert_eq!(input.next_line().unwrap(), None);
    }
}

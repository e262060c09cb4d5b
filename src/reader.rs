use crate::Never;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Stdin};
use std::str::Split;

/// A line of input exactly equal to this token manually signals end of input during interactive
/// sessions. The token itself is never part of the acquired input.
pub const END_OF_INPUT: &str = "!EOF";

/// An object that provides raw input lines to a [`crate::Runner`].
///
/// See [`crate::Runner::new`] for more information.
pub trait Reader {
    /// The error returned by this reader.
    type Error: std::error::Error;

    /// Return the next line from the input, without its line terminator.
    ///
    /// `Ok(None)` signals the end of the input. This is the normal way a run's input ends, not an
    /// error, and once it has been returned every subsequent call returns it again.
    fn next_line(&mut self) -> Result<Option<String>, Self::Error>;
}

/// An object that can be converted into a [`crate::Reader`].
///
/// For example, any utf8-string can be converted into a `StringReader`, such that
/// `Runner::new(solver, "mystring")` and `Runner::new(solver, &String::new())` work.
pub trait Readable<'a> {
    /// The reader type to which this type should be converted.
    type Reader: Reader + 'a;

    /// Convert self to some sort of reader.
    fn to_reader(self) -> Self::Reader;
}

impl<'a, R: 'a + Reader> Readable<'a> for R {
    type Reader = Self;

    fn to_reader(self) -> Self::Reader {
        self
    }
}

/// A reader over a preset block of text, as used in test mode.
///
/// The text is split on `'\n'`; a trailing `'\r'` per line is stripped. Splitting preset text is
/// finite and deterministic, so this reader's error type is [`crate::Never`].
///
/// Example:
///
/// ```rust
/// use casework::{Reader, Readable};
///
/// let mut reader = "first\nsecond".to_reader();
/// assert_eq!(reader.next_line().unwrap(), Some("first".to_owned()));
/// assert_eq!(reader.next_line().unwrap(), Some("second".to_owned()));
/// assert_eq!(reader.next_line().unwrap(), None);
/// ```
pub struct StringReader<'a> {
    lines: Split<'a, char>,
    trim: bool,
}

impl<'a> StringReader<'a> {
    /// Construct a `StringReader` over `input`, keeping each line as-is.
    pub fn new(input: &'a str) -> Self {
        StringReader {
            lines: input.split('\n'),
            trim: false,
        }
    }

    /// Construct a `StringReader` that additionally trims surrounding whitespace from every line.
    ///
    /// Handy for test data written as an indented string literal inside a source file.
    pub fn trimmed(input: &'a str) -> Self {
        StringReader {
            lines: input.split('\n'),
            trim: true,
        }
    }
}

impl<'a> Reader for StringReader<'a> {
    type Error = Never;

    fn next_line(&mut self) -> Result<Option<String>, Self::Error> {
        Ok(self.lines.next().map(|line| {
            let line = line.strip_suffix('\r').unwrap_or(line);
            if self.trim { line.trim() } else { line }.to_owned()
        }))
    }
}

impl<'a> Readable<'a> for &'a str {
    type Reader = StringReader<'a>;

    fn to_reader(self) -> Self::Reader {
        StringReader::new(self)
    }
}

impl<'a> Readable<'a> for &'a String {
    type Reader = StringReader<'a>;

    fn to_reader(self) -> Self::Reader {
        StringReader::new(self.as_str())
    }
}

/// A `LineReader` can be used to acquire input from any type that implements `std::io::BufRead`,
/// most notably the standard input stream of an online interpreter session.
///
/// Reading blocks until the underlying stream signals end-of-input or a line exactly equal to
/// [`END_OF_INPUT`] arrives; the sentinel line is excluded from the input and terminates reading
/// for good. This path consumes the external stream and is not restartable.
///
/// Because of trait impl conflicts, `LineReader` needs to be explicitly constructed. The
/// exceptions to that are `Stdin` and `File`, which can be directly passed to
/// [`crate::Runner::new`].
pub struct LineReader<R: BufRead> {
    inner: R,
    done: bool,
}

impl<R: BufRead> LineReader<R> {
    /// Construct a new `LineReader` from any type that implements `BufRead`.
    pub fn new(inner: R) -> Self {
        LineReader { inner, done: false }
    }
}

impl<R: BufRead> Reader for LineReader<R> {
    type Error = io::Error;

    fn next_line(&mut self) -> Result<Option<String>, Self::Error> {
        if self.done {
            return Ok(None);
        }
        let mut line = String::new();
        if self.inner.read_line(&mut line)? == 0 {
            self.done = true;
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        if line == END_OF_INPUT {
            self.done = true;
            return Ok(None);
        }
        Ok(Some(line))
    }
}

impl<'a> Readable<'a> for Stdin {
    type Reader = LineReader<BufReader<Stdin>>;

    fn to_reader(self) -> Self::Reader {
        LineReader::new(BufReader::new(self))
    }
}

impl<'a> Readable<'a> for File {
    type Reader = LineReader<BufReader<File>>;

    fn to_reader(self) -> Self::Reader {
        LineReader::new(BufReader::new(self))
    }
}

#[test]
fn test_sentinel_terminates_reading() {
    let mut reader = LineReader::new(io::Cursor::new("one\r\ntwo\n!EOF\nthree\n"));
    assert_eq!(reader.next_line().unwrap(), Some("one".to_owned()));
    assert_eq!(reader.next_line().unwrap(), Some("two".to_owned()));
    assert_eq!(reader.next_line().unwrap(), None);
    // terminated for good, "three" is never surfaced
    assert_eq!(reader.next_line().unwrap(), None);
}

#[test]
fn test_trimmed_string_reader() {
    let mut reader = StringReader::trimmed("  padded  \n\tx");
    assert_eq!(reader.next_line().unwrap(), Some("padded".to_owned()));
    assert_eq!(reader.next_line().unwrap(), Some("x".to_owned()));
    assert_eq!(reader.next_line().unwrap(), None);
}

use std::fmt;
use std::io;

/// All errors a [`crate::Runner`] can fail with.
///
/// `E` is the error type of the input [`crate::Reader`]; for preset text it is [`crate::Never`],
/// which makes the `Read` variant statically unreachable.
///
/// Note what is *not* in here: running out of input is the normal way acquisition ends and is
/// handled inside the readers, and a mis-shaped expected answer only degrades self-check verdicts
/// to "unknown" instead of aborting the run.
#[derive(Debug)]
pub enum Error<E> {
    /// The underlying input stream failed while acquiring raw input.
    Read(E),

    /// The case splitter produced no usable cases.
    ///
    /// A run without cases is rejected before solving begins rather than silently producing an
    /// empty answer. Fatal: the run is aborted and never retried.
    NoCases,

    /// A self-check diagnostic line could not be written to the report sink.
    Report(io::Error),
}

impl<E: fmt::Display> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::Read(ref e) => write!(f, "failed to read input: {}", e),
            Error::NoCases => write!(f, "case splitter returned no cases"),
            Error::Report(ref e) => write!(f, "failed to write check report: {}", e),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for Error<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Error::Read(ref e) => Some(e),
            Error::NoCases => None,
            Error::Report(ref e) => Some(e),
        }
    }
}

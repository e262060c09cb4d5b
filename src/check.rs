use std::fmt;
use std::fmt::Debug;
use std::io::{self, Write};
use std::time::{Duration, Instant};

use crate::Render;

/// The self-check result for a single case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The rendered answer equals the expected token.
    Correct,
    /// The rendered answer differs from the expected token.
    Wrong,
    /// No expected token was available for this case; nothing was verified.
    Unknown,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match *self {
            Verdict::Correct => "correct",
            Verdict::Wrong => "wrong",
            Verdict::Unknown => "unknown",
        })
    }
}

/// What happened to one case during a checked run.
#[derive(Debug, Clone)]
pub struct CaseOutcome {
    /// The rendered answer to this case.
    pub answer: String,
    /// How long `solve_case` took.
    pub elapsed: Duration,
    /// The verdict against the expected token, if any.
    pub verdict: Verdict,
}

/// The record of a whole checked run, returned by [`crate::Runner::check`].
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Per-case outcomes, in original case order.
    pub cases: Vec<CaseOutcome>,
    /// The final problem answer: all case answers joined with single spaces.
    pub answer: String,
    /// Total time spent solving all cases.
    pub elapsed: Duration,
}

impl RunReport {
    /// The overall verdict of the run.
    ///
    /// `Some(false)` if any single case was wrong. `None` if nothing could be verified (no
    /// expected answer was given, or its shape did not match the cases); an unverifiable run is
    /// deliberately not a failed run. `Some(true)` otherwise.
    pub fn passed(&self) -> Option<bool> {
        if self.cases.iter().any(|c| c.verdict == Verdict::Wrong) {
            Some(false)
        } else if self.cases.iter().all(|c| c.verdict == Verdict::Unknown) {
            None
        } else {
            Some(true)
        }
    }
}

/// Invoke `call` with `args`, reporting timing and output to stdout, and return the raw result.
///
/// This is the standalone flavor of the runner's self-check: it works on any plain function or
/// closure, outside of a [`crate::Runner`]. `label` names the call in the report (Rust has no
/// runtime reflection on function names, so the caller supplies one). If `expected` is given, the
/// rendered output is compared against it by exact string equality.
///
/// Multiple arguments are passed as a tuple, which keeps the argument bundle printable in one
/// piece:
///
/// ```rust
/// let product = casework::check_call(
///     "multiply",
///     |(a, b): (u32, u32)| a * b,
///     (6, 7),
///     Some("42"),
/// ).unwrap();
/// assert_eq!(product, 42);
/// ```
pub fn check_call<F, A, T>(label: &str, call: F, args: A, expected: Option<&str>) -> io::Result<T>
where
    F: FnOnce(A) -> T,
    A: Debug,
    T: Render,
{
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    check_call_into(&mut lock, label, call, args, expected)
}

/// Like [`check_call`], but writes the report to `sink` instead of stdout.
pub fn check_call_into<W, F, A, T>(
    sink: &mut W,
    label: &str,
    call: F,
    args: A,
    expected: Option<&str>,
) -> io::Result<T>
where
    W: Write,
    F: FnOnce(A) -> T,
    A: Debug,
    T: Render,
{
    writeln!(sink, "TEST: Checking {}.", label)?;
    writeln!(sink, "TEST: Arguments are: {:?}", args)?;
    let start = Instant::now();

    let result = call(args);

    let elapsed = start.elapsed();
    let rendered = result.render();
    writeln!(sink, "TEST: Output:\nTEST: {}", rendered)?;
    if let Some(expected) = expected {
        if rendered == expected {
            writeln!(sink, "TEST: Correct!")?;
        } else {
            writeln!(sink, "TEST: Wrong! Correct output:\nTEST: {}", expected)?;
        }
    }
    writeln!(sink, "TEST: Time: {:.2}s.\n", elapsed.as_secs_f64())?;

    Ok(result)
}

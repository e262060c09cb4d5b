use crate::Render;

/// The two problem-specific hooks a [`crate::Runner`] drives.
///
/// This is the whole per-problem surface: how to split the raw input into cases, and how to solve
/// one case. Everything else (input acquisition, answer rendering and joining, self-checking) is
/// generic and lives in the runner.
///
/// The hooks take `&mut self` so a solver may keep scratch state between calls, but `solve_case`
/// must not depend on or mutate any other case's state: the runner solves cases sequentially in
/// their original order, and case `i`'s answer occupies position `i` of the problem answer.
///
/// # Example
///
/// ```rust
/// use casework::{Runner, Solver};
///
/// /// Every line is one case; the answer is its length.
/// struct LineLengths;
///
/// impl Solver for LineLengths {
///     type Case = String;
///     type Answer = usize;
///
///     fn split_cases(&mut self, lines: &[String]) -> Vec<String> {
///         lines.to_vec()
///     }
///
///     fn solve_case(&mut self, case: &String) -> usize {
///         case.len()
///     }
/// }
///
/// let mut runner = Runner::new(LineLengths, "ab\ncdef");
/// assert_eq!(runner.answer().unwrap(), "2 4");
/// ```
pub trait Solver {
    /// One independent unit of work derived from the raw input.
    ///
    /// A case has no identity beyond its position in the case sequence. `Debug` is only required
    /// when running under the self-check harness, which dumps each case before solving it.
    type Case;

    /// The answer to a single case, rendered through [`crate::Render`].
    type Answer: Render;

    /// Split the raw input lines into an ordered sequence of cases.
    ///
    /// The implementation must consume the entire input exactly once and is free to interpret
    /// per-line or whole-block structure as the specific problem dictates, e.g. a leading case
    /// count followed by fixed-size groups of lines.
    ///
    /// Returning no cases at all is considered a malformed split and makes the runner fail with
    /// [`crate::Error::NoCases`] before any solving begins.
    fn split_cases(&mut self, lines: &[String]) -> Vec<Self::Case>;

    /// Solve a single case according to the problem statement.
    fn solve_case(&mut self, case: &Self::Case) -> Self::Answer;
}

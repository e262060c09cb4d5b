#![deny(missing_docs)]
// Judge input is untrusted text from the outside world.
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

mod check;
mod error;
mod never;
mod reader;
mod render;
mod runner;
mod solver;

pub use check::{check_call, check_call_into, CaseOutcome, RunReport, Verdict};
pub use error::Error;
pub use never::Never;
pub use reader::{LineReader, Readable, Reader, StringReader, END_OF_INPUT};
pub use render::Render;
pub use runner::Runner;
pub use solver::Solver;

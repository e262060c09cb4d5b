//! A thin demo driver showing how a concrete solver is wired up.
//!
//! The problem: the first input line is the case count, then every following line holds one pair
//! of numbers; the answer to a case is the pair's sum.
//!
//! ```text
//! printf '2\n3 4\n10 20' | cargo run --bin sumpairs
//! ```
//!
//! Output:
//!
//! ```text
//! 7 30
//! ```
//!
//! With `--test-data` the input is taken from the flag instead of stdin and the run is
//! self-checked; `--test-answer` supplies the expected output for comparison.
use std::io;
use std::process::exit;

use argh::FromArgs;
use casework::{Runner, Solver};

/// Sum pairs of numbers: a leading case count, then one pair per line.
#[derive(FromArgs)]
struct Cli {
    /// preset input text to run on instead of stdin, with self-checking enabled
    #[argh(option)]
    test_data: Option<String>,

    /// expected overall answer, one whitespace-separated token per case
    #[argh(option)]
    test_answer: Option<String>,
}

struct SumPairs;

impl Solver for SumPairs {
    type Case = (i64, i64);
    type Answer = i64;

    fn split_cases(&mut self, lines: &[String]) -> Vec<Self::Case> {
        let mut lines = lines.iter();
        let count: usize = lines
            .next()
            .and_then(|line| line.trim().parse().ok())
            .unwrap_or(0);
        lines
            .take(count)
            .filter_map(|line| {
                let mut nums = line.split_whitespace().filter_map(|t| t.parse().ok());
                Some((nums.next()?, nums.next()?))
            })
            .collect()
    }

    fn solve_case(&mut self, case: &Self::Case) -> i64 {
        case.0 + case.1
    }
}

fn main() {
    let cli: Cli = argh::from_env();

    let result = match cli.test_data {
        Some(ref data) => {
            let mut runner = Runner::new(SumPairs, data.as_str());
            if let Some(ref answer) = cli.test_answer {
                runner = runner.expecting(answer);
            }
            runner
                .check()
                .map(|report| report.answer)
                .map_err(|e| e.to_string())
        }
        None => {
            let mut runner = Runner::new(SumPairs, io::stdin());
            runner.answer().map(str::to_owned).map_err(|e| e.to_string())
        }
    };

    match result {
        Ok(answer) => println!("{}", answer),
        Err(message) => {
            eprintln!("{}", message);
            exit(1);
        }
    }
}

use std::cell::Cell;
use std::io::Cursor;
use std::rc::Rc;

use casework::{Error, LineReader, Runner, Solver, Verdict};
use pretty_assertions::assert_eq;

/// The worked example: a leading case count, then one pair of numbers per line.
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

#[test]
fn test_example_scenario() {
    let mut runner = Runner::new(SumPairs, "2\n3 4\n10 20");
    assert_eq!(runner.answer().unwrap(), "7 30");
}

#[test]
fn test_order_is_preserved() {
    struct Identity;
    impl Solver for Identity {
        type Case = String;
        type Answer = String;
        fn split_cases(&mut self, lines: &[String]) -> Vec<String> {
            lines.to_vec()
        }
        fn solve_case(&mut self, case: &String) -> String {
            case.clone()
        }
    }

    let input: Vec<String> = (0..100).map(|i| i.to_string()).collect();
    let text = input.join("\n");
    let mut runner = Runner::new(Identity, text.as_str());
    assert_eq!(runner.answer().unwrap(), input.join(" "));
}

#[test]
fn test_answer_is_memoized() {
    struct Counting {
        solves: Rc<Cell<usize>>,
    }
    impl Solver for Counting {
        type Case = String;
        type Answer = usize;
        fn split_cases(&mut self, lines: &[String]) -> Vec<String> {
            lines.to_vec()
        }
        fn solve_case(&mut self, case: &String) -> usize {
            self.solves.set(self.solves.get() + 1);
            case.len()
        }
    }

    let solves = Rc::new(Cell::new(0));
    let mut runner = Runner::new(
        Counting {
            solves: Rc::clone(&solves),
        },
        "ab\ncdef",
    );

    let first = runner.answer().unwrap().to_owned();
    assert_eq!(first, "2 4");
    assert_eq!(solves.get(), 2);

    // second call returns the cached string; the solver is not invoked again
    let second = runner.answer().unwrap().to_owned();
    assert_eq!(second, first);
    assert_eq!(solves.get(), 2);
}

#[test]
fn test_check_round_trip_passes() {
    let mut sink = Vec::new();
    let mut runner = Runner::new(SumPairs, "2\n3 4\n10 20").expecting("7 30");
    let report = runner.check_into(&mut sink).unwrap();

    assert_eq!(report.answer, "7 30");
    assert_eq!(report.passed(), Some(true));
    assert!(report.cases.iter().all(|c| c.verdict == Verdict::Correct));

    let narrative = String::from_utf8(sink).unwrap();
    assert!(narrative.contains("Test mode on. Answers are given."));
    assert!(narrative.contains("TEST: Case 1: (3, 4)"));
    assert!(narrative.contains("TEST: Passed."));
}

#[test]
fn test_check_flags_only_the_mismatched_case() {
    let mut sink = Vec::new();
    let mut runner = Runner::new(SumPairs, "3\n1 1\n2 2\n3 3").expecting("2 5 6");
    let report = runner.check_into(&mut sink).unwrap();

    assert_eq!(report.passed(), Some(false));
    let verdicts: Vec<_> = report.cases.iter().map(|c| c.verdict).collect();
    assert_eq!(verdicts, vec![Verdict::Correct, Verdict::Wrong, Verdict::Correct]);

    let narrative = String::from_utf8(sink).unwrap();
    assert!(narrative.contains("TEST: Wrong! Correct output:\nTEST: 5"));
    assert!(narrative.contains("TEST: Failed."));
    assert!(narrative.contains("TEST: Expected answer:\nTEST: 2 5 6"));
}

#[test]
fn test_token_count_mismatch_degrades_to_unknown() {
    let mut sink = Vec::new();
    // three cases, two expected tokens: verification is off for the whole run
    let mut runner = Runner::new(SumPairs, "3\n1 1\n2 2\n3 3").expecting("2 4");
    let report = runner.check_into(&mut sink).unwrap();

    assert!(report.cases.iter().all(|c| c.verdict == Verdict::Unknown));
    assert_eq!(report.passed(), None);
    assert_eq!(report.answer, "2 4 6");

    let narrative = String::from_utf8(sink).unwrap();
    assert!(narrative.contains("TEST: Number of cases and answers differ."));
    assert!(narrative.contains("TEST: Cannot verify."));
}

#[test]
fn test_single_case_compared_against_whole_expected_string() {
    struct Triple;
    impl Solver for Triple {
        type Case = i64;
        type Answer = Vec<i64>;
        fn split_cases(&mut self, lines: &[String]) -> Vec<i64> {
            lines.iter().filter_map(|line| line.parse().ok()).collect()
        }
        fn solve_case(&mut self, case: &i64) -> Vec<i64> {
            vec![*case, case * 2, case * 3]
        }
    }

    // the sequence answer tokenizes to three expected tokens against one case, so the
    // aggregate comparison applies instead
    let mut sink = Vec::new();
    let mut runner = Runner::new(Triple, "5").expecting("5 10 15");
    let report = runner.check_into(&mut sink).unwrap();

    assert_eq!(report.answer, "5 10 15");
    assert_eq!(report.cases[0].verdict, Verdict::Correct);
    assert_eq!(report.passed(), Some(true));
}

#[test]
fn test_check_without_expected_answer() {
    let mut sink = Vec::new();
    let mut runner = Runner::new(SumPairs, "1\n3 4");
    let report = runner.check_into(&mut sink).unwrap();

    assert_eq!(report.answer, "7");
    assert_eq!(report.passed(), None);
    assert!(String::from_utf8(sink)
        .unwrap()
        .contains("Test mode on. No answers given."));
}

#[test]
fn test_check_is_recorded() {
    let mut sink = Vec::new();
    let mut runner = Runner::new(SumPairs, "1\n3 4").expecting("7");
    let first = runner.check_into(&mut sink).unwrap();

    // the second check returns the recorded report and writes no second narrative
    let mut silent = Vec::new();
    let second = runner.check_into(&mut silent).unwrap();
    assert_eq!(second.answer, first.answer);
    assert_eq!(second.passed(), first.passed());
    assert!(silent.is_empty());

    // and the production getter reuses the checked answer
    assert_eq!(runner.answer().unwrap(), "7");
}

#[test]
fn test_empty_split_is_rejected() {
    struct NoSplit;
    impl Solver for NoSplit {
        type Case = ();
        type Answer = u32;
        fn split_cases(&mut self, _lines: &[String]) -> Vec<()> {
            Vec::new()
        }
        fn solve_case(&mut self, _case: &()) -> u32 {
            0
        }
    }

    let mut runner = Runner::new(NoSplit, "some\ninput");
    match runner.answer() {
        Err(Error::NoCases) => {}
        other => panic!("expected Error::NoCases, got {:?}", other),
    }
}

#[test]
fn test_sentinel_ends_live_input() {
    let stream = Cursor::new("2\n3 4\n!EOF\nignored garbage\n");
    let mut runner = Runner::new(SumPairs, LineReader::new(stream));
    // only one pair arrives before the sentinel, even though the count promised two
    assert_eq!(runner.answer().unwrap(), "7");
}

#[test]
fn test_empty_input_is_not_a_read_error() {
    struct OneShot;
    impl Solver for OneShot {
        type Case = usize;
        type Answer = usize;
        fn split_cases(&mut self, lines: &[String]) -> Vec<usize> {
            vec![lines.len()]
        }
        fn solve_case(&mut self, case: &usize) -> usize {
            *case
        }
    }

    let stream = Cursor::new("");
    let mut runner = Runner::new(OneShot, LineReader::new(stream));
    // zero lines acquired; the splitter still gets its chance
    assert_eq!(runner.answer().unwrap(), "0");
}

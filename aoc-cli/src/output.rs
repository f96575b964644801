//! Output formatting for solver results

use crate::executor::SolverResult;
use aoc_solver::{SolveError, SolverError};
use chrono::TimeDelta;
use itertools::Itertools;

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
    start_time: std::time::Instant,
}

/// Counts reported by [`OutputFormatter::print_summary`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tally {
    pub solved: usize,
    pub no_result: usize,
    pub failed: usize,
}

impl Tally {
    pub fn of(results: &[SolverResult]) -> Self {
        results.iter().fold(Tally::default(), |mut tally, r| {
            match &r.answer {
                Ok(_) => tally.solved += 1,
                Err(e) if no_result_reason(e).is_some() => tally.no_result += 1,
                Err(_) => tally.failed += 1,
            }
            tally
        })
    }
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: std::time::Instant::now(),
        }
    }

    /// Format and print a single result
    pub fn print_result(&self, result: &SolverResult) {
        match (&result.answer, self.quiet) {
            (Err(e), _) if no_result_reason(e).is_none() => eprintln!("{}", format_result(result)),
            (Ok(answer), true) => println!("{}", answer),
            _ => println!("{}", format_result(result)),
        }
    }

    /// Print a summary after all results
    /// Shows both total solve time (sum of durations) and actual elapsed wall-clock time
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }

        let tally = Tally::of(results);
        let total_parse_time = total_parse_time(results);
        let total_solve_time: TimeDelta = results
            .iter()
            .filter(|r| r.answer.is_ok())
            .map(|r| r.solve_duration)
            .sum();
        let total_compute_time = total_parse_time + total_solve_time;
        let elapsed_time = self.start_time.elapsed();

        println!();
        println!("--- Summary ---");
        println!(
            "Parts: {} solved, {} without result, {} failed",
            tally.solved, tally.no_result, tally.failed
        );
        println!("Total parse time: {}", format_duration(total_parse_time));
        println!("Total solve time: {}", format_duration(total_solve_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(elapsed_time)
        );
        if !elapsed_time.is_zero() {
            let total_compute_secs =
                total_compute_time.num_microseconds().unwrap_or(0) as f64 / 1_000_000.0;
            let speedup = total_compute_secs / elapsed_time.as_secs_f64();
            println!("Speedup factor: {:.2}x", speedup);
        }
    }
}

/// One line per part: `YYYY/DD Part N: ...`
pub fn format_result(result: &SolverResult) -> String {
    let prefix = format!("{}/{:02} Part {}", result.year, result.day, result.part);

    match &result.answer {
        Ok(answer) => {
            let parse_timing = result
                .parse_duration
                .map(|d| format!("parse: {}, ", format_duration(d)))
                .unwrap_or_default();
            format!(
                "{}: {} ({}solve: {})",
                prefix,
                answer,
                parse_timing,
                format_duration(result.solve_duration)
            )
        }
        Err(e) => match no_result_reason(e) {
            Some(reason) => format!("{}: no result ({})", prefix, reason),
            None => format!("{}: Error - {}", prefix, e),
        },
    }
}

/// The reason a solver gave for legitimately having no answer
fn no_result_reason(e: &SolverError) -> Option<&str> {
    match e {
        SolverError::SolveError(SolveError::NoSolution(reason)) => Some(reason),
        _ => None,
    }
}

/// Parts of one puzzle share a parse, so it is counted once per year/day
fn total_parse_time(results: &[SolverResult]) -> TimeDelta {
    results
        .iter()
        .filter_map(|r| r.parse_duration.map(|d| ((r.year, r.day), d)))
        .unique_by(|(key, _)| *key)
        .map(|(_, d)| d)
        .sum()
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::ParseError;

    fn result(part: u8, answer: Result<String, SolverError>) -> SolverResult {
        SolverResult {
            year: 2015,
            day: 4,
            part,
            answer,
            parse_duration: Some(TimeDelta::microseconds(250)),
            solve_duration: TimeDelta::milliseconds(1500),
        }
    }

    #[test]
    fn test_answer_line() {
        let line = format_result(&result(1, Ok("609043".to_string())));
        assert_eq!(line, "2015/04 Part 1: 609043 (parse: 250µs, solve: 1.50s)");
    }

    #[test]
    fn test_no_result_line() {
        let answer = Err(SolverError::SolveError(SolveError::NoSolution(
            "molecule cannot be reduced".to_string(),
        )));
        assert_eq!(
            format_result(&result(2, answer)),
            "2015/04 Part 2: no result (molecule cannot be reduced)"
        );
    }

    #[test]
    fn test_error_line() {
        let answer = Err(SolverError::ParseError(ParseError::InvalidFormat(
            "(line 1) empty".to_string(),
        )));
        assert_eq!(
            format_result(&result(1, answer)),
            "2015/04 Part 1: Error - Parse error: Invalid format: (line 1) empty"
        );
    }

    #[test]
    fn test_format_duration_units() {
        assert_eq!(format_duration(TimeDelta::microseconds(999)), "999µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1500)), "1.50ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(2500)), "2.50s");
        assert_eq!(format_duration(TimeDelta::microseconds(-20)), "-20µs");
    }

    #[test]
    fn test_tally_and_shared_parse_time() {
        let results = vec![
            result(1, Ok("1".to_string())),
            result(2, Err(SolverError::SolveError(SolveError::NoSolution("x".into())))),
            SolverResult {
                day: 5,
                ..result(1, Err(SolverError::NotFound(2015, 5)))
            },
        ];
        assert_eq!(
            Tally::of(&results),
            Tally {
                solved: 1,
                no_result: 1,
                failed: 1,
            }
        );
        assert_eq!(total_parse_time(&results), TimeDelta::microseconds(500));
    }
}

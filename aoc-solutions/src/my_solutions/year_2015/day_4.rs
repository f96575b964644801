//! Day 4: The Ideal Stocking Stuffer
//!
//! AdventCoins are mined by finding the lowest positive number that, appended
//! in decimal to the secret key, gives an MD5 digest starting with five
//! (part 1) or six (part 2) hex zeros. See [`crate::utils::hash_search`] for
//! the byte-level zero check.
//!
//! Part 2 needs roughly 16 times more candidates than part 1 on average, so
//! it runs the batched parallel search; both return the same minimum.
//!
//! The search itself accepts an empty prefix, but an empty puzzle input is
//! almost certainly a missing key, so parsing rejects it.

use crate::utils::hash_search::{self, DEFAULT_BATCH_SIZE};
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

const PART_1_ZERO_NIBBLES: u8 = 5;
const PART_2_ZERO_NIBBLES: u8 = 6;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 4, tags = ["2015", "hashing", "brute-force"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = &'a [u8];

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let key = input.trim();
        if key.is_empty() {
            return Err(ParseError::MissingData("secret key is empty".to_string()));
        }
        if let Some(c) = key.chars().find(|c| c.is_whitespace()) {
            return Err(ParseError::InvalidFormat(format!(
                "secret key must be a single token, found {c:?}"
            )));
        }
        Ok(key.as_bytes())
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        hash_search::find_first_match(*shared, PART_1_ZERO_NIBBLES)
            .map(|n| n.to_string())
            .map_err(|e| SolveError::SolveFailed(Box::new(e)))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        hash_search::find_first_match_parallel(*shared, PART_2_ZERO_NIBBLES, DEFAULT_BATCH_SIZE)
            .map(|n| n.to_string())
            .map_err(|e| SolveError::SolveFailed(Box::new(e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    #[test]
    fn test_parse_trims_newline() {
        assert_eq!(Solver::parse("abcdef\n").unwrap(), b"abcdef");
    }

    #[test]
    fn test_parse_rejects_empty_and_multi_token() {
        assert!(matches!(Solver::parse(" \n"), Err(ParseError::MissingData(_))));
        assert!(matches!(
            Solver::parse("abc def"),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_part_1_examples() {
        let mut shared = Solver::parse("abcdef").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "609043");

        let mut shared = Solver::parse("pqrstuv").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "1048970");
    }
}

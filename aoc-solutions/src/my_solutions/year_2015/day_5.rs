//! Day 5: Doesn't He Have Intern-Elves For This?
//!
//! Each line is classified as nice or naughty by a set of string rules and
//! the nice ones are counted.
//!
//! Part 1 rules: at least three vowels, at least one letter appearing twice
//! in a row, and none of `ab`, `cd`, `pq`, `xy`.
//!
//! Part 2 rules: some pair of letters appears twice without overlapping
//! (`xyxy` yes, `aaa` no), and some letter repeats with exactly one letter
//! between (`xyx`, `aaa`).
//!
//! Everything works on bytes with `windows`, so each rule is a single pass.

use crate::utils::lines::parse_lines;
use anyhow::bail;
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use std::collections::HashMap;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 5, tags = ["2015", "strings"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<&'a [u8]>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, |line| {
            if !line.bytes().all(|b| b.is_ascii_lowercase()) {
                bail!("expected lowercase letters only, got {line:?}");
            }
            Ok(line.as_bytes())
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().filter(|s| is_nice_v1(s)).count().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().filter(|s| is_nice_v2(s)).count().to_string())
    }
}

const FORBIDDEN_PAIRS: [&[u8; 2]; 4] = [b"ab", b"cd", b"pq", b"xy"];

fn is_nice_v1(s: &[u8]) -> bool {
    let vowels = s.iter().filter(|&&b| b"aeiou".contains(&b)).count();
    let has_double = s.windows(2).any(|w| w[0] == w[1]);
    let has_forbidden = s
        .windows(2)
        .any(|w| FORBIDDEN_PAIRS.iter().any(|pair| w == pair.as_slice()));
    vowels >= 3 && has_double && !has_forbidden
}

fn is_nice_v2(s: &[u8]) -> bool {
    has_repeated_pair(s) && s.windows(3).any(|w| w[0] == w[2])
}

/// A pair occurring at two positions at least two apart.
fn has_repeated_pair(s: &[u8]) -> bool {
    let mut first_seen: HashMap<&[u8], usize> = HashMap::new();
    s.windows(2).enumerate().any(|(i, pair)| match first_seen.get(pair) {
        Some(&first) => i >= first + 2,
        None => {
            first_seen.insert(pair, i);
            false
        }
    })
}

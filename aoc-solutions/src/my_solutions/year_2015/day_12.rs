//! Day 12: JSAbacusFramework.io
//!
//! The input is one JSON document. Part 1 sums every number in it. Part 2
//! does the same but skips any object (and everything inside it) that has
//! the string `"red"` as one of its values; arrays containing `"red"` are
//! still counted.
//!
//! Only integers in the `i64` range are accepted; a float or a larger integer
//! anywhere in the document is a parse error.

use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use serde_json::Value;

const IGNORED_MARKER: &str = "red";

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 12, tags = ["2015", "json", "recursion"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Value;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let document: Value = serde_json::from_str(input.trim())
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        match first_non_integer(&document) {
            Some(n) => Err(ParseError::InvalidFormat(format!(
                "{n} is not an integer in the i64 range"
            ))),
            None => Ok(document),
        }
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        total(shared, None)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        total(shared, Some(IGNORED_MARKER))
    }
}

fn total(document: &Value, skip_marker: Option<&str>) -> Result<String, SolveError> {
    sum_numbers(document, skip_marker)
        .map(|sum| sum.to_string())
        .ok_or_else(|| SolveError::SolveFailed("sum does not fit in an i64".into()))
}

/// Floats and integers beyond `i64` are rejected up front so none is summed as 0.
fn first_non_integer(value: &Value) -> Option<&serde_json::Number> {
    match value {
        Value::Number(n) if n.as_i64().is_none() => Some(n),
        Value::Array(items) => items.iter().find_map(first_non_integer),
        Value::Object(map) => map.values().find_map(first_non_integer),
        _ => None,
    }
}

/// Sum all integer leaves, skipping objects with a string value equal to
/// `skip_marker`. `None` on `i64` overflow or a non-integer leaf.
fn sum_numbers(value: &Value, skip_marker: Option<&str>) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::Array(items) => sum_all(items.iter(), skip_marker),
        Value::Object(map) => {
            let skipped = skip_marker
                .is_some_and(|marker| map.values().any(|v| v.as_str() == Some(marker)));
            if skipped {
                Some(0)
            } else {
                sum_all(map.values(), skip_marker)
            }
        }
        Value::Null | Value::Bool(_) | Value::String(_) => Some(0),
    }
}

fn sum_all<'v>(mut values: impl Iterator<Item = &'v Value>, skip_marker: Option<&str>) -> Option<i64> {
    values.try_fold(0i64, |acc, v| acc.checked_add(sum_numbers(v, skip_marker)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    fn solve(input: &str, part: u8) -> String {
        let mut shared = Solver::parse(input).unwrap();
        Solver::solve_part(&mut shared, part).unwrap()
    }

    #[test]
    fn test_part_1_examples() {
        for (input, expected) in [
            ("[1,2,3]", "6"),
            (r#"{"a":2,"b":4}"#, "6"),
            ("[[[3]]]", "3"),
            (r#"{"a":{"b":4},"c":-1}"#, "3"),
            (r#"{"a":[-1,1]}"#, "0"),
            (r#"[-1,{"a":1}]"#, "0"),
            ("[]", "0"),
            ("{}", "0"),
        ] {
            assert_eq!(solve(input, 1), expected, "input {input}");
        }
    }

    #[test]
    fn test_part_2_examples() {
        for (input, expected) in [
            ("[1,2,3]", "6"),
            (r#"[1,{"c":"red","b":2},3]"#, "4"),
            (r#"{"d":"red","e":[1,2,3,4],"f":5}"#, "0"),
            (r#"[1,"red",5]"#, "6"),
        ] {
            assert_eq!(solve(input, 2), expected, "input {input}");
        }
    }

    #[test]
    fn test_red_key_does_not_skip() {
        assert_eq!(solve(r#"{"red":7}"#, 2), "7");
    }

    #[test]
    fn test_non_integer_numbers_rejected() {
        for input in ["[1, 2.5]", r#"{"a":[18446744073709551615]}"#, "1e3"] {
            assert!(
                matches!(Solver::parse(input), Err(ParseError::InvalidFormat(_))),
                "input {input}"
            );
        }
    }

    #[test]
    fn test_overflowing_sum_fails() {
        let input = "[9223372036854775807, 1]";
        let mut shared = Solver::parse(input).unwrap();
        assert!(matches!(
            Solver::solve_part(&mut shared, 1),
            Err(SolveError::SolveFailed(_))
        ));
        assert_eq!(solve("[9223372036854775807, -1]", 1), "9223372036854775806");
    }

    #[test]
    fn test_invalid_json_rejected() {
        assert!(matches!(
            Solver::parse("[1,2"),
            Err(ParseError::InvalidFormat(_))
        ));
    }
}

//! The three traits a puzzle implements
//!
//! A day is split into one parse and one solve per part. [`AocParser`] turns
//! the raw input into `SharedData`, each [`PartSolver<N>`] reads (and may
//! update) that data, and [`Solver`] ties the parts together behind a runtime
//! part number. Because parts run in order on the same `SharedData`, part 2
//! can pick up whatever part 1 left behind.
//!
//! ```
//! use aoc_solver::{AocParser, ParseError, PartSolver, SolveError, Solver, SolverExt};
//!
//! /// Floor counting: `(` goes up, `)` goes down.
//! struct Floors;
//!
//! impl AocParser for Floors {
//!     type SharedData<'a> = &'a [u8];
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         let steps = input.trim().as_bytes();
//!         match steps.iter().find(|&&b| b != b'(' && b != b')') {
//!             Some(&b) => Err(ParseError::InvalidFormat(format!("unexpected {:?}", b as char))),
//!             None => Ok(steps),
//!         }
//!     }
//! }
//!
//! impl PartSolver<1> for Floors {
//!     fn solve(steps: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         let floor: i64 = steps.iter().map(|&b| if b == b'(' { 1 } else { -1 }).sum();
//!         Ok(floor.to_string())
//!     }
//! }
//!
//! impl Solver for Floors {
//!     const PARTS: u8 = 1;
//!
//!     fn solve_part(steps: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
//!         match part {
//!             1 => <Self as PartSolver<1>>::solve(steps),
//!             _ => Err(SolveError::PartNotImplemented(part)),
//!         }
//!     }
//! }
//!
//! assert_eq!(Floors::solve_input("(()(()(", 1).unwrap(), "3");
//! assert!(Floors::solve_input("(()", 2).is_err());
//! ```
//!
//! The `Solver` impl above is what `#[derive(AocSolver)]` writes for you.

use crate::error::{ParseError, SolveError, SolverError};

/// Input parsing, shared by every part of a day
pub trait AocParser {
    /// Parsed input plus anything parts want to hand to each other.
    ///
    /// The lifetime lets it borrow from the input (`&'a str`, `&'a [u8]`,
    /// `Vec<&'a str>`) instead of copying.
    type SharedData<'a>: 'a;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Answer for part `N`
pub trait PartSolver<const N: u8>: AocParser {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// Runtime part dispatch over `1..=PARTS`
///
/// `solve_part` may assume `part` is in range; callers going through
/// [`SolverExt`] or a `DynSolver` get `PartOutOfRange` otherwise.
pub trait Solver: AocParser {
    const PARTS: u8;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Checked entry points, implemented for every [`Solver`]
pub trait SolverExt: Solver {
    /// `PartOutOfRange` unless `part` is in `1..=PARTS`
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }

    /// Parse `input` and solve one part, without a registry or timing
    fn solve_input(input: &str, part: u8) -> Result<String, SolverError> {
        let mut shared = Self::parse(input)?;
        Ok(Self::solve_part_checked_range(&mut shared, part)?)
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}

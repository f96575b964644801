//! Advent of Code puzzle solutions with automatic registration
//!
//! Solutions are organized by year under [`my_solutions`]. Each one derives
//! `AutoRegisterSolver`, so linking this crate is enough for
//! `SolverRegistryBuilder::register_all_plugins` to find it.
//!
//! Reusable pieces live in [`utils`]:
//! - [`utils::hash_search`]: the MD5 zero-prefix search behind 2015 day 4
//! - [`utils::lines`]: line-numbered parse errors for line-oriented inputs

pub mod utils;

#[cfg(feature = "my-solutions")]
pub mod my_solutions;

//! CLI argument parsing using clap

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// Parallelization level for solver execution
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum ParallelizeBy {
    /// No parallelization; execute all solvers sequentially in order
    Sequential,
    /// Parallelize across years; days and parts run sequentially within each year
    Year,
    /// Parallelize across year/day combinations; parts run sequentially (default)
    #[default]
    Day,
}

/// Which parts of each puzzle to run
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum PartSelection {
    #[value(name = "1")]
    One,
    #[value(name = "2")]
    Two,
    #[default]
    Both,
}

impl PartSelection {
    /// The single part selected, or `None` for both
    pub fn part(self) -> Option<u8> {
        match self {
            PartSelection::One => Some(1),
            PartSelection::Two => Some(2),
            PartSelection::Both => None,
        }
    }
}

/// Advent of Code solver runner
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run Advent of Code solvers", version)]
pub struct Args {
    /// Year to run (runs all years if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(2015..=2034))]
    pub year: Option<u16>,

    /// Day to run (runs all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run: 1, 2 or both
    #[arg(short, long, value_enum, default_value = "both")]
    pub part: PartSelection,

    /// Input file for the selected puzzle (requires --year and --day)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Directory holding `<year>/day<DD>.txt` inputs
    #[arg(long, env = "AOC_INPUT_DIR", default_value = "input")]
    pub input_dir: PathBuf,

    /// Tags to filter solvers (comma-separated, all must match)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Number of threads for parallel execution
    #[arg(long)]
    pub threads: Option<usize>,

    /// Parallelization level: sequential, year or day
    #[arg(long, value_enum, default_value = "day")]
    pub parallelize_by: ParallelizeBy,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,

    /// Log progress to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["aoc"]).unwrap();
        assert_eq!(args.part, PartSelection::Both);
        assert_eq!(args.parallelize_by, ParallelizeBy::Day);
        assert!(args.tags.is_empty());
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_part_values() {
        let args = Args::try_parse_from(["aoc", "--part", "2"]).unwrap();
        assert_eq!(args.part.part(), Some(2));
        let args = Args::try_parse_from(["aoc", "-p", "both"]).unwrap();
        assert_eq!(args.part.part(), None);
        assert!(Args::try_parse_from(["aoc", "--part", "3"]).is_err());
    }

    #[test]
    fn test_rejects_malformed_numbers() {
        assert!(Args::try_parse_from(["aoc", "--day", "26"]).is_err());
        assert!(Args::try_parse_from(["aoc", "--day", "four"]).is_err());
        assert!(Args::try_parse_from(["aoc", "--year", "2014"]).is_err());
    }

    #[test]
    fn test_tags_and_verbosity() {
        let args = Args::try_parse_from(["aoc", "--tags", "2015,hashing", "-vv"]).unwrap();
        assert_eq!(args.tags, vec!["2015", "hashing"]);
        assert_eq!(args.verbose, 2);
    }
}

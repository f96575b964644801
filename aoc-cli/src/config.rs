//! Configuration resolution from CLI args

use crate::cli::{Args, ParallelizeBy};
use crate::error::CliError;
use crate::input::InputLoader;
use std::path::PathBuf;

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    /// Input directory path
    pub input_dir: PathBuf,
    /// Explicit input file for the single selected year/day
    pub input_override: Option<(u16, u8, PathBuf)>,
    /// Number of threads for parallel execution
    pub thread_count: usize,
    /// Parallelization level
    pub parallelize_by: ParallelizeBy,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args, validating combinations clap cannot express
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let input_override = match (args.input, args.year, args.day) {
            (Some(path), Some(year), Some(day)) => Some((year, day, path)),
            (Some(_), _, _) => {
                return Err(CliError::Config(
                    "--input requires both --year and --day".to_string(),
                ));
            }
            (None, _, _) => None,
        };

        let thread_count = match args.threads {
            Some(0) => {
                return Err(CliError::Config("--threads must be at least 1".to_string()));
            }
            Some(n) => n,
            None => num_cpus(),
        };

        Ok(Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part.part(),
            tags: args.tags,
            input_dir: args.input_dir,
            input_override,
            thread_count,
            parallelize_by: args.parallelize_by,
            quiet: args.quiet,
        })
    }

    /// Input loader honouring the override, if any
    pub fn input_loader(&self) -> InputLoader {
        let loader = InputLoader::new(self.input_dir.clone());
        match &self.input_override {
            Some((year, day, path)) => loader.with_override(*year, *day, path.clone()),
            None => loader,
        }
    }
}

/// Get number of CPUs
fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

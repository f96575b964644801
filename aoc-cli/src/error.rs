//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;
use thiserror_ext::Arc as ArcDerive;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Inputs that must exist before anything runs
    #[error("Missing {} input file(s): {}", paths.len(), display_paths(paths))]
    MissingInput { paths: Vec<PathBuf> },

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// Some parts failed to produce an answer
    #[error("{0} part(s) failed")]
    PartsFailed(usize),

    /// Executor error (wraps Arc for cheap cloning)
    #[error("{0}")]
    Executor(#[from] ArcExecutorError),
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Executor-specific errors
#[derive(Error, Debug, ArcDerive)]
#[thiserror_ext(newtype(name = ArcExecutorError))]
pub enum ExecutorError {
    /// Input could not be read once execution started
    #[error("Input read failed for {year}/{day:02}: {source}")]
    InputRead {
        year: u16,
        day: u8,
        #[source]
        source: InputError,
    },

    /// Channel send error
    #[error("Channel send error")]
    ChannelSend,

    /// Thread pool creation failed
    #[error("Thread pool creation failed: {0}")]
    ThreadPool(String),

    /// Multiple errors collected during parallel execution
    #[error("Multiple errors occurred ({} total)", .0.len())]
    Multiple(Vec<ArcExecutorError>),
}

impl ArcExecutorError {
    /// Combine two Arc-wrapped errors into one
    /// 1. If first is singular and second is Multiple: prepend first to second's vec
    /// 2. If second is singular and first is Multiple: append second to first's vec
    /// 3. If both are Multiple: concat them
    /// 4. If both are singular: create new Multiple with both
    pub fn combine(first: ArcExecutorError, second: ArcExecutorError) -> ArcExecutorError {
        let errors = match (first.inner(), second.inner()) {
            (ExecutorError::Multiple(v1), ExecutorError::Multiple(v2)) => {
                let mut combined = v1.clone();
                combined.extend(v2.iter().cloned());
                combined
            }
            (_, ExecutorError::Multiple(v)) => {
                let mut combined = vec![first];
                combined.extend(v.iter().cloned());
                combined
            }
            (ExecutorError::Multiple(v), _) => {
                let mut combined = v.clone();
                combined.push(second);
                combined
            }
            _ => vec![first, second],
        };
        ExecutorError::Multiple(errors).into()
    }

    /// Combine an optional error with a new error
    pub fn combine_opt(
        existing: Option<ArcExecutorError>,
        new: ArcExecutorError,
    ) -> ArcExecutorError {
        match existing {
            Some(e) => Self::combine(e, new),
            None => new,
        }
    }

    /// Flatten into the singular errors it holds, in order
    pub fn leaves(&self) -> Vec<ArcExecutorError> {
        match self.inner() {
            ExecutorError::Multiple(errors) => errors.iter().flat_map(Self::leaves).collect(),
            _ => vec![self.clone()],
        }
    }
}

/// Input loading errors
#[derive(Error, Debug)]
pub enum InputError {
    /// Reading the input file failed
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(message: &str) -> ArcExecutorError {
        ExecutorError::ThreadPool(message.to_string()).into()
    }

    fn messages(err: &ArcExecutorError) -> Vec<String> {
        err.leaves().iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_combine_singles() {
        let combined = ArcExecutorError::combine(single("a"), single("b"));
        assert_eq!(combined.to_string(), "Multiple errors occurred (2 total)");
        assert_eq!(
            messages(&combined),
            vec!["Thread pool creation failed: a", "Thread pool creation failed: b"]
        );
    }

    #[test]
    fn test_combine_keeps_order_and_flattens() {
        let left = ArcExecutorError::combine(single("a"), single("b"));
        let right = ArcExecutorError::combine(single("c"), single("d"));
        let all = ArcExecutorError::combine(left, right);
        let all = ArcExecutorError::combine(single("z"), all);
        let all = ArcExecutorError::combine(all, single("e"));
        assert_eq!(all.to_string(), "Multiple errors occurred (6 total)");
        let tails: Vec<String> = messages(&all)
            .iter()
            .map(|m| m.trim_start_matches("Thread pool creation failed: ").to_string())
            .collect();
        assert_eq!(tails, vec!["z", "a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_combine_opt() {
        let only = ArcExecutorError::combine_opt(None, single("a"));
        assert_eq!(messages(&only), vec!["Thread pool creation failed: a"]);
    }

    #[test]
    fn test_missing_input_names_paths() {
        let err = CliError::MissingInput {
            paths: vec![PathBuf::from("input/2015/day04.txt"), PathBuf::from("x.txt")],
        };
        assert_eq!(
            err.to_string(),
            "Missing 2 input file(s): input/2015/day04.txt, x.txt"
        );
    }
}

//! Puzzle input loading from the local input directory

use crate::error::InputError;
use std::fs;
use std::path::{Path, PathBuf};

/// File-based puzzle input lookup
///
/// Directory structure: `{input_dir}/{year}/day{day:02}.txt`, unless an
/// explicit file was given for one year/day.
pub struct InputLoader {
    input_dir: PathBuf,
    override_path: Option<(u16, u8, PathBuf)>,
}

impl InputLoader {
    /// Create a loader rooted at `input_dir`
    pub fn new(input_dir: PathBuf) -> Self {
        Self {
            input_dir,
            override_path: None,
        }
    }

    /// Read `year`/`day` from `path` instead of the input directory
    pub fn with_override(mut self, year: u16, day: u8, path: PathBuf) -> Self {
        self.override_path = Some((year, day, path));
        self
    }

    /// Get the input path for a specific year/day
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        match &self.override_path {
            Some((y, d, path)) if (*y, *d) == (year, day) => path.clone(),
            _ => default_input_path(&self.input_dir, year, day),
        }
    }

    /// Check if the input file exists
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.input_path(year, day).is_file()
    }

    /// Read the input for a specific year/day
    pub fn load(&self, year: u16, day: u8) -> Result<String, InputError> {
        let path = self.input_path(year, day);
        let content = fs::read_to_string(&path).map_err(|source| InputError::Read {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(year, day, path = %path.display(), bytes = content.len(), "loaded input");
        Ok(content)
    }
}

/// `<dir>/<year>/day<DD>.txt`
pub fn default_input_path(input_dir: &Path, year: u16, day: u8) -> PathBuf {
    input_dir
        .join(year.to_string())
        .join(format!("day{:02}.txt", day))
}

//! Day 18: Like a GIF For Your Yard
//!
//! Conway's Game of Life on the light grid: a lit light stays lit with two or
//! three lit neighbours, an unlit light turns on with exactly three. Cells
//! beyond the edge count as off. Part 2 keeps the four corner lights stuck on
//! before and after every step.
//!
//! The grid is a flat `Vec<bool>` with a second buffer swapped in each step,
//! so a step never allocates.

use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

const STEPS: usize = 100;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 18, tags = ["2015", "grid", "cellular-automaton"])]
pub struct Solver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightGrid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl LightGrid {
    fn lit_count(&self) -> usize {
        self.cells.iter().filter(|&&on| on).count()
    }

    fn lit_neighbours(&self, x: usize, y: usize) -> usize {
        let mut count = 0;
        for ny in y.saturating_sub(1)..=(y + 1).min(self.height - 1) {
            for nx in x.saturating_sub(1)..=(x + 1).min(self.width - 1) {
                if (nx, ny) != (x, y) && self.cells[ny * self.width + nx] {
                    count += 1;
                }
            }
        }
        count
    }

    fn step_into(&self, next: &mut LightGrid) {
        for y in 0..self.height {
            for x in 0..self.width {
                let idx = y * self.width + x;
                next.cells[idx] = matches!(
                    (self.cells[idx], self.lit_neighbours(x, y)),
                    (true, 2 | 3) | (false, 3)
                );
            }
        }
    }

    fn light_corners(&mut self) {
        let (w, h) = (self.width, self.height);
        for idx in [0, w - 1, (h - 1) * w, h * w - 1] {
            self.cells[idx] = true;
        }
    }

    /// Run `steps` generations, optionally with the corners stuck on.
    fn animate(&self, steps: usize, corners_stuck: bool) -> LightGrid {
        let mut current = self.clone();
        let mut next = self.clone();
        if corners_stuck {
            current.light_corners();
        }
        for _ in 0..steps {
            current.step_into(&mut next);
            if corners_stuck {
                next.light_corners();
            }
            std::mem::swap(&mut current, &mut next);
        }
        current
    }
}

impl AocParser for Solver {
    type SharedData<'a> = LightGrid;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut width = None;
        let mut cells = Vec::new();
        let mut height = 0;

        for (line_idx, line) in input.lines().map(str::trim).enumerate() {
            if line.is_empty() {
                continue;
            }
            if *width.get_or_insert(line.len()) != line.len() {
                return Err(ParseError::InvalidFormat(format!(
                    "(line {}) row width {} differs from first row",
                    line_idx + 1,
                    line.len()
                )));
            }
            for c in line.chars() {
                cells.push(match c {
                    '#' => true,
                    '.' => false,
                    other => {
                        return Err(ParseError::InvalidFormat(format!(
                            "(line {}) unexpected cell {other:?}",
                            line_idx + 1
                        )));
                    }
                });
            }
            height += 1;
        }

        let width = width.ok_or_else(|| ParseError::MissingData("empty grid".to_string()))?;
        Ok(LightGrid {
            width,
            height,
            cells,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.animate(STEPS, false).lit_count().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.animate(STEPS, true).lit_count().to_string())
    }
}

//! Day 14: Reindeer Olympics
//!
//! Each reindeer alternates between flying at a fixed speed for a fixed time
//! and resting. Part 1 asks for the winning distance after 2503 seconds.
//! Part 2 awards a point every second to every reindeer currently in the
//! lead (ties included) and asks for the winning score.
//!
//! Distances have a closed form (full cycles plus a partial flight), so
//! part 1 does not simulate; part 2 steps second by second.

use crate::utils::lines::parse_lines;
use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

const RACE_SECONDS: u32 = 2503;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 14, tags = ["2015", "simulation"])]
pub struct Solver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reindeer {
    name: String,
    speed: u32,
    fly_seconds: u32,
    rest_seconds: u32,
}

impl Reindeer {
    /// Fly plus rest time; widened so two `u32::MAX` phases still add up.
    fn cycle(&self) -> u64 {
        u64::from(self.fly_seconds) + u64::from(self.rest_seconds)
    }

    /// Distance covered after `seconds` of racing.
    ///
    /// Flying time never exceeds `seconds`, so the product stays below
    /// `u32::MAX * u32::MAX` and fits a `u64`.
    fn distance_after(&self, seconds: u32) -> u64 {
        let seconds = u64::from(seconds);
        let fly = u64::from(self.fly_seconds);
        let cycle = self.cycle();
        let flying = (seconds / cycle) * fly + (seconds % cycle).min(fly);
        u64::from(self.speed) * flying
    }

    /// Whether the reindeer is flying during second `t` (0-based).
    fn is_flying(&self, t: u32) -> bool {
        u64::from(t) % self.cycle() < u64::from(self.fly_seconds)
    }
}

fn parse_reindeer(line: &str) -> anyhow::Result<Reindeer> {
    // "<name> can fly <speed> km/s for <fly> seconds, but then must rest for <rest> seconds."
    let words: Vec<&str> = line.split_whitespace().collect();
    let [name, "can", "fly", speed, "km/s", "for", fly, "seconds,", "but", "then", "must", "rest", "for", rest, "seconds."] =
        words.as_slice()
    else {
        return Err(anyhow!("unrecognised reindeer description: {line:?}"));
    };

    let reindeer = Reindeer {
        name: name.to_string(),
        speed: speed.parse().context("speed")?,
        fly_seconds: fly.parse().context("fly time")?,
        rest_seconds: rest.parse().context("rest time")?,
    };
    if reindeer.cycle() == 0 {
        return Err(anyhow!("{} never flies nor rests", reindeer.name));
    }
    Ok(reindeer)
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Reindeer>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let herd = parse_lines(input, parse_reindeer)?;
        if herd.is_empty() {
            return Err(ParseError::MissingData("no reindeer".to_string()));
        }
        Ok(herd)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(winning_distance(shared, RACE_SECONDS).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(winning_points(shared, RACE_SECONDS).to_string())
    }
}

fn winning_distance(herd: &[Reindeer], seconds: u32) -> u64 {
    herd.iter()
        .map(|r| r.distance_after(seconds))
        .max()
        .unwrap_or(0)
}

fn winning_points(herd: &[Reindeer], seconds: u32) -> u32 {
    let mut positions = vec![0u64; herd.len()];
    let mut points = vec![0u32; herd.len()];

    for t in 0..seconds {
        for (position, reindeer) in positions.iter_mut().zip(herd) {
            if reindeer.is_flying(t) {
                *position += u64::from(reindeer.speed);
            }
        }
        let lead = positions.iter().copied().max().unwrap_or(0);
        for (score, _) in points
            .iter_mut()
            .zip(&positions)
            .filter(|(_, position)| **position == lead)
        {
            *score += 1;
        }
    }

    points.into_iter().max().unwrap_or(0)
}

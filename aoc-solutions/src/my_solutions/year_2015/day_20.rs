//! Day 20: Infinite Elves and Infinite Houses
//!
//! Elf `e` visits houses `e, 2e, 3e, ...` leaving presents at each. Part 1
//! leaves `10 * e` presents per visit, so house `n` receives `10 * σ(n)`
//! where σ is the divisor sum. Part 2 leaves `11 * e` presents and each elf
//! stops after 50 houses.
//!
//! Both parts run a sieve over houses instead of factoring each house. House
//! `n` always receives at least `per_house * n` from elf `n` itself, so the
//! answer is never above `ceil(target / per_house)` and the sieve stops there.

use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 20, tags = ["2015", "math", "sieve"])]
pub struct Solver;

/// How the elves deliver presents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Delivery {
    per_house: usize,
    max_visits: Option<usize>,
}

const ENDLESS: Delivery = Delivery {
    per_house: 10,
    max_visits: None,
};

const LAZY: Delivery = Delivery {
    per_house: 11,
    max_visits: Some(50),
};

impl Delivery {
    /// Presents for houses `0..=last_house`; index 0 is unused.
    fn presents(self, last_house: usize) -> Vec<usize> {
        let mut presents = vec![0usize; last_house + 1];
        for elf in 1..=last_house {
            let gift = self.per_house * elf;
            let visits = (elf..=last_house).step_by(elf);
            match self.max_visits {
                Some(limit) => visits.take(limit).for_each(|house| presents[house] += gift),
                None => visits.for_each(|house| presents[house] += gift),
            }
        }
        presents
    }

    fn first_house_reaching(self, target: usize) -> usize {
        let last_house = target.div_ceil(self.per_house).max(1);
        let presents = self.presents(last_house);
        let house = presents
            .iter()
            .enumerate()
            .skip(1)
            .find(|&(_, &count)| count >= target)
            .map_or(last_house, |(house, _)| house);

        tracing::debug!(target, last_house, house, per_house = self.per_house, "sieved houses");
        house
    }
}

impl AocParser for Solver {
    type SharedData<'a> = usize;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ParseError::MissingData("present target".to_string()));
        }
        trimmed
            .parse()
            .map_err(|e| ParseError::InvalidFormat(format!("(line 1) {trimmed:?}: {e}")))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(ENDLESS.first_house_reaching(*shared).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(LAZY.first_house_reaching(*shared).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn divisor_sum(n: usize) -> usize {
        (1..=n).filter(|d| n % d == 0).sum()
    }

    #[test]
    fn test_first_nine_houses() {
        let presents = ENDLESS.presents(9);
        assert_eq!(
            &presents[1..],
            &[10, 30, 40, 70, 60, 120, 80, 150, 130]
        );
    }

    #[test]
    fn test_endless_examples() {
        assert_eq!(ENDLESS.first_house_reaching(70), 4);
        assert_eq!(ENDLESS.first_house_reaching(100), 6);
        assert_eq!(ENDLESS.first_house_reaching(150), 8);
        assert_eq!(ENDLESS.first_house_reaching(1), 1);
        assert_eq!(ENDLESS.first_house_reaching(0), 1);
    }

    #[test]
    fn test_lazy_elves_stop_after_fifty_houses() {
        let presents = LAZY.presents(102);
        // elves 1 and 2 retired before reaching house 102
        assert_eq!(presents[102], 11 * (divisor_sum(102) - 1 - 2));
        assert_eq!(presents[50], 11 * divisor_sum(50));
        assert_eq!(LAZY.first_house_reaching(100), 6);
        assert_eq!(LAZY.first_house_reaching(70), 4);
    }

    #[test]
    fn test_parse_target() {
        assert_eq!(Solver::parse(" 34000000\n").unwrap(), 34_000_000);
        assert!(matches!(Solver::parse("many"), Err(ParseError::InvalidFormat(_))));
        assert!(matches!(Solver::parse("\n"), Err(ParseError::MissingData(_))));
    }

    proptest! {
        #[test]
        fn prop_sieve_matches_divisor_sum(target in 1usize..2_000) {
            let house = ENDLESS.first_house_reaching(target);
            prop_assert!(10 * divisor_sum(house) >= target);
            prop_assert!((1..house).all(|h| 10 * divisor_sum(h) < target));
        }
    }
}

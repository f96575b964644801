//! Puts streamed results back into (year, day, part) order
//!
//! Workers finish in any order. The aggregator knows every part the run will
//! produce (from the work items), holds early arrivals back and releases the
//! longest in-order prefix each time a result comes in.

use crate::executor::{SolverResult, WorkItem};
use std::collections::{BTreeMap, VecDeque};

/// Position of one part in the output
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Clone, Copy)]
pub struct ResultKey {
    pub year: u16,
    pub day: u8,
    pub part: u8,
}

impl SolverResult {
    pub fn key(&self) -> ResultKey {
        ResultKey {
            year: self.year,
            day: self.day,
            part: self.part,
        }
    }
}

pub struct ResultAggregator {
    /// Keys not yet released, in output order
    awaiting: VecDeque<ResultKey>,
    /// Results that arrived before their turn
    held: BTreeMap<ResultKey, SolverResult>,
}

impl ResultAggregator {
    /// Expect every part of every work item
    pub fn for_work(work_items: &[WorkItem]) -> Self {
        let mut awaiting: Vec<ResultKey> = work_items
            .iter()
            .flat_map(|w| {
                w.parts.clone().map(move |part| ResultKey {
                    year: w.year,
                    day: w.day,
                    part,
                })
            })
            .collect();
        awaiting.sort_unstable();
        awaiting.dedup();

        Self {
            awaiting: awaiting.into(),
            held: BTreeMap::new(),
        }
    }

    /// Number of parts the run should produce
    pub fn expected(&self) -> usize {
        self.awaiting.len() + self.held.len()
    }

    /// Take one result; return whatever is now next in line
    pub fn add(&mut self, result: SolverResult) -> Vec<SolverResult> {
        self.held.insert(result.key(), result);

        let mut ready = Vec::new();
        while let Some(next) = self.awaiting.front() {
            let Some(result) = self.held.remove(next) else {
                break;
            };
            self.awaiting.pop_front();
            ready.push(result);
        }
        ready
    }

    /// Everything still held back, in key order
    pub fn drain(&mut self) -> Vec<SolverResult> {
        std::mem::take(&mut self.held).into_values().collect()
    }

    pub fn is_complete(&self) -> bool {
        self.awaiting.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use proptest::prelude::*;

    fn work(year: u16, day: u8, parts: std::ops::RangeInclusive<u8>) -> WorkItem {
        WorkItem { year, day, parts }
    }

    fn done(year: u16, day: u8, part: u8) -> SolverResult {
        SolverResult {
            year,
            day,
            part,
            answer: Ok(format!("{year}/{day}/{part}")),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        }
    }

    fn keys(results: &[SolverResult]) -> Vec<(u16, u8, u8)> {
        results.iter().map(|r| (r.year, r.day, r.part)).collect()
    }

    #[test]
    fn test_expected_parts_come_from_work_items() {
        let agg = ResultAggregator::for_work(&[work(2015, 4, 1..=2), work(2015, 5, 2..=2)]);
        assert_eq!(agg.expected(), 3);
        assert!(!agg.is_complete());
    }

    #[test]
    fn test_day_waits_for_earlier_day() {
        let mut agg = ResultAggregator::for_work(&[work(2015, 4, 1..=2), work(2015, 12, 1..=2)]);

        assert!(agg.add(done(2015, 12, 1)).is_empty());
        assert!(agg.add(done(2015, 12, 2)).is_empty());
        assert_eq!(keys(&agg.add(done(2015, 4, 1))), vec![(2015, 4, 1)]);
        assert_eq!(
            keys(&agg.add(done(2015, 4, 2))),
            vec![(2015, 4, 2), (2015, 12, 1), (2015, 12, 2)]
        );
        assert!(agg.is_complete());
        assert!(agg.drain().is_empty());
    }

    #[test]
    fn test_drain_after_worker_stops_early() {
        let mut agg = ResultAggregator::for_work(&[work(2015, 18, 1..=2), work(2015, 19, 1..=2)]);
        agg.add(done(2015, 19, 2));
        agg.add(done(2015, 19, 1));

        assert_eq!(keys(&agg.drain()), vec![(2015, 19, 1), (2015, 19, 2)]);
        assert!(!agg.is_complete());
    }

    #[test]
    fn test_empty_part_range_expects_nothing() {
        #[allow(clippy::reversed_empty_ranges)]
        let agg = ResultAggregator::for_work(&[work(2015, 20, 1..=0)]);
        assert!(agg.is_complete());
    }

    proptest! {
        #[test]
        fn prop_any_arrival_order_is_released_sorted(
            (items, arrival) in proptest::collection::btree_set((2015u16..2020, 1u8..=25), 1..20)
                .prop_flat_map(|days| {
                    let items: Vec<WorkItem> =
                        days.into_iter().map(|(year, day)| work(year, day, 1..=2)).collect();
                    let parts: Vec<(u16, u8, u8)> = items
                        .iter()
                        .flat_map(|w| [(w.year, w.day, 1), (w.year, w.day, 2)])
                        .collect();
                    (Just(items), Just(parts).prop_shuffle())
                })
        ) {
            let mut agg = ResultAggregator::for_work(&items);
            let mut released = Vec::new();
            for &(year, day, part) in &arrival {
                released.extend(keys(&agg.add(done(year, day, part))));
            }

            let mut sorted = arrival.clone();
            sorted.sort_unstable();
            prop_assert_eq!(released, sorted);
            prop_assert!(agg.is_complete());
        }
    }
}

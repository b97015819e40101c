//! Round queue: shuffled, truncated slice of the dataset for one session

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::VecDeque;

use super::dataset::CountryRecord;

/// Rounds in an Easy session
pub const EASY_COUNT: usize = 20;
/// Rounds in a Medium session
pub const MEDIUM_COUNT: usize = 50;
/// Rounds in a Hard session
pub const HARD_COUNT: usize = 100;

/// Difficulty mode chosen from the menu
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    /// Every country in the dataset
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Expert,
    ];

    /// Number of rounds requested for this mode
    pub fn requested_count(self, dataset_len: usize) -> usize {
        match self {
            Difficulty::Easy => EASY_COUNT,
            Difficulty::Medium => MEDIUM_COUNT,
            Difficulty::Hard => HARD_COUNT,
            Difficulty::Expert => dataset_len,
        }
    }
}

/// Ordered rounds for a session, consumed front to back
#[derive(Clone, Debug, Default)]
pub struct RoundQueue {
    rounds: VecDeque<CountryRecord>,
}

impl RoundQueue {
    /// Full Fisher-Yates shuffle of the dataset, then keep the first `count`
    pub fn build<R: Rng + ?Sized>(records: &[CountryRecord], count: usize, rng: &mut R) -> Self {
        let mut shuffled = records.to_vec();
        shuffled.shuffle(rng);
        shuffled.truncate(count);
        RoundQueue {
            rounds: shuffled.into(),
        }
    }

    /// Next round; a popped record is never seen again this session
    pub fn pop(&mut self) -> Option<CountryRecord> {
        self.rounds.pop_front()
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    pub fn clear(&mut self) {
        self.rounds.clear();
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &CountryRecord> {
        self.rounds.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rustc_hash::FxHashSet;

    fn records(n: usize) -> Vec<CountryRecord> {
        (0..n)
            .map(|i| CountryRecord::new(&format!("c{i}"), &format!("es{i}"), &format!("en{i}")))
            .collect()
    }

    #[test]
    fn test_length_is_min_of_requested_and_dataset() {
        let mut rng = StdRng::seed_from_u64(7);
        for dataset_len in [0, 5, 20, 60, 150] {
            let data = records(dataset_len);
            for mode in Difficulty::ALL {
                let requested = mode.requested_count(dataset_len);
                let queue = RoundQueue::build(&data, requested, &mut rng);
                assert_eq!(queue.len(), requested.min(dataset_len), "{mode:?}/{dataset_len}");

                let codes: FxHashSet<&str> = queue.iter().map(|r| r.code.as_str()).collect();
                assert_eq!(codes.len(), queue.len(), "duplicate in {mode:?}");
            }
        }
    }

    #[test]
    fn test_pop_consumes_front_to_back() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut queue = RoundQueue::build(&records(3), 3, &mut rng);
        let order: Vec<String> = queue.iter().map(|r| r.code.clone()).collect();

        for code in order {
            assert_eq!(queue.pop().unwrap().code, code);
        }
        assert!(queue.pop().is_none());
        assert!(queue.is_empty());
    }

    #[test]
    fn test_positions_are_uniform() {
        const N: usize = 5;
        const TRIALS: usize = 50_000;
        let data = records(N);
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts = [[0usize; N]; N];

        for _ in 0..TRIALS {
            let queue = RoundQueue::build(&data, N, &mut rng);
            for (pos, record) in queue.iter().enumerate() {
                let idx: usize = record.code[1..].parse().unwrap();
                counts[idx][pos] += 1;
            }
        }

        // A comparator-based random sort leaves records near their start
        // position far more often than 1/N.
        let expected = TRIALS as f64 / N as f64;
        for row in counts {
            for count in row {
                let deviation = (count as f64 - expected).abs() / expected;
                assert!(deviation < 0.05, "count {count} vs expected {expected}");
            }
        }
    }
}

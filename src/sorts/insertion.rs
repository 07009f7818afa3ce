use super::{BarState, SortAnimation, SortStats};

/// Insertion sort, one key inserted per step.
#[derive(Debug, Clone)]
pub struct InsertionSort {
    values: Vec<u32>,
    /// Index of the next key to insert. Everything before it is sorted.
    current: usize,
    /// Where the last key landed
    inserted_at: Option<usize>,
    stats: SortStats,
}

impl InsertionSort {
    pub fn new(values: Vec<u32>) -> Self {
        InsertionSort {
            values,
            current: 1,
            inserted_at: None,
            stats: SortStats::default(),
        }
    }
}

impl SortAnimation for InsertionSort {
    fn name(&self) -> &'static str {
        "Insertion sort"
    }

    fn step(&mut self) -> bool {
        if self.is_complete() {
            self.inserted_at = None;
            return false;
        }

        let key = self.values[self.current];
        let mut slot = self.current;
        while slot > 0 {
            self.stats.comparisons += 1;
            if self.values[slot - 1] <= key {
                break;
            }
            self.values[slot] = self.values[slot - 1];
            self.stats.writes += 1;
            slot -= 1;
        }
        self.values[slot] = key;
        self.inserted_at = Some(slot);
        self.current += 1;

        if self.is_complete() {
            tracing::debug!(
                "[insertion] sorted after {} comparisons and {} moves",
                self.stats.comparisons,
                self.stats.writes
            );
        }
        !self.is_complete()
    }

    fn values(&self) -> &[u32] {
        &self.values
    }

    fn bar_state(&self, index: usize) -> BarState {
        if self.is_complete() {
            BarState::Sorted
        } else if self.inserted_at == Some(index) {
            BarState::Active
        } else if index < self.current {
            BarState::Sorted
        } else {
            BarState::Unsorted
        }
    }

    fn is_complete(&self) -> bool {
        self.current >= self.values.len()
    }

    fn stats(&self) -> SortStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_step_inserts_one_key() {
        let mut sort = InsertionSort::new(vec![3, 1, 2, 0]);
        assert!(sort.step());
        assert_eq!(sort.values(), &[1, 3, 2, 0]);
        assert_eq!(sort.bar_state(0), BarState::Active);
        assert_eq!(sort.bar_state(1), BarState::Sorted);
        assert_eq!(sort.bar_state(2), BarState::Unsorted);

        assert!(sort.step());
        assert_eq!(sort.values(), &[1, 2, 3, 0]);
        assert_eq!(sort.bar_state(1), BarState::Active);

        // Last key finishes the sort
        assert!(!sort.step());
        assert_eq!(sort.values(), &[0, 1, 2, 3]);
        assert!(sort.is_complete());
        assert_eq!(sort.stats().writes, 5);
    }

    #[test]
    fn test_equal_keys_do_not_move() {
        let mut sort = InsertionSort::new(vec![2, 2, 2]);
        while sort.step() {}
        assert_eq!(sort.stats().writes, 0);
        assert_eq!(sort.stats().comparisons, 2);
    }

    #[test]
    fn test_trivial_inputs() {
        assert!(InsertionSort::new(vec![]).is_complete());
        let mut single = InsertionSort::new(vec![9]);
        assert!(!single.step());
        assert_eq!(single.bar_state(0), BarState::Sorted);
    }
}

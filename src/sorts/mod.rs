use rand::Rng;

mod bubble;
mod insertion;

pub use bubble::BubbleSort;
pub use insertion::InsertionSort;

/// Smallest and largest value a bar can hold.
pub const VALUE_RANGE: std::ops::RangeInclusive<u32> = 1..=99;

/// How a bar should be highlighted in the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarState {
    Unsorted,
    /// Part of the pair compared in the last step
    Comparing,
    /// Element just inserted into place
    Active,
    Sorted,
}

/// Work done so far.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SortStats {
    pub comparisons: u64,
    /// Swaps for bubble sort, element moves for insertion sort.
    pub writes: u64,
}

/// A sort broken into visual steps, advanced once per animation tick.
pub trait SortAnimation {
    /// Display name.
    fn name(&self) -> &'static str;

    /// Advances one step. Returns `false` once there is nothing left to do.
    fn step(&mut self) -> bool;

    fn values(&self) -> &[u32];

    fn bar_state(&self, index: usize) -> BarState;

    fn is_complete(&self) -> bool;

    fn stats(&self) -> SortStats;
}

/// `len` random values in [`VALUE_RANGE`].
pub fn random_values<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<u32> {
    (0..len).map(|_| rng.random_range(VALUE_RANGE)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::rng;

    #[test]
    fn test_random_values_in_range() {
        let values = random_values(200, &mut rng(Some(4)));
        assert_eq!(values.len(), 200);
        assert!(values.iter().all(|v| VALUE_RANGE.contains(v)));
    }

    #[test]
    fn test_every_animation_sorts() {
        for seed in 0..10 {
            let values = random_values(30, &mut rng(Some(seed)));
            let mut expected = values.clone();
            expected.sort_unstable();

            let animations: Vec<Box<dyn SortAnimation>> = vec![
                Box::new(BubbleSort::new(values.clone())),
                Box::new(InsertionSort::new(values.clone())),
            ];
            for mut animation in animations {
                let mut steps = 0;
                while animation.step() {
                    steps += 1;
                    assert!(steps < 10_000, "{} did not terminate", animation.name());
                }
                assert!(animation.is_complete());
                assert_eq!(animation.values(), expected.as_slice());
                assert!(
                    (0..expected.len()).all(|i| animation.bar_state(i) == BarState::Sorted),
                    "{} left bars unsorted",
                    animation.name()
                );
                // Stepping a finished sort is a no-op
                assert!(!animation.step());
            }
        }
    }
}

use super::{BarState, SortAnimation, SortStats};

/// Bubble sort, one comparison per step.
#[derive(Debug, Clone)]
pub struct BubbleSort {
    values: Vec<u32>,
    /// Left index of the next pair to compare
    current: usize,
    /// Left index of the pair compared in the last step
    compared: Option<usize>,
    /// Length of the sorted tail
    sorted_count: usize,
    swapped_in_pass: bool,
    complete: bool,
    stats: SortStats,
}

impl BubbleSort {
    pub fn new(values: Vec<u32>) -> Self {
        let complete = values.len() < 2;
        BubbleSort {
            values,
            current: 0,
            compared: None,
            sorted_count: 0,
            swapped_in_pass: false,
            complete,
            stats: SortStats::default(),
        }
    }

    /// Closes the current pass: the largest unsorted value has bubbled to the tail.
    fn finish_pass(&mut self) {
        self.sorted_count += 1;
        let unsorted = self.values.len() - self.sorted_count;
        if !self.swapped_in_pass || unsorted < 2 {
            self.complete = true;
            self.compared = None;
            tracing::debug!(
                "[bubble] sorted after {} comparisons and {} swaps",
                self.stats.comparisons,
                self.stats.writes
            );
            return;
        }
        self.current = 0;
        self.swapped_in_pass = false;
    }
}

impl SortAnimation for BubbleSort {
    fn name(&self) -> &'static str {
        "Bubble sort"
    }

    fn step(&mut self) -> bool {
        if self.complete {
            return false;
        }

        let pass_end = self.values.len() - self.sorted_count - 1;
        if self.current >= pass_end {
            self.finish_pass();
            return !self.complete;
        }

        let i = self.current;
        self.compared = Some(i);
        self.stats.comparisons += 1;
        if self.values[i + 1] < self.values[i] {
            self.values.swap(i, i + 1);
            self.swapped_in_pass = true;
            self.stats.writes += 1;
        }
        self.current += 1;
        true
    }

    fn values(&self) -> &[u32] {
        &self.values
    }

    fn bar_state(&self, index: usize) -> BarState {
        if self.complete || index >= self.values.len() - self.sorted_count {
            BarState::Sorted
        } else if self.compared.is_some_and(|i| index == i || index == i + 1) {
            BarState::Comparing
        } else {
            BarState::Unsorted
        }
    }

    fn is_complete(&self) -> bool {
        self.complete
    }

    fn stats(&self) -> SortStats {
        self.stats
    }
}

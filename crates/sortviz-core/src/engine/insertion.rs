//! Insertion sort.

use super::{Algorithm, SortEngine};
use crate::element::Element;
use crate::step::{Marks, SortedSet, Step, StepLog};

/// Grow a sorted prefix, moving each key left past greater predecessors.
///
/// The shift is an exchange of the key with its predecessor, so every
/// snapshot is a permutation of the input and no id is shown twice.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertionSort;

impl SortEngine for InsertionSort {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Insertion
    }

    fn record_steps(&self, input: &[Element]) -> Vec<Step> {
        let mut arr = input.to_vec();
        let n = arr.len();
        let mut log = StepLog::new();
        let mut sorted = SortedSet::new(n);
        if n > 0 {
            sorted.insert(0);
        }

        for i in 1..n {
            let key = arr[i].value;
            log.push(&arr, Marks::comparing(&[i]).with_sorted(&sorted));

            let mut j = i;
            while j > 0 && arr[j - 1].value > key {
                let pair = [j - 1, j];
                log.push(&arr, Marks::comparing(&pair).with_sorted(&sorted));
                arr.swap(j - 1, j);
                log.push(&arr, Marks::swapping(&pair).with_sorted(&sorted));
                j -= 1;
            }
            sorted.insert(i);
        }

        log.finish(&arr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Role;

    #[test]
    fn first_index_starts_sorted() {
        let steps = InsertionSort.record_steps(&Element::from_values(&[2, 1]));
        assert_eq!(steps[0].comparing(), &[1]);
        assert_eq!(steps[0].role_at(0), Some(Role::Sorted));
        assert_eq!(steps[0].role_at(1), Some(Role::Comparing));
    }

    #[test]
    fn shift_emits_compare_then_swap() {
        let steps = InsertionSort.record_steps(&Element::from_values(&[2, 1]));
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[1].comparing(), &[0, 1]);
        assert_eq!(steps[2].swapping(), &[0, 1]);
        assert_eq!(steps[2].values(), vec![1, 2]);
        assert!(steps[3].is_terminal());
    }

    #[test]
    fn snapshots_never_duplicate_ids() {
        let steps = InsertionSort.record_steps(&Element::from_values(&[5, 4, 3, 2, 1]));
        for step in &steps {
            let mut ids = step.ids();
            ids.sort_unstable();
            assert_eq!(ids, vec![0, 1, 2, 3, 4]);
        }
    }

    #[test]
    fn equal_keys_do_not_shift() {
        let steps = InsertionSort.record_steps(&Element::from_values(&[7, 7, 7]));
        assert!(steps.iter().all(|s| s.swapping().is_empty()));
        assert_eq!(steps.last().map(Step::ids), Some(vec![0, 1, 2]));
    }
}

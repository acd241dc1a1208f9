//! Exchange sort.

use super::{Algorithm, SortEngine};
use crate::element::Element;
use crate::step::{Marks, SortedSet, Step, StepLog};

/// Repeated adjacent-pair passes; each pass settles the last index of the
/// unsorted prefix. No early exit on a pass without swaps.
///
/// O(n²) comparisons, O(1) extra space besides the recorded steps.
#[derive(Debug, Clone, Copy, Default)]
pub struct BubbleSort;

impl SortEngine for BubbleSort {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Bubble
    }

    fn record_steps(&self, input: &[Element]) -> Vec<Step> {
        let mut arr = input.to_vec();
        let n = arr.len();
        let mut log = StepLog::new();
        let mut sorted = SortedSet::new(n);

        for pass in 0..n.saturating_sub(1) {
            for j in 0..n - pass - 1 {
                let pair = [j, j + 1];
                log.push(&arr, Marks::comparing(&pair).with_sorted(&sorted));
                if arr[j].value > arr[j + 1].value {
                    arr.swap(j, j + 1);
                    log.push(&arr, Marks::swapping(&pair).with_sorted(&sorted));
                }
            }
            sorted.insert(n - 1 - pass);
        }

        log.finish(&arr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Role;

    #[test]
    fn two_elements_out_of_order() {
        let steps = BubbleSort.record_steps(&Element::from_values(&[9, 4]));
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0].comparing(), &[0, 1]);
        assert_eq!(steps[0].values(), vec![9, 4]);
        assert_eq!(steps[1].swapping(), &[0, 1]);
        assert_eq!(steps[1].values(), vec![4, 9]);
        assert!(steps[2].is_terminal());
    }

    #[test]
    fn settled_suffix_stays_marked_during_next_pass() {
        let steps = BubbleSort.record_steps(&Element::from_values(&[1, 2, 3]));
        // pass 0 compares (0,1),(1,2); pass 1 compares (0,1) with index 2 settled.
        assert_eq!(steps.len(), 4);
        let second_pass = &steps[2];
        assert_eq!(second_pass.comparing(), &[0, 1]);
        assert_eq!(second_pass.role_at(2), Some(Role::Sorted));
        assert_eq!(second_pass.role_at(0), Some(Role::Comparing));
    }

    #[test]
    fn single_element_yields_terminal_only() {
        let steps = BubbleSort.record_steps(&Element::from_values(&[5]));
        assert_eq!(steps.len(), 1);
        assert!(steps[0].is_terminal());
    }
}
